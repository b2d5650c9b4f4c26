//! Operations that move a room through its lifecycle.

use alloc::format;
use alloc::string::String;

use crate::error::ConfigError;
use crate::options::RoomOptions;
use crate::rng::{RandomSource, SeededRng};
use crate::room::{Room, RoomId};

mod admission;
mod cut;
mod deal;

/// The game engine: admits players, deals, and resolves cuts.
///
/// The service owns the validated options and the random source. It holds no
/// room state itself; every operation works on a `&mut Room` the caller has
/// exclusive access to, and either applies fully or returns an error
/// without touching the room.
#[derive(Debug, Clone)]
pub struct RoomService<R = SeededRng> {
    options: RoomOptions,
    rng: R,
}

impl RoomService {
    /// Creates a service with a seeded ChaCha8 source.
    ///
    /// # Example
    ///
    /// ```
    /// use timebomb::{RoomOptions, RoomService};
    ///
    /// let mut service = RoomService::new(RoomOptions::default(), 42).unwrap();
    /// let room = service.create("lobby");
    /// assert_eq!(room.name(), "lobby");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail validation.
    pub fn new(options: RoomOptions, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(options, SeededRng::new(seed))
    }
}

impl<R: RandomSource> RoomService<R> {
    /// Creates a service drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail validation.
    pub fn with_rng(options: RoomOptions, rng: R) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self { options, rng })
    }

    /// Returns the options rooms are created with.
    pub const fn options(&self) -> &RoomOptions {
        &self.options
    }

    /// Returns the random source.
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Creates an empty room with a fresh random id.
    ///
    /// Name uniqueness is the registry's concern.
    pub fn create(&mut self, name: impl Into<String>) -> Room {
        let id = RoomId(self.rng.next_id());
        let room = Room::new(id, name, &self.options);
        log::debug!("[room {}] created with id {}", room.name(), id);
        room
    }

    /// Draws a name for a room nobody asked for by name.
    pub(crate) fn random_room_name(&mut self) -> String {
        format!("room-{:04x}", self.rng.pick(0x1_0000))
    }

    /// Draws a room name from 128 random bits.
    pub(crate) fn long_room_name(&mut self) -> String {
        format!("room-{:032x}", self.rng.next_id())
    }
}
