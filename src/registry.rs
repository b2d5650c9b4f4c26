//! Index of live rooms, and routing of players into them.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::RegistryError;
use crate::player::{Player, PlayerId};
use crate::rng::RandomSource;
use crate::room::{Room, RoomId};
use crate::service::RoomService;
use crate::sync::Mutex;

/// A room behind its own lock.
///
/// The registry hands rooms out this way so that operations on one room are
/// serialized while different rooms proceed independently. The lock is not
/// reentrant: drop a room guard before calling a [`Registry`] method that
/// touches the same room.
pub type SharedRoom = Arc<Mutex<Room>>;

/// Short room names drawn before falling back to long ones.
const SHORT_NAME_ATTEMPTS: usize = 64;

/// What happened when a player left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Departure {
    /// The player left a room whose game had not started.
    Left {
        /// Room the player left.
        room: RoomId,
        /// The player's record.
        player: Player,
        /// Whether the room was removed because it became empty.
        room_removed: bool,
    },
    /// The player walked out of a started game, which was abandoned.
    RoomClosed {
        /// Room that was removed.
        room: RoomId,
        /// Every player that was seated, the leaver included.
        players: Vec<Player>,
    },
}

/// Explicit store of rooms, owned by the embedding application.
///
/// Lookups go by id, by name and by seated player.
#[derive(Debug, Default)]
pub struct Registry {
    rooms: HashMap<RoomId, SharedRoom>,
    names: HashMap<String, RoomId>,
    seats: HashMap<PlayerId, RoomId>,
    /// Room ids in creation order.
    order: Vec<RoomId>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns whether there are no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    fn insert(&mut self, room: Room) -> SharedRoom {
        let id = room.id();
        let name = String::from(room.name());
        let shared = Arc::new(Mutex::new(room));

        self.rooms.insert(id, Arc::clone(&shared));
        self.names.insert(name, id);
        self.order.push(id);

        shared
    }

    /// Creates a room under the given name.
    ///
    /// # Errors
    ///
    /// Returns an error if a room with that name already exists.
    pub fn create_room<R: RandomSource>(
        &mut self,
        service: &mut RoomService<R>,
        name: &str,
    ) -> Result<SharedRoom, RegistryError> {
        if self.names.contains_key(name) {
            return Err(RegistryError::DuplicateName(String::from(name)));
        }

        let room = service.create(name);
        log::info!("[registry] room {name} created");
        Ok(self.insert(room))
    }

    /// Creates a room under a random unused name.
    ///
    /// Short `room-xxxx` names are tried first. Once those keep colliding,
    /// the name carries 128 random bits instead.
    pub fn create_unnamed_room<R: RandomSource>(
        &mut self,
        service: &mut RoomService<R>,
    ) -> SharedRoom {
        let short = (0..SHORT_NAME_ATTEMPTS)
            .map(|_| service.random_room_name())
            .find(|candidate| !self.names.contains_key(candidate));
        let name = short.unwrap_or_else(|| loop {
            let candidate = service.long_room_name();
            if !self.names.contains_key(&candidate) {
                break candidate;
            }
        });

        let room = service.create(name.as_str());
        log::info!("[registry] room {name} created");
        self.insert(room)
    }

    /// Returns the room with the given id.
    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<SharedRoom> {
        self.rooms.get(&id).cloned()
    }

    /// Returns the room with the given name.
    #[must_use]
    pub fn room_by_name(&self, name: &str) -> Option<SharedRoom> {
        self.names.get(name).and_then(|id| self.room(*id))
    }

    /// Returns the room a player is seated in.
    #[must_use]
    pub fn room_of(&self, player: PlayerId) -> Option<SharedRoom> {
        self.seats.get(&player).and_then(|id| self.room(*id))
    }

    /// Returns every room still accepting players, oldest first.
    ///
    /// A room whose lock is held elsewhere is skipped.
    #[must_use]
    pub fn open_rooms(&self) -> Vec<SharedRoom> {
        self.order
            .iter()
            .filter_map(|id| self.rooms.get(id))
            .filter(|room| room.try_lock().is_some_and(|room| room.is_open()))
            .cloned()
            .collect()
    }

    /// Seats a player.
    ///
    /// With a name, the player joins that room, which is created if needed.
    /// Without one, the player joins the oldest open room, or a new room if
    /// none is open.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is already seated somewhere, or the
    /// target room refuses them. A room created for the attempt is kept.
    ///
    /// # Deadlocks
    ///
    /// Blocks forever if the calling thread still holds the guard of the
    /// room named by `room_name`. Without a name, rooms locked elsewhere are
    /// skipped.
    pub fn join<R: RandomSource>(
        &mut self,
        service: &mut RoomService<R>,
        player: Player,
        room_name: Option<&str>,
    ) -> Result<SharedRoom, RegistryError> {
        let player_id = player.id;
        if self.seats.contains_key(&player_id) {
            return Err(RegistryError::AlreadySeated);
        }

        let target = match room_name {
            Some(name) => match self.room_by_name(name) {
                Some(room) => room,
                None => self.create_room(service, name)?,
            },
            None => match self.open_rooms().into_iter().next() {
                Some(room) => room,
                None => self.create_unnamed_room(service),
            },
        };

        let room_id = {
            let mut room = target.lock();
            service.add_player(&mut room, player)?;
            room.id()
        };
        self.seats.insert(player_id, room_id);

        Ok(target)
    }

    /// Removes a player from their room.
    ///
    /// Leaving a started game, running or over, abandons it: everyone is
    /// unseated and the room is removed. A finished game is never
    /// re-evaluated with fewer seats. In the lobby only the leaver is
    /// unseated, and the room is removed once nobody is left.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not seated, or their room is gone.
    pub fn leave(&mut self, player: PlayerId) -> Result<Departure, RegistryError> {
        let room_id = *self
            .seats
            .get(&player)
            .ok_or(RegistryError::PlayerNotFound)?;
        let shared = self.room(room_id).ok_or(RegistryError::RoomNotFound)?;

        let mut room = shared.lock();
        if room.is_started() {
            let players = room.clear_players();
            drop(room);
            for seated in &players {
                self.seats.remove(&seated.id);
            }
            self.remove(room_id);
            log::info!("[registry] {player} left a started game, room {room_id} closed");
            return Ok(Departure::RoomClosed {
                room: room_id,
                players,
            });
        }

        let removed = room.remove_player(player);
        let room_empty = room.players.is_empty();
        drop(room);
        self.seats.remove(&player);

        let record = removed.ok_or(RegistryError::PlayerNotFound)?;
        if room_empty {
            self.remove(room_id);
        }

        Ok(Departure::Left {
            room: room_id,
            player: record,
            room_removed: room_empty,
        })
    }

    /// Removes a room and unseats its players from the index.
    pub fn remove(&mut self, id: RoomId) -> Option<SharedRoom> {
        let shared = self.rooms.remove(&id)?;
        self.order.retain(|other| *other != id);
        self.names.retain(|_, other| *other != id);
        self.seats.retain(|_, other| *other != id);
        log::info!("[registry] room {id} removed");
        Some(shared)
    }
}
