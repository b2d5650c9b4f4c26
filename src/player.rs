//! Room participants.

use alloc::string::String;
use core::fmt;

use crate::hand::Hand;
use crate::role::Allegiance;
use crate::room::RoomId;

/// Stable identifier of a player, assigned by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A seated participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Identifier, unique within a registry.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Team, unset until the game starts.
    pub allegiance: Option<Allegiance>,
    /// Face-down cards currently held.
    pub hand: Hand,
    /// Room the player is seated in, if any.
    pub room: Option<RoomId>,
}

impl Player {
    /// Creates a player with no team, no cards and no seat.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            allegiance: None,
            hand: Hand::new(),
            room: None,
        }
    }
}
