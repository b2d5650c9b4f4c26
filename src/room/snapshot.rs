//! Read-only views handed to whatever broadcasts room state.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{CardCounts, CardKind};
use crate::player::PlayerId;
use crate::result::Outcome;
use crate::role::Allegiance;
use crate::state::RoomStatus;

use super::{Room, RoomId};

/// Public view of one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerView {
    /// Player id.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Team, only when visible to the viewer.
    pub allegiance: Option<Allegiance>,
    /// Cards still held.
    pub hand_size: usize,
}

/// Public view of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomSnapshot {
    /// Room id.
    pub id: RoomId,
    /// Room name.
    pub name: String,
    /// Lifecycle status.
    pub status: RoomStatus,
    /// Seats in turn order.
    pub players: Vec<PlayerView>,
    /// Cards revealed so far.
    pub cards_found: CardCounts,
    /// Cards not yet revealed.
    pub cards_left: CardCounts,
    /// Player allowed to cut next.
    pub cutter: Option<PlayerId>,
    /// Set once the game is over.
    pub outcome: Option<Outcome>,
}

/// A player's own view of their seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrivatePlayerView {
    /// Player id.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Assigned team.
    pub allegiance: Option<Allegiance>,
    /// Cards held.
    pub hand: Vec<CardKind>,
}

impl Room {
    /// Builds the public view of the room as seen by `viewer`.
    ///
    /// Teams stay hidden except the viewer's own, until the game ends and
    /// every team is revealed.
    #[must_use]
    pub fn snapshot(&self, viewer: Option<PlayerId>) -> RoomSnapshot {
        let status = self.status();
        let reveal_all = status == RoomStatus::Ended;

        let players = self
            .players
            .iter()
            .map(|player| PlayerView {
                id: player.id,
                name: player.name.clone(),
                allegiance: player
                    .allegiance
                    .filter(|_| reveal_all || viewer == Some(player.id)),
                hand_size: player.hand.len(),
            })
            .collect();

        RoomSnapshot {
            id: self.id,
            name: self.name.clone(),
            status,
            players,
            cards_found: self.cards_found.clone(),
            cards_left: self.cards_left.clone(),
            cutter: self.cutter,
            outcome: self.outcome(),
        }
    }

    /// Builds the private view of one seated player.
    #[must_use]
    pub fn private_view(&self, id: PlayerId) -> Option<PrivatePlayerView> {
        self.player(id).map(|player| PrivatePlayerView {
            id: player.id,
            name: player.name.clone(),
            allegiance: player.allegiance,
            hand: player.hand.cards().to_vec(),
        })
    }
}
