//! The room aggregate and its derived lifecycle.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{CardCounts, CardKind};
use crate::options::RoomOptions;
use crate::player::{Player, PlayerId};
use crate::result::{Outcome, WinReason};
use crate::role::Allegiance;
use crate::state::RoomStatus;

pub mod snapshot;

pub use snapshot::{PlayerView, PrivatePlayerView, RoomSnapshot};

/// Random 128-bit room identifier, shown as 32 upper-case hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub u128);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032X}", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RoomId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RoomId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <alloc::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        u128::from_str_radix(&text, 16)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

/// A game table: seated players, the card tallies and the current cutter.
///
/// The status is never stored. It is recomputed from the player count and
/// the two tallies on every call, so it cannot go stale while cards move.
#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    name: String,
    /// Seated players, in seat (join) order.
    pub players: Vec<Player>,
    /// Cards revealed so far.
    pub cards_found: CardCounts,
    /// Cards not yet revealed. Empty until the first deal.
    pub cards_left: CardCounts,
    /// Player allowed to cut next.
    pub cutter: Option<PlayerId>,
    min_players: usize,
    max_players: usize,
    hand_size: usize,
    deck_size: usize,
}

impl Room {
    /// Creates an empty room using the seat limits and hand size of `options`.
    #[must_use]
    pub fn new(id: RoomId, name: impl Into<String>, options: &RoomOptions) -> Self {
        Self {
            id,
            name: name.into(),
            players: Vec::new(),
            cards_found: CardCounts::new(),
            cards_left: CardCounts::new(),
            cutter: None,
            min_players: options.min_players,
            max_players: options.max_players,
            hand_size: options.hand_size,
            deck_size: 0,
        }
    }

    /// Returns the room id.
    #[must_use]
    pub const fn id(&self) -> RoomId {
        self.id
    }

    /// Returns the room name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the players needed to start.
    #[must_use]
    pub const fn min_players(&self) -> usize {
        self.min_players
    }

    /// Returns the number of seats.
    #[must_use]
    pub const fn max_players(&self) -> usize {
        self.max_players
    }

    /// Returns the opening hand size.
    #[must_use]
    pub const fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// Returns the number of cards dealt at start, zero before that.
    #[must_use]
    pub const fn deck_size(&self) -> usize {
        self.deck_size
    }

    pub(crate) const fn set_deck_size(&mut self, deck_size: usize) {
        self.deck_size = deck_size;
    }

    /// Returns the seated player with the given id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Returns the seated player with the given id, mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.id == id)
    }

    /// Returns the seat index of a player.
    #[must_use]
    pub fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|player| player.id == id)
    }

    /// Returns the player allowed to cut next.
    #[must_use]
    pub fn cutter_player(&self) -> Option<&Player> {
        self.cutter.and_then(|id| self.player(id))
    }

    /// Returns whether cards have been dealt.
    #[must_use]
    pub fn is_started(&self) -> bool {
        !self.cards_left.is_empty()
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub fn status(&self) -> RoomStatus {
        if self.players.len() < self.min_players {
            RoomStatus::Waiting
        } else if !self.is_started() {
            RoomStatus::Ready
        } else if self.outcome().is_some() {
            RoomStatus::Ended
        } else {
            RoomStatus::Playing
        }
    }

    /// Returns whether another player may be seated.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status().is_lobby() && self.players.len() < self.max_players
    }

    /// Returns how the game ended, or `None` while it has not.
    ///
    /// A revealed bomb wins for the saboteurs before anything else is looked
    /// at. Then all defuse cards found wins for the defenders, and finally
    /// running out of cards for another round wins for the saboteurs.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_started() {
            return None;
        }

        let players = self.players.len();
        let (team, reason) = if self.cards_found.get(CardKind::Bomb) > 0 {
            (Allegiance::Saboteurs, WinReason::BombRevealed)
        } else if self.cards_found.get(CardKind::Defuse) == players {
            (Allegiance::Defenders, WinReason::AllDefused)
        } else if self.cards_left.total() <= players {
            (Allegiance::Saboteurs, WinReason::TimeUp)
        } else {
            return None;
        };

        Some(Outcome { team, reason })
    }

    /// Returns the winning team, if the game is over.
    #[must_use]
    pub fn winning_team(&self) -> Option<Allegiance> {
        self.outcome().map(|outcome| outcome.team)
    }

    /// Returns the 1-based hand round while a game is in progress.
    ///
    /// Round one is played with full hands, and each later round with one
    /// card fewer.
    #[must_use]
    pub fn hand_round(&self) -> Option<usize> {
        if self.status() != RoomStatus::Playing {
            return None;
        }
        let per_player = self.cards_left.total().div_ceil(self.players.len());
        Some((self.hand_size + 1).saturating_sub(per_player))
    }

    /// Returns how many cuts were made in the current hand round.
    #[must_use]
    pub fn cut_round(&self) -> Option<usize> {
        if self.status() != RoomStatus::Playing {
            return None;
        }
        Some(self.cards_found.total() % self.players.len())
    }

    /// Checks that no card was lost or duplicated.
    ///
    /// Found plus undiscovered cards must add up to the dealt deck, and the
    /// hands together must hold exactly the undiscovered cards. Trivially
    /// true before the first deal.
    #[must_use]
    pub fn pool_is_conserved(&self) -> bool {
        if !self.is_started() {
            return true;
        }

        if self.cards_found.total() + self.cards_left.total() != self.deck_size {
            return false;
        }

        CardKind::ALL.into_iter().all(|kind| {
            let in_hands: usize = self.players.iter().map(|p| p.hand.count(kind)).sum();
            in_hands == self.cards_left.get(kind)
        })
    }

    /// Unseats a player and returns their record.
    ///
    /// This does not check the status; abandoning a running game is the
    /// registry's call.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        let seat = self.seat_of(id)?;
        let mut player = self.players.remove(seat);
        player.room = None;
        if self.cutter == Some(id) {
            self.cutter = None;
        }
        Some(player)
    }

    /// Unseats every player.
    pub fn clear_players(&mut self) -> Vec<Player> {
        self.cutter = None;
        let mut players = core::mem::take(&mut self.players);
        for player in &mut players {
            player.room = None;
        }
        players
    }
}
