//! Room configuration options.

use crate::deck::DeckTable;
use crate::error::ConfigError;

/// Fewest players a room can ever be configured for.
pub const MIN_SEATS: usize = 2;

/// Configuration shared by every room a service creates.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use timebomb::RoomOptions;
///
/// let options = RoomOptions::default()
///     .with_min_players(5)
///     .with_max_players(6);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomOptions {
    /// Players needed before a game can start.
    pub min_players: usize,
    /// Seats available in a room.
    pub max_players: usize,
    /// Cards per player in the opening deal.
    pub hand_size: usize,
    /// Deck and role composition per player count.
    pub deck_table: DeckTable,
}

impl Default for RoomOptions {
    fn default() -> Self {
        Self {
            min_players: 4,
            max_players: 8,
            hand_size: 5,
            deck_table: DeckTable::standard(),
        }
    }
}

impl RoomOptions {
    /// Sets the number of players needed to start.
    ///
    /// # Example
    ///
    /// ```
    /// use timebomb::RoomOptions;
    ///
    /// let options = RoomOptions::default().with_min_players(6);
    /// assert_eq!(options.min_players, 6);
    /// ```
    #[must_use]
    pub const fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = min_players;
        self
    }

    /// Sets the number of seats per room.
    ///
    /// # Example
    ///
    /// ```
    /// use timebomb::RoomOptions;
    ///
    /// let options = RoomOptions::default().with_max_players(6);
    /// assert_eq!(options.max_players, 6);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the opening hand size.
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Replaces the deck composition table.
    #[must_use]
    pub fn with_deck_table(mut self, deck_table: DeckTable) -> Self {
        self.deck_table = deck_table;
        self
    }

    /// Checks the seat limits and every deck table entry.
    ///
    /// Player counts missing from the table are not an error here; starting
    /// a room with such a count fails instead.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < MIN_SEATS {
            return Err(ConfigError::TooFewSeats(self.min_players));
        }

        if self.min_players > self.max_players {
            return Err(ConfigError::SeatRange {
                min: self.min_players,
                max: self.max_players,
            });
        }

        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }

        for (players, entry) in self.deck_table.iter() {
            entry.validate(players, self.hand_size)?;
        }

        Ok(())
    }
}
