//! Deck composition per player count.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::card::{CardCounts, CardKind};
use crate::error::ConfigError;
use crate::role::Allegiance;

/// Cards and teams dealt for one player count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckEntry {
    /// Cards shuffled into the deck.
    pub cards: CardCounts,
    /// Defender role cards.
    pub defenders: usize,
    /// Saboteur role cards.
    pub saboteurs: usize,
}

impl DeckEntry {
    /// Creates an entry from a card tally and the role split.
    #[must_use]
    pub const fn new(cards: CardCounts, defenders: usize, saboteurs: usize) -> Self {
        Self {
            cards,
            defenders,
            saboteurs,
        }
    }

    /// Returns the role cards in table order (defenders first).
    #[must_use]
    pub fn allegiances(&self) -> Vec<Allegiance> {
        let mut roles = Vec::with_capacity(self.defenders + self.saboteurs);
        roles.extend(core::iter::repeat_n(Allegiance::Defenders, self.defenders));
        roles.extend(core::iter::repeat_n(Allegiance::Saboteurs, self.saboteurs));
        roles
    }

    /// Returns the number of role cards.
    #[must_use]
    pub const fn role_count(&self) -> usize {
        self.defenders + self.saboteurs
    }

    /// Checks the entry against a player count and hand size.
    ///
    /// # Errors
    ///
    /// Returns an error if the defuse count differs from the player count,
    /// the deck does not deal exactly `hand_size` cards per player, or the
    /// role cards are neither `players` nor `players + 1`.
    pub fn validate(&self, players: usize, hand_size: usize) -> Result<(), ConfigError> {
        if self.cards.get(CardKind::Defuse) != players {
            return Err(ConfigError::DefuseMismatch { players });
        }

        if self.cards.total() != hand_size * players {
            return Err(ConfigError::DeckSize {
                players,
                total: self.cards.total(),
            });
        }

        let roles = self.role_count();
        if roles != players && roles != players + 1 {
            return Err(ConfigError::RoleCount { players, roles });
        }

        Ok(())
    }
}

/// Deck composition keyed by player count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckTable {
    entries: BTreeMap<usize, DeckEntry>,
}

impl DeckTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The standard four to eight player table.
    ///
    /// One bomb, one defuse per player and neutral wires filling five cards
    /// per player. Teams are split so that four and seven player games deal
    /// one spare role card, which is discarded unseen.
    ///
    /// ```
    /// use timebomb::{CardKind, DeckTable};
    ///
    /// let table = DeckTable::standard();
    /// let six = table.get(6).unwrap();
    /// assert_eq!(six.cards.get(CardKind::Defuse), 6);
    /// assert_eq!(six.cards.total(), 30);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_entry(4, DeckEntry::new(CardCounts::from_counts(1, 4, 15), 3, 2))
            .with_entry(5, DeckEntry::new(CardCounts::from_counts(1, 5, 19), 3, 2))
            .with_entry(6, DeckEntry::new(CardCounts::from_counts(1, 6, 23), 4, 2))
            .with_entry(7, DeckEntry::new(CardCounts::from_counts(1, 7, 27), 5, 3))
            .with_entry(8, DeckEntry::new(CardCounts::from_counts(1, 8, 31), 5, 3))
    }

    /// Adds or replaces the entry for a player count.
    #[must_use]
    pub fn with_entry(mut self, players: usize, entry: DeckEntry) -> Self {
        self.insert(players, entry);
        self
    }

    /// Adds or replaces the entry for a player count.
    pub fn insert(&mut self, players: usize, entry: DeckEntry) {
        self.entries.insert(players, entry);
    }

    /// Returns the entry for a player count.
    #[must_use]
    pub fn get(&self, players: usize) -> Option<&DeckEntry> {
        self.entries.get(&players)
    }

    /// Iterates over `(player count, entry)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &DeckEntry)> + '_ {
        self.entries.iter().map(|(&players, entry)| (players, entry))
    }

    /// Returns whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
