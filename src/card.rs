//! Card kinds and card tallies.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::vec::Vec;
use core::fmt;

/// Kind of a face-down wire card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardKind {
    /// The bomb. Revealing it ends the game at once.
    Bomb,
    /// A defusing wire. One per player is shuffled into the deck.
    Defuse,
    /// A harmless wire.
    Neutral,
}

impl CardKind {
    /// Every card kind, in tally order.
    pub const ALL: [Self; 3] = [Self::Bomb, Self::Defuse, Self::Neutral];
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bomb => "bomb",
            Self::Defuse => "defuse",
            Self::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// Per-kind card counter.
///
/// An empty tally has no entries at all, which is how a room tells that it
/// has not been dealt yet. A started room keeps an entry for every kind even
/// when the count drops to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardCounts {
    counts: BTreeMap<CardKind, usize>,
}

impl CardCounts {
    /// Creates an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Creates a tally with a zero entry for every kind.
    #[must_use]
    pub fn zeroed() -> Self {
        CardKind::ALL.into_iter().map(|kind| (kind, 0)).collect()
    }

    /// Creates a tally from explicit bomb, defuse and neutral counts.
    ///
    /// # Example
    ///
    /// ```
    /// use timebomb::{CardCounts, CardKind};
    ///
    /// let deck = CardCounts::from_counts(1, 4, 15);
    /// assert_eq!(deck.get(CardKind::Neutral), 15);
    /// assert_eq!(deck.total(), 20);
    /// ```
    #[must_use]
    pub fn from_counts(bomb: usize, defuse: usize, neutral: usize) -> Self {
        [
            (CardKind::Bomb, bomb),
            (CardKind::Defuse, defuse),
            (CardKind::Neutral, neutral),
        ]
        .into_iter()
        .collect()
    }

    /// Returns the count for a kind (zero when absent).
    #[must_use]
    pub fn get(&self, kind: CardKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Sets the count for a kind.
    pub fn set(&mut self, kind: CardKind, count: usize) {
        self.counts.insert(kind, count);
    }

    /// Adds one card of the given kind.
    pub fn increment(&mut self, kind: CardKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    /// Removes one card of the given kind.
    ///
    /// Returns `false` and leaves the tally untouched if none is left.
    pub fn decrement(&mut self, kind: CardKind) -> bool {
        match self.counts.get_mut(&kind) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Returns the number of cards across all kinds.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns whether the tally has no entries.
    ///
    /// A tally holding only zero counts is *not* empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Iterates over `(kind, count)` pairs in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (CardKind, usize)> + '_ {
        self.counts.iter().map(|(&kind, &count)| (kind, count))
    }

    /// Expands the tally into individual cards, grouped in kind order.
    #[must_use]
    pub fn to_cards(&self) -> Vec<CardKind> {
        let mut cards = Vec::with_capacity(self.total());
        for (kind, count) in self.iter() {
            cards.extend(core::iter::repeat_n(kind, count));
        }
        cards
    }
}

impl FromIterator<(CardKind, usize)> for CardCounts {
    fn from_iter<I: IntoIterator<Item = (CardKind, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CardCounts {
    type Item = (&'a CardKind, &'a usize);
    type IntoIter = btree_map::Iter<'a, CardKind, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
