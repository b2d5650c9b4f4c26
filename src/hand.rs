//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::CardKind;

/// The face-down cards a player holds.
///
/// Order carries no meaning: cuts pick a card at random and every deal
/// overwrites the whole hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<CardKind>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<CardKind>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[CardKind] {
        &self.cards
    }

    /// Returns how many cards of the given kind the hand holds.
    #[must_use]
    pub fn count(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|&&card| card == kind).count()
    }

    /// Removes and returns the card at `index`.
    ///
    /// Returns `None` if the index is out of range.
    pub fn take(&mut self, index: usize) -> Option<CardKind> {
        if index < self.cards.len() {
            Some(self.cards.swap_remove(index))
        } else {
            None
        }
    }

    /// Replaces the contents of the hand.
    pub fn replace(&mut self, cards: Vec<CardKind>) {
        self.cards = cards;
    }

    /// Drops every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
