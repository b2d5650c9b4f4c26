//! Game outcome types.

use crate::card::CardKind;
use crate::role::Allegiance;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WinReason {
    /// The bomb was revealed.
    BombRevealed,
    /// Every defuse card was revealed.
    AllDefused,
    /// Too few cards remain for another hand round.
    TimeUp,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// The winning team.
    pub team: Allegiance,
    /// What ended the game.
    pub reason: WinReason,
}

/// Result of a cut followed by an optional redeal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutReport {
    /// The revealed card.
    pub card: CardKind,
    /// Whether the remaining cards were dealt out again.
    pub redealt: bool,
    /// Set when the cut ended the game.
    pub outcome: Option<Outcome>,
}
