//! Hidden team assignments.

use core::fmt;

/// One of the two opposing teams a player is secretly assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Allegiance {
    /// Wins by revealing every defuse card.
    Defenders,
    /// Wins when the bomb goes off or the wires run out.
    Saboteurs,
}

impl fmt::Display for Allegiance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defenders => f.write_str("defenders"),
            Self::Saboteurs => f.write_str("saboteurs"),
        }
    }
}
