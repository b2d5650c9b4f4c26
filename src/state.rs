//! Room lifecycle states.

use core::fmt;

/// Room lifecycle status, derived from the seats and card tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoomStatus {
    /// Not enough players to start.
    Waiting,
    /// Enough players, no cards dealt yet.
    Ready,
    /// Game in progress.
    Playing,
    /// A team has won.
    Ended,
}

impl RoomStatus {
    /// Returns whether new players may still be seated in this status.
    #[must_use]
    pub const fn is_lobby(self) -> bool {
        matches!(self, Self::Waiting | Self::Ready)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Waiting => "WAITING",
            Self::Ready => "READY",
            Self::Playing => "PLAYING",
            Self::Ended => "ENDED",
        };
        f.write_str(label)
    }
}
