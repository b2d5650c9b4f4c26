//! Error types for room operations.

use alloc::string::String;

use thiserror::Error;

use crate::state::RoomStatus;

/// Errors that can occur when seating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdmissionError {
    /// The room is no longer accepting players.
    #[error("room is {0}, not accepting players")]
    InvalidState(RoomStatus),
    /// Every seat is taken.
    #[error("room is full")]
    RoomFull,
    /// A player with the same id already sits in the room.
    #[error("player already seated")]
    AlreadySeated,
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The room is not ready to start.
    #[error("room is {0}, cannot start")]
    InvalidState(RoomStatus),
    /// The deck table has no entry for this many players.
    #[error("no deck composition for {0} players")]
    MissingDeckEntry(usize),
}

/// Errors that can occur when cutting a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CutError {
    /// No game is in progress.
    #[error("room is {0}, cannot cut")]
    InvalidState(RoomStatus),
    /// Only the current cutter may cut.
    #[error("not this player's turn to cut")]
    NotYourTurn,
    /// A player cannot cut their own hand.
    #[error("cannot cut own hand")]
    SelfCut,
    /// The target is not seated in the room.
    #[error("player not found")]
    PlayerNotFound,
    /// The target has no card left.
    #[error("target hand is empty")]
    EmptyHand,
}

/// Errors that can occur when redealing hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DistributeError {
    /// The room is not dealing.
    #[error("room is {0}, cannot deal")]
    InvalidState(RoomStatus),
    /// The remaining cards do not split evenly yet.
    #[error("hand round not finished")]
    NotDue,
}

/// Errors found while validating room options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The minimum player count is below two.
    #[error("a room needs at least two seats, got {0}")]
    TooFewSeats(usize),
    /// The minimum exceeds the maximum.
    #[error("minimum players {min} exceeds maximum {max}")]
    SeatRange {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
    /// Hands would start empty.
    #[error("hand size is zero")]
    ZeroHandSize,
    /// The defuse count does not match the player count.
    #[error("{players} player deck must hold {players} defuse cards")]
    DefuseMismatch {
        /// Player count of the offending entry.
        players: usize,
    },
    /// The deck does not deal one full hand per player.
    #[error("{players} player deck holds {total} cards, not one hand each")]
    DeckSize {
        /// Player count of the offending entry.
        players: usize,
        /// Cards in the entry.
        total: usize,
    },
    /// The role cards cannot cover every player with at most one spare.
    #[error("{players} player table deals {roles} role cards")]
    RoleCount {
        /// Player count of the offending entry.
        players: usize,
        /// Role cards in the entry.
        roles: usize,
    },
}

/// Errors that can occur in the room registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A room with this name already exists.
    #[error("room name {0:?} already taken")]
    DuplicateName(String),
    /// Room not found.
    #[error("room not found")]
    RoomNotFound,
    /// Player not seated in any room.
    #[error("player not found")]
    PlayerNotFound,
    /// Player already seated in a room.
    #[error("player already seated")]
    AlreadySeated,
    /// The target room refused the player.
    #[error(transparent)]
    Admission(#[from] AdmissionError),
}
