//! Rules engine for a hidden-role card-cutting party game, with optional
//! `no_std` support.
//!
//! Players join a [`Room`], are secretly split into [`Allegiance`]s and
//! dealt face-down wire cards. The current cutter reveals one card from
//! another player's hand, and that player cuts next. The defenders win by
//! finding every defuse card; the saboteurs win when the bomb is revealed or
//! the wires run out.
//!
//! [`RoomService`] performs every state change and [`Registry`] keeps track
//! of live rooms. All randomness goes through a [`RandomSource`].
//!
//! # Example
//!
//! ```
//! use timebomb::{Player, PlayerId, RoomOptions, RoomService, RoomStatus};
//!
//! let mut service = RoomService::new(RoomOptions::default(), 42).unwrap();
//! let mut room = service.create("kitchen");
//! for id in 0..4 {
//!     service
//!         .add_player(&mut room, Player::new(PlayerId(id), "agent"))
//!         .unwrap();
//! }
//!
//! service.start(&mut room).unwrap();
//! assert_eq!(room.status(), RoomStatus::Playing);
//!
//! let card = service.cut_card(&mut room, PlayerId(0), PlayerId(2)).unwrap();
//! assert_eq!(room.cards_found.get(card), 1);
//! assert_eq!(room.cutter, Some(PlayerId(2)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod player;
pub mod registry;
pub mod result;
pub mod rng;
pub mod role;
pub mod room;
pub mod service;
pub mod state;
mod sync;

// Re-export main types
pub use card::{CardCounts, CardKind};
pub use deck::{DeckEntry, DeckTable};
pub use error::{
    AdmissionError, ConfigError, CutError, DistributeError, RegistryError, StartError,
};
pub use hand::Hand;
pub use options::RoomOptions;
pub use player::{Player, PlayerId};
pub use registry::{Departure, Registry, SharedRoom};
pub use result::{CutReport, Outcome, WinReason};
pub use rng::{RandomSource, SeededRng};
pub use role::Allegiance;
pub use room::{PlayerView, PrivatePlayerView, Room, RoomId, RoomSnapshot};
pub use service::RoomService;
pub use state::RoomStatus;
pub use sync::Mutex;
