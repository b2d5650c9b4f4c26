//! Helpers shared by the integration tests.

#![expect(dead_code, reason = "each test binary uses a different subset of helpers")]

use std::collections::VecDeque;

use timebomb::{Player, PlayerId, RandomSource, Room, RoomOptions, RoomService};

/// Random source that never shuffles and picks scripted indices.
///
/// With no script left, `pick` returns 0. Decks therefore deal in tally
/// order: seat 0 gets the bomb and the first defuse cards.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    picks: VecDeque<usize>,
    ids: u128,
}

impl ScriptedRng {
    pub fn with_picks(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            ids: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}

    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(len - 1)
    }

    fn next_id(&mut self) -> u128 {
        self.ids += 1;
        self.ids
    }
}

pub fn scripted_service(picks: impl IntoIterator<Item = usize>) -> RoomService<ScriptedRng> {
    RoomService::with_rng(RoomOptions::default(), ScriptedRng::with_picks(picks)).unwrap()
}

pub fn player(id: u64) -> Player {
    Player::new(PlayerId(id), format!("user_{id}"))
}

/// Creates a room and seats players `0..count` in order.
pub fn seated_room<R: RandomSource>(service: &mut RoomService<R>, count: u64) -> Room {
    let mut room = service.create("room");
    for id in 0..count {
        service.add_player(&mut room, player(id)).unwrap();
    }
    room
}

/// Hand sizes in seat order.
pub fn hand_sizes(room: &Room) -> Vec<usize> {
    room.players.iter().map(|p| p.hand.len()).collect()
}
