use crate::card::CardCounts;
use crate::error::{DistributeError, StartError};
use crate::rng::RandomSource;
use crate::room::Room;
use crate::state::RoomStatus;

use super::RoomService;

impl<R: RandomSource> RoomService<R> {
    /// Shuffles every undiscovered card and splits them evenly by seat,
    /// overwriting the hands.
    fn deal_hands(&mut self, room: &mut Room) {
        let players = room.player_count();
        let mut cards = room.cards_left.to_cards();
        assert!(
            cards.len() % players == 0,
            "{} cards cannot be split across {players} players",
            cards.len()
        );

        self.rng.shuffle(&mut cards);
        let per_player = cards.len() / players;

        let mut deck = cards.into_iter();
        for player in &mut room.players {
            player.hand.replace(deck.by_ref().take(per_player).collect());
        }

        log::debug!(
            "[room {}] dealt {per_player} cards to each of {players} players",
            room.name()
        );
    }

    /// Starts the game.
    ///
    /// This function:
    /// 1. Fills the undiscovered pool from the deck table entry
    /// 2. Resets the found tally
    /// 3. Discards one role card at random if the table deals a spare
    /// 4. Shuffles the roles and assigns one per seat
    /// 5. Deals the opening hands
    /// 6. Hands the first cut to seat 0
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not ready, or if the deck table has
    /// no entry for the number of seated players.
    pub fn start(&mut self, room: &mut Room) -> Result<(), StartError> {
        let status = room.status();
        if status != RoomStatus::Ready {
            return Err(StartError::InvalidState(status));
        }

        let players = room.player_count();
        let entry = self
            .options
            .deck_table
            .get(players)
            .ok_or(StartError::MissingDeckEntry(players))?
            .clone();

        let mut roles = entry.allegiances();
        if roles.len() > players {
            self.rng.shuffle(&mut roles);
            roles.remove(0);
        }
        assert_eq!(
            roles.len(),
            players,
            "deck table deals {} roles for {players} players",
            roles.len()
        );
        self.rng.shuffle(&mut roles);

        let mut pool = CardCounts::zeroed();
        for (kind, count) in entry.cards.iter() {
            pool.set(kind, count);
        }
        room.set_deck_size(pool.total());
        room.cards_left = pool;
        room.cards_found = CardCounts::zeroed();

        for (player, role) in room.players.iter_mut().zip(roles) {
            player.allegiance = Some(role);
        }

        self.deal_hands(room);
        room.cutter = room.players.first().map(|player| player.id);

        log::info!(
            "[room {}] game started with {players} players and {} cards",
            room.name(),
            room.deck_size()
        );
        debug_assert!(room.pool_is_conserved());

        Ok(())
    }

    /// Deals the undiscovered cards out again for the next hand round.
    ///
    /// Only due once the undiscovered cards split evenly across the seats,
    /// which after the opening deal happens every `players` cuts.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is neither playing nor ready, or the
    /// current hand round is not finished.
    pub fn distribute_cards(&mut self, room: &mut Room) -> Result<(), DistributeError> {
        let status = room.status();
        if !matches!(status, RoomStatus::Playing | RoomStatus::Ready) {
            return Err(DistributeError::InvalidState(status));
        }

        if room.cards_left.total() % room.player_count() != 0 {
            return Err(DistributeError::NotDue);
        }

        self.deal_hands(room);
        debug_assert!(room.pool_is_conserved());

        Ok(())
    }
}
