use crate::error::AdmissionError;
use crate::player::Player;
use crate::rng::RandomSource;
use crate::room::Room;

use super::RoomService;

impl<R: RandomSource> RoomService<R> {
    /// Seats a player at the end of the turn order.
    ///
    /// The player's room reference is set to this room.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has started or ended, every seat is
    /// taken, or a player with the same id is already seated.
    pub fn add_player(&self, room: &mut Room, mut player: Player) -> Result<(), AdmissionError> {
        let status = room.status();
        if !status.is_lobby() {
            return Err(AdmissionError::InvalidState(status));
        }

        if room.player_count() >= room.max_players() {
            return Err(AdmissionError::RoomFull);
        }

        if room.seat_of(player.id).is_some() {
            return Err(AdmissionError::AlreadySeated);
        }

        log::debug!(
            "[room {}] {} ({}) takes seat {}",
            room.name(),
            player.name,
            player.id,
            room.player_count()
        );

        player.room = Some(room.id());
        room.players.push(player);

        Ok(())
    }
}
