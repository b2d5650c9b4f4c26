use crate::card::CardKind;
use crate::error::CutError;
use crate::player::PlayerId;
use crate::result::CutReport;
use crate::rng::RandomSource;
use crate::room::Room;
use crate::state::RoomStatus;

use super::RoomService;

impl<R: RandomSource> RoomService<R> {
    /// Cuts one random card from `dst`'s hand on behalf of `src`.
    ///
    /// The revealed card moves from the undiscovered pool to the found tally
    /// and `dst` becomes the next cutter. Redealing at the end of a hand
    /// round is left to the caller, see [`Self::distribute_cards`] and
    /// [`Self::cut_and_redeal`].
    ///
    /// # Errors
    ///
    /// Returns an error if no game is in progress, `src` is not the current
    /// cutter, `src` and `dst` are the same player, `dst` is not seated, or
    /// `dst` has no card left.
    pub fn cut_card(
        &mut self,
        room: &mut Room,
        src: PlayerId,
        dst: PlayerId,
    ) -> Result<CardKind, CutError> {
        let status = room.status();
        if status != RoomStatus::Playing {
            return Err(CutError::InvalidState(status));
        }

        if room.cutter != Some(src) {
            return Err(CutError::NotYourTurn);
        }

        if src == dst {
            return Err(CutError::SelfCut);
        }

        let target = room.player_mut(dst).ok_or(CutError::PlayerNotFound)?;
        if target.hand.is_empty() {
            return Err(CutError::EmptyHand);
        }

        let len = target.hand.len();
        let index = self.rng.pick(len);
        debug_assert!(index < len, "random source picked {index} of {len} cards");
        let Some(card) = target.hand.take(index.min(len - 1)) else {
            return Err(CutError::EmptyHand);
        };

        room.cards_found.increment(card);
        let removed = room.cards_left.decrement(card);
        debug_assert!(removed, "cut a {card} the pool did not hold");
        room.cutter = Some(dst);

        log::debug!("[room {}] {src} cut {dst}: {card}", room.name());
        if let Some(outcome) = room.outcome() {
            log::info!(
                "[room {}] game over - {} win ({:?})",
                room.name(),
                outcome.team,
                outcome.reason
            );
        }
        debug_assert!(room.pool_is_conserved());

        Ok(card)
    }

    /// Cuts a card, then redeals if that cut finished the hand round.
    ///
    /// Nothing is redealt once the game is over.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::cut_card`].
    pub fn cut_and_redeal(
        &mut self,
        room: &mut Room,
        src: PlayerId,
        dst: PlayerId,
    ) -> Result<CutReport, CutError> {
        let card = self.cut_card(room, src, dst)?;
        let outcome = room.outcome();
        let redealt = outcome.is_none() && self.distribute_cards(room).is_ok();

        Ok(CutReport {
            card,
            redealt,
            outcome,
        })
    }
}
