//! Room lifecycle integration tests.

mod common;

use common::{ScriptedRng, hand_sizes, player, scripted_service, seated_room};
use timebomb::{
    AdmissionError, Allegiance, CardCounts, CardKind, CutError, DeckEntry, DeckTable,
    DistributeError, PlayerId, RandomSource, Room, RoomOptions, RoomService, RoomStatus,
    StartError, WinReason,
};

const P0: PlayerId = PlayerId(0);
const P1: PlayerId = PlayerId(1);
const P2: PlayerId = PlayerId(2);
const P3: PlayerId = PlayerId(3);

/// Card state that every rejected operation must leave alone.
fn card_state(room: &Room) -> (CardCounts, CardCounts, Vec<Vec<CardKind>>, Option<PlayerId>) {
    (
        room.cards_found.clone(),
        room.cards_left.clone(),
        room.players.iter().map(|p| p.hand.cards().to_vec()).collect(),
        room.cutter,
    )
}

#[test]
fn fresh_room_is_waiting_and_open() {
    let mut service = scripted_service([]);
    let room = service.create("room_1");

    assert_eq!(room.name(), "room_1");
    assert!(room.players.is_empty());
    assert!(room.cards_found.is_empty());
    assert!(room.cards_left.is_empty());
    assert_eq!(room.cutter, None);
    assert_eq!(room.status(), RoomStatus::Waiting);
    assert!(room.is_open());
    assert_eq!(room.winning_team(), None);
    assert_eq!(room.outcome(), None);
}

#[test]
fn status_follows_players_and_tallies() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 3);
    assert_eq!(room.status(), RoomStatus::Waiting);

    service.add_player(&mut room, player(3)).unwrap();
    assert_eq!(room.status(), RoomStatus::Ready);

    room.cards_left = CardCounts::from_counts(0, 0, 10);
    assert_eq!(room.status(), RoomStatus::Playing);

    room.cards_left = CardCounts::from_counts(0, 0, 4);
    assert_eq!(room.status(), RoomStatus::Ended);

    room.cards_left = CardCounts::from_counts(0, 0, 10);
    room.cards_found = CardCounts::from_counts(1, 0, 0);
    assert_eq!(room.status(), RoomStatus::Ended);

    room.cards_found = CardCounts::from_counts(0, 3, 0);
    assert_eq!(room.status(), RoomStatus::Playing);

    room.cards_found = CardCounts::from_counts(0, 4, 0);
    assert_eq!(room.status(), RoomStatus::Ended);
}

#[test]
fn admission_stops_at_max_players() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 7);
    assert!(room.is_open());

    service.add_player(&mut room, player(7)).unwrap();
    assert_eq!(room.player_count(), 8);
    assert!(!room.is_open());

    assert_eq!(
        service.add_player(&mut room, player(8)).unwrap_err(),
        AdmissionError::RoomFull
    );
    assert_eq!(room.player_count(), 8);
}

#[test]
fn admission_sets_room_and_seat_order() {
    let mut service = scripted_service([]);
    let room = seated_room(&mut service, 3);

    let ids: Vec<_> = room.players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![P0, P1, P2]);
    assert!(room.players.iter().all(|p| p.room == Some(room.id())));
    assert_eq!(room.seat_of(P2), Some(2));
}

#[test]
fn admission_rejects_duplicate_seat() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 2);

    assert_eq!(
        service.add_player(&mut room, player(1)).unwrap_err(),
        AdmissionError::AlreadySeated
    );
    assert_eq!(room.player_count(), 2);
}

#[test]
fn admission_closed_once_playing() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();

    assert!(!room.is_open());
    assert_eq!(
        service.add_player(&mut room, player(4)).unwrap_err(),
        AdmissionError::InvalidState(RoomStatus::Playing)
    );
    assert_eq!(room.player_count(), 4);
}

#[test]
fn start_requires_ready_room() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 3);

    assert_eq!(
        service.start(&mut room).unwrap_err(),
        StartError::InvalidState(RoomStatus::Waiting)
    );
    assert!(room.cards_left.is_empty());

    service.add_player(&mut room, player(3)).unwrap();
    service.start(&mut room).unwrap();
    assert_eq!(
        service.start(&mut room).unwrap_err(),
        StartError::InvalidState(RoomStatus::Playing)
    );
}

#[test]
fn start_deals_roles_hands_and_first_cutter() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);

    service.start(&mut room).unwrap();

    assert_eq!(room.status(), RoomStatus::Playing);
    assert_eq!(room.cutter, Some(P0));
    assert_eq!(room.cutter_player().map(|p| p.id), Some(P0));
    assert_eq!(room.deck_size(), 20);
    assert_eq!(room.cards_left.total(), 20);
    assert_eq!(room.cards_found, CardCounts::zeroed());
    assert_eq!(room.cards_found.iter().count(), 3);
    assert_eq!(hand_sizes(&room), vec![5, 5, 5, 5]);
    assert!(room.pool_is_conserved());

    // Unshuffled: the spare first defender card is dropped, then seats get
    // the roles in table order.
    let roles: Vec<_> = room.players.iter().map(|p| p.allegiance).collect();
    assert_eq!(
        roles,
        vec![
            Some(Allegiance::Defenders),
            Some(Allegiance::Defenders),
            Some(Allegiance::Saboteurs),
            Some(Allegiance::Saboteurs),
        ]
    );

    assert_eq!(
        room.players[0].hand.cards(),
        &[
            CardKind::Bomb,
            CardKind::Defuse,
            CardKind::Defuse,
            CardKind::Defuse,
            CardKind::Defuse
        ]
    );
    assert_eq!(room.players[1].hand.count(CardKind::Neutral), 5);
}

#[test]
fn start_assigns_exactly_one_role_per_player() {
    let table = DeckTable::standard();
    for players in 4..=8_u64 {
        let mut service = RoomService::new(RoomOptions::default(), players).unwrap();
        let mut room = seated_room(&mut service, players);
        service.start(&mut room).unwrap();

        let entry = table.get(players as usize).unwrap();
        let defenders = room
            .players
            .iter()
            .filter(|p| p.allegiance == Some(Allegiance::Defenders))
            .count();
        let saboteurs = room
            .players
            .iter()
            .filter(|p| p.allegiance == Some(Allegiance::Saboteurs))
            .count();

        assert_eq!(defenders + saboteurs, players as usize);
        assert!(defenders <= entry.defenders && saboteurs <= entry.saboteurs);
        assert_eq!(room.cards_left.get(CardKind::Defuse), players as usize);
        assert!(hand_sizes(&room).iter().all(|&len| len == 5));
        assert!(room.pool_is_conserved());
    }
}

#[test]
fn start_without_deck_entry_is_a_config_error() {
    let table = DeckTable::new().with_entry(4, DeckEntry::new(CardCounts::from_counts(1, 4, 15), 3, 2));
    let options = RoomOptions::default()
        .with_max_players(5)
        .with_deck_table(table);
    let mut service = RoomService::with_rng(options, ScriptedRng::default()).unwrap();
    let mut room = seated_room(&mut service, 5);

    assert_eq!(
        service.start(&mut room).unwrap_err(),
        StartError::MissingDeckEntry(5)
    );
    assert_eq!(room.status(), RoomStatus::Ready);
    assert!(room.players.iter().all(|p| p.allegiance.is_none() && p.hand.is_empty()));
    assert_eq!(room.cutter, None);
}

#[test]
fn cut_requires_playing_room() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);

    assert_eq!(
        service.cut_card(&mut room, P0, P1).unwrap_err(),
        CutError::InvalidState(RoomStatus::Ready)
    );
}

#[test]
fn only_the_cutter_may_cut() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();
    let before = card_state(&room);

    assert_eq!(
        service.cut_card(&mut room, P1, P2).unwrap_err(),
        CutError::NotYourTurn
    );
    assert_eq!(
        service.cut_card(&mut room, P3, P0).unwrap_err(),
        CutError::NotYourTurn
    );
    assert_eq!(
        service.cut_card(&mut room, PlayerId(99), P1).unwrap_err(),
        CutError::NotYourTurn
    );
    assert_eq!(card_state(&room), before);
}

#[test]
fn cutting_own_hand_is_rejected() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();
    let before = card_state(&room);

    assert_eq!(
        service.cut_card(&mut room, P0, P0).unwrap_err(),
        CutError::SelfCut
    );
    assert_eq!(card_state(&room), before);
}

#[test]
fn cut_rejects_unknown_target_and_empty_hand() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();

    assert_eq!(
        service.cut_card(&mut room, P0, PlayerId(42)).unwrap_err(),
        CutError::PlayerNotFound
    );

    room.players[1].hand.clear();
    let before = card_state(&room);
    assert_eq!(
        service.cut_card(&mut room, P0, P1).unwrap_err(),
        CutError::EmptyHand
    );
    assert_eq!(card_state(&room), before);
}

#[test]
fn cut_reveals_card_and_passes_the_cutters() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();

    let card = service.cut_card(&mut room, P0, P1).unwrap();

    assert_eq!(card, CardKind::Neutral);
    assert_eq!(room.cutter, Some(P1));
    assert_eq!(room.cards_found.get(CardKind::Neutral), 1);
    assert_eq!(room.cards_left.get(CardKind::Neutral), 14);
    assert_eq!(hand_sizes(&room), vec![5, 4, 5, 5]);
    assert!(room.pool_is_conserved());

    // The old cutter has lost the turn.
    assert_eq!(
        service.cut_card(&mut room, P0, P2).unwrap_err(),
        CutError::NotYourTurn
    );
    assert_eq!(service.cut_card(&mut room, P1, P0).unwrap(), CardKind::Bomb);
}

#[test]
fn revealing_the_bomb_ends_the_game() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();

    service.cut_card(&mut room, P0, P1).unwrap();
    assert_eq!(service.cut_card(&mut room, P1, P0).unwrap(), CardKind::Bomb);

    assert_eq!(room.status(), RoomStatus::Ended);
    assert_eq!(room.winning_team(), Some(Allegiance::Saboteurs));
    assert_eq!(room.outcome().map(|o| o.reason), Some(WinReason::BombRevealed));

    let before = card_state(&room);
    assert_eq!(
        service.cut_card(&mut room, P0, P2).unwrap_err(),
        CutError::InvalidState(RoomStatus::Ended)
    );
    assert_eq!(
        service.distribute_cards(&mut room).unwrap_err(),
        DistributeError::InvalidState(RoomStatus::Ended)
    );
    assert_eq!(card_state(&room), before);
}

#[test]
fn finding_every_defuse_wins_for_defenders() {
    // Seat 0 holds [bomb, defuse x4]; picking index 1 always takes a defuse.
    let mut service = scripted_service([0, 1, 0, 1, 0, 1, 0, 1]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();

    for other in [P1, P2, P3, P1] {
        assert_eq!(service.cut_card(&mut room, P0, other).unwrap(), CardKind::Neutral);
        assert_eq!(service.cut_card(&mut room, other, P0).unwrap(), CardKind::Defuse);
    }

    assert_eq!(room.cards_found.get(CardKind::Defuse), 4);
    assert_eq!(room.players[0].hand.cards(), &[CardKind::Bomb]);
    assert_eq!(room.status(), RoomStatus::Ended);
    assert_eq!(room.winning_team(), Some(Allegiance::Defenders));
    assert_eq!(room.outcome().map(|o| o.reason), Some(WinReason::AllDefused));
}

#[test]
fn bomb_takes_precedence_over_defuses() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();

    room.cards_found = CardCounts::from_counts(1, 4, 0);
    room.cards_left = CardCounts::from_counts(0, 0, 15);

    assert_eq!(room.winning_team(), Some(Allegiance::Saboteurs));
    assert_eq!(room.outcome().map(|o| o.reason), Some(WinReason::BombRevealed));
}

#[test]
fn running_out_of_cards_wins_for_saboteurs() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();

    room.cards_found = CardCounts::from_counts(0, 2, 14);
    room.cards_left = CardCounts::from_counts(1, 2, 1);

    assert_eq!(room.status(), RoomStatus::Ended);
    assert_eq!(room.winning_team(), Some(Allegiance::Saboteurs));
    assert_eq!(room.outcome().map(|o| o.reason), Some(WinReason::TimeUp));
}

#[test]
fn redistribution_waits_for_an_even_split() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();

    room.cards_found = CardCounts::from_counts(0, 0, 3);
    room.cards_left = CardCounts::from_counts(1, 4, 12);
    assert_eq!(room.cards_left.total(), 17);
    let before = card_state(&room);
    assert_eq!(
        service.distribute_cards(&mut room).unwrap_err(),
        DistributeError::NotDue
    );
    assert_eq!(card_state(&room), before);

    room.cards_found = CardCounts::from_counts(0, 0, 4);
    room.cards_left = CardCounts::from_counts(1, 4, 11);
    service.distribute_cards(&mut room).unwrap();

    assert_eq!(hand_sizes(&room), vec![4, 4, 4, 4]);
    assert!(room.pool_is_conserved());
}

#[test]
fn redistribution_after_a_full_round_of_cuts() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();
    assert_eq!(room.hand_round(), Some(1));
    assert_eq!(room.cut_round(), Some(0));

    service.cut_card(&mut room, P0, P1).unwrap();
    service.cut_card(&mut room, P1, P2).unwrap();
    service.cut_card(&mut room, P2, P3).unwrap();
    assert_eq!(room.cut_round(), Some(3));
    assert_eq!(
        service.distribute_cards(&mut room).unwrap_err(),
        DistributeError::NotDue
    );

    service.cut_card(&mut room, P3, P1).unwrap();
    assert_eq!(hand_sizes(&room), vec![5, 3, 4, 4]);
    service.distribute_cards(&mut room).unwrap();

    assert_eq!(hand_sizes(&room), vec![4, 4, 4, 4]);
    assert_eq!(room.cards_left.total(), 16);
    assert_eq!(room.hand_round(), Some(2));
    assert_eq!(room.cut_round(), Some(0));
    assert_eq!(room.cutter, Some(P1));
    assert!(room.pool_is_conserved());
}

#[test]
fn cut_and_redeal_redeals_at_round_end() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();

    let mut redeals = Vec::new();
    for (src, dst) in [(P0, P1), (P1, P2), (P2, P3), (P3, P1)] {
        let report = service.cut_and_redeal(&mut room, src, dst).unwrap();
        assert_eq!(report.card, CardKind::Neutral);
        assert_eq!(report.outcome, None);
        redeals.push(report.redealt);
    }

    assert_eq!(redeals, vec![false, false, false, true]);
    assert_eq!(hand_sizes(&room), vec![4, 4, 4, 4]);
}

#[test]
fn cut_and_redeal_reports_the_end() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();

    service.cut_and_redeal(&mut room, P0, P1).unwrap();
    let report = service.cut_and_redeal(&mut room, P1, P0).unwrap();

    assert_eq!(report.card, CardKind::Bomb);
    assert!(!report.redealt);
    assert_eq!(report.outcome.map(|o| o.team), Some(Allegiance::Saboteurs));
}

#[test]
fn seeded_game_plays_to_the_end() {
    let mut service = RoomService::new(RoomOptions::default(), 7).unwrap();
    let mut room = seated_room(&mut service, 4);
    assert_eq!(room.status(), RoomStatus::Ready);

    service.start(&mut room).unwrap();
    assert_eq!(room.status(), RoomStatus::Playing);
    assert_eq!(room.cutter, Some(P0));
    assert_eq!(room.cards_left.total(), 20);
    assert_eq!(hand_sizes(&room), vec![5, 5, 5, 5]);

    let mut cuts = 0;
    while room.status() == RoomStatus::Playing {
        let cutter = room.cutter.unwrap();
        let seat = room.seat_of(cutter).unwrap();
        let target = (1..4)
            .map(|step| &room.players[(seat + step) % 4])
            .find(|p| !p.hand.is_empty())
            .map(|p| p.id)
            .unwrap();

        service.cut_and_redeal(&mut room, cutter, target).unwrap();
        assert_eq!(room.cutter, Some(target));
        assert!(room.pool_is_conserved());

        cuts += 1;
        assert!(cuts <= 20, "game did not end");
    }

    assert_eq!(room.status(), RoomStatus::Ended);
    assert!(room.winning_team().is_some());
    let cutter = room.cutter.unwrap();
    let other = room.players.iter().find(|p| p.id != cutter).unwrap().id;
    assert_eq!(
        service.cut_card(&mut room, cutter, other).unwrap_err(),
        CutError::InvalidState(RoomStatus::Ended)
    );
}

/// Source whose picks land one past the end of the range.
struct OverreachingRng(ScriptedRng);

impl RandomSource for OverreachingRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        self.0.shuffle(slice);
    }

    fn pick(&mut self, len: usize) -> usize {
        len
    }

    fn next_id(&mut self) -> u128 {
        self.0.next_id()
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "random source picked 5 of 5 cards")]
fn cut_with_out_of_range_pick_is_a_broken_source() {
    let rng = OverreachingRng(ScriptedRng::default());
    let mut service = RoomService::with_rng(RoomOptions::default(), rng).unwrap();
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();

    let _ = service.cut_card(&mut room, P0, P1);
}

#[test]
fn snapshot_hides_other_teams_until_the_end() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();

    let snapshot = room.snapshot(Some(P2));
    assert_eq!(snapshot.status, RoomStatus::Playing);
    assert_eq!(snapshot.cutter, Some(P0));
    assert_eq!(snapshot.cards_left.total(), 20);
    assert_eq!(snapshot.outcome, None);
    let visible: Vec<_> = snapshot.players.iter().map(|p| p.allegiance).collect();
    assert_eq!(visible, vec![None, None, Some(Allegiance::Saboteurs), None]);
    assert!(snapshot.players.iter().all(|p| p.hand_size == 5));

    let spectator = room.snapshot(None);
    assert!(spectator.players.iter().all(|p| p.allegiance.is_none()));

    service.cut_card(&mut room, P0, P1).unwrap();
    service.cut_card(&mut room, P1, P0).unwrap();

    let ended = room.snapshot(None);
    assert_eq!(ended.status, RoomStatus::Ended);
    assert!(ended.players.iter().all(|p| p.allegiance.is_some()));
    assert_eq!(ended.outcome.map(|o| o.reason), Some(WinReason::BombRevealed));
}

#[test]
fn private_view_shows_own_hand() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();

    let view = room.private_view(P0).unwrap();
    assert_eq!(view.name, "user_0");
    assert_eq!(view.allegiance, Some(Allegiance::Defenders));
    assert_eq!(view.hand.len(), 5);
    assert_eq!(view.hand[0], CardKind::Bomb);

    assert!(room.private_view(PlayerId(9)).is_none());
}

#[test]
fn round_counters_only_while_playing() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);

    assert_eq!(room.hand_round(), None);
    assert_eq!(room.cut_round(), None);

    service.start(&mut room).unwrap();
    service.cut_card(&mut room, P0, P1).unwrap();
    assert_eq!(room.hand_round(), Some(1));
    assert_eq!(room.cut_round(), Some(1));
}

#[test]
fn removing_a_player_clears_their_seat() {
    let mut service = scripted_service([]);
    let mut room = seated_room(&mut service, 4);
    service.start(&mut room).unwrap();

    let removed = room.remove_player(P0).unwrap();
    assert_eq!(removed.room, None);
    assert_eq!(room.cutter, None);
    assert_eq!(room.player_count(), 3);
    assert_eq!(room.status(), RoomStatus::Waiting);
    assert!(room.remove_player(P0).is_none());
}
