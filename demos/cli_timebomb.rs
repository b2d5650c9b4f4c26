//! CLI timebomb example: you play seat 0 against bots.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use timebomb::{
    Allegiance, CardKind, Player, PlayerId, RandomSource, Registry, Room, RoomOptions,
    RoomService, RoomStatus,
};

const HUMAN: PlayerId = PlayerId(0);

fn main() {
    env_logger::init();
    println!("Timebomb CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = RoomOptions::default();
    let (min, max) = (options.min_players, options.max_players);
    let mut service = match RoomService::new(options, seed) {
        Ok(service) => service,
        Err(err) => {
            println!("Config error: {err}");
            return;
        }
    };
    let mut registry = Registry::new();

    let Some(count) = prompt_usize(&format!("Players ({min}-{max}): "), min, max) else {
        return;
    };

    for id in 0..count as u64 {
        let name = if id == 0 {
            "you".to_string()
        } else {
            format!("bot_{id}")
        };
        let player = Player::new(PlayerId(id), name);
        if let Err(err) = registry.join(&mut service, player, Some("table")) {
            println!("Join error: {err}");
            return;
        }
    }

    let Some(shared) = registry.room_of(HUMAN) else {
        println!("You are not seated.");
        return;
    };
    let mut room = shared.lock();

    if let Err(err) = service.start(&mut room) {
        println!("Start error: {err}");
        return;
    }

    if let Some(team) = room.player(HUMAN).and_then(|player| player.allegiance) {
        println!("You are with the {}.", colorize_team(team));
    }

    while room.status() == RoomStatus::Playing {
        print_table(&room);

        let Some(cutter) = room.cutter else {
            break;
        };
        let target = if cutter == HUMAN {
            match prompt_target(&room) {
                Some(target) => target,
                None => return,
            }
        } else {
            bot_target(&mut service, &room, cutter)
        };

        match service.cut_and_redeal(&mut room, cutter, target) {
            Ok(report) => {
                println!("{cutter} cuts {target}: {}", format_card(report.card));
                if report.redealt {
                    println!("Hands collected and dealt again.");
                }
            }
            Err(err) => println!("Cut error: {err}"),
        }
    }

    print_final(&room);
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str, min: usize, max: usize) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) if (min..=max).contains(&value) => return Some(value),
            _ => println!("Please enter a number between {min} and {max}."),
        }
    }
}

fn prompt_target(room: &Room) -> Option<PlayerId> {
    loop {
        let seat = prompt_usize("Cut which seat? ", 0, room.player_count() - 1)?;
        let player = &room.players[seat];
        if player.id == HUMAN {
            println!("You cannot cut your own hand.");
        } else if player.hand.is_empty() {
            println!("{} has no cards.", player.name);
        } else {
            return Some(player.id);
        }
    }
}

fn bot_target<R: RandomSource>(
    service: &mut RoomService<R>,
    room: &Room,
    cutter: PlayerId,
) -> PlayerId {
    let candidates: Vec<PlayerId> = room
        .players
        .iter()
        .filter(|player| player.id != cutter && !player.hand.is_empty())
        .map(|player| player.id)
        .collect();
    let index = service.rng_mut().pick(candidates.len());
    candidates[index]
}

fn print_table(room: &Room) {
    let snapshot = room.snapshot(Some(HUMAN));
    println!(
        "\nRound {} cut {} | found: {} | left: {} cards",
        room.hand_round().unwrap_or_default(),
        room.cut_round().unwrap_or_default(),
        format_counts(&snapshot.cards_found),
        snapshot.cards_left.total()
    );

    for (seat, view) in snapshot.players.iter().enumerate() {
        let marker = if snapshot.cutter == Some(view.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} [{seat}] {} ({}) | {} card(s)",
            view.name, view.id, view.hand_size
        );
    }

    if let Some(view) = room.private_view(HUMAN) {
        let hand: Vec<String> = view.hand.iter().copied().map(format_card).collect();
        println!("Your hand: {}", hand.join(" "));
    }
    println!();
}

fn print_final(room: &Room) {
    let snapshot = room.snapshot(None);
    println!("\nFound: {}", format_counts(&snapshot.cards_found));

    if let Some(outcome) = snapshot.outcome {
        println!(
            "Game over: the {} win ({:?}).",
            colorize_team(outcome.team),
            outcome.reason
        );
    }

    for view in &snapshot.players {
        let team = view
            .allegiance
            .map_or_else(|| "?".to_string(), colorize_team);
        println!("  {} ({}): {team}", view.name, view.id);
    }
}

fn format_counts(counts: &timebomb::CardCounts) -> String {
    counts
        .iter()
        .map(|(kind, count)| format!("{}x{count}", format_card(kind)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: CardKind) -> String {
    match card {
        CardKind::Bomb => colorize("BOMB", "31"),
        CardKind::Defuse => colorize("DEFUSE", "32"),
        CardKind::Neutral => colorize("wire", "90"),
    }
}

fn colorize_team(team: Allegiance) -> String {
    match team {
        Allegiance::Defenders => colorize(&team.to_string(), "34"),
        Allegiance::Saboteurs => colorize(&team.to_string(), "31"),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
