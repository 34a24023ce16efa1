//! Interactive table demo: named players against the dealer, round after
//! round, until the table empties or the players call it a night.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tablejack::{GameState, HandOutcome, HandStatus, Player, Table, TableOptions};

const SCREEN_WIDTH: usize = 80;

fn main() {
    tracing_subscriber::fmt::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();
    let starting_bankroll = options.starting_bankroll;
    let mut table = Table::new(options.clone(), seed);

    print_header("Welcome to Blackjack!");

    let num_players = prompt_number("Please enter number of players: ", 1);
    for seat in 1..=num_players {
        let name = loop {
            let name = prompt_line(&format!("Player {seat} - Please enter your name: "));
            if !name.is_empty() {
                break name;
            }
        };
        if table.join(name.clone()).is_ok() {
            println!("Welcome, {name}!");
        }
    }

    print_rules(&options);

    // Bankrolls of players no longer at the table, for the final stats.
    let mut departed: Vec<(String, usize)> = Vec::new();

    loop {
        play_round(&mut table);

        for removed in table.clear_round() {
            println!(
                "{} only has ${}, which is less than the minimum bet of ${}. \
                 They are removed from the table.",
                removed.name(),
                removed.bankroll(),
                table.options.minimum_bet
            );
            departed.push((removed.name().to_string(), removed.bankroll()));
        }

        if table.player_count() == 0 {
            println!("There are no more eligible players.");
            break;
        }
        if !prompt_yes_no("Play another round? (y/n): ") {
            break;
        }
        if table.reshuffle_if_cut_card_drawn().unwrap_or(false) {
            println!("Shoe reshuffled.");
        }
    }

    print_header("Game over");
    for player in table.players() {
        departed.push((player.name().to_string(), player.bankroll()));
    }
    for (name, bankroll) in &departed {
        let won_or_lost = if *bankroll >= starting_bankroll {
            "Won"
        } else {
            "Lost"
        };
        println!(
            "{name} - Leaves with ${bankroll} - {won_or_lost} ${}",
            bankroll.abs_diff(starting_bankroll)
        );
    }
    print_header("Have a nice day! :)");
}

fn play_round(table: &mut Table) {
    print_header("Place your bets!");
    collect_bets(table);

    print_header("Dealer");
    println!("Dealing cards...");
    let summary = match table.deal() {
        Ok(summary) => summary,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };

    println!("Dealer shows: {}", table.dealer_hand());
    for player in table.players() {
        println!("{} shows: {}", player.name(), player.hand());
    }

    if summary.dealer_blackjack {
        println!("Dealer Blackjack! Dealer shows: {}", table.dealer_hand());
    } else {
        for natural in &summary.naturals {
            if let Some(player) = table.player(natural.player_id) {
                print_header(player.name());
                println!(
                    "Hand: {} - Blackjack! You win ${} and now have ${}",
                    player.hand(),
                    natural.winnings,
                    player.bankroll()
                );
            }
        }

        play_player_turns(table);

        if table.state() == GameState::DealerTurn {
            play_dealer_turn(table);
        }
    }

    print_header("Resolving bets");
    match table.settle() {
        Ok(result) => {
            for settled in &result.players {
                let Some(player) = table.player(settled.player_id) else {
                    continue;
                };
                match settled.outcome {
                    HandOutcome::Win => println!(
                        "{} hand {} wins ${} and now has ${}",
                        player.name(),
                        player.hand(),
                        settled.bet,
                        player.bankroll()
                    ),
                    HandOutcome::Push => println!(
                        "{} hand {} is a push, ${} is returned and they now have ${}.",
                        player.name(),
                        player.hand(),
                        settled.bet,
                        player.bankroll()
                    ),
                    HandOutcome::Lose => println!(
                        "{} hand {} loses to dealer's hand and they lose their ${} bet. \
                         They now have ${}.",
                        player.name(),
                        player.hand(),
                        settled.bet,
                        player.bankroll()
                    ),
                }
            }
        }
        Err(err) => println!("Settle error: {err}"),
    }
}

fn collect_bets(table: &mut Table) {
    let ids: Vec<u8> = table.players().iter().map(Player::id).collect();
    for id in ids {
        loop {
            let Some(player) = table.player(id) else {
                break;
            };
            let prompt = format!("{} has ${}. Your bet: ", player.name(), player.bankroll());
            let amount = prompt_number(&prompt, table.options.minimum_bet);
            match table.bet(id, amount) {
                Ok(()) => {
                    if let Some(player) = table.player(id) {
                        println!("{} bets ${amount}", player.name());
                    }
                    break;
                }
                Err(err) => println!("{err}"),
            }
        }
    }
}

fn play_player_turns(table: &mut Table) {
    while table.state() == GameState::PlayerTurn {
        let Some(current) = table.current_player() else {
            break;
        };
        let id = current.id();
        let name = current.name().to_string();

        print_header(&name);
        println!("Dealer: {}", table.dealer_hand());

        loop {
            let Some(player) = table.player(id) else {
                break;
            };
            if player.status() != HandStatus::Active {
                break;
            }
            println!("{name}: {} (value {})", player.hand(), player.hand().value());

            let offer_double =
                player.hand().cards().len() == 2 && player.bankroll() >= player.bet();
            let action = if offer_double {
                prompt_choice("Hit, Stay, or Double Down? (h/s/d): ", &["h", "s", "d"])
            } else {
                prompt_choice("Hit or Stay? (h/s): ", &["h", "s"])
            };

            let result = match action.as_str() {
                "h" => table.hit(id).map(drop),
                "d" => {
                    let result = table.double_down(id).map(drop);
                    if result.is_ok() {
                        println!("Doubling down.");
                    }
                    result
                }
                _ => table.stand(id),
            };

            if let Err(err) = result {
                println!("Action error: {err}");
                continue;
            }

            if let Some(player) = table.player(id) {
                match player.status() {
                    HandStatus::Bust => println!(
                        "{name}: {} - Bust! You lost your bet and have ${} remaining.",
                        player.hand(),
                        player.bankroll()
                    ),
                    HandStatus::Stand if player.hand().value() == 21 => {
                        println!("{name}: {} - Twenty one!", player.hand());
                    }
                    _ => {}
                }
            }
        }
    }
}

fn play_dealer_turn(table: &mut Table) {
    print_header("Dealer");
    match table.dealer_play() {
        Ok(drawn) => {
            for _ in &drawn {
                println!("Dealer hits.");
            }
            println!("Dealer: {} (value {})", table.dealer_hand(), table.dealer_hand().value());
            if table.dealer_hand().is_bust() {
                println!("Dealer busted!");
            } else {
                println!("Dealer stays.");
            }
        }
        Err(err) => println!("Dealer error: {err}"),
    }
}

fn print_rules(options: &TableOptions) {
    print_header("HOUSE RULES");
    println!(
        "All players start with ${}.\n\
         Dealer must hit on soft 17.\n\
         Shoe contains {} decks.\n\
         Shoe is reshuffled when less than {} cards remain in the shoe.\n\
         Minimum bet is ${}.\n\
         Blackjack pays 3:2.",
        options.starting_bankroll, options.decks, options.cut_card_position, options.minimum_bet
    );
}

fn print_header(message: &str) {
    println!("{:-^width$}", format!(" {message} "), width = SCREEN_WIDTH);
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_number(prompt: &str, minimum: usize) -> usize {
    loop {
        match prompt_line(prompt).parse::<usize>() {
            Ok(value) if value >= minimum => return value,
            Ok(_) => println!("Please enter a number of at least {minimum}."),
            Err(_) => println!("Sorry, that's not a valid input."),
        }
    }
}

fn prompt_choice(prompt: &str, choices: &[&str]) -> String {
    loop {
        let input = prompt_line(prompt).to_lowercase();
        if choices.contains(&input.as_str()) {
            return input;
        }
        println!("Please enter one of: {}.", choices.join(", "));
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        match prompt_line(prompt).to_lowercase().as_str() {
            "y" | "yes" => return true,
            "n" | "no" => return false,
            _ => println!("Please enter 'y' or 'n'."),
        }
    }
}
