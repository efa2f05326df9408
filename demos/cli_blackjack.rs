//! Console menu client for the blackjack engine.
//!
//! All text rendering and input validation lives here; the engine only
//! ever receives choices from its own legal sets.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    Game, GameOptions, GameState, HistoryConfig, HistoryStore, PlayerAction, RoundStatus,
};

const BANNER: &str = "======== TWENTYONE ========";

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let store = HistoryStore::new(HistoryConfig::default());
    let mut game = Game::new(GameOptions::default(), store, seed);

    loop {
        println!("\n{BANNER}");
        println!("\n1 - CONTINUE");
        println!("2 - START NEW GAME");
        println!("3 - GAME HISTORY");
        println!("4 - GAME STATISTICS");
        println!("5 - EXIT");

        match prompt_choice(5) {
            1 => continue_game(&mut game),
            2 => start_new_game(&mut game),
            3 => show_game_history(&mut game),
            4 => show_game_statistics(&game),
            _ => break,
        }
    }
}

fn continue_game(game: &mut Game) {
    if game.has_saved_session() {
        match game.resume() {
            Ok(()) => round_menu(game),
            Err(err) => println!("Could not resume: {err}"),
        }
    } else {
        println!("\nThere is no saved game to continue. Start a new one first.");
        pause();
    }
}

fn start_new_game(game: &mut Game) {
    if game.has_saved_session() {
        if let Err(err) = game.resume() {
            println!("Could not read the saved game: {err}");
            return;
        }

        println!("\nStarting over archives the current game. Proceed?");
        println!("\n1 - YES");
        println!("2 - NO");
        if prompt_choice(2) != 1 {
            return;
        }

        if let Err(err) = game.finish_session() {
            println!("Could not archive the game: {err}");
            return;
        }
        println!("\nYour previous game has been archived.");
    }
    round_menu(game);
}

fn show_game_history(game: &mut Game) {
    println!("\n{BANNER}");
    println!("\nPREVIOUS GAMES");

    if game.has_game_history() {
        match game.game_history() {
            Ok(summaries) => {
                for (idx, summary) in summaries.iter().enumerate() {
                    println!("\nGAME {}:", idx + 1);
                    println!("\tLOSSES: {}", summary.losses);
                    println!("\tPUSHES: {}", summary.pushes);
                    println!("\tWINS: {}", summary.wins);
                    println!("\tSURRENDERS: {}", summary.surrenders);
                    println!(
                        "\tLAST PLAYED: {}",
                        summary.last_played.format("%m/%d/%Y %H:%M:%S")
                    );
                    println!("\tTOTAL PROFIT: {:.2}$", summary.total_profit);
                }
            }
            Err(err) => println!("Could not read game history: {err}"),
        }
    } else {
        println!("\nThis save has no previous games.");
    }

    println!("\n1 - RETURN");
    println!("2 - CLEAR PREVIOUS GAME HISTORY");
    if prompt_choice(2) == 2 {
        if game.has_game_history() {
            println!("\nThis deletes all archived games and their statistics. Proceed?");
            println!("\n1 - YES");
            println!("2 - NO");
            if prompt_choice(2) == 1 {
                match game.clear_game_history() {
                    Ok(()) => println!("\nGame history cleared."),
                    Err(err) => println!("Could not clear game history: {err}"),
                }
            }
        } else {
            println!("\nThere is no game history to clear.");
        }
        pause();
    }
}

fn show_game_statistics(game: &Game) {
    println!("\n{BANNER}");
    println!("\nSTATISTICS OF ALL PREVIOUS GAMES IN THIS SAVE:");

    let stats = game
        .game_history()
        .ok()
        .filter(|_| game.has_game_history())
        .and_then(|summaries| twentyone::GameStats::aggregate(&summaries).ok());

    match stats {
        Some(stats) => {
            println!("\nNUMBER OF GAMES: {}", stats.games);
            println!("LOSSES: {}", stats.count(RoundStatus::Loss));
            println!("PUSHES: {}", stats.count(RoundStatus::Push));
            println!("WINS: {}", stats.count(RoundStatus::Win));
            println!("SURRENDERS: {}", stats.count(RoundStatus::Surrender));
            println!("TOTAL PROFIT: {:.2}$", stats.total_profit);
            println!("AVERAGE PROFIT PER ROUND: {:.2}$", stats.average_profit);
            println!("WIN RATE: {:.2}%", 100.0 * stats.win_rate);
        }
        None => {
            println!("\nThis save has no previous games. Play and archive games first.");
        }
    }
    pause();
}

fn round_menu(game: &mut Game) {
    loop {
        println!("\n{BANNER}");
        println!("\n1 - START NEW ROUND");
        println!("2 - ROUND HISTORY");
        println!("3 - ROUND STATISTICS");
        println!("4 - RETURN TO MAIN MENU");
        println!("\nYOUR BALANCE: {:.2}$", game.balance());

        match prompt_choice(4) {
            1 => play_round(game),
            2 => show_round_history(game),
            3 => show_round_statistics(game),
            _ => break,
        }
    }
}

fn show_round_history(game: &Game) {
    println!("\n{BANNER}");
    println!("\nROUND HISTORY OF THE CURRENT GAME");

    if game.round_history().is_empty() {
        println!("\nThis game has no rounds yet.");
    } else {
        for (idx, record) in game.round_history().iter().enumerate() {
            println!("\nROUND {}:", idx + 1);
            println!("\tSTATUS: {}", record.status);
            println!("\tTIME: {}", record.time.format("%m/%d/%Y %H:%M:%S"));
            println!("\tPROFIT: {}$", record.profit);
        }
    }
    pause();
}

fn show_round_statistics(game: &Game) {
    println!("\n{BANNER}");
    println!("\nROUND STATISTICS OF THE CURRENT GAME");

    match game.round_stats() {
        Ok(stats) => {
            println!("\nNUMBER OF ROUNDS: {}", stats.rounds);
            for status in RoundStatus::ALL {
                println!("{status}: {}", stats.count(status));
            }
            println!("WIN RATE: {:.2}%", 100.0 * stats.win_rate);
            println!("TOTAL PROFIT: {:.2}$", stats.total_profit);
            println!("AVERAGE PROFIT PER ROUND: {:.2}$", stats.average_profit);
        }
        Err(_) => println!("\nThis game has no rounds yet. Play rounds to see statistics."),
    }
    pause();
}

fn play_round(game: &mut Game) {
    let chips = game.options().chips.clone();

    println!("\n{BANNER}");
    println!("\nCHOOSE YOUR BET:\n");
    for (idx, chip) in chips.iter().enumerate() {
        println!("{} - {chip}$", idx + 1);
    }
    println!("{} - RETURN", chips.len() + 1);

    let choice = prompt_choice(chips.len() + 1);
    if choice == chips.len() + 1 {
        return;
    }

    if let Err(err) = game.bet(chips[choice - 1]) {
        println!("Bet error: {err}");
        return;
    }
    println!("\nYou bet {}$.", chips[choice - 1]);

    if let Err(err) = game.deal() {
        println!("Deal error: {err}");
        return;
    }

    println!("\nYour hand:");
    print_player_hand(game);

    if let Some(up) = game.dealer().face_up() {
        println!("\nThe dealer's face-up card is the {up} (value {}).", up.value);
    }

    if game.is_insurance_offered() {
        let stake = game.options().insurance_bet;
        println!("\nThe dealer shows an ace. Bet {stake}$ on a dealer blackjack?");
        println!("\n1 - YES");
        println!("2 - NO");
        let result = if prompt_choice(2) == 1 {
            game.take_insurance()
        } else {
            game.decline_insurance()
        };
        if let Err(err) = result {
            println!("Insurance error: {err}");
        }
    }

    if game.player().is_blackjack() {
        println!("\nBlackjack!");
    }

    while game.state() == GameState::PlayerTurn {
        if !player_turn(game) {
            break;
        }
    }

    if game.state() == GameState::DealerTurn {
        dealer_turn(game);
    }

    match game.finish_round() {
        Ok(record) => {
            let outcome = match record.status {
                RoundStatus::Win => "You win",
                RoundStatus::Loss => "You lose",
                RoundStatus::Push => "Push",
                RoundStatus::Surrender => "You surrendered",
            };
            println!("\n{outcome}. Profit this round: {}$.", record.profit);
            println!("Your balance is now {:.2}$.", game.balance());
        }
        Err(err) => println!("Could not record the round: {err}"),
    }
    pause();
}

/// Runs one player decision. Returns `false` to stop the action loop.
fn player_turn(game: &mut Game) -> bool {
    let actions = game.available_actions();

    println!("\nThe dealer asks whether you want another card.\n");
    for (idx, action) in actions.iter().enumerate() {
        let label = match action {
            PlayerAction::Hit => "HIT",
            PlayerAction::Stand => "STAND",
            PlayerAction::DoubleDown => "DOUBLE DOWN",
            PlayerAction::Surrender => "SURRENDER",
        };
        println!("{} - {label}", idx + 1);
    }

    let action = actions[prompt_choice(actions.len()) - 1];
    let result = match action {
        PlayerAction::Hit => game.hit().map(Some),
        PlayerAction::Stand => game.stand().map(|()| None),
        PlayerAction::DoubleDown => {
            println!("\nDouble down! The bet is doubled.");
            game.double_down().map(Some)
        }
        PlayerAction::Surrender => game.surrender().map(|()| None),
    };

    match result {
        Ok(Some(card)) => {
            println!("\nYou are dealt the {card}.");
            print_player_hand(game);
            if game.player().is_bust() {
                println!("\nYou bust!");
            }
            true
        }
        Ok(None) => true,
        Err(err) => {
            println!("Action error: {err}");
            false
        }
    }
}

fn dealer_turn(game: &mut Game) {
    println!("\nThe dealer reveals the hole card.");

    match game.dealer_play() {
        Ok(drawn) => {
            for card in &drawn {
                println!("The dealer draws the {card}.");
            }
            let dealer = game.dealer();
            let cards: Vec<String> = dealer
                .hand()
                .cards()
                .iter()
                .map(ToString::to_string)
                .collect();
            println!(
                "The dealer's hand is [{}] with a value of {}.",
                cards.join(", "),
                dealer.hand().total()
            );
            if dealer.is_blackjack() {
                println!("The dealer has a blackjack!");
            }
            if dealer.is_bust() {
                println!("The dealer busts!");
            }
        }
        Err(err) => println!("Dealer error: {err}"),
    }
}

fn print_player_hand(game: &Game) {
    let cards: Vec<String> = game
        .player()
        .cards()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!(
        "[{}] with a value of {}",
        cards.join(", "),
        game.player().total()
    );
}

/// Prompts until the user picks a number in `1..=max`.
fn prompt_choice(max: usize) -> usize {
    loop {
        let line = prompt_line("Select an option: ");
        if let Ok(choice) = line.parse::<usize>() {
            if (1..=max).contains(&choice) {
                return choice;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

fn pause() {
    let _ = prompt_line("\nPress Enter to continue. ");
}
