//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: type a word, get a colored row back.

use crate::core::MAX_GUESSES;
use crate::game::{GameSession, GameStatus};
use crate::output::{key_colored, print_stats, row_colored, row_to_emoji};
use crate::stats::StatsStore;
use rand::Rng;
use std::io::{self, Write};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng, S: StatsStore>(game: &mut GameSession<'_, R, S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in {MAX_GUESSES} tries.");
    println!("Green = right spot, yellow = wrong spot, gray = not in the word.\n");
    println!("Commands: 'quit' to exit, 'new' for a new game, 'stats' for statistics\n");

    loop {
        print_board(game);

        let turn = game.current_row() + 1;
        let input = get_user_input(&format!("Guess {turn}/{MAX_GUESSES}"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.start_new_game();
                println!("\n🔄 New game started!\n");
                continue;
            }
            "stats" => {
                print_stats(game.stats());
                continue;
            }
            _ => {}
        }

        enter_guess(game, &input);
        if let Err(err) = game.commit_guess() {
            println!("\n❌ {err}\n");
            continue;
        }

        match game.status() {
            GameStatus::Playing => {}
            GameStatus::Won => {
                print_board(game);
                celebrate(game.current_row() + 1);
                print_share_grid(game);
                print_stats(game.stats());

                if !play_again(game)? {
                    return Ok(());
                }
            }
            GameStatus::Lost => {
                print_board(game);
                println!(
                    "\n💀 Out of guesses! The word was {}.",
                    game.solution().text().to_uppercase()
                );
                print_share_grid(game);
                print_stats(game.stats());

                if !play_again(game)? {
                    return Ok(());
                }
            }
        }
    }
}

fn enter_guess<R: Rng, S: StatsStore>(game: &mut GameSession<'_, R, S>, input: &str) {
    // Drop whatever was typed before; the whole word comes from this line
    while !game.current_guess().is_empty() {
        game.delete_letter();
    }

    for ch in input.chars() {
        game.append_letter(ch);
    }
}

fn print_board<R: Rng, S: StatsStore>(game: &GameSession<'_, R, S>) {
    println!("────────────────────────────────────────");

    for row in 0..game.current_row() + usize::from(game.status() != GameStatus::Playing) {
        println!("  {}", row_colored(&game.board()[row]));
    }

    for keyboard_row in KEYBOARD_ROWS {
        let keys: Vec<String> = keyboard_row
            .chars()
            .map(|ch| key_colored(ch, game.hints().hint(ch)))
            .collect();
        println!("  {}", keys.join(" "));
    }

    println!("────────────────────────────────────────");
}

/// Spoiler-free result grid, one emoji row per committed guess
fn print_share_grid<R: Rng, S: StatsStore>(game: &GameSession<'_, R, S>) {
    let guesses = game.current_row() + 1;
    let score = if game.status() == GameStatus::Won {
        guesses.to_string()
    } else {
        "X".to_string()
    };

    println!("\nWordle {score}/{MAX_GUESSES}");
    for row in 0..guesses {
        println!("{}", row_to_emoji(&game.board()[row]));
    }
}

fn celebrate(guesses: usize) {
    use colored::Colorize;

    let performance = match guesses {
        1 => "🏆 Genius!",
        2 => "⭐ Magnificent!",
        3 => "💫 Impressive!",
        4 => "✨ Splendid!",
        5 => "👍 Great!",
        _ => "✓ Phew!",
    };

    println!("\n{}", performance.bright_green().bold());
    println!(
        "Solved in {guesses} {}",
        if guesses == 1 { "guess" } else { "guesses" }
    );
}

fn play_again<R: Rng, S: StatsStore>(game: &mut GameSession<'_, R, S>) -> Result<bool, String> {
    match get_user_input("Play again? (yes/no)")?
        .to_lowercase()
        .as_str()
    {
        "yes" | "y" => {
            game.start_new_game();
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
