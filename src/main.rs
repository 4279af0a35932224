//! Wordle Play - CLI
//!
//! Terminal Wordle with a TUI board, keyboard hints, and persistent streaks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_play::{
    commands::run_simple,
    game::GameSession,
    interactive::{App, run_tui},
    output::print_stats,
    stats::{FileStore, StatsStore},
    wordlists::{WordLists, loader},
};

/// Default stats location, relative to the working directory
const DEFAULT_STATS_FILE: &str = "wordle_play_stats.json";

#[derive(Parser)]
#[command(
    name = "wordle_play",
    about = "Terminal Wordle: guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom practice word list (one five-letter word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Where to persist statistics
    #[arg(long, global = true, default_value = DEFAULT_STATS_FILE)]
    stats_file: String,

    /// Seed the solution picker (deterministic games)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain text mode (no TUI)
    Simple,

    /// Show accumulated statistics
    Stats,
}

/// Build the word lists from the -w flag
///
/// A custom practice list still gets the embedded dictionary merged in, so
/// common words remain guessable.
fn load_wordlists(custom: Option<&str>) -> Result<WordLists> {
    match custom {
        None => Ok(WordLists::embedded()),
        Some(path) => {
            let practice = loader::load_from_file(path)
                .with_context(|| format!("Failed to read word list {path}"))?;
            let allowed = loader::words_from_slice(wordle_play::wordlists::ALLOWED);
            WordLists::new(practice, allowed)
                .with_context(|| format!("Word list {path} has no valid five-letter words"))
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlists(cli.wordlist.as_deref())?;
    let store = FileStore::new(&cli.stats_file);
    let rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let session = GameSession::new(&words, rng, store);
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let mut session = GameSession::new(&words, rng, store);
            run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Stats => {
            let stats = store.load().unwrap_or_default();
            print_stats(&stats);
            Ok(())
        }
    }
}
