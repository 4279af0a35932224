//! Display functions for CLI results

use crate::stats::GameStats;
use colored::Colorize;

/// Print the accumulated statistics summary
pub fn print_stats(stats: &GameStats) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{}", " Statistics ".bright_white().bold());
    println!("{}", "─".repeat(40).cyan());

    println!("  Played:         {}", stats.games_played);
    println!("  Won:            {}", stats.games_won);
    println!("  Win rate:       {:.0}%", stats.win_rate());
    println!("  Current streak: {}", stats.current_streak);
    println!("  Max streak:     {}", stats.max_streak);
    println!("{}", "─".repeat(40).cyan());
    println!();
}
