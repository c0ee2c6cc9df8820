//! Display functions for session state

use super::formatters::{colorize_guess, result_to_emoji};
use crate::session::{GameSession, GameStatus};
use colored::Colorize;

/// Print the full board: every player's guess history with colored feedback
pub fn print_board(session: &GameSession) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Game {}  [{}]",
        session.id().bright_yellow().bold(),
        session.status()
    );
    println!("{}", "─".repeat(60).cyan());

    for player in session.players() {
        let marker = if player.solved() {
            "✔".bright_green().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "\n{} {} ({}/{} guesses)",
            marker,
            player.name().bright_white().bold(),
            player.guess_count(),
            session.max_guesses()
        );

        for (guess, result) in player.guesses().iter().zip(player.results()) {
            println!(
                "    {}  {}",
                colorize_guess(guess.text(), result),
                result_to_emoji(result)
            );
        }
    }
    println!();
}

/// Print the end-of-game summary, revealing the secret and the winner
pub fn print_summary(session: &GameSession) {
    if session.status() != GameStatus::Finished {
        return;
    }

    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "The word was {}",
        session.secret().text().to_uppercase().bright_yellow().bold()
    );

    match session.winner().and_then(|id| session.player(id)) {
        Some(winner) => {
            println!(
                "{}",
                format!("🏆 {} wins!", winner.name()).bright_green().bold()
            );
        }
        None => {
            println!("{}", "Nobody solved it this time.".red());
        }
    }
    println!("{}", "═".repeat(60).bright_cyan());
}
