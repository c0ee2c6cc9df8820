//! Hot-seat multiplayer game loop
//!
//! Runs a full game over a [`GameService`]: create, join, start, round-robin
//! guessing, and the finish summary. Players share one terminal and take
//! turns; the secret is drawn from the embedded pool or a caller-supplied
//! wordlist unless the host types one.

use crate::core::Word;
use crate::output::{colorize_guess, print_board, print_summary, result_to_emoji};
use crate::service::{GameService, ServiceError};
use crate::session::{GameStatus, SessionError};
use crate::wordlists::SECRET_POOL;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Configuration for a hosted game
pub struct PlayConfig {
    /// Secret word; drawn from a pool when absent
    pub secret: Option<String>,
    /// Display names of the players taking turns
    pub players: Vec<String>,
    /// Secret length when drawing from a pool
    pub word_length: usize,
    /// Path to a newline-separated wordlist to draw from instead of the
    /// embedded pool
    pub wordlist: Option<String>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            secret: None,
            players: vec!["Player 1".to_string()],
            word_length: Word::DEFAULT_LEN,
            wordlist: None,
        }
    }
}

/// Run a hot-seat game to completion
///
/// The number of rounds comes from the session's own attempt limit, so the
/// loop and the state machine always agree on when the game is over.
///
/// # Errors
///
/// Returns an error on I/O failures or when the service rejects the setup
/// (e.g. an invalid secret word).
pub fn run_play(config: &PlayConfig, service: &dyn GameService) -> Result<(), String> {
    let secret = match &config.secret {
        Some(word) => word.clone(),
        None => choose_secret(config)?,
    };

    let session_id = service
        .create_session("host", &secret)
        .map_err(|e| e.to_string())?;

    let default_players = vec![String::from("Player 1")];
    let player_names: &[String] = if config.players.is_empty() {
        &default_players
    } else {
        &config.players
    };

    let mut player_ids = Vec::with_capacity(player_names.len());
    for (i, name) in player_names.iter().enumerate() {
        let id = format!("p{}", i + 1);
        service
            .join_session(&session_id, &id, name)
            .map_err(|e| e.to_string())?;
        player_ids.push(id);
    }

    service
        .update_status(&session_id, GameStatus::Playing, None, None)
        .map_err(|e| e.to_string())?;

    let session = service
        .fetch_session(&session_id)
        .map_err(|e| e.to_string())?;
    let word_length = session.word_length();
    let max_guesses = session.max_guesses();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                        Wordle Arena                          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Game {} started with {} player(s). The word has {} letters.",
        session_id.bright_yellow().bold(),
        player_ids.len(),
        word_length
    );
    println!("Type 'quit' at any prompt to abandon the game.\n");

    'rounds: for round in 1..=max_guesses {
        for (player_id, name) in player_ids.iter().zip(player_names) {
            let session = service
                .fetch_session(&session_id)
                .map_err(|e| e.to_string())?;

            if session.status() == GameStatus::Finished {
                break 'rounds;
            }

            if session.player(player_id).is_some_and(|p| p.solved()) {
                continue;
            }

            if !take_turn(service, &session_id, player_id, name, round, max_guesses)? {
                println!("\n👋 Game abandoned.\n");
                return Ok(());
            }
        }
    }

    // Host action: call the game if it somehow outlived the rounds
    let session = service
        .fetch_session(&session_id)
        .map_err(|e| e.to_string())?;
    if session.status() == GameStatus::Playing {
        service
            .update_status(&session_id, GameStatus::Finished, None, None)
            .map_err(|e| e.to_string())?;
    }

    let session = service
        .fetch_session(&session_id)
        .map_err(|e| e.to_string())?;
    print_board(&session);
    print_summary(&session);

    Ok(())
}

/// Prompt one player until a guess is accepted; false means quit
fn take_turn(
    service: &dyn GameService,
    session_id: &str,
    player_id: &str,
    name: &str,
    round: usize,
    max_guesses: usize,
) -> Result<bool, String> {
    loop {
        let input = get_user_input(&format!("{name}, guess {round}/{max_guesses}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(false),
            guess => match service.submit_guess(session_id, player_id, guess) {
                Ok(result) => {
                    println!(
                        "    {}  {}",
                        colorize_guess(guess, &result),
                        result_to_emoji(&result)
                    );

                    if result.is_solved() {
                        println!("    {}", format!("🎉 {name} got it!").bright_green().bold());
                    }
                    return Ok(true);
                }
                // Solved/state rejections end the turn; bad input re-prompts
                Err(ServiceError::Session(
                    e @ (SessionError::PlayerSolved(_) | SessionError::InvalidState { .. }),
                )) => {
                    println!("❌ {e}");
                    return Ok(true);
                }
                Err(e) => {
                    println!("❌ {e}");
                }
            },
        }
    }
}

/// Pick a random secret of the configured length
///
/// Draws from the wordlist file when one is given, otherwise from the
/// embedded pool.
fn choose_secret(config: &PlayConfig) -> Result<String, String> {
    let pool = match &config.wordlist {
        Some(path) => load_from_file(path, config.word_length)
            .map_err(|e| format!("Failed to read wordlist {path}: {e}"))?,
        None => words_from_slice(SECRET_POOL, config.word_length),
    };

    if pool.is_empty() {
        return Err(format!(
            "No {}-letter words available; supply --word or --wordlist",
            config.word_length
        ));
    }

    let mut rng = rand::rng();
    Ok(pool[rng.random_range(0..pool.len())].text().to_string())
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn default_config_has_one_player() {
        let config = PlayConfig::default();
        assert_eq!(config.players.len(), 1);
        assert!(config.secret.is_none());
        assert_eq!(config.word_length, Word::DEFAULT_LEN);
        assert!(config.wordlist.is_none());
    }

    #[test]
    fn chosen_secret_comes_from_pool() {
        let config = PlayConfig::default();
        for _ in 0..20 {
            let secret = choose_secret(&config).unwrap();
            assert!(SECRET_POOL.contains(&secret.as_str()));
        }
    }

    #[test]
    fn choose_secret_respects_length() {
        // The embedded pool is 5-letter only, so an unusual length needs
        // --word or --wordlist
        let config = PlayConfig {
            word_length: 9,
            ..PlayConfig::default()
        };

        let err = choose_secret(&config).unwrap_err();
        assert!(err.contains("9-letter"));
    }

    #[test]
    fn choose_secret_draws_from_wordlist_file() {
        let path = std::env::temp_dir().join(format!("arena_pool_{}.txt", std::process::id()));
        fs::write(&path, "puzzle\narcade\ncrane\n").unwrap();

        let config = PlayConfig {
            word_length: 6,
            wordlist: Some(path.to_string_lossy().into_owned()),
            ..PlayConfig::default()
        };

        // Only the two 6-letter entries qualify
        for _ in 0..10 {
            let secret = choose_secret(&config).unwrap();
            assert!(secret == "puzzle" || secret == "arcade");
        }

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn choose_secret_reports_missing_wordlist() {
        let config = PlayConfig {
            wordlist: Some("definitely/not/here.txt".to_string()),
            ..PlayConfig::default()
        };

        let err = choose_secret(&config).unwrap_err();
        assert!(err.contains("Failed to read wordlist"));
    }
}
