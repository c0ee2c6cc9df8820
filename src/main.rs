//! Wordle Arena - CLI
//!
//! Host and play multiplayer word-guessing games in the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_arena::{
    commands::{PlayConfig, evaluate_pair, run_play},
    core::Word,
    output::{result_to_codes, result_to_emoji},
    service::InMemoryService,
    session::DEFAULT_MAX_GUESSES,
};

#[derive(Parser)]
#[command(
    name = "wordle_arena",
    about = "Multiplayer word-guessing game with duplicate-aware feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Host a hot-seat game (default)
    Play {
        /// Secret word (random from the pool if omitted)
        #[arg(short = 'w', long)]
        word: Option<String>,

        /// Comma-separated player names
        #[arg(short, long, value_delimiter = ',')]
        players: Vec<String>,

        /// Secret length when drawing from the pool
        #[arg(short, long, default_value_t = Word::DEFAULT_LEN)]
        length: usize,

        /// Guesses each player gets before the game ends
        #[arg(short = 'g', long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,

        /// Draw the secret from this newline-separated wordlist file
        #[arg(long)]
        wordlist: Option<String>,
    },

    /// Evaluate a single guess against a secret word
    Eval {
        /// The secret word
        secret: String,

        /// The guess to evaluate
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to hosting a game if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        word: None,
        players: Vec::new(),
        length: Word::DEFAULT_LEN,
        max_guesses: DEFAULT_MAX_GUESSES,
        wordlist: None,
    });

    match command {
        Commands::Play {
            word,
            players,
            length,
            max_guesses,
            wordlist,
        } => run_play_command(word, players, length, max_guesses, wordlist),
        Commands::Eval { secret, guess } => run_eval_command(&secret, &guess),
    }
}

fn run_play_command(
    word: Option<String>,
    players: Vec<String>,
    length: usize,
    max_guesses: usize,
    wordlist: Option<String>,
) -> Result<()> {
    let config = PlayConfig {
        secret: word,
        players: if players.is_empty() {
            PlayConfig::default().players
        } else {
            players
        },
        word_length: length,
        wordlist,
    };

    // The session's attempt limit is service configuration, so the state
    // machine enforces the same bound the game loop runs to
    let service = InMemoryService::new().with_max_guesses(max_guesses);
    run_play(&config, &service).map_err(|e| anyhow::anyhow!(e))
}

fn run_eval_command(secret: &str, guess: &str) -> Result<()> {
    let result = evaluate_pair(secret, guess).map_err(|e| anyhow::anyhow!(e))?;

    println!(
        "{} {}  ({})",
        guess.to_uppercase(),
        result_to_emoji(&result),
        result_to_codes(&result)
    );
    Ok(())
}
