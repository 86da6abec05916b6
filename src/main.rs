//! Wordle Simulator - CLI
//!
//! Simulates many Wordle games with a letter-frequency solver and reports
//! win ratio and average rounds to win.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use wordle_sim::{
    commands::{
        SimulationConfig, SolveConfig, run_simulation, score_word, simulate::DEFAULT_GAMES, solve_word,
    },
    core::{LetterStats, Word},
    output::{print_score_result, print_simulation_result, print_solve_result},
    solver::{DEFAULT_MAX_ROUNDS, Solver, StrategyType},
    wordlists::{WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Simulate Wordle games with a letter-frequency solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: frequency (default) or random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    rounds: usize,

    /// Seed for reproducible runs (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print every guess and its feedback
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate many games against random answers (default)
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value_t = DEFAULT_GAMES)]
        games: usize,
    },

    /// Solve a specific answer and show every round
    Solve {
        /// The answer to solve
        word: String,

        /// Force the first guess (must be in the word list)
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Show how a word scores under the letter-frequency heuristic
    Score {
        /// Word to score
        word: String,
    },
}

/// Load the dictionary selected by the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("loading word list {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let words = load_words(&cli.wordlist)?;
    log::debug!("loaded {} words", words.len());

    let command = cli.command.unwrap_or(Commands::Simulate {
        games: DEFAULT_GAMES,
    });

    match command {
        Commands::Simulate { games } => {
            let strategy = StrategyType::from_name(&cli.strategy, &words);
            let solver = Solver::new(strategy, &words).with_max_rounds(cli.rounds);
            let config = SimulationConfig {
                games,
                seed: cli.seed,
                show_progress: !cli.verbose,
            };
            let result = run_simulation(&solver, &config);
            print_simulation_result(&result);
        }
        Commands::Solve { word, first_word } => {
            let first = match first_word.as_deref() {
                Some(text) => {
                    let Some(found) = words
                        .iter()
                        .find(|w| w.text().eq_ignore_ascii_case(text))
                    else {
                        bail!("first word '{text}' is not in the word list");
                    };
                    Some(found)
                }
                None => None,
            };

            let strategy = StrategyType::from_name(&cli.strategy, &words);
            let solver = Solver::new(strategy, &words)
                .with_max_rounds(cli.rounds)
                .with_first_guess(first);
            let mut config = SolveConfig::new(word);
            config.seed = cli.seed;

            let result = solve_word(config, &solver)?;
            print_solve_result(&result);
        }
        Commands::Score { word } => {
            let stats = LetterStats::from_words(&words);
            let result = score_word(&word, &stats, &words)?;
            print_score_result(&result);
        }
    }

    Ok(())
}
