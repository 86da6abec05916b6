//! Simulation command
//!
//! Plays many independent games against randomly chosen answers and tallies
//! wins, losses and failures.

use crate::solver::{GameOutcome, Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Games per run unless configured otherwise
pub const DEFAULT_GAMES: usize = 1000;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    /// Base seed; game `i` uses `seed + i`. Drawn at random when `None`.
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_GAMES,
            seed: None,
            show_progress: false,
        }
    }
}

/// Running totals for one simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationTally {
    pub wins: usize,
    pub losses: usize,
    /// Games that ended with an empty candidate list
    pub failures: usize,
    /// Rounds-to-win histogram
    pub distribution: BTreeMap<usize, usize>,
    win_rounds: usize,
}

impl SimulationTally {
    /// Count one finished game
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Won { rounds } => {
                self.wins += 1;
                self.win_rounds += rounds;
                *self.distribution.entry(rounds).or_insert(0) += 1;
            }
            GameOutcome::Lost => self.losses += 1,
            GameOutcome::NoCandidates { .. } => self.failures += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.wins + self.losses + self.failures
    }

    /// Wins over all games (0 for an empty run)
    #[must_use]
    pub fn win_ratio(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.wins as f64 / self.total() as f64
    }

    /// Average rounds over winning games only (0 if nothing was won)
    #[must_use]
    pub fn average_rounds(&self) -> f64 {
        if self.wins == 0 {
            return 0.0;
        }
        self.win_rounds as f64 / self.wins as f64
    }
}

/// Result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub tally: SimulationTally,
    pub seed: u64,
    pub max_rounds: usize,
    pub duration: Duration,
}

/// Run `config.games` games, each against an answer drawn from the
/// solver's dictionary
///
/// Every game gets its own random source seeded from the base seed and the
/// game index, so a run is reproducible from its seed alone. A game that
/// runs out of candidates is counted as a failure and the run continues.
pub fn run_simulation<S: Strategy>(
    solver: &Solver<S>,
    config: &SimulationConfig,
) -> SimulationResult {
    let seed = config.seed.unwrap_or_else(rand::random);
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut tally = SimulationTally::default();

    for i in 0..config.games {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));

        let Some(answer) = solver.words().choose(&mut rng) else {
            warn!("dictionary is empty, game {} cannot be played", i + 1);
            tally.record(GameOutcome::NoCandidates { round: 0 });
            pb.inc(1);
            continue;
        };

        let report = solver.play(answer, &mut rng);
        if let GameOutcome::NoCandidates { round } = report.outcome {
            warn!("game {}: no candidates left after round {round} (answer {answer})", i + 1);
        }
        tally.record(report.outcome);

        if i % 50 == 0 {
            pb.set_message(format!("Win: {:.1}%", tally.win_ratio() * 100.0));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    SimulationResult {
        tally,
        seed,
        max_rounds: solver.max_rounds(),
        duration: start.elapsed(),
    }
}
