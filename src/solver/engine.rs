//! Game state machine and solver orchestration

use super::filter::CandidateFilter;
use super::strategy::Strategy;
use crate::core::{Feedback, Word};
use log::{debug, info};
use rand::Rng;
use thiserror::Error;

/// Guesses allowed per game unless configured otherwise
pub const DEFAULT_MAX_ROUNDS: usize = 6;

/// Errors raised while stepping a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Every word was filtered out, so there is nothing left to guess
    #[error("no candidate words remain after round {round}")]
    NoCandidates { round: usize },
    #[error("the game is already over")]
    GameOver,
}

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won { rounds: usize },
    Lost,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Solved on round `rounds` (1-based)
    Won { rounds: usize },
    /// Round budget used up without solving
    Lost,
    /// Candidate list emptied after `round` rounds; no guess could be made
    NoCandidates { round: usize },
}

impl GameOutcome {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

/// One played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Full record of a finished game
#[derive(Debug, Clone)]
pub struct GameReport {
    pub answer: Word,
    pub outcome: GameOutcome,
    pub turns: Vec<Turn>,
}

/// Mutable state of one game: filter, remaining candidates, round counter
///
/// Each game owns its filter and candidate list; the dictionary is only borrowed.
#[derive(Debug, Clone)]
pub struct Game<'a> {
    filter: CandidateFilter,
    candidates: Vec<&'a Word>,
    round: usize,
    max_rounds: usize,
    state: GameState,
    turns: Vec<Turn>,
}

impl<'a> Game<'a> {
    /// Start a game over the full word list
    ///
    /// A budget of zero rounds produces a game that is already lost.
    #[must_use]
    pub fn new(words: &'a [Word], max_rounds: usize) -> Self {
        let state = if max_rounds == 0 {
            GameState::Lost
        } else {
            GameState::InProgress
        };

        Self {
            filter: CandidateFilter::new(),
            candidates: words.iter().collect(),
            round: 0,
            max_rounds,
            state,
            turns: Vec::new(),
        }
    }

    /// Play `guess` against `answer` and narrow the candidates
    ///
    /// # Errors
    /// Returns `SolveError::GameOver` if the game has already been won or lost.
    pub fn play_round(&mut self, guess: &Word, answer: &Word) -> Result<Feedback, SolveError> {
        if self.state != GameState::InProgress {
            return Err(SolveError::GameOver);
        }
        Ok(self.advance(guess, answer))
    }

    fn advance(&mut self, guess: &Word, answer: &Word) -> Feedback {
        let feedback = Feedback::evaluate(guess, answer);
        self.filter.record(guess, &feedback);

        let candidates_before = self.candidates.len();
        self.candidates = self.filter.apply(&self.candidates);
        self.round += 1;

        debug!(
            "round {}: {candidates_before} -> {} candidates",
            self.round,
            self.candidates.len()
        );

        self.turns.push(Turn {
            guess: guess.clone(),
            feedback,
            candidates_before,
            candidates_after: self.candidates.len(),
        });

        if feedback.is_solved() {
            self.state = GameState::Won { rounds: self.round };
        } else if self.round >= self.max_rounds {
            self.state = GameState::Lost;
        }

        feedback
    }

    /// Words still consistent with every feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    /// Rounds played so far
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn filter(&self) -> &CandidateFilter {
        &self.filter
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }
}

/// Main Wordle solver
///
/// Coordinates one game at a time using a given strategy. The solver holds
/// no per-game state, so a single instance can play any number of games.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [Word],
    max_rounds: usize,
    first_guess: Option<&'a Word>,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and dictionary
    ///
    /// Uses the default budget of 6 rounds and lets the strategy choose
    /// every guess.
    pub const fn new(strategy: S, words: &'a [Word]) -> Self {
        Self {
            strategy,
            words,
            max_rounds: DEFAULT_MAX_ROUNDS,
            first_guess: None,
        }
    }

    /// Set the round budget
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Force the first guess of every game
    #[must_use]
    pub const fn with_first_guess(mut self, first_guess: Option<&'a Word>) -> Self {
        self.first_guess = first_guess;
        self
    }

    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Start a fresh game over this solver's dictionary
    #[must_use]
    pub fn new_game(&self) -> Game<'a> {
        Game::new(self.words, self.max_rounds)
    }

    /// Choose the next guess for `game`
    ///
    /// Uses the forced first guess on round 1 if one is configured.
    ///
    /// # Errors
    /// Returns `SolveError::NoCandidates` when the candidate list is empty.
    pub fn next_guess<R: Rng + ?Sized>(
        &self,
        game: &Game<'a>,
        rng: &mut R,
    ) -> Result<&'a Word, SolveError> {
        if game.round() == 0
            && let Some(first) = self.first_guess
        {
            return Ok(first);
        }

        self.strategy
            .select_guess(game.candidates(), rng)
            .ok_or(SolveError::NoCandidates {
                round: game.round(),
            })
    }

    /// Play one full game against `answer`
    ///
    /// The game ends when the answer is guessed, the round budget runs out,
    /// or no candidate is left to guess. The last case is reported as
    /// `GameOutcome::NoCandidates`, never as a loss.
    pub fn play<R: Rng + ?Sized>(&self, answer: &Word, rng: &mut R) -> GameReport {
        info!("answer : {answer}");
        let mut game = self.new_game();

        let outcome = loop {
            match game.state() {
                GameState::Won { rounds } => break GameOutcome::Won { rounds },
                GameState::Lost => break GameOutcome::Lost,
                GameState::InProgress => {}
            }

            let guess = match self.next_guess(&game, rng) {
                Ok(guess) => guess,
                Err(err) => {
                    debug!("{err}");
                    break GameOutcome::NoCandidates {
                        round: game.round(),
                    };
                }
            };

            let feedback = game.advance(guess, answer);
            info!("Round {}, guess: {guess}, result: {feedback}", game.round());
        };

        GameReport {
            answer: answer.clone(),
            outcome,
            turns: game.turns,
        }
    }
}
