//! The guess engine: round state, guess evaluation, and target selection.
//!
//! # State machine
//!
//! ```text
//! NotStarted --start_game--> InProgress --win--> Won
//!                                |
//!                                +--sixth miss--> Lost
//! ```
//!
//! `start_game` from any phase replaces the round wholesale. `Won` and `Lost`
//! accept no further guesses.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use periodle_types::{AtomicNumber, Catalog, ElementRecord};

use crate::error::GameError;
use crate::hint::Hint;

/// Guesses allowed per round.
pub const MAX_ATTEMPTS: u8 = 6;

/// One piece of comparative feedback about a wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clue {
    /// The target's atomic number is above `guessed`.
    GoHigher { guessed: AtomicNumber },
    /// The target's atomic number is below `guessed`.
    GoLower { guessed: AtomicNumber },
    CorrectGroup,
    CorrectPeriod,
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clue::GoHigher { guessed } => write!(f, "Go HIGHER (Target > {guessed})"),
            Clue::GoLower { guessed } => write!(f, "Go LOWER (Target < {guessed})"),
            Clue::CorrectGroup => f.write_str("MATCH: Correct Group"),
            Clue::CorrectPeriod => f.write_str("MATCH: Correct Period"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Continue,
    Lose,
}

/// Result of evaluating one guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    outcome: Outcome,
    feedback: Vec<Clue>,
    attempts: u8,
}

impl Verdict {
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Clues in emission order. The direction clue is always first; empty on
    /// a win.
    pub fn feedback(&self) -> &[Clue] {
        &self.feedback
    }

    /// Attempts used, including this one.
    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    /// One-line rendering: `CORRECT MATCH!` or the clues joined by ` | `.
    pub fn summary(&self) -> String {
        if self.outcome == Outcome::Win {
            return "CORRECT MATCH!".to_string();
        }
        self.feedback
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

/// State of one round. Created by `start_game`, replaced by the next one.
#[derive(Debug, Clone)]
pub struct GameState {
    target: ElementRecord,
    attempts: u8,
    status: RoundStatus,
}

impl GameState {
    fn new(target: ElementRecord) -> Self {
        Self {
            target,
            attempts: 0,
            status: RoundStatus::InProgress,
        }
    }

    pub fn target(&self) -> &ElementRecord {
        &self.target
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u8 {
        MAX_ATTEMPTS
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::InProgress
    }

    pub fn won(&self) -> bool {
        self.status == RoundStatus::Won
    }

    pub fn hint(&self) -> Hint {
        Hint::for_attempt(self.attempts, &self.target)
    }

    fn evaluate(&mut self, guess: &ElementRecord) -> Result<Verdict, GameError> {
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        self.attempts += 1;

        let target = &self.target;
        if guess.atomic_number == target.atomic_number {
            self.status = RoundStatus::Won;
            return Ok(Verdict {
                outcome: Outcome::Win,
                feedback: Vec::new(),
                attempts: self.attempts,
            });
        }

        let mut feedback = Vec::with_capacity(3);
        feedback.push(if guess.atomic_number < target.atomic_number {
            Clue::GoHigher {
                guessed: guess.atomic_number,
            }
        } else {
            Clue::GoLower {
                guessed: guess.atomic_number,
            }
        });
        if guess.shares_group_with(target) {
            feedback.push(Clue::CorrectGroup);
        }
        if guess.shares_period_with(target) {
            feedback.push(Clue::CorrectPeriod);
        }

        let outcome = if self.attempts >= MAX_ATTEMPTS {
            self.status = RoundStatus::Lost;
            Outcome::Lose
        } else {
            Outcome::Continue
        };

        Ok(Verdict {
            outcome,
            feedback,
            attempts: self.attempts,
        })
    }
}

/// Resolve free-form player text to a catalog record.
///
/// The text is trimmed and title-cased, then matched exactly against every
/// name and symbol; the first match in catalog order wins.
pub fn resolve_guess<'c>(catalog: &'c Catalog, raw: &str) -> Result<&'c ElementRecord, GameError> {
    catalog.lookup(raw).ok_or_else(|| GameError::NotFound {
        input: raw.trim().to_string(),
    })
}

/// Owns the live round and the randomness used to pick targets.
#[derive(Debug)]
pub struct GuessEngine {
    rng: StdRng,
    round: Option<GameState>,
}

impl Default for GuessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessEngine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Reproducible target selection.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self { rng, round: None }
    }

    /// Begin a round against a target drawn uniformly from `catalog`.
    ///
    /// On an empty catalog the current round, if any, is left untouched.
    pub fn start_game(&mut self, catalog: &Catalog) -> Result<&GameState, GameError> {
        let target = catalog
            .list_all()
            .choose(&mut self.rng)
            .ok_or(GameError::EmptyCatalog)?
            .clone();
        Ok(self.start_game_with(target))
    }

    /// Begin a round against a caller-chosen target.
    pub fn start_game_with(&mut self, target: ElementRecord) -> &GameState {
        tracing::debug!(element = %target.name, "Target locked");
        self.round.insert(GameState::new(target))
    }

    pub fn evaluate_guess(&mut self, guess: &ElementRecord) -> Result<Verdict, GameError> {
        let round = self.round.as_mut().ok_or(GameError::NotStarted)?;
        let verdict = round.evaluate(guess)?;
        tracing::debug!(
            guess = %guess.symbol,
            attempts = verdict.attempts,
            outcome = ?verdict.outcome,
            "Guess evaluated"
        );
        Ok(verdict)
    }

    /// Hint for the current attempt count. Locked until a round exists.
    pub fn get_hint(&self) -> Hint {
        self.round.as_ref().map_or(Hint::Locked, GameState::hint)
    }

    pub fn round(&self) -> Option<&GameState> {
        self.round.as_ref()
    }

    pub fn phase(&self) -> Phase {
        match self.round.as_ref().map(GameState::status) {
            None => Phase::NotStarted,
            Some(RoundStatus::InProgress) => Phase::InProgress,
            Some(RoundStatus::Won) => Phase::Won,
            Some(RoundStatus::Lost) => Phase::Lost,
        }
    }

    pub fn is_over(&self) -> bool {
        self.round.as_ref().is_some_and(GameState::is_over)
    }
}
