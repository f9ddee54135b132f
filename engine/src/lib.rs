//! Core engine for Periodle - guess evaluation, hints, and app state.
//!
//! This crate holds the game rules and the `App` controller without any
//! terminal dependencies. The TUI crate renders `App` and forwards input to it.

mod app;
pub mod catalog;
mod commands;
pub mod config;
mod error;
mod game;
mod hint;
mod transcript;

pub use periodle_types::{
    AtomicNumber, Block, Catalog, ElementRecord, normalize_guess, sanitize_display_text,
};

pub use app::{App, GameStatus, HintLine, MAX_DRAFT_CHARS, Notice, NoticeKind, Tone, UiOptions};
pub use catalog::CatalogError;
pub use commands::{CommandSpec, command_specs};
pub use config::{AppConfig, CatalogConfig, CatalogSource, ConfigError, GameConfig, PeriodleConfig};
pub use error::GameError;
pub use game::{
    Clue, GameState, GuessEngine, MAX_ATTEMPTS, Outcome, Phase, RoundStatus, Verdict,
    resolve_guess,
};
pub use hint::Hint;
pub use transcript::TranscriptEntry;
