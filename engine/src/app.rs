//! Presentation-facing game controller.
//!
//! `App` owns the catalog, the guess engine, and everything a view needs to
//! draw a frame: the draft guess, the round transcript, the hint line, and an
//! optional modal notice. It has no terminal dependency; the TUI crate maps
//! key presses onto the methods here.

use periodle_types::{Catalog, ElementRecord};

use crate::catalog;
use crate::commands::{Command, CommandKind, command_specs};
use crate::config::{AppConfig, PeriodleConfig};
use crate::error::GameError;
use crate::game::{Clue, GuessEngine, MAX_ATTEMPTS, Outcome, Phase, Verdict, resolve_guess};
use crate::hint::Hint;
use crate::transcript::TranscriptEntry;

/// Longest accepted draft. The longest element name is 13 characters.
pub const MAX_DRAFT_CHARS: usize = 32;

const NOT_FOUND_MESSAGE: &str = "Element not found in database!\nCheck spelling.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
}

impl From<AppConfig> for UiOptions {
    fn from(config: AppConfig) -> Self {
        Self {
            ascii_only: config.ascii_only,
            high_contrast: config.high_contrast,
        }
    }
}

/// Semantic color of a piece of text. The view picks the actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Muted,
    Accent,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintLine {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Victory,
    GameOver,
    Error,
}

/// A modal message shown until the player dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    fn error(body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            body: body.into(),
        }
    }
}

/// Renderable snapshot of the round.
#[derive(Debug, Clone, PartialEq)]
pub struct GameStatus {
    pub attempts: u8,
    pub max_attempts: u8,
    pub last_guess_feedback: Vec<Clue>,
    pub current_hint: Hint,
    pub game_over: bool,
    pub won: bool,
}

#[derive(Debug)]
pub struct App {
    catalog: Catalog,
    engine: GuessEngine,
    draft: String,
    transcript: Vec<TranscriptEntry>,
    last_verdict: Option<Verdict>,
    notice: Option<Notice>,
    ui_options: UiOptions,
    should_quit: bool,
}

impl App {
    /// Build from user config: load the catalog, seed the engine, start a
    /// round.
    pub fn new(config: Option<&PeriodleConfig>) -> Result<Self, GameError> {
        let catalog = catalog::load(config.and_then(|c| c.catalog.as_ref()));
        let engine = match config.and_then(PeriodleConfig::seed) {
            Some(seed) => {
                tracing::info!(seed, "Using fixed target seed");
                GuessEngine::seeded(seed)
            }
            None => GuessEngine::new(),
        };
        let ui_options = config
            .map(PeriodleConfig::app)
            .unwrap_or_default()
            .into();
        Self::with_parts(catalog, engine, ui_options)
    }

    /// Build from explicit parts and start a round. Fails on an empty
    /// catalog.
    pub fn with_parts(
        catalog: Catalog,
        engine: GuessEngine,
        ui_options: UiOptions,
    ) -> Result<Self, GameError> {
        let mut app = Self {
            catalog,
            engine,
            draft: String::new(),
            transcript: Vec::new(),
            last_verdict: None,
            notice: None,
            ui_options,
            should_quit: false,
        };
        app.start_new_game()?;
        Ok(app)
    }

    // ------------------------------------------------------------------
    // Round lifecycle
    // ------------------------------------------------------------------

    /// Replace the current round with a fresh one against a random target.
    pub fn start_new_game(&mut self) -> Result<(), GameError> {
        self.engine.start_game(&self.catalog)?;
        self.reset_round_view();
        Ok(())
    }

    /// Replace the current round with one against `target`.
    pub fn start_new_game_with(&mut self, target: ElementRecord) {
        self.engine.start_game_with(target);
        self.reset_round_view();
    }

    fn reset_round_view(&mut self) {
        self.draft.clear();
        self.last_verdict = None;
        self.notice = None;
        self.transcript.clear();
        if let Some((low, high)) = self.catalog.atomic_range() {
            self.transcript.push(TranscriptEntry::Banner {
                low: low.value(),
                high: high.value(),
            });
        }
        self.transcript.push(TranscriptEntry::Divider);
        tracing::info!(elements = self.catalog.len(), "New round started");
    }

    /// Resolve `raw` against the catalog and evaluate it.
    ///
    /// A finished round swallows the guess without a notice. An unknown name
    /// raises an error notice and costs no attempt.
    pub fn guess(&mut self, raw: &str) -> Result<Verdict, GameError> {
        if self.engine.is_over() {
            tracing::debug!("Guess ignored, round is over");
            return Err(GameError::GameAlreadyOver);
        }

        let record = match resolve_guess(&self.catalog, raw) {
            Ok(record) => record,
            Err(err) => {
                tracing::debug!(%err, "Guess not resolved");
                self.notice = Some(Notice::error(NOT_FOUND_MESSAGE));
                return Err(err);
            }
        };

        let verdict = self.engine.evaluate_guess(record)?;
        self.transcript.push(TranscriptEntry::Guess {
            attempt: verdict.attempts(),
            symbol: record.symbol.clone(),
            name: record.name.clone(),
            result: verdict.summary(),
            hit: verdict.outcome() == Outcome::Win,
        });

        if let Some(round) = self.engine.round() {
            let target = round.target();
            self.notice = match verdict.outcome() {
                Outcome::Win => Some(Notice {
                    kind: NoticeKind::Victory,
                    title: "Victory".to_string(),
                    body: format!(
                        "Congratulations! You found {} in {} attempts.",
                        target.name,
                        verdict.attempts()
                    ),
                }),
                Outcome::Lose => Some(Notice {
                    kind: NoticeKind::GameOver,
                    title: "Game Over".to_string(),
                    body: format!(
                        "Out of attempts! The element was {} ({}).",
                        target.name, target.symbol
                    ),
                }),
                Outcome::Continue => None,
            };
        }

        self.last_verdict = Some(verdict.clone());
        Ok(verdict)
    }

    // ------------------------------------------------------------------
    // Draft editing
    // ------------------------------------------------------------------

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn insert_char(&mut self, c: char) {
        if c.is_control() || self.draft.chars().count() >= MAX_DRAFT_CHARS {
            return;
        }
        self.draft.push(c);
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    /// Submit the draft: run it as a command if it starts with `/`, otherwise
    /// as a guess. Blank drafts do nothing.
    pub fn submit(&mut self) {
        let text = std::mem::take(&mut self.draft);
        if text.trim().is_empty() {
            return;
        }

        match Command::parse(&text) {
            Some(Command::Known(kind)) => self.run_command(kind),
            Some(Command::Unknown(name)) => {
                self.notice = Some(Notice::error(format!(
                    "Unknown command: {name}\nType /help for a list."
                )));
            }
            None => {
                if let Err(err) = self.guess(&text) {
                    tracing::debug!(%err, "Submitted guess rejected");
                }
            }
        }
    }

    fn run_command(&mut self, kind: CommandKind) {
        tracing::debug!(?kind, "Command");
        match kind {
            CommandKind::NewGame => {
                if let Err(err) = self.start_new_game() {
                    tracing::error!(%err, "Could not start a new round");
                    self.notice = Some(Notice::error(err.to_string()));
                }
            }
            CommandKind::Help => {
                self.transcript
                    .push(TranscriptEntry::Note("Commands:".to_string()));
                for spec in command_specs() {
                    self.transcript.push(TranscriptEntry::Note(format!(
                        "  {:<14}{}",
                        spec.label, spec.description
                    )));
                }
            }
            CommandKind::Quit => self.request_quit(),
        }
    }

    // ------------------------------------------------------------------
    // View state
    // ------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn engine(&self) -> &GuessEngine {
        &self.engine
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn accepts_guesses(&self) -> bool {
        self.engine.phase() == Phase::InProgress
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn last_verdict(&self) -> Option<&Verdict> {
        self.last_verdict.as_ref()
    }

    pub fn status(&self) -> GameStatus {
        let round = self.engine.round();
        GameStatus {
            attempts: round.map_or(0, |r| r.attempts()),
            max_attempts: MAX_ATTEMPTS,
            last_guess_feedback: self
                .last_verdict
                .as_ref()
                .map(|v| v.feedback().to_vec())
                .unwrap_or_default(),
            current_hint: self.engine.get_hint(),
            game_over: round.is_some_and(|r| r.is_over()),
            won: round.is_some_and(|r| r.won()),
        }
    }

    pub fn attempts_label(&self) -> String {
        let status = self.status();
        format!("Attempts: {}/{}", status.attempts, status.max_attempts)
    }

    pub fn hint_line(&self) -> HintLine {
        let Some(round) = self.engine.round() else {
            return HintLine {
                text: Hint::Locked.to_string(),
                tone: Tone::Muted,
            };
        };

        match self.engine.phase() {
            Phase::Won => HintLine {
                text: format!("SUCCESS! Target was {}.", round.target().name),
                tone: Tone::Success,
            },
            Phase::Lost => HintLine {
                text: format!("FAILURE. Target was {}.", round.target().name),
                tone: Tone::Error,
            },
            _ if round.attempts() == 0 => HintLine {
                text: "System Ready. Enter your first guess.".to_string(),
                tone: Tone::Muted,
            },
            _ => HintLine {
                text: round.hint().to_string(),
                tone: Tone::Accent,
            },
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
