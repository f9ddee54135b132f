//! Hint escalation.
//!
//! Hints reveal one fact about the target per attempt used. They depend only
//! on the attempt count and the target, never on what was guessed.

use std::fmt;

use periodle_types::{Block, ElementRecord};

const UNKNOWN_ORBITAL: &str = "Unknown";

#[derive(Debug, Clone, PartialEq)]
pub enum Hint {
    /// No attempts yet.
    Locked,
    Block(Block),
    Series(String),
    /// Last token of the electron configuration, or `Unknown`.
    LastOrbital(String),
    Mass(f64),
    /// Out of facts to reveal.
    AtomicNumber,
}

impl Hint {
    /// The hint for `attempts` attempts used against `target`.
    #[must_use]
    pub fn for_attempt(attempts: u8, target: &ElementRecord) -> Self {
        match attempts {
            0 => Hint::Locked,
            1 => Hint::Block(target.block),
            2 => Hint::Series(target.series.clone()),
            3 => Hint::LastOrbital(
                target
                    .last_orbital()
                    .unwrap_or(UNKNOWN_ORBITAL)
                    .to_string(),
            ),
            4 => Hint::Mass(target.mass),
            _ => Hint::AtomicNumber,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Locked => f.write_str("Guess to unlock hints."),
            Hint::Block(block) => write!(f, "Hint: This element belongs to the {block}-block."),
            Hint::Series(series) => write!(f, "Hint: It is a {series}."),
            Hint::LastOrbital(orbital) => write!(f, "Hint: Electron config ends in {orbital}."),
            Hint::Mass(mass) => write!(f, "Hint: Approx Atomic Mass is {mass:.1}."),
            Hint::AtomicNumber => f.write_str("Hint: Think about the Atomic Number!"),
        }
    }
}
