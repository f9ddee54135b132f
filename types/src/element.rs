use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Atomic number (proton count). The unique key of an element and the total
/// order guesses are compared by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AtomicNumber(pub(crate) u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("atomic number must be between 1 and {max}, got {value}", max = AtomicNumber::MAX.0)]
pub struct InvalidAtomicNumber {
    pub value: u8,
}

impl AtomicNumber {
    pub const MIN: Self = Self(1);
    /// Oganesson. Nothing heavier has been observed.
    pub const MAX: Self = Self(118);

    pub fn new(value: u8) -> Result<Self, InvalidAtomicNumber> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidAtomicNumber { value })
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for AtomicNumber {
    type Error = InvalidAtomicNumber;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AtomicNumber> for u8 {
    fn from(value: AtomicNumber) -> Self {
        value.0
    }
}

impl fmt::Display for AtomicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Electron-shell block of the periodic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    S,
    P,
    D,
    F,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown block {0:?}, expected one of s, p, d, f")]
pub struct ParseBlockError(pub String);

impl Block {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Block::S => "s",
            Block::P => "p",
            Block::D => "d",
            Block::F => "f",
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Block {
    type Err = ParseBlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" => Ok(Block::S),
            "p" => Ok(Block::P),
            "d" => Ok(Block::D),
            "f" => Ok(Block::F),
            other => Err(ParseBlockError(other.to_string())),
        }
    }
}

/// One row of the element catalog.
///
/// Records are immutable once loaded; the catalog owns them and hands out
/// shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub atomic_number: AtomicNumber,
    pub name: String,
    pub symbol: String,
    /// IUPAC group 1-18. Absent for the lanthanide and actinide series.
    #[serde(default)]
    pub group_id: Option<u8>,
    pub period: u8,
    pub block: Block,
    pub series: String,
    /// Whitespace-delimited shells, e.g. `[He] 2s2 2p2`.
    #[serde(default)]
    pub econf: Option<String>,
    pub mass: f64,
}

impl ElementRecord {
    /// Exact match against either the name or the symbol.
    #[must_use]
    pub fn answers_to(&self, key: &str) -> bool {
        self.name == key || self.symbol == key
    }

    /// Last whitespace-delimited token of the electron configuration.
    ///
    /// This is a loose heuristic over free text: it assumes the outermost
    /// subshell is written last, which holds for the usual `[core] ... ns np`
    /// notation but not for every exotic configuration.
    #[must_use]
    pub fn last_orbital(&self) -> Option<&str> {
        self.econf.as_deref()?.split_whitespace().next_back()
    }

    /// Both records carry the same group id. Two elements without a group
    /// count as sharing one.
    #[must_use]
    pub fn shares_group_with(&self, other: &ElementRecord) -> bool {
        self.group_id == other.group_id
    }

    #[must_use]
    pub fn shares_period_with(&self, other: &ElementRecord) -> bool {
        self.period == other.period
    }
}
