use std::fmt;

const DIVIDER_WIDTH: usize = 40;

/// One line of the round log shown under the input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    /// `TARGET LOCKED. Range: 1-118`
    Banner { low: u8, high: u8 },
    Divider,
    Guess {
        attempt: u8,
        symbol: String,
        name: String,
        /// `CORRECT MATCH!` or the joined clues.
        result: String,
        hit: bool,
    },
    Note(String),
}

impl TranscriptEntry {
    /// The `[n] Au (Gold): ` prefix of a guess line, empty for other entries.
    pub fn label(&self) -> String {
        match self {
            TranscriptEntry::Guess {
                attempt,
                symbol,
                name,
                ..
            } => format!("[{attempt}] {symbol} ({name}): "),
            _ => String::new(),
        }
    }
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptEntry::Banner { low, high } => {
                write!(f, "TARGET LOCKED. Range: {low}-{high}")
            }
            TranscriptEntry::Divider => f.write_str(&"-".repeat(DIVIDER_WIDTH)),
            TranscriptEntry::Guess { result, .. } => write!(f, "{}{result}", self.label()),
            TranscriptEntry::Note(text) => f.write_str(text),
        }
    }
}
