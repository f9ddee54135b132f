//! Core domain types for Periodle.
//!
//! This crate contains pure domain types with no IO, no randomness, and
//! minimal dependencies: element records, the ordered catalog they live in,
//! and the text normalization used to look guesses up.

mod catalog;
mod element;
mod normalize;
mod sanitize;

pub use catalog::Catalog;
pub use element::{AtomicNumber, Block, ElementRecord, InvalidAtomicNumber, ParseBlockError};
pub use normalize::{normalize_guess, title_case};
pub use sanitize::sanitize_display_text;
