//! Guess text normalization.
//!
//! Catalog names are title-cased ("Oxygen") and symbols are a capital letter
//! followed by lower-case letters ("Au"), so title-casing whatever the player
//! typed maps both forms, in any case, onto the stored spelling.

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
///
/// Any non-alphabetic character ends a run, so `"iron-56"` becomes
/// `"Iron-56"` and `"o'neil"` becomes `"O'Neil"`.
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

/// Trim surrounding whitespace and title-case the remainder.
#[must_use]
pub fn normalize_guess(raw: &str) -> String {
    title_case(raw.trim())
}
