//! Display text sanitization.
//!
//! Catalog files can come from anywhere. Names and series strings end up in
//! terminal cells, so escape sequences and control characters are stripped
//! before rendering.

use std::borrow::Cow;
use std::iter::Peekable;

const ESC: char = '\x1b';
const BEL: char = '\x07';
/// Single-character CSI introducer from the C1 range.
const C1_CSI: char = '\u{009b}';

/// Strip ANSI escape sequences and control characters from a single-line
/// label. Line breaks and tabs become plain spaces.
///
/// Returns `Cow::Borrowed` when the input is already clean.
///
/// ```
/// use periodle_types::sanitize_display_text;
///
/// assert_eq!(sanitize_display_text("Gold"), "Gold");
/// assert_eq!(sanitize_display_text("Go\x1b[31mld"), "Gold");
/// ```
#[must_use]
pub fn sanitize_display_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(char::is_control) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESC => skip_escape_sequence(&mut chars),
            C1_CSI => skip_csi_params(&mut chars),
            '\n' | '\r' | '\t' => result.push(' '),
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    Cow::Owned(result)
}

/// Skip the sequence that follows an ESC.
fn skip_escape_sequence<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    let Some(&next) = chars.peek() else {
        return;
    };

    match next {
        // CSI: ESC [ params final-byte
        '[' => {
            chars.next();
            skip_csi_params(chars);
        }
        // OSC: ESC ] ... (BEL | ESC \)
        ']' => {
            chars.next();
            skip_osc(chars);
        }
        // DCS, PM, APC: ESC P/^/_ ... ESC \
        'P' | '^' | '_' => {
            chars.next();
            skip_until_st(chars);
        }
        // Charset and line-attribute selection take one argument.
        '(' | ')' | '*' | '+' | '#' | ' ' => {
            chars.next();
            chars.next();
        }
        '7' | '8' | 'c' | 'D' | 'E' | 'H' | 'M' | 'N' | 'O' | 'Z' | '=' | '>' | '<' => {
            chars.next();
        }
        // Not a sequence we know; only the ESC goes.
        _ => {}
    }
}

/// Parameter and intermediate bytes up to and including the final byte.
fn skip_csi_params<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    while let Some(&c) = chars.peek() {
        if ('\x40'..='\x7e').contains(&c) {
            chars.next();
            return;
        } else if ('\x20'..='\x3f').contains(&c) {
            chars.next();
        } else {
            return;
        }
    }
}

fn skip_osc<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    while let Some(c) = chars.next() {
        if c == BEL {
            return;
        }
        if c == ESC && chars.peek() == Some(&'\\') {
            chars.next();
            return;
        }
    }
}

fn skip_until_st<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    while let Some(c) = chars.next() {
        if c == ESC && chars.peek() == Some(&'\\') {
            chars.next();
            return;
        }
    }
}
