// src/core/cipher.rs
use crate::core::types::Shift;
use tracing::trace;

/// A Caesar cipher over the ASCII alphabets.
///
/// Lowercase and uppercase letters rotate within their own alphabet.
/// Digits, punctuation, whitespace and every non-ASCII character pass
/// through untouched, including accented letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaesarCipher {
    shift: Shift,
}

impl CaesarCipher {
    pub fn new(shift: i64) -> Self {
        Self { shift: Shift::new(shift) }
    }

    pub fn shift(&self) -> Shift {
        self.shift
    }

    pub fn encode(&self, text: &str) -> String {
        trace!(offset = self.shift.offset(), len = text.len(), "encoding");
        rotate_str(text, self.shift)
    }

    pub fn decode(&self, text: &str) -> String {
        trace!(offset = self.shift.offset(), len = text.len(), "decoding");
        rotate_str(text, self.shift.inverse())
    }

    pub fn rotate_char(&self, c: char) -> char {
        rotate(c, self.shift)
    }
}

/// Shifts every ASCII letter of `text` by `shift` places.
pub fn shift_text(text: &str, shift: i64) -> String {
    CaesarCipher::new(shift).encode(text)
}

/// Undoes [`shift_text`] with the same `shift`.
pub fn unshift_text(text: &str, shift: i64) -> String {
    CaesarCipher::new(shift).decode(text)
}

fn rotate_str(text: &str, shift: Shift) -> String {
    if shift.is_identity() {
        return text.to_string();
    }
    text.chars().map(|c| rotate(c, shift)).collect()
}

fn rotate(c: char, shift: Shift) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    // Both operands are below 26, so the sum fits in u8.
    let pos = (c as u8 - base + shift.offset()) % 26;
    (base + pos) as char
}
