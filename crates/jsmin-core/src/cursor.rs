//! Forward-only character reader with one character of lookahead.

use std::iter::Peekable;
use std::str::Chars;

/// Pull-based reader over the source text.
///
/// `None` marks end of input and is returned again on every later read.
pub struct Cursor<'s> {
    chars: Peekable<Chars<'s>>,
}

impl<'s> Cursor<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { chars: source.chars().peekable() }
    }

    /// Consume the next character.
    ///
    /// Carriage return becomes a newline, every other control character
    /// except newline becomes a space.
    pub fn read_next(&mut self) -> Option<char> {
        self.chars.next().map(normalize)
    }

    /// The next raw character, left unconsumed.
    pub fn peek_next(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }
}

fn normalize(c: char) -> char {
    match c {
        '\n' | '\r' => '\n',
        c if (c as u32) < 32 => ' ',
        c => c,
    }
}
