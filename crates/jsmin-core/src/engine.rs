//! Two-register lookahead machine and the compression driver.

use crate::classify::{is_word, is_word_char};
use crate::comments::next_significant;
use crate::cursor::Cursor;
use crate::error::{MinifyError, Result};

/// What the driver does with the registers on one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Output A, then advance.
    EmitAndAdvance,
    /// Drop A: copy B into A (a string literal counts as one unit), then refill.
    AdvanceOnly,
    /// Drop B and read the next significant unit into it.
    RefillLookahead,
}

/// Minifier state for a single source text.
pub struct Engine<'s> {
    cursor: Cursor<'s>,
    out: String,
    a: Option<char>,
    b: Option<char>,
    // A still holds the synthetic newline the driver starts from.
    priming: bool,
}

impl<'s> Engine<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            cursor: Cursor::new(source),
            out: String::with_capacity(source.len()),
            a: Some('\n'),
            b: None,
            priming: true,
        }
    }

    /// Run the driver to completion and hand back the output.
    pub fn run(mut self) -> Result<String> {
        self.action(Action::RefillLookahead)?;
        while let Some(a) = self.a {
            let step = self.decide(a, self.b);
            self.action(step)?;
        }
        Ok(self.out)
    }

    /// Output written so far.
    pub fn output(&self) -> &str {
        &self.out
    }

    fn decide(&self, a: char, b: Option<char>) -> Action {
        match a {
            ' ' => {
                if is_word(b) {
                    Action::EmitAndAdvance
                } else {
                    Action::AdvanceOnly
                }
            }
            '\n' => match b {
                Some('{' | '[' | '(' | '+' | '-') => Action::EmitAndAdvance,
                Some(' ') => Action::RefillLookahead,
                _ if is_word(b) => Action::EmitAndAdvance,
                _ => Action::AdvanceOnly,
            },
            _ => match b {
                Some(' ') => {
                    if is_word_char(a) {
                        Action::EmitAndAdvance
                    } else {
                        Action::RefillLookahead
                    }
                }
                Some('\n') => match a {
                    '}' | ']' | ')' | '+' | '-' | '"' | '\'' => Action::EmitAndAdvance,
                    _ if is_word_char(a) => Action::EmitAndAdvance,
                    _ => Action::RefillLookahead,
                },
                _ => Action::EmitAndAdvance,
            },
        }
    }

    pub fn action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::EmitAndAdvance => self.emit_and_advance(),
            Action::AdvanceOnly => self.advance(),
            Action::RefillLookahead => self.refill(),
        }
    }

    fn emit_and_advance(&mut self) -> Result<()> {
        if !self.priming {
            if let Some(a) = self.a {
                self.out.push(a);
            }
        }
        self.advance()
    }

    fn advance(&mut self) -> Result<()> {
        self.a = self.b;
        self.priming = false;

        if let Some(quote @ ('\'' | '"')) = self.a {
            self.out.push(quote);
            self.a = Some(self.copy_literal(quote, MinifyError::UnterminatedStringLiteral)?);
        }

        self.refill()
    }

    fn refill(&mut self) -> Result<()> {
        self.b = next_significant(&mut self.cursor)?;

        // A slash right after `(`, `,` or `=` opens a regex literal.
        if let (Some('/'), Some(opener @ ('(' | ',' | '='))) = (self.b, self.a) {
            self.out.push(opener);
            self.out.push('/');
            self.a = Some(self.copy_literal('/', MinifyError::UnterminatedRegExpLiteral)?);
            self.b = next_significant(&mut self.cursor)?;
        }
        Ok(())
    }

    /// Copy raw characters up to the next unescaped `delimiter`.
    ///
    /// The opening delimiter has already been written. The closing one is
    /// returned, not written; it becomes register A. A backslash and the
    /// character after it are copied as-is.
    fn copy_literal(&mut self, delimiter: char, unterminated: MinifyError) -> Result<char> {
        loop {
            match self.cursor.read_next() {
                Some(c) if c == delimiter => return Ok(c),
                Some('\\') => {
                    self.out.push('\\');
                    match self.cursor.read_next() {
                        Some(escaped) => self.out.push(escaped),
                        None => return Err(unterminated),
                    }
                }
                None | Some('\n') => return Err(unterminated),
                Some(c) => self.out.push(c),
            }
        }
    }
}
