//! JSMin-style JavaScript minifier.
//!
//! Stages, in data-flow order:
//! 1. Cursor: raw characters, control characters normalized
//! 2. Comments: `//` and `/* */` removed
//! 3. Classifier: word vs. punctuation characters
//! 4. Engine: two-register lookahead that keeps, drops or collapses whitespace
//!    and copies string/regex literals verbatim

pub mod classify;
pub mod comments;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod stats;

pub use classify::is_word_char;
pub use error::{MinifyError, Result};
pub use stats::{Minifier, MinifyStats};

/// Remove comments and insignificant whitespace from `source`.
///
/// Fails without partial output if a block comment, string literal or
/// regular expression literal is left open.
pub fn compress(source: &str) -> Result<String> {
    engine::Engine::new(source).run()
}
