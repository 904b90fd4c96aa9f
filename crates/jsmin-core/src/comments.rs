//! Comment skipping on top of the cursor.

use crate::cursor::Cursor;
use crate::error::{MinifyError, Result};

/// Next character with `//` and `/* */` comments removed.
///
/// A line comment yields its terminator (newline or end of input); a block
/// comment collapses into a single space.
pub fn next_significant(cursor: &mut Cursor<'_>) -> Result<Option<char>> {
    let c = cursor.read_next();
    if c != Some('/') {
        return Ok(c);
    }

    match cursor.peek_next() {
        Some('/') => loop {
            let c = cursor.read_next();
            if is_line_end(c) {
                return Ok(c);
            }
        },
        Some('*') => {
            cursor.read_next();
            loop {
                match cursor.read_next() {
                    Some('*') => {
                        if cursor.peek_next() == Some('/') {
                            cursor.read_next();
                            return Ok(Some(' '));
                        }
                    }
                    None => return Err(MinifyError::UnterminatedComment),
                    Some(_) => {}
                }
            }
        }
        _ => Ok(c),
    }
}

/// Newline or end of input. Normalized input holds no other code point below `'\n'`.
fn is_line_end(c: Option<char>) -> bool {
    matches!(c, None | Some('\n'))
}
