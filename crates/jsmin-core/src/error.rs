use thiserror::Error;

/// Malformed-input conditions detected while minifying.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinifyError {
    #[error("Unterminated comment")]
    UnterminatedComment,
    #[error("Unterminated string literal")]
    UnterminatedStringLiteral,
    #[error("Unterminated regular expression literal")]
    UnterminatedRegExpLiteral,
}

impl MinifyError {
    /// Stable identifier used in API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnterminatedComment => "unterminated_comment",
            Self::UnterminatedStringLiteral => "unterminated_string_literal",
            Self::UnterminatedRegExpLiteral => "unterminated_regexp_literal",
        }
    }
}

pub type Result<T> = std::result::Result<T, MinifyError>;
