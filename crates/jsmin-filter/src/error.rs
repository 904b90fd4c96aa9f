use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid path spec: {0} (must be 'include' or 'exclude')")]
    InvalidPathSpec(String),
    #[error("Invalid path pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
