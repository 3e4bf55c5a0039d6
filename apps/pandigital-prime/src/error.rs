use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// Digit counts above `max` cannot be written with distinct single digits 1..n.
    #[error("Unsupported digit count: {digits} (must be at most {max})")]
    UnsupportedDigitCount { digits: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, SearchError>;
