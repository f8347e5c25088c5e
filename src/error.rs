use std::fmt;

use MaskError::*;

pub type Result<T> = std::result::Result<T, MaskError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    InvalidSquare(i64),
    ParseError(String),
    UnknownGroup(String),
    LoggingError(String),
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSquare(value) => write!(f, "Square {} is outside the range 0..=63", value),
            ParseError(msg) => write!(f, "{}", msg),
            UnknownGroup(name) => write!(f, "No square group named '{}'", name),
            LoggingError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MaskError {}

impl From<log::SetLoggerError> for MaskError {
    fn from(e: log::SetLoggerError) -> Self {
        MaskError::LoggingError(format!("Could not install logger: {}", e))
    }
}

#[test]
fn test_invalid_square_message() {
    assert_eq!(
        InvalidSquare(64).to_string(),
        "Square 64 is outside the range 0..=63"
    );
    assert_eq!(
        UnknownGroup(String::from("rank9")).to_string(),
        "No square group named 'rank9'"
    );
}
