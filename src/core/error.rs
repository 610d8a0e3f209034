use crate::core::constants::MESSAGE_INVALID_INDEX;
use std::io;
use thiserror::Error;

/// Failure of a command parser. Every variant renders as the message shown to
/// the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: &'static str },

    #[error("{}", MESSAGE_INVALID_INDEX)]
    InvalidIndex,
}

impl ParseError {
    pub fn invalid_format(usage: &'static str) -> Self {
        Self::InvalidFormat { usage }
    }
}

#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Config(String),
    Parse(ParseError),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::Parse(err)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "IO Error: {}", err),
            AppError::Config(msg) => write!(f, "Config Error: {}", msg),
            // Parse errors are user-facing and already carry their own wording
            AppError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            AppError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_embeds_usage() {
        let err = ParseError::invalid_format("clear: usage line");
        assert_eq!(err.to_string(), "Invalid command format! \nclear: usage line");
    }

    #[test]
    fn parse_error_passes_through_app_error_unchanged() {
        let err: AppError = ParseError::InvalidIndex.into();
        assert_eq!(err.to_string(), MESSAGE_INVALID_INDEX);
    }
}
