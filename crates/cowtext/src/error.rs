// Crate error type
// Out-of-range indexes and positions are clamped or ignored by the container
// APIs and never reach this enum; only I/O and pattern compilation can fail.

use std::fmt;

#[derive(Debug)]
pub enum TextError {
    /// Line-oriented load/save failure.
    Io(std::io::Error),
    /// Unknown single-character flag in a pattern option string.
    BadOption(char),
    /// Hex pattern with a malformed byte pair (expected e.g. "56 6C 61").
    BadHexPattern,
    /// Regex engine rejected the pattern.
    Regex(regex::Error),
    /// Match requested before a pattern was compiled.
    NoPattern,
}

pub type TextResult<T> = Result<T, TextError>;

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::Io(e) => write!(f, "io error: {}", e),
            TextError::BadOption(c) => {
                write!(f, "invalid option '{}', expected are: imsxfhr", c)
            }
            TextError::BadHexPattern => write!(f, "malformed hex pattern"),
            TextError::Regex(e) => write!(f, "regex error: {}", e),
            TextError::NoPattern => write!(f, "no pattern compiled"),
        }
    }
}

impl std::error::Error for TextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextError::Io(e) => Some(e),
            TextError::Regex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TextError {
    fn from(e: std::io::Error) -> Self {
        TextError::Io(e)
    }
}

impl From<regex::Error> for TextError {
    fn from(e: regex::Error) -> Self {
        TextError::Regex(e)
    }
}
