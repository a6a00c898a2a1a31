//! Error types for birth time parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::birth_time::EXPECTED_PATTERN;

/// Errors from turning raw text into a [`BirthTime`](crate::BirthTime).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Input matched none of the accepted date/time patterns, or named a
    /// calendar value that does not exist (month 13, Feb 30, hour 25).
    InvalidFormat {
        /// The trimmed input that was rejected.
        input: String,
    },
}

impl TimeError {
    /// User-facing hint describing the accepted input pattern.
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => EXPECTED_PATTERN,
        }
    }
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat { input } => {
                write!(f, "invalid format {input:?}: 请输入格式: {}", self.hint())
            }
        }
    }
}

impl Error for TimeError {}
