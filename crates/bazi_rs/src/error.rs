//! Unified error type for the convenience pipeline.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_time::TimeError;

/// Errors from [`read`](crate::read).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BaziError {
    /// The input line could not be parsed as a birth time.
    Time(TimeError),
}

impl Display for BaziError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
        }
    }
}

impl Error for BaziError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
        }
    }
}

impl From<TimeError> for BaziError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
