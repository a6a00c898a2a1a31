//! Birth date/time input for the BaZi pipeline.
//!
//! Parses a single line of free text into a naive local [`BirthTime`].
//! No timezone handling: the value is taken as wall-clock time at birth.

pub mod birth_time;
pub mod error;

pub use birth_time::{ACCEPTED_FORMATS, BirthTime, EXPECTED_PATTERN, parse_birth_time};
pub use error::TimeError;
