//! Convenience wrapper over the BaZi pipeline.
//!
//! Runs parser, pillar calculator, element tally and recommender in one
//! call, so callers only handle raw text and a [`Reading`].
//!
//! # Quick start
//!
//! ```rust
//! use bazi_rs::*;
//!
//! let reading = read("1990-05-17 08:30", &RecommendConfig::default()).unwrap();
//! assert_eq!(reading.pillars.year.to_string(), "庚午");
//! assert_eq!(reading.tally.total(), 8);
//! assert_eq!(reading.recommendations.len(), 5);
//! ```

pub mod convenience;
pub mod error;

pub use convenience::{Reading, read};
pub use error::BaziError;

// Re-export the types a reading is built from, so callers need only `bazi_rs`.
pub use bazi_base::{ALL_ELEMENTS, Branch, Element, ElementTally, FourPillars, Pillar, Stem};
pub use bazi_numbers::{GENERATOR, RecommendConfig, Recommendation};
pub use bazi_time::{BirthTime, TimeError};
