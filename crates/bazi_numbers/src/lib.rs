//! Lucky-number suggestions from an element tally.
//!
//! The two weakest elements of a chart select a digit pool; a generator
//! seeded from the SHA-256 of the raw input text draws fixed-length
//! digit strings from it. Identical input text always yields identical
//! suggestions.

pub mod recommend;

pub use recommend::{
    GENERATOR, RecommendConfig, Recommendation, digit_pool, recommend_numbers, seeded_rng,
    weak_elements,
};
