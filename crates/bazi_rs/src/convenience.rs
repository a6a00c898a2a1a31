use bazi_base::{ElementTally, FourPillars, element_tally, four_pillars};
use bazi_numbers::{RecommendConfig, Recommendation, recommend_numbers};
use bazi_time::{BirthTime, parse_birth_time};
use tracing::info;

use crate::error::BaziError;

/// A complete reading for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// The trimmed input text, which also seeded the recommender.
    pub input: String,
    pub birth: BirthTime,
    pub pillars: FourPillars,
    pub tally: ElementTally,
    pub recommendations: Vec<Recommendation>,
}

/// Parse `raw`, compute its chart and draw number suggestions.
///
/// Leading and trailing whitespace is dropped before both parsing and
/// seeding, so `" 1990-05-17 08:30\n"` reads the same as the bare text.
pub fn read(raw: &str, config: &RecommendConfig) -> Result<Reading, BaziError> {
    let input = raw.trim();
    let birth = parse_birth_time(input)?;
    let pillars = four_pillars(&birth);
    let tally = element_tally(&pillars);
    let recommendations = recommend_numbers(input, &tally, config);
    info!(%birth, sets = recommendations.len(), "reading complete");
    Ok(Reading {
        input: input.to_string(),
        birth,
        pillars,
        tally,
        recommendations,
    })
}
