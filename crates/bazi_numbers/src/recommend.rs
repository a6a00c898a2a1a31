//! Weak-element selection and seeded digit draws.
//!
//! The draw sequence is part of the output contract: digits are drawn one
//! at a time, set by set, from a single generator. Changing the generator
//! algorithm, the seed derivation or the draw order changes every
//! suggestion, so [`GENERATOR`] names the current scheme.

use bazi_base::{ALL_DIGITS, Element, ElementTally};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use tracing::{debug, trace};

/// Seed derivation and generator: the 32-byte SHA-256 digest of the UTF-8
/// input (the 256-bit big-endian integer) seeds ChaCha8 directly.
pub const GENERATOR: &str = "sha256+chacha8";

/// How many suggestions to draw and how long each is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendConfig {
    /// Number of digit strings (default 5).
    pub sets: usize,
    /// Digits per string (default 4).
    pub digits_per_set: usize,
}

impl RecommendConfig {
    pub const fn new(sets: usize, digits_per_set: usize) -> Self {
        Self {
            sets,
            digits_per_set,
        }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self::new(5, 4)
    }
}

/// One suggested digit string and the reasoning behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub number: String,
    /// The two weakest elements, weakest first.
    pub weak_elements: [Element; 2],
    /// Digits eligible for the draw, in pool order.
    pub pool: Vec<u8>,
}

impl Recommendation {
    /// Human-readable explanation, e.g. `偏弱元素: 土、金 | 使用对应数字: 2, 5, 6, 7, 8`.
    ///
    /// Eligible digits are shown sorted and deduplicated.
    pub fn explanation(&self) -> String {
        let weak: Vec<&str> = self.weak_elements.iter().map(|e| e.name()).collect();
        let mut digits = self.pool.clone();
        digits.sort_unstable();
        digits.dedup();
        let digits: Vec<String> = digits.iter().map(u8::to_string).collect();
        format!(
            "偏弱元素: {} | 使用对应数字: {}",
            weak.join("、"),
            digits.join(", ")
        )
    }
}

/// The two lowest-count elements.
///
/// Stable ascending sort by count: on a tie the element earlier in table
/// order (wood, fire, earth, metal, water) wins.
pub fn weak_elements(tally: &ElementTally) -> [Element; 2] {
    let mut ranked: Vec<(Element, u8)> = tally.iter().collect();
    ranked.sort_by_key(|&(_, count)| count);
    [ranked[0].0, ranked[1].0]
}

/// Digits of the weak elements, concatenated in weak order.
///
/// Falls back to every digit in the table if the result would be empty.
pub fn digit_pool(weak: &[Element]) -> Vec<u8> {
    let pool: Vec<u8> = weak
        .iter()
        .flat_map(|e| e.digits().iter().copied())
        .collect();
    if pool.is_empty() {
        ALL_DIGITS.to_vec()
    } else {
        pool
    }
}

/// Generator seeded from the SHA-256 digest of `seed`.
pub fn seeded_rng(seed: &str) -> ChaCha8Rng {
    let digest = Sha256::digest(seed.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest);
    ChaCha8Rng::from_seed(bytes)
}

/// Draw `config.sets` digit strings for a chart.
///
/// `seed` should be the raw input text, not a re-rendered timestamp, so
/// that the suggestions are reproducible from what the user typed.
pub fn recommend_numbers(
    seed: &str,
    tally: &ElementTally,
    config: &RecommendConfig,
) -> Vec<Recommendation> {
    let weak = weak_elements(tally);
    let pool = digit_pool(&weak);
    debug!(
        generator = GENERATOR,
        weak = ?weak,
        pool = ?pool,
        sets = config.sets,
        "recommending numbers"
    );

    let mut rng = seeded_rng(seed);
    (0..config.sets)
        .map(|set| {
            let number: String = (0..config.digits_per_set)
                .map(|_| char::from(b'0' + pool[rng.gen_range(0..pool.len())]))
                .collect();
            trace!(set, %number, "drew number");
            Recommendation {
                number,
                weak_elements: weak,
                pool: pool.clone(),
            }
        })
        .collect()
}
