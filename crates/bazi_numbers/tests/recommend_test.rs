//! Reproducibility and sensitivity of number suggestions.

use bazi_base::{Element, ElementTally, element_tally, four_pillars};
use bazi_numbers::{RecommendConfig, recommend_numbers, weak_elements};
use bazi_time::parse_birth_time;

fn tally_for(input: &str) -> ElementTally {
    element_tally(&four_pillars(&parse_birth_time(input).unwrap()))
}

fn numbers(seed: &str, tally: &ElementTally) -> Vec<String> {
    recommend_numbers(seed, tally, &RecommendConfig::default())
        .into_iter()
        .map(|r| r.number)
        .collect()
}

#[test]
fn identical_input_identical_output() {
    let input = "1990-05-17 08:30";
    let tally = tally_for(input);
    let a = recommend_numbers(input, &tally, &RecommendConfig::default());
    let b = recommend_numbers(input, &tally, &RecommendConfig::default());
    assert_eq!(a, b);
    assert_eq!(a.len(), 5);
}

#[test]
fn one_character_change_changes_output() {
    let tally = tally_for("1990-05-17 08:30");
    let base = numbers("1990-05-17 08:30", &tally);
    for variant in ["1990-05-17 08:31", "1990/05/17 08:30", "1991-05-17 08:30"] {
        assert_ne!(base, numbers(variant, &tally), "{variant}");
    }
}

#[test]
fn seed_is_raw_text_not_timestamp() {
    // Both separators parse to the same chart but seed differently.
    let hyphen = "1984-02-02 00:30";
    let slash = "1984/02/02 00:30";
    let tally = tally_for(hyphen);
    assert_eq!(tally, tally_for(slash));
    assert_ne!(numbers(hyphen, &tally), numbers(slash, &tally));
}

#[test]
fn epoch_chart_draws_from_earth_and_metal() {
    let input = "1984-02-02 00:30";
    let tally = tally_for(input);
    assert_eq!(weak_elements(&tally), [Element::Earth, Element::Metal]);
    for r in recommend_numbers(input, &tally, &RecommendConfig::default()) {
        assert_eq!(r.pool, vec![2, 5, 8, 6, 7]);
        assert_eq!(r.explanation(), "偏弱元素: 土、金 | 使用对应数字: 2, 5, 6, 7, 8");
        assert!(r.number.chars().all(|c| "25678".contains(c)), "{}", r.number);
    }
}

#[test]
fn weak_pair_for_golden_charts() {
    assert_eq!(
        weak_elements(&tally_for("1990-05-17 08:30")),
        [Element::Wood, Element::Water]
    );
    assert_eq!(
        weak_elements(&tally_for("2000-01-01 12:00")),
        [Element::Water, Element::Wood]
    );
    assert_eq!(
        weak_elements(&tally_for("1900-03-01 05:59")),
        [Element::Fire, Element::Earth]
    );
}

#[test]
fn longer_run_extends_shorter_run() {
    // Draws are consumed strictly in order, so the first five of ten match.
    let input = "2024-12-31 23:15";
    let tally = tally_for(input);
    let five = numbers(input, &tally);
    let ten: Vec<String> = recommend_numbers(input, &tally, &RecommendConfig::new(10, 4))
        .into_iter()
        .map(|r| r.number)
        .collect();
    assert_eq!(ten[..5], five[..]);
}
