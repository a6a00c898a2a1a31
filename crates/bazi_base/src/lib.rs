//! Symbol tables and pillar arithmetic for the Eight Characters (BaZi).
//!
//! This crate provides:
//! - The ten heavenly stems and twelve earthly branches, each tied to one
//!   of the five elements
//! - Year, month, day and hour pillars from a naive birth time
//! - The element tally over the eight symbols of a chart
//!
//! The calendar model is deliberately simple: a fixed 1984-02-02 epoch,
//! Gregorian year and month numbers, no solar-term boundaries.

pub mod branch;
pub mod element;
pub mod pillar;
pub mod stem;
pub mod tally;

pub use branch::{ALL_BRANCHES, Branch, HOUR_WINDOWS, HourWindow};
pub use element::{ALL_DIGITS, ALL_ELEMENTS, Element};
pub use pillar::{
    EPOCH_DATE, EPOCH_DAY, EPOCH_MONTH, EPOCH_YEAR, FourPillars, Pillar, day_pillar,
    days_from_epoch, four_pillars, hour_pillar, month_pillar, year_pillar,
};
pub use stem::{ALL_STEMS, Stem};
pub use tally::{ElementTally, element_tally};
