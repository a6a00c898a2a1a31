//! Year, month, day and hour pillars.
//!
//! Every pillar is a (stem, branch) pair derived by index arithmetic
//! against a fixed epoch: 1984-02-02 is treated as a Jia-Zi day in a
//! Jia-Zi year. Year and month use civil Gregorian numbers with no
//! solar new-year or solar-term boundaries, so charts for January and
//! early February births differ from an almanac. That simplification is
//! intentional and must not be "corrected" here.

use std::fmt::{Display, Formatter};

use bazi_time::BirthTime;
use chrono::NaiveDate;
use tracing::debug;

use crate::branch::Branch;
use crate::element::Element;
use crate::stem::Stem;

/// Epoch year: the Jia-Zi year of the reference cycle.
pub const EPOCH_YEAR: i32 = 1984;
pub const EPOCH_MONTH: u32 = 2;
pub const EPOCH_DAY: u32 = 2;

/// A (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at position `n` of the sexagenary cycle (0 = Jia-Zi).
    pub fn from_cycle(n: i64) -> Self {
        Self::new(Stem::from_cycle(n), Branch::from_cycle(n))
    }

    /// 0-based position in the 60-pair cycle.
    ///
    /// Only stems and branches of equal parity occur together in the
    /// cycle. The month rule can produce mismatched pairs (e.g. 丁寅),
    /// for which this returns `None`.
    pub fn sexagenary_index(&self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        (0..6u8).map(|k| s + 10 * k).find(|n| n % 12 == b)
    }

    /// Elements of the stem and branch, in that order.
    pub const fn elements(&self) -> [Element; 2] {
        [self.stem.element(), self.branch.element()]
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

/// The four pillars of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Elements of all eight symbols, pillar by pillar, stem before branch.
    pub fn symbol_elements(&self) -> impl Iterator<Item = Element> {
        self.pillars().into_iter().flat_map(|p| p.elements())
    }
}

/// The reference day, 1984-02-02.
pub const EPOCH_DATE: NaiveDate =
    match NaiveDate::from_ymd_opt(EPOCH_YEAR, EPOCH_MONTH, EPOCH_DAY) {
        Some(d) => d,
        None => panic!("invalid epoch date"),
    };

/// Whole days from the epoch day to `date` (negative before it).
pub fn days_from_epoch(date: NaiveDate) -> i64 {
    date.signed_duration_since(EPOCH_DATE).num_days()
}

/// Year pillar from the civil year number.
pub fn year_pillar(year: i32) -> Pillar {
    Pillar::from_cycle((year - EPOCH_YEAR) as i64)
}

/// Month pillar from the Gregorian month number and the year stem.
///
/// The stem advances one step per month from the year stem's starting
/// month stem.
pub fn month_pillar(month: u32, year_stem: Stem) -> Pillar {
    let branch = Branch::from_month(month);
    let start = year_stem.month_stem_start().index() as i64;
    let offset = (month as i64 - 1).rem_euclid(12);
    Pillar::new(Stem::from_cycle(start + offset), branch)
}

/// Day pillar from elapsed days since the epoch.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    Pillar::from_cycle(days_from_epoch(date))
}

/// Hour pillar from the clock hour and the day stem.
///
/// The day does not roll over at 23:00: a 23:xx birth keeps its civil
/// day and takes the Zi hour.
pub fn hour_pillar(hour: u32, day_stem: Stem) -> Pillar {
    let branch = Branch::from_hour(hour);
    let start = day_stem.hour_stem_start().index() as i64;
    Pillar::new(Stem::from_cycle(start + branch.index() as i64), branch)
}

/// Compute all four pillars for a birth time.
pub fn four_pillars(birth: &BirthTime) -> FourPillars {
    let year = year_pillar(birth.year());
    let month = month_pillar(birth.month(), year.stem);
    let day = day_pillar(birth.date());
    let hour = hour_pillar(birth.hour(), day.stem);
    debug!(
        %birth,
        year = %year,
        month = %month,
        day = %day,
        hour = %hour,
        "computed four pillars"
    );
    FourPillars {
        year,
        month,
        day,
        hour,
    }
}
