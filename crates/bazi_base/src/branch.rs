//! The twelve earthly branches (di zhi) and their month/hour tables.

use crate::element::Element;

/// The twelve earthly branches, starting from Zi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// A two-hour clock window `[start, end)` owned by one branch.
///
/// When `start > end` the window wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    pub start: u32,
    pub end: u32,
    pub branch: Branch,
}

impl HourWindow {
    pub const fn contains(&self, hour: u32) -> bool {
        if self.start <= self.end {
            self.start <= hour && hour < self.end
        } else {
            hour >= self.start || hour < self.end
        }
    }
}

/// Branch hour windows. Zi spans 23:00-01:00.
pub const HOUR_WINDOWS: [HourWindow; 12] = [
    HourWindow {
        start: 23,
        end: 1,
        branch: Branch::Zi,
    },
    HourWindow {
        start: 1,
        end: 3,
        branch: Branch::Chou,
    },
    HourWindow {
        start: 3,
        end: 5,
        branch: Branch::Yin,
    },
    HourWindow {
        start: 5,
        end: 7,
        branch: Branch::Mao,
    },
    HourWindow {
        start: 7,
        end: 9,
        branch: Branch::Chen,
    },
    HourWindow {
        start: 9,
        end: 11,
        branch: Branch::Si,
    },
    HourWindow {
        start: 11,
        end: 13,
        branch: Branch::Wu,
    },
    HourWindow {
        start: 13,
        end: 15,
        branch: Branch::Wei,
    },
    HourWindow {
        start: 15,
        end: 17,
        branch: Branch::Shen,
    },
    HourWindow {
        start: 17,
        end: 19,
        branch: Branch::You,
    },
    HourWindow {
        start: 19,
        end: 21,
        branch: Branch::Xu,
    },
    HourWindow {
        start: 21,
        end: 23,
        branch: Branch::Hai,
    },
];

impl Branch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin romanisation without tone marks.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Branch at position `n` of the repeating twelve-branch cycle.
    pub fn from_cycle(n: i64) -> Self {
        ALL_BRANCHES[n.rem_euclid(12) as usize]
    }

    /// Month branch for a Gregorian month number.
    ///
    /// January is Chou, February Yin, ..., December Zi. This is a fixed
    /// civil-month mapping, not a solar-term one. Month 12 and 0 coincide.
    pub fn from_month(month: u32) -> Self {
        Self::from_cycle(month as i64)
    }

    /// Hour branch for a clock hour, scanning [`HOUR_WINDOWS`] in order.
    pub fn from_hour(hour: u32) -> Self {
        HOUR_WINDOWS
            .iter()
            .find(|w| w.contains(hour))
            .map(|w| w.branch)
            .unwrap_or(Self::Zi)
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn element_counts() {
        let count = |e: Element| ALL_BRANCHES.iter().filter(|b| b.element() == e).count();
        assert_eq!(count(Element::Wood), 2);
        assert_eq!(count(Element::Fire), 2);
        assert_eq!(count(Element::Metal), 2);
        assert_eq!(count(Element::Water), 2);
        assert_eq!(count(Element::Earth), 4);
    }

    #[test]
    fn month_table() {
        assert_eq!(Branch::from_month(1), Branch::Chou);
        assert_eq!(Branch::from_month(2), Branch::Yin);
        assert_eq!(Branch::from_month(6), Branch::Wu);
        assert_eq!(Branch::from_month(11), Branch::Hai);
        assert_eq!(Branch::from_month(12), Branch::Zi);
    }

    #[test]
    fn hour_windows_cover_every_hour_once() {
        for hour in 0..24 {
            let n = HOUR_WINDOWS.iter().filter(|w| w.contains(hour)).count();
            assert_eq!(n, 1, "hour {hour}");
        }
    }

    #[test]
    fn zi_wraps_midnight() {
        assert_eq!(Branch::from_hour(23), Branch::Zi);
        assert_eq!(Branch::from_hour(0), Branch::Zi);
        assert_eq!(Branch::from_hour(1), Branch::Chou);
    }

    #[test]
    fn hour_sweep() {
        // Odd hours open a new window; the even hour after stays in it.
        for (i, b) in ALL_BRANCHES.iter().enumerate().skip(1) {
            let start = 2 * i as u32 - 1;
            assert_eq!(Branch::from_hour(start), *b, "hour {start}");
            assert_eq!(Branch::from_hour(start + 1), *b, "hour {}", start + 1);
        }
    }

    #[test]
    fn windows_in_branch_order() {
        for (w, b) in HOUR_WINDOWS.iter().zip(ALL_BRANCHES.iter()) {
            assert_eq!(w.branch, *b);
        }
    }
}
