//! The ten heavenly stems (tian gan).
//!
//! Stems pair up by element: two per element, yang then yin. The stem
//! starting tables for month and hour pillars collapse the ten stems into
//! five classes, pairing each stem with the one five places later
//! (甲/己, 乙/庚, 丙/辛, 丁/壬, 戊/癸).

use crate::element::Element;

/// The ten heavenly stems, starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Chinese character of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin romanisation without tone marks.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Stem at position `n` of the repeating ten-stem cycle.
    ///
    /// Negative positions count backwards from Jia.
    pub fn from_cycle(n: i64) -> Self {
        ALL_STEMS[n.rem_euclid(10) as usize]
    }

    /// Stem of the first month, keyed by year stem.
    pub const fn month_stem_start(self) -> Stem {
        match self {
            Self::Jia | Self::Ji => Self::Bing,
            Self::Yi | Self::Geng => Self::Wu,
            Self::Bing | Self::Xin => Self::Geng,
            Self::Ding | Self::Ren => Self::Ren,
            Self::Wu | Self::Gui => Self::Jia,
        }
    }

    /// Stem of the Zi hour, keyed by day stem.
    pub const fn hour_stem_start(self) -> Stem {
        match self {
            Self::Jia | Self::Ji => Self::Jia,
            Self::Yi | Self::Geng => Self::Bing,
            Self::Bing | Self::Xin => Self::Wu,
            Self::Ding | Self::Ren => Self::Geng,
            Self::Wu | Self::Gui => Self::Ren,
        }
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn two_stems_per_element() {
        for e in Element::all() {
            let n = ALL_STEMS.iter().filter(|s| s.element() == *e).count();
            assert_eq!(n, 2, "{e:?}");
        }
    }

    #[test]
    fn from_cycle_wraps_both_ways() {
        assert_eq!(Stem::from_cycle(0), Stem::Jia);
        assert_eq!(Stem::from_cycle(10), Stem::Jia);
        assert_eq!(Stem::from_cycle(13), Stem::Ding);
        assert_eq!(Stem::from_cycle(-1), Stem::Gui);
        assert_eq!(Stem::from_cycle(-10), Stem::Jia);
    }

    #[test]
    fn start_tables_collapse_five_apart() {
        for s in ALL_STEMS {
            let partner = Stem::from_cycle(s.index() as i64 + 5);
            assert_eq!(s.month_stem_start(), partner.month_stem_start());
            assert_eq!(s.hour_stem_start(), partner.hour_stem_start());
        }
    }

    #[test]
    fn start_tables_are_yang() {
        for s in ALL_STEMS {
            assert_eq!(s.month_stem_start().index() % 2, 0);
            assert_eq!(s.hour_stem_start().index() % 2, 0);
        }
    }

    #[test]
    fn names_nonempty() {
        for s in ALL_STEMS {
            assert!(!s.name().is_empty());
            assert!(!s.pinyin().is_empty());
        }
    }
}
