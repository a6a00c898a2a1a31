//! The five elements (wu xing) and their lucky digits.

/// The five elemental categories, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in table order (0 = Wood, 4 = Water).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// Every digit in the element table, in table order.
pub const ALL_DIGITS: [u8; 10] = [3, 4, 9, 2, 5, 8, 6, 7, 0, 1];

impl Element {
    /// Chinese character for the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Decimal digits associated with the element. Never empty.
    pub const fn digits(self) -> &'static [u8] {
        match self {
            Self::Wood => &[3, 4],
            Self::Fire => &[9],
            Self::Earth => &[2, 5, 8],
            Self::Metal => &[6, 7],
            Self::Water => &[0, 1],
        }
    }

    /// All five elements in order.
    pub const fn all() -> &'static [Element; 5] {
        &ALL_ELEMENTS
    }
}
