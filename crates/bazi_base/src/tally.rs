//! Element tally over the eight symbols of a chart.

use tracing::debug;

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::FourPillars;

/// Count of symbols per element. Every element is present, unseen ones at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ElementTally {
    counts: [u8; 5],
}

impl ElementTally {
    /// Tally from explicit counts in element table order.
    pub const fn from_counts(counts: [u8; 5]) -> Self {
        Self { counts }
    }

    pub fn add(&mut self, element: Element) {
        self.counts[element.index() as usize] += 1;
    }

    pub const fn get(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// `(element, count)` pairs in element table order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.get(e)))
    }

    /// Sum over all elements; 8 for any computed chart.
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }
}

/// Count the elements of the four stems and four branches.
pub fn element_tally(pillars: &FourPillars) -> ElementTally {
    let mut tally = ElementTally::default();
    for element in pillars.symbol_elements() {
        tally.add(element);
    }
    debug!(?tally, "element tally");
    tally
}
