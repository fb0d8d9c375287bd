//! Core table model types.
//!
//! A [`Table`] is an owned, ordered list of [`TableEntry`] values produced by
//! [`generate`](crate::generate). It is never mutated after construction.

use serde::Serialize;

/// How continuous signal values are rounded to integer rail values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    /// Ties go to the even neighbour (`2.5 -> 2`, `3.5 -> 4`).
    #[default]
    HalfEven,
    /// Ties go away from zero (`2.5 -> 3`, `-2.5 -> -3`).
    HalfAwayFromZero,
}

impl Rounding {
    /// Returns the identifier used on the command line and in JSON output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Rounding::HalfEven => "half-even",
            Rounding::HalfAwayFromZero => "half-away-from-zero",
        }
    }

    /// Rounds `value` to the nearest integer using this mode.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::HalfEven => value.round_ties_even(),
            Rounding::HalfAwayFromZero => value.round(),
        }
    }
}

/// Rail magnitudes of both quadrature channels at one phase step.
///
/// At most one of `a`/`a_bar` is non-zero, and likewise for `b`/`b_bar`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TableEntry {
    /// Positive rail of channel A (cosine).
    pub a: u64,
    /// Negative rail of channel A.
    pub a_bar: u64,
    /// Positive rail of channel B (sine).
    pub b: u64,
    /// Negative rail of channel B.
    pub b_bar: u64,
}

impl TableEntry {
    /// Creates an entry from its four rail values.
    #[must_use]
    pub const fn new(a: u64, a_bar: u64, b: u64, b_bar: u64) -> Self {
        Self { a, a_bar, b, b_bar }
    }

    /// Rail values in emission order: `[a, a_bar, b, b_bar]`.
    #[must_use]
    pub const fn rails(&self) -> [u64; 4] {
        [self.a, self.a_bar, self.b, self.b_bar]
    }

    /// True when each channel drives at most one rail.
    #[must_use]
    pub const fn is_rectified(&self) -> bool {
        (self.a == 0 || self.a_bar == 0) && (self.b == 0 || self.b_bar == 0)
    }
}

/// A full-period microstep table: `4 * count` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    count: u64,
    amplitude: i64,
    rounding: Rounding,
    entries: Vec<TableEntry>,
}

impl Table {
    pub(crate) fn new(
        count: u64,
        amplitude: i64,
        rounding: Rounding,
        entries: Vec<TableEntry>,
    ) -> Self {
        Self {
            count,
            amplitude,
            rounding,
            entries,
        }
    }

    /// Microsteps per quadrant.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Peak amplitude the table was generated with.
    #[must_use]
    pub fn amplitude(&self) -> i64 {
        self.amplitude
    }

    /// Rounding mode the table was generated with.
    #[must_use]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries. Never the case for a generated table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in phase order.
    #[must_use]
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Iterates over the entries in phase order.
    pub fn iter(&self) -> std::slice::Iter<'_, TableEntry> {
        self.entries.iter()
    }

    /// Largest rail value anywhere in the table.
    #[must_use]
    pub fn max_rail(&self) -> u64 {
        self.entries
            .iter()
            .flat_map(TableEntry::rails)
            .max()
            .unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a TableEntry;
    type IntoIter = std::slice::Iter<'a, TableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
