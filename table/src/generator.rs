//! Quadrature table generation.
//!
//! Entry `i` samples `amplitude * cos(θ)` and `amplitude * sin(θ)` at
//! `θ = i * (π/2) / count`, then splits each signal into a positive and a
//! negative rail. The table spans one full period: `4 * count` entries.

use std::f64::consts::FRAC_PI_2;

use crate::error::TableError;
use crate::model::{Rounding, Table, TableEntry};

/// Generates a table with the default [`Rounding`] (half to even).
///
/// # Errors
///
/// Returns [`TableError::InvalidCount`] if `count <= 0`.
pub fn generate(count: i64, amplitude: i64) -> Result<Table, TableError> {
    generate_with(count, amplitude, Rounding::default())
}

/// Generates a table using an explicit rounding mode.
///
/// # Errors
///
/// Returns [`TableError::InvalidCount`] if `count <= 0`, or if `4 * count`
/// entries cannot be allocated.
pub fn generate_with(count: i64, amplitude: i64, rounding: Rounding) -> Result<Table, TableError> {
    if count <= 0 {
        return Err(TableError::InvalidCount(count));
    }
    let len = count
        .checked_mul(4)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or(TableError::InvalidCount(count))?;

    let step = FRAC_PI_2 / count as f64;
    let amp = amplitude as f64;

    let mut entries: Vec<TableEntry> = Vec::new();
    entries
        .try_reserve_exact(len)
        .map_err(|_| TableError::InvalidCount(count))?;
    for i in 0..len {
        let theta = i as f64 * step;
        let (a, a_bar) = rectify(amp * theta.cos(), rounding);
        let (b, b_bar) = rectify(amp * theta.sin(), rounding);
        entries.push(TableEntry::new(a, a_bar, b, b_bar));
    }

    tracing::debug!(
        count,
        amplitude,
        rounding = rounding.as_str(),
        entries = entries.len(),
        "generated microstep table"
    );

    Ok(Table::new(count.unsigned_abs(), amplitude, rounding, entries))
}

/// Splits a signed sample into `(positive, negative)` rail values.
fn rectify(value: f64, rounding: Rounding) -> (u64, u64) {
    if value >= 0.0 {
        (to_rail(value, rounding), 0)
    } else {
        (0, to_rail(-value, rounding))
    }
}

/// Rounds and clamps to a non-negative integer (`-0.0` and artifacts become 0).
fn to_rail(value: f64, rounding: Rounding) -> u64 {
    rounding.apply(value).max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_is_rejected() {
        assert!(matches!(generate(0, 4800), Err(TableError::InvalidCount(0))));
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(matches!(generate(-5, 4800), Err(TableError::InvalidCount(-5))));
    }

    #[test]
    fn unallocatable_count_is_rejected() {
        let count = 1i64 << 60;
        assert!(matches!(generate(count, 4800), Err(TableError::InvalidCount(c)) if c == count));
        assert!(matches!(generate(i64::MAX, 4800), Err(TableError::InvalidCount(i64::MAX))));
    }

    #[test]
    fn table_has_four_entries_per_microstep() {
        for n in [1, 2, 3, 16, 100] {
            assert_eq!(generate(n, 4800).map(|t| t.len()).ok(), Some(4 * n as usize));
        }
    }

    #[test]
    fn single_microstep_hits_the_four_axes() {
        let t = generate(1, 4800).unwrap();
        assert_eq!(
            t.entries(),
            &[
                TableEntry::new(4800, 0, 0, 0),
                TableEntry::new(0, 0, 4800, 0),
                TableEntry::new(0, 4800, 0, 0),
                TableEntry::new(0, 0, 0, 4800),
            ]
        );
    }

    #[test]
    fn quarter_boundary_is_pure_sine() {
        let t = generate(16, 4800).unwrap();
        assert_eq!(t.entries()[0], TableEntry::new(4800, 0, 0, 0));
        assert_eq!(t.entries()[16], TableEntry::new(0, 0, 4800, 0));
        assert_eq!(t.entries()[32], TableEntry::new(0, 4800, 0, 0));
        assert_eq!(t.entries()[48], TableEntry::new(0, 0, 0, 4800));
    }

    #[test]
    fn forty_five_degrees_is_balanced() {
        // 4800 * cos(π/4) = 3394.11...
        let t = generate(2, 4800).unwrap();
        assert_eq!(t.entries()[1], TableEntry::new(3394, 0, 3394, 0));
        assert_eq!(t.entries()[3], TableEntry::new(0, 3394, 3394, 0));
    }

    #[test]
    fn zero_amplitude_is_all_zero() {
        let t = generate(8, 0).unwrap();
        assert_eq!(t.len(), 32);
        assert!(t.iter().all(|e| e.rails() == [0, 0, 0, 0]));
    }

    #[test]
    fn negative_amplitude_swaps_rails() {
        let pos = generate(4, 1000).unwrap();
        let neg = generate(4, -1000).unwrap();
        for (p, n) in pos.iter().zip(neg.iter()) {
            assert_eq!((p.a, p.a_bar, p.b, p.b_bar), (n.a_bar, n.a, n.b_bar, n.b));
        }
    }

    #[test]
    fn rounding_mode_is_recorded() {
        let t = generate_with(3, 100, Rounding::HalfAwayFromZero).unwrap();
        assert_eq!(t.rounding(), Rounding::HalfAwayFromZero);
        assert_eq!(t.count(), 3);
        assert_eq!(t.amplitude(), 100);
    }

    #[test]
    fn rectify_splits_on_sign() {
        assert_eq!(rectify(12.4, Rounding::HalfEven), (12, 0));
        assert_eq!(rectify(-12.6, Rounding::HalfEven), (0, 13));
        assert_eq!(rectify(-0.0, Rounding::HalfEven), (0, 0));
        assert_eq!(rectify(-1e-13, Rounding::HalfEven), (0, 0));
    }

    #[test]
    fn rectify_honours_tie_mode() {
        assert_eq!(rectify(2.5, Rounding::HalfEven), (2, 0));
        assert_eq!(rectify(2.5, Rounding::HalfAwayFromZero), (3, 0));
        assert_eq!(rectify(-2.5, Rounding::HalfEven), (0, 2));
        assert_eq!(rectify(-2.5, Rounding::HalfAwayFromZero), (0, 3));
    }
}
