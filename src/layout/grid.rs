/// Near-square grid selection for a required stamp count

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Largest stamp count a loyalty program may require.
///
/// Real programs ask for single or low double digits; the cap keeps the cell
/// grid built for a card bounded.
pub const MAX_REQUIRED_STAMPS: u32 = 10_000;

/// A validated stamp count: a positive integer no larger than
/// [`MAX_REQUIRED_STAMPS`].
///
/// Merchant configurations arrive as JSON numbers, so deserialization goes
/// through `f64` and rejects zero, negatives and fractions the same way the
/// `TryFrom` conversions do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u32")]
pub struct RequiredCount(u32);

impl RequiredCount {
    pub fn new(count: u32) -> Result<Self> {
        RequiredCount::try_from(i64::from(count))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for RequiredCount {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        if value < 1 {
            return Err(Error::InvalidArgument(format!(
                "required stamp count must be at least 1, got {}",
                value
            )));
        }
        if value > i64::from(MAX_REQUIRED_STAMPS) {
            return Err(Error::InvalidArgument(format!(
                "required stamp count {} exceeds the maximum of {}",
                value, MAX_REQUIRED_STAMPS
            )));
        }
        Ok(RequiredCount(value as u32))
    }
}

impl TryFrom<f64> for RequiredCount {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(Error::InvalidArgument(format!(
                "required stamp count must be an integer, got {}",
                value
            )));
        }
        // `as` saturates, and anything past i64 is over the cap anyway
        RequiredCount::try_from(value as i64)
    }
}

impl FromStr for RequiredCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return RequiredCount::try_from(n);
        }
        match s.parse::<f64>() {
            Ok(v) => RequiredCount::try_from(v),
            Err(_) => Err(Error::InvalidArgument(format!(
                "required stamp count is not a number: {:?}",
                s
            ))),
        }
    }
}

impl From<RequiredCount> for u32 {
    fn from(count: RequiredCount) -> u32 {
        count.0
    }
}

impl fmt::Display for RequiredCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rows × columns used to arrange stamp indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: u32,
    pub columns: u32,
}

impl GridSpec {
    /// Reference search: scan every row count from 1 to `count` and keep the
    /// smallest area, breaking exact-area ties towards the more square shape.
    /// A later candidate replaces the current best only on strict improvement.
    ///
    /// O(n); [`GridSpec::for_count`] returns the same grid in O(√n).
    pub fn for_count_scan(count: RequiredCount) -> GridSpec {
        let n = u64::from(count.get());
        // (rows, columns, area)
        let mut best: Option<(u64, u64, u64)> = None;
        for rows in 1..=n {
            let columns = n.div_ceil(rows);
            let area = rows * columns;
            best = match best {
                None => Some((rows, columns, area)),
                Some((_, _, best_area)) if area < best_area => Some((rows, columns, area)),
                Some((br, bc, best_area))
                    if area == best_area && rows.abs_diff(columns) < br.abs_diff(bc) =>
                {
                    Some((rows, columns, area))
                }
                keep => keep,
            };
        }
        // n >= 1 so the loop ran at least once; rows and columns are <= n
        let (rows, columns, _) = best.unwrap_or((1, n, n));
        GridSpec {
            rows: rows as u32,
            columns: columns as u32,
        }
    }

    /// Minimal-area grid for `count`, ties going to the more square shape.
    ///
    /// `rows * ceil(n / rows) == n` only when `rows` divides `n`, and `1` always
    /// does, so the minimal area is `n` itself. Among divisor pairs the scan in
    /// [`GridSpec::for_count_scan`] meets the smaller factor first, so the
    /// winner is the largest divisor not above `√n`.
    pub fn for_count(count: RequiredCount) -> GridSpec {
        let n = u64::from(count.get());
        let mut root = (n as f64).sqrt() as u64;
        while root * root > n {
            root -= 1;
        }
        while (root + 1) * (root + 1) <= n {
            root += 1;
        }
        let rows = (1..=root).rev().find(|r| n % r == 0).unwrap_or(1);
        GridSpec {
            rows: rows as u32,
            columns: (n / rows) as u32,
        }
    }

    /// Number of cells in the grid, padding included
    pub fn area(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.columns)
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Compute the stamp grid for a loyalty program requiring `required_count` stamps.
///
/// Fails with [`Error::InvalidArgument`] for zero, negative or over-cap
/// ([`MAX_REQUIRED_STAMPS`]) counts; a wrong
/// grid would misrepresent the program's reward threshold, so there is no
/// fallback shape.
pub fn compute_grid(required_count: i64) -> Result<GridSpec> {
    let count = RequiredCount::try_from(required_count)?;
    let grid = GridSpec::for_count(count);
    debug!("stamp grid for {} stamps: {}", count, grid);
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: i64) -> (u32, u32) {
        let g = compute_grid(n).unwrap();
        (g.rows, g.columns)
    }

    #[test]
    fn known_counts() {
        assert_eq!(grid(1), (1, 1));
        assert_eq!(grid(6), (2, 3));
        assert_eq!(grid(8), (2, 4));
        assert_eq!(grid(12), (3, 4));
        assert_eq!(grid(16), (4, 4));
    }

    #[test]
    fn primes_stay_single_row() {
        // Minimal area wins over squareness: 7 is 1x7, not a padded 3x3.
        assert_eq!(grid(7), (1, 7));
        assert_eq!(grid(13), (1, 13));
    }

    #[test]
    fn equal_squareness_keeps_first_row_count() {
        // 2x4 and 4x2 tie on area and squareness; the scan meets 2 rows first.
        assert_eq!(grid(8), (2, 4));
        assert_eq!(grid(18), (3, 6));
    }

    #[test]
    fn rejects_non_positive() {
        assert!(matches!(compute_grid(0), Err(Error::InvalidArgument(_))));
        assert!(matches!(compute_grid(-1), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            compute_grid(i64::from(u32::MAX) + 1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_counts_over_the_cap() {
        let max = i64::from(MAX_REQUIRED_STAMPS);
        assert_eq!(compute_grid(max).unwrap(), GridSpec { rows: 100, columns: 100 });
        assert!(matches!(compute_grid(max + 1), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            compute_grid(400_000_000),
            Err(Error::InvalidArgument(_))
        ));
        assert!(RequiredCount::new(MAX_REQUIRED_STAMPS + 1).is_err());
        assert!(RequiredCount::try_from(1e300_f64).is_err());
        assert!(serde_json::from_str::<RequiredCount>("400000000").is_err());
    }

    #[test]
    fn rejects_fractional_counts() {
        assert!(matches!(
            RequiredCount::try_from(1.5_f64),
            Err(Error::InvalidArgument(_))
        ));
        assert!(RequiredCount::try_from(f64::NAN).is_err());
        assert!(RequiredCount::try_from(f64::INFINITY).is_err());
        assert_eq!(RequiredCount::try_from(4.0_f64).unwrap().get(), 4);
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("8".parse::<RequiredCount>().unwrap().get(), 8);
        assert_eq!(" 12 ".parse::<RequiredCount>().unwrap().get(), 12);
        assert_eq!("6.0".parse::<RequiredCount>().unwrap().get(), 6);
        assert!("1.5".parse::<RequiredCount>().is_err());
        assert!("0".parse::<RequiredCount>().is_err());
        assert!("ten".parse::<RequiredCount>().is_err());
    }

    #[test]
    fn deserializes_from_json_numbers() {
        let c: RequiredCount = serde_json::from_str("10").unwrap();
        assert_eq!(c.get(), 10);
        assert!(serde_json::from_str::<RequiredCount>("2.5").is_err());
        assert!(serde_json::from_str::<RequiredCount>("-3").is_err());
        assert_eq!(serde_json::to_string(&c).unwrap(), "10");
    }

    #[test]
    fn divisor_search_matches_scan() {
        for n in 1..=2000u32 {
            let count = RequiredCount::new(n).unwrap();
            assert_eq!(GridSpec::for_count_scan(count), GridSpec::for_count(count), "n={}", n);
        }
    }

    #[test]
    fn display_is_rows_by_columns() {
        assert_eq!(compute_grid(12).unwrap().to_string(), "3x4");
    }
}
