//! IntegerHistogram - Counts over a contiguous integer domain
//!
//! A histogram whose buckets are the integers `x_min..=x_max`, used to
//! accumulate run lengths. Besides plain accumulation it answers area and
//! discrete-derivative queries, and locates its dominant peaks with the
//! hi/lo expansion rule implemented in [`peaks`].

mod peaks;

pub use peaks::PeakParams;

use crate::error::{Error, Result};
use std::io::Write;

/// A peak over histogram buckets
///
/// `min` and `max` are the inclusive bucket bounds of the peak and `main`
/// its representative value, with `min <= main <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Lowest bucket of the peak
    pub min: i32,
    /// Representative value of the peak
    pub main: f64,
    /// Highest bucket of the peak
    pub max: i32,
}

impl Range {
    /// Create a new range
    pub fn new(min: i32, main: f64, max: i32) -> Self {
        debug_assert!(min as f64 <= main && main <= max as f64);
        Self { min, main, max }
    }

    /// Number of buckets covered
    pub fn width(&self) -> i32 {
        self.max - self.min + 1
    }

    /// Check if a bucket lies within the range
    pub fn contains(&self, x: i32) -> bool {
        x >= self.min && x <= self.max
    }

    /// Check if two ranges share at least one bucket
    pub fn overlaps(&self, other: &Range) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.min, self.main, self.max)
    }
}

/// Histogram over the integer domain `x_min..=x_max`
///
/// Counts only grow; there is no way to remove a value once added.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerHistogram {
    name: String,
    x_min: i32,
    counts: Vec<u32>,
}

impl IntegerHistogram {
    /// Create an empty histogram over `x_min..=x_max`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `x_max < x_min`.
    pub fn new(name: impl Into<String>, x_min: i32, x_max: i32) -> Result<Self> {
        if x_max < x_min {
            return Err(Error::InvalidParameter(format!(
                "histogram domain is empty: {x_min}..={x_max}"
            )));
        }
        Ok(Self {
            name: name.into(),
            x_min,
            counts: vec![0; (x_max - x_min + 1) as usize],
        })
    }

    /// Histogram name, used in diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowest bucket
    #[inline]
    pub fn x_min(&self) -> i32 {
        self.x_min
    }

    /// Highest bucket
    #[inline]
    pub fn x_max(&self) -> i32 {
        self.x_min + self.counts.len() as i32 - 1
    }

    /// Add `count` occurrences of value `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `x` lies outside the domain.
    pub fn add_value(&mut self, x: i32, count: u32) -> Result<()> {
        let index = self.index(x).ok_or(Error::IndexOutOfBounds {
            index: (x - self.x_min).max(0) as usize,
            len: self.counts.len(),
        })?;
        self.counts[index] += count;
        Ok(())
    }

    /// Count at bucket `x`; 0 outside the domain.
    #[inline]
    pub fn value(&self, x: i32) -> u32 {
        self.index(x).map_or(0, |i| self.counts[i])
    }

    /// Sum of all counts.
    pub fn area(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Sum of counts over the inclusive interval `first..=last`.
    pub fn sum_on_interval(&self, first: i32, last: i32) -> u64 {
        (first..=last).map(|x| u64::from(self.value(x))).sum()
    }

    /// Discrete derivative at `x`: `value(x) - value(x - 1)`.
    pub fn derivative(&self, x: i32) -> i64 {
        i64::from(self.value(x)) - i64::from(self.value(x - 1))
    }

    /// Bucket holding the highest count (lowest bucket on ties).
    ///
    /// Returns `None` for an all-zero histogram.
    pub fn mode(&self) -> Option<i32> {
        let (index, &count) = self
            .counts
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))?;
        (count > 0).then_some(self.x_min + index as i32)
    }

    /// Iterate over `(bucket, count)` pairs in ascending bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.x_min + i as i32, c))
    }

    /// Write a table of the non-empty buckets with their derivatives.
    pub fn print(&self, writer: &mut impl Write) -> Result<()> {
        writeln!(
            writer,
            "{} histogram, domain {}..={}, area {}",
            self.name,
            self.x_min,
            self.x_max(),
            self.area()
        )?;
        for (x, count) in self.iter().filter(|&(_, c)| c > 0) {
            writeln!(writer, "  {:>4}: {:>8} (d {:+})", x, count, self.derivative(x))?;
        }
        Ok(())
    }

    #[inline]
    fn index(&self, x: i32) -> Option<usize> {
        if x < self.x_min {
            return None;
        }
        let i = (x - self.x_min) as usize;
        (i < self.counts.len()).then_some(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histo(values: &[(i32, u32)]) -> IntegerHistogram {
        let mut h = IntegerHistogram::new("test", 0, 20).unwrap();
        for &(x, c) in values {
            h.add_value(x, c).unwrap();
        }
        h
    }

    #[test]
    fn test_new_rejects_empty_domain() {
        assert!(IntegerHistogram::new("bad", 5, 4).is_err());
        let h = IntegerHistogram::new("one", 3, 3).unwrap();
        assert_eq!(h.x_min(), 3);
        assert_eq!(h.x_max(), 3);
    }

    #[test]
    fn test_accumulate_and_area() {
        let mut h = histo(&[(4, 3), (4, 2), (7, 1)]);
        assert_eq!(h.value(4), 5);
        assert_eq!(h.value(7), 1);
        assert_eq!(h.value(-1), 0);
        assert_eq!(h.value(21), 0);
        assert_eq!(h.area(), 6);
        assert!(h.add_value(21, 1).is_err());
        assert!(h.add_value(-2, 1).is_err());
        assert_eq!(h.area(), 6);
    }

    #[test]
    fn test_derivative() {
        let h = histo(&[(3, 2), (4, 10), (5, 4)]);
        assert_eq!(h.derivative(3), 2);
        assert_eq!(h.derivative(4), 8);
        assert_eq!(h.derivative(5), -6);
        assert_eq!(h.derivative(6), -4);
        assert_eq!(h.derivative(0), 0);
    }

    #[test]
    fn test_sum_on_interval_and_mode() {
        let h = histo(&[(3, 2), (4, 10), (5, 10)]);
        assert_eq!(h.sum_on_interval(4, 5), 20);
        assert_eq!(h.mode(), Some(4));
        assert_eq!(histo(&[]).mode(), None);
    }

    #[test]
    fn test_print() {
        let h = histo(&[(4, 10)]);
        let mut out = Vec::new();
        h.print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("test histogram, domain 0..=20, area 10"));
        assert!(text.contains("4:       10 (d +10)"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_range_relations() {
        let a = Range::new(3, 4.0, 5);
        let b = Range::new(5, 6.0, 8);
        let c = Range::new(6, 6.0, 6);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(a.contains(5) && !a.contains(6));
        assert_eq!(a.width(), 3);
        assert_eq!(a.to_string(), "(3, 4, 5)");
    }
}
