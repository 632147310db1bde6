//! Hi/lo peak detection
//!
//! Locates the dominant peaks of an [`IntegerHistogram`].
//!
//! # Algorithm
//!
//! 1. **Seeds**: a bucket is a seed when its count exceeds `min_value` and
//!    is a local maximum: strictly above its left neighbor and not below its
//!    right neighbor. On a plateau the leftmost bucket is the seed.
//! 2. **Expansion**: from each seed, strongest first, the lower and upper
//!    bounds move outward one bucket at a time. A neighbor joins when it is
//!    non-empty, not higher than the current edge, and either still above
//!    `min_value` or separated from the edge by less than `min_derivative`
//!    (the slope has flattened rather than dropped).
//! 3. **Gain**: the peak mass divided by the histogram area must reach
//!    `min_gain_ratio`, otherwise the seed is noise.
//! 4. **Deduplication**: a seed inside an accepted peak is skipped, and a
//!    candidate overlapping an accepted peak is absorbed by that stronger
//!    peak.
//!
//! The representative value of a peak is its seed bucket.

use super::{IntegerHistogram, Range};

/// Acceptance thresholds for [`IntegerHistogram::hi_lo_peaks`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakParams {
    /// Minimum fraction of the total area a peak must hold
    pub min_gain_ratio: f64,
    /// Absolute count a bucket must exceed to seed or extend a peak
    pub min_value: u64,
    /// Absolute count step from which a slope counts as steep
    pub min_derivative: u64,
}

impl PeakParams {
    /// Derive absolute thresholds from ratios of the histogram area.
    ///
    /// `min_value = rint(area * min_value_ratio)` and
    /// `min_derivative = rint(area * min_derivative_ratio)`, where `rint`
    /// rounds half-way cases to the even integer.
    pub fn from_ratios(
        area: u64,
        min_gain_ratio: f64,
        min_value_ratio: f64,
        min_derivative_ratio: f64,
    ) -> Self {
        Self {
            min_gain_ratio,
            min_value: rint_count(area as f64 * min_value_ratio),
            min_derivative: rint_count(area as f64 * min_derivative_ratio),
        }
    }
}

fn rint_count(v: f64) -> u64 {
    v.round_ties_even().max(0.0) as u64
}

impl IntegerHistogram {
    /// Find the peaks of the histogram, strongest first.
    ///
    /// Returns an empty vector when nothing qualifies, in particular for
    /// an all-zero histogram.
    ///
    /// # Examples
    ///
    /// ```
    /// use stemscale_core::{IntegerHistogram, PeakParams};
    ///
    /// let mut h = IntegerHistogram::new("stem", 0, 20).unwrap();
    /// h.add_value(3, 10).unwrap();
    /// h.add_value(4, 50).unwrap();
    /// h.add_value(5, 40).unwrap();
    ///
    /// let params = PeakParams::from_ratios(h.area(), 0.1, 0.1, 0.05);
    /// let peaks = h.hi_lo_peaks(&params);
    /// assert_eq!(peaks.len(), 1);
    /// assert_eq!((peaks[0].min, peaks[0].main, peaks[0].max), (4, 4.0, 5));
    /// ```
    pub fn hi_lo_peaks(&self, params: &PeakParams) -> Vec<Range> {
        let area = self.area();
        if area == 0 {
            return Vec::new();
        }

        let mut seeds: Vec<i32> = (self.x_min()..=self.x_max())
            .filter(|&x| self.is_seed(x, params.min_value))
            .collect();
        seeds.sort_by(|&a, &b| self.value(b).cmp(&self.value(a)).then(a.cmp(&b)));

        let mut peaks: Vec<Range> = Vec::new();
        for seed in seeds {
            if peaks.iter().any(|p| p.contains(seed)) {
                continue;
            }

            let lo = self.expand(seed, -1, params);
            let hi = self.expand(seed, 1, params);
            let gain = self.sum_on_interval(lo, hi) as f64 / area as f64;
            if gain < params.min_gain_ratio {
                continue;
            }

            let candidate = Range::new(lo, seed as f64, hi);
            if peaks.iter().any(|p| p.overlaps(&candidate)) {
                continue;
            }
            peaks.push(candidate);
        }

        peaks
    }

    fn is_seed(&self, x: i32, min_value: u64) -> bool {
        let count = self.value(x);
        u64::from(count) > min_value && count > self.value(x - 1) && count >= self.value(x + 1)
    }

    /// Move one bound of the peak away from `seed` by steps of `step`.
    fn expand(&self, seed: i32, step: i32, params: &PeakParams) -> i32 {
        let mut edge = seed;
        loop {
            let next = edge + step;
            if next < self.x_min() || next > self.x_max() {
                return edge;
            }
            let (edge_count, next_count) = (self.value(edge), self.value(next));
            if next_count == 0 || next_count > edge_count {
                return edge;
            }
            let high = u64::from(next_count) > params.min_value;
            let flat = u64::from(edge_count - next_count) < params.min_derivative;
            if !(high || flat) {
                return edge;
            }
            edge = next;
        }
    }
}
