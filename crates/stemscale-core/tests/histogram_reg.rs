//! Histogram regression test
//!
//! Builds run-length style histograms and checks accumulation, derivative
//! queries and hi/lo peak detection on shapes seen on real pages: a single
//! sharp stem peak, a stem peak next to a wider beam/notehead peak, a
//! noisy tail, and an empty page.

use stemscale_core::{IntegerHistogram, PeakParams, Range};
use stemscale_test::RegParams;

fn histogram(counts: &[(i32, u32)]) -> IntegerHistogram {
    let mut h = IntegerHistogram::new("stem", 0, 20).expect("histogram");
    for &(x, c) in counts {
        h.add_value(x, c).expect("add value");
    }
    h
}

fn default_params(h: &IntegerHistogram) -> PeakParams {
    PeakParams::from_ratios(h.area(), 0.1, 0.1, 0.05)
}

fn compare_range(rp: &mut RegParams, expected: (i32, f64, i32), actual: &Range) {
    rp.compare_values(expected.0 as f64, actual.min as f64, 0.0);
    rp.compare_values(expected.1, actual.main, 0.0);
    rp.compare_values(expected.2 as f64, actual.max as f64, 0.0);
}

#[test]
fn histogram_reg() {
    let mut rp = RegParams::new("histogram");

    // --- Test 1: accumulation and derivative ---
    let h = histogram(&[(2, 3), (3, 30), (4, 12), (15, 1)]);
    rp.compare_values(46.0, h.area() as f64, 0.0);
    rp.compare_values(27.0, h.derivative(3) as f64, 0.0);
    rp.compare_values(-18.0, h.derivative(4) as f64, 0.0);
    rp.compare_values(1.0, h.sum_on_interval(15, 20) as f64, 0.0);
    rp.compare_values(3.0, h.mode().unwrap_or(-1) as f64, 0.0);

    // --- Test 2: sharp stem peak ---
    let peaks = h.hi_lo_peaks(&default_params(&h));
    rp.compare_values(1.0, peaks.len() as f64, 0.0);
    if let Some(p) = peaks.first() {
        compare_range(&mut rp, (3, 3.0, 4), p);
    }

    // --- Test 3: stem peak beside a weaker wide peak ---
    let h = histogram(&[
        (3, 200),
        (4, 150),
        (5, 20),
        (9, 40),
        (10, 60),
        (11, 55),
        (12, 50),
    ]);
    let peaks = h.hi_lo_peaks(&default_params(&h));
    rp.compare_values(2.0, peaks.len() as f64, 0.0);
    if peaks.len() == 2 {
        compare_range(&mut rp, (3, 3.0, 4), &peaks[0]);
        compare_range(&mut rp, (9, 10.0, 12), &peaks[1]);
    }

    // --- Test 4: raising the gain keeps only the stem peak ---
    let params = PeakParams {
        min_gain_ratio: 0.5,
        ..default_params(&h)
    };
    let peaks = h.hi_lo_peaks(&params);
    rp.compare_values(1.0, peaks.len() as f64, 0.0);

    // --- Test 5: flat tail is absorbed, steep drop is not ---
    let h = histogram(&[(2, 100), (3, 20), (4, 14), (5, 2)]);
    let peaks = h.hi_lo_peaks(&default_params(&h));
    rp.compare_values(1.0, peaks.len() as f64, 0.0);
    if let Some(p) = peaks.first() {
        // min_value = 14, min_derivative = 7: 20 -> 14 is flat, 14 -> 2 is steep
        compare_range(&mut rp, (2, 2.0, 4), p);
    }

    // --- Test 6: empty histogram has no peak ---
    let h = histogram(&[]);
    rp.compare_values(0.0, h.hi_lo_peaks(&default_params(&h)).len() as f64, 0.0);
    rp.compare_values(-1.0, h.mode().unwrap_or(-1) as f64, 0.0);

    // --- Test 7: print dumps non-empty buckets only ---
    let h = histogram(&[(4, 10), (6, 2)]);
    let mut out = Vec::new();
    h.print(&mut out).expect("print");
    let text = String::from_utf8(out).expect("utf8");
    rp.compare_values(3.0, text.lines().count() as f64, 0.0);
    rp.compare_bool(true, text.contains("6:        2 (d +2)"));

    assert!(rp.cleanup(), "histogram regression test failed");
}
