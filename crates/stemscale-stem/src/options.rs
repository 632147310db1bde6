//! Stem scaler configuration

use std::path::PathBuf;

use stemscale_sheet::Shape;

use crate::{StemError, StemResult};

/// Largest accepted header margin, in interlines
pub const MAX_HEADER_VERTICAL_MARGIN: f64 = 100.0;

/// Largest accepted histogram cutoff, in pixels
pub const MAX_COUNTABLE_RUN_LENGTH: u32 = 4096;

/// Options for stem thickness measurement
#[derive(Debug, Clone, PartialEq)]
pub struct StemScalerOptions {
    /// Log the timing breakdown of each measurement (default: false)
    pub print_timing: bool,

    /// Write the erased working image to `debug_dir` (default: false)
    pub keep_debug_image: bool,

    /// Directory for diagnostic images (default: ".")
    pub debug_dir: PathBuf,

    /// Erase the header area at the start of each system (default: true)
    pub erase_header: bool,

    /// Margin erased above and below a system header, in interlines
    /// (default: 2.0)
    pub header_vertical_margin: f64,

    /// Fraction of the histogram area a bucket must exceed to seed or
    /// extend a peak (default: 0.1)
    pub min_value_ratio: f64,

    /// Fraction of the histogram area from which a count step counts as a
    /// steep slope (default: 0.05)
    pub min_derivative_ratio: f64,

    /// Minimum fraction of the histogram area a peak must hold
    /// (default: 0.1)
    pub min_gain_ratio: f64,

    /// Fallback stem thickness as a ratio of the foreground run statistics
    /// (default: 1.0)
    pub stem_as_fore_ratio: f64,

    /// Horizontal runs longer than this are not counted (default: 20)
    pub max_countable_run_length: u32,

    /// Shapes painted out before measuring (default: thick and thin
    /// barlines and connectors)
    pub erased_shapes: Vec<Shape>,

    /// Grade from which a non-structural shape may be erased (default: 0.5)
    pub min_hide_grade: f64,
}

impl Default for StemScalerOptions {
    fn default() -> Self {
        Self {
            print_timing: false,
            keep_debug_image: false,
            debug_dir: PathBuf::from("."),
            erase_header: true,
            header_vertical_margin: 2.0,
            min_value_ratio: 0.1,
            min_derivative_ratio: 0.05,
            min_gain_ratio: 0.1,
            stem_as_fore_ratio: 1.0,
            max_countable_run_length: 20,
            erased_shapes: Shape::stem_like().to_vec(),
            min_hide_grade: 0.5,
        }
    }
}

impl StemScalerOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_print_timing(mut self, print: bool) -> Self {
        self.print_timing = print;
        self
    }

    /// Keep the erased working image as `<sheet-id>.stem.png` in `dir`
    pub fn with_debug_image(mut self, dir: impl Into<PathBuf>) -> Self {
        self.keep_debug_image = true;
        self.debug_dir = dir.into();
        self
    }

    pub fn with_erase_header(mut self, erase: bool) -> Self {
        self.erase_header = erase;
        self
    }

    pub fn with_header_vertical_margin(mut self, interlines: f64) -> Self {
        self.header_vertical_margin = interlines;
        self
    }

    pub fn with_min_value_ratio(mut self, ratio: f64) -> Self {
        self.min_value_ratio = ratio;
        self
    }

    pub fn with_min_derivative_ratio(mut self, ratio: f64) -> Self {
        self.min_derivative_ratio = ratio;
        self
    }

    pub fn with_min_gain_ratio(mut self, ratio: f64) -> Self {
        self.min_gain_ratio = ratio;
        self
    }

    pub fn with_stem_as_fore_ratio(mut self, ratio: f64) -> Self {
        self.stem_as_fore_ratio = ratio;
        self
    }

    pub fn with_max_countable_run_length(mut self, length: u32) -> Self {
        self.max_countable_run_length = length;
        self
    }

    pub fn with_erased_shapes(mut self, shapes: impl IntoIterator<Item = Shape>) -> Self {
        self.erased_shapes = shapes.into_iter().collect();
        self
    }

    pub fn with_min_hide_grade(mut self, grade: f64) -> Self {
        self.min_hide_grade = grade;
        self
    }

    /// Validate options
    pub fn validate(&self) -> StemResult<()> {
        for (name, value) in [
            ("min_value_ratio", self.min_value_ratio),
            ("min_derivative_ratio", self.min_derivative_ratio),
            ("min_gain_ratio", self.min_gain_ratio),
            ("min_hide_grade", self.min_hide_grade),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(StemError::InvalidParameter(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        if self.stem_as_fore_ratio.is_nan() || self.stem_as_fore_ratio <= 0.0 {
            return Err(StemError::InvalidParameter(
                "stem_as_fore_ratio must be positive".to_string(),
            ));
        }
        if !(1..=MAX_COUNTABLE_RUN_LENGTH).contains(&self.max_countable_run_length) {
            return Err(StemError::InvalidParameter(format!(
                "max_countable_run_length must be in 1..={MAX_COUNTABLE_RUN_LENGTH}, got {}",
                self.max_countable_run_length
            )));
        }
        if !(0.0..=MAX_HEADER_VERTICAL_MARGIN).contains(&self.header_vertical_margin) {
            return Err(StemError::InvalidParameter(format!(
                "header_vertical_margin must be in [0, {MAX_HEADER_VERTICAL_MARGIN}], got {}",
                self.header_vertical_margin
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = StemScalerOptions::default();
        assert!(!opts.print_timing);
        assert!(!opts.keep_debug_image);
        assert!(opts.erase_header);
        assert_eq!(opts.header_vertical_margin, 2.0);
        assert_eq!(opts.max_countable_run_length, 20);
        assert_eq!(opts.erased_shapes.len(), 4);
        assert!(!opts.erased_shapes.contains(&Shape::Bracket));
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let opts = StemScalerOptions::new()
            .with_erase_header(false)
            .with_debug_image("/tmp/stems")
            .with_max_countable_run_length(12)
            .with_erased_shapes([Shape::Brace]);
        assert!(!opts.erase_header);
        assert!(opts.keep_debug_image);
        assert_eq!(opts.debug_dir, PathBuf::from("/tmp/stems"));
        assert_eq!(opts.max_countable_run_length, 12);
        assert_eq!(opts.erased_shapes, vec![Shape::Brace]);
    }

    #[test]
    fn test_validate() {
        let bad = [
            StemScalerOptions::new().with_min_value_ratio(1.5),
            StemScalerOptions::new().with_min_gain_ratio(-0.1),
            StemScalerOptions::new().with_min_derivative_ratio(f64::NAN),
            StemScalerOptions::new().with_stem_as_fore_ratio(0.0),
            StemScalerOptions::new().with_max_countable_run_length(0),
            StemScalerOptions::new().with_max_countable_run_length(MAX_COUNTABLE_RUN_LENGTH + 1),
            StemScalerOptions::new().with_max_countable_run_length(u32::MAX),
            StemScalerOptions::new().with_header_vertical_margin(-1.0),
            StemScalerOptions::new().with_header_vertical_margin(f64::INFINITY),
            StemScalerOptions::new().with_header_vertical_margin(2.0e8),
            StemScalerOptions::new().with_header_vertical_margin(f64::NAN),
            StemScalerOptions::new().with_min_hide_grade(2.0),
        ];
        for opts in bad {
            assert!(
                matches!(opts.validate(), Err(StemError::InvalidParameter(_))),
                "{opts:?}"
            );
        }
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let opts = StemScalerOptions::new()
            .with_header_vertical_margin(MAX_HEADER_VERTICAL_MARGIN)
            .with_max_countable_run_length(MAX_COUNTABLE_RUN_LENGTH);
        assert!(opts.validate().is_ok());
        assert!(StemScalerOptions::new().with_header_vertical_margin(0.0).validate().is_ok());
    }
}
