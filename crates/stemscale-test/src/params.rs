//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use stemscale_core::Pix;
use stemscale_io::ImageFormat;
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running check index, the mode and every
/// failure seen so far. Checks never panic; call [`RegParams::cleanup`] at
/// the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "stem_scaler")
    pub test_name: String,
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    success: bool,
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters, configured from
    /// `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Record a boolean condition as a check
    pub fn compare_bool(&mut self, expected: bool, actual: bool) -> bool {
        self.compare_values(f64::from(u8::from(expected)), f64::from(u8::from(actual)), 0.0)
    }

    /// Compare two images for exact equality
    ///
    /// Dimensions and depth must match, then every pixel is compared.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        if !pix1.sizes_equal(pix2) || pix1.depth() != pix2.depth() {
            self.fail(format!(
                "Failure in {}_reg: pix comparison for index {} - dimension mismatch",
                self.test_name, self.index
            ));
            return false;
        }

        if let Some((x, y)) = first_difference(pix1, pix2) {
            self.fail(format!(
                "Failure in {}_reg: pix comparison for index {} - pixel mismatch at ({}, {})",
                self.test_name, self.index, x, y
            ));
            return false;
        }

        true
    }

    /// Write an image to the regout directory and check it against its
    /// golden counterpart according to the current mode.
    pub fn write_pix_and_check(&mut self, pix: &Pix, format: ImageFormat) -> TestResult<()> {
        self.index += 1;
        fs::create_dir_all(regout_dir())?;

        let local_path = format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            format.extension()
        );

        stemscale_io::write_image(pix, &local_path, format).map_err(|e| {
            TestError::ImageWrite {
                path: local_path.clone(),
                message: e.to_string(),
            }
        })?;

        self.check_file(&local_path, pix)
    }

    fn check_file(&mut self, local_path: &str, pix: &Pix) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                fs::create_dir_all(golden_dir())?;
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => match stemscale_io::read_image(&golden_path) {
                Ok(golden) => {
                    if !golden.sizes_equal(pix) || first_difference(&golden, pix).is_some() {
                        self.fail(format!(
                            "Failure in {}_reg, index {}: comparing {} with {}",
                            self.test_name, self.index, local_path, golden_path
                        ));
                    }
                }
                Err(_) => {
                    self.fail(format!(
                        "Failure in {}_reg: golden file not found: {}",
                        self.test_name, golden_path
                    ));
                }
            },
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Report results and consume the parameters
    ///
    /// Returns `true` if every check passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

fn first_difference(pix1: &Pix, pix2: &Pix) -> Option<(u32, u32)> {
    (0..pix1.height())
        .flat_map(|y| (0..pix1.width()).map(move |x| (x, y)))
        .find(|&(x, y)| pix1.get_pixel(x, y) != pix2.get_pixel(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stemscale_core::{PixMut, PixelDepth};

    #[test]
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse("GENERATE"), RegTestMode::Generate);
        assert_eq!(RegTestMode::parse("display"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
    }

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("params");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.index(), 3);
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_pix() {
        let a: Pix = PixMut::new(4, 4, PixelDepth::Bit1).unwrap().into();
        let mut bm = PixMut::new(4, 4, PixelDepth::Bit1).unwrap();
        bm.set_pixel(2, 3, 1).unwrap();
        let b: Pix = bm.into();

        let mut rp = RegParams::new("params_pix");
        assert!(rp.compare_pix(&a, &a.clone()));
        assert!(!rp.compare_pix(&a, &b));
        assert!(rp.failures()[0].contains("(2, 3)"));
        assert!(!rp.cleanup());
    }
}
