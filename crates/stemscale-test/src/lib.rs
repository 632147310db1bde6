//! stemscale-test - Regression test framework for stemscale
//!
//! Tests run in one of three modes, selected with `REGTEST_MODE`:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run without comparison, keeping outputs for inspection
//!
//! # Usage
//!
//! ```ignore
//! use stemscale_test::{RegParams, pages};
//!
//! let mut rp = RegParams::new("stem_scaler");
//! let page = pages::vertical_strokes(100, 50, &[(10, 4)]).unwrap();
//! rp.compare_values(200.0, page.count_pixels() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
pub mod pages;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use std::path::{Path, PathBuf};

/// Workspace root, two levels above this crate
fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Directory holding the reference images of `Compare` mode
pub fn golden_dir() -> String {
    workspace_root().join("tests/golden").display().to_string()
}

/// Directory receiving the images written by regression tests
pub fn regout_dir() -> String {
    workspace_root().join("tests/regout").display().to_string()
}
