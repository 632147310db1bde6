//! Stemscale - Stem thickness measurement for music pages
//!
//! Measures how thick note stems are on a scanned, binarized music page.
//! Barlines, connectors and system headers are erased first; the lengths of
//! the remaining short horizontal runs are histogrammed, and the dominant
//! peak of that histogram gives the stem thickness. Pages without a clear
//! peak fall back to the page foreground statistics.
//!
//! # Example
//!
//! ```
//! use stemscale::sheet::{Picture, Scale, Sheet, SourceKey};
//! use stemscale::{Box, PixMut, PixelDepth, StemScale, StemScaler, StemScalerOptions};
//!
//! // A page crossed by one 4 pixel wide stroke
//! let mut page = PixMut::new(100, 50, PixelDepth::Bit1).unwrap();
//! page.fill_box_val(&Box::new_unchecked(40, 0, 4, 50), 1);
//! let picture = Picture::new(100, 50)
//!     .with_source(SourceKey::NoStaff, page.into())
//!     .unwrap();
//! let sheet = Sheet::new("demo", picture, Scale::new(20, 3, 5).unwrap());
//!
//! let mut scaler = StemScaler::new(&sheet, StemScalerOptions::default()).unwrap();
//! assert_eq!(scaler.measure().unwrap(), StemScale { main: 4, max: 4 });
//! ```

// Re-export core types (primary data structures used everywhere)
pub use stemscale_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use stemscale_io as io;
pub use stemscale_run as run;
pub use stemscale_sheet as sheet;
pub use stemscale_stem as stem;

pub use stemscale_stem::{StemError, StemResult, StemScale, StemScaler, StemScalerOptions};
