//! stemscale-stem - Stem thickness measurement
//!
//! Estimates the typical thickness of note stems on a binarized music page
//! from the length histogram of its horizontal foreground runs, once the
//! other thin vertical structures (barlines, connectors, system headers)
//! have been erased.
//!
//! # Quick Start
//!
//! ```no_run
//! use stemscale_core::{Pix, PixelDepth};
//! use stemscale_sheet::{Picture, Scale, Sheet, SourceKey};
//! use stemscale_stem::{StemScaler, StemScalerOptions};
//!
//! let page = Pix::new(800, 600, PixelDepth::Bit1).unwrap();
//! let picture = Picture::new(800, 600)
//!     .with_source(SourceKey::NoStaff, page)
//!     .unwrap();
//! let sheet = Sheet::new("page-1", picture, Scale::new(20, 3, 5).unwrap());
//!
//! let mut scaler = StemScaler::new(&sheet, StemScalerOptions::default()).unwrap();
//! let stem = scaler.retrieve_stem_width().unwrap();
//! println!("{}: {}", sheet.id(), stem);
//! ```

mod cleaner;
mod error;
mod keeper;
pub mod options;
pub mod plot;
pub mod scaler;
pub mod watch;

pub use error::{StemError, StemResult};
pub use options::StemScalerOptions;
pub use scaler::{StemScale, StemScaler};
pub use watch::StopWatch;

// Re-export the sheet model for convenience
pub use stemscale_sheet;
