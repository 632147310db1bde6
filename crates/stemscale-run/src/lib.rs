//! stemscale-run - Run-length tables over binary images
//!
//! A *run* is a maximal sequence of foreground pixels along one scanline.
//! [`RunTableFactory`] scans a 1 bpp [`Pix`](stemscale_core::Pix) and
//! collects its runs per row (horizontal) or per column (vertical) into a
//! [`RunTable`].
//!
//! Horizontal runs crossing a vertical stroke have the stroke's width as
//! their length, which is what the stem scaler histograms.

mod error;
mod factory;
mod table;

pub use error::{RunError, RunResult};
pub use factory::RunTableFactory;
pub use table::{Orientation, Run, RunTable};
