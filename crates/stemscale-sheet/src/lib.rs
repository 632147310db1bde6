//! stemscale-sheet - The page model around the stem scaler
//!
//! A [`Sheet`] is one scanned page. It owns a [`Picture`] (the page
//! rasters, keyed by [`SourceKey`]), the [`Scale`] statistics measured on
//! it, and its [`SystemInfo`]s. Each system carries the symbol
//! interpretations ([`Inter`]) recognized so far in its [`Sig`].
//!
//! [`PageCleaner`] paints symbol footprints and system headers out of a
//! gray working image so that later measurements do not see them.

mod cleaner;
mod error;
mod inter;
mod picture;
mod shape;
mod sheet;
mod system;

pub use cleaner::PageCleaner;
pub use error::{SheetError, SheetResult};
pub use inter::{Geometry, Inter, Sig};
pub use picture::{Picture, SourceKey};
pub use shape::Shape;
pub use sheet::{Scale, Sheet};
pub use system::{SystemHeader, SystemInfo};
