//! Stemscale Core - Basic data structures for binary page analysis
//!
//! This crate provides the fundamental data structures used throughout
//! the stemscale workspace:
//!
//! - [`Pix`] / [`PixMut`] - The image container (immutable / mutable)
//! - [`Box`] - Rectangle regions
//! - [`Pta`] - Point arrays, used for polygon footprints
//! - [`IntegerHistogram`] / [`Range`] - Integer-domain histogram and its peaks
//!
//! # Conventions
//!
//! Binary (1 bpp) images hold 1 for foreground (black) and 0 for
//! background. Gray (8 bpp) images hold 0 for black and 255 for white.

pub mod box_;
pub mod error;
pub mod histogram;
pub mod pix;
pub mod pta;

pub use box_::Box;
pub use error::{Error, Result};
pub use histogram::{IntegerHistogram, PeakParams, Range};
pub use pix::{Color, Pix, PixMut, PixelDepth};
pub use pta::Pta;

/// Color channel helpers for 32-bit RGBA pixels.
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT) | ((g as u32) << GREEN_SHIFT) | ((b as u32) << BLUE_SHIFT) | 255
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (
            ((pixel >> RED_SHIFT) & 0xff) as u8,
            ((pixel >> GREEN_SHIFT) & 0xff) as u8,
            ((pixel >> BLUE_SHIFT) & 0xff) as u8,
        )
    }

}
