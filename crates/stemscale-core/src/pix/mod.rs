//! Page rasters
//!
//! [`Pix`] holds the binary and gray page buffers of the stem measurement
//! pipeline, and the RGB charts it renders.
//!
//! # Pixel layout
//!
//! - Image data is stored in 32-bit words
//! - Every row starts on a 32-bit boundary
//! - Pixels are packed MSB to LSB within each word
//! - For 32-bit images, color order is RGBA (red in MSB)
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;
pub mod convert;
pub mod graphics;

pub use access::*;
pub use graphics::Color;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Bits per pixel: binary buffers, gray working images, RGB charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// 1-bit binary image
    Bit1 = 1,
    /// 8-bit grayscale
    Bit8 = 8,
    /// 32-bit RGB
    Bit32 = 32,
}

impl PixelDepth {
    /// Depth for a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] if `bits` is not 1, 8, or 32.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            1 => Ok(PixelDepth::Bit1),
            8 => Ok(PixelDepth::Bit8),
            32 => Ok(PixelDepth::Bit32),
            _ => Err(Error::InvalidDepth(bits)),
        }
    }

    pub fn bits(self) -> u32 {
        self as u32
    }
}

/// Raster storage shared by [`Pix`] and [`PixMut`]
#[derive(Debug, Clone)]
struct PixData {
    width: u32,
    height: u32,
    depth: PixelDepth,
    /// 32-bit words per row, padding included
    wpl: u32,
    /// Free-form caption, used as a chart title
    text: Option<String>,
    data: Vec<u32>,
}

impl PixData {
    fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        let too_large = || Error::InvalidDimension { width, height };
        if width == 0 || height == 0 {
            return Err(too_large());
        }
        let wpl = compute_wpl(width, depth).ok_or_else(too_large)?;
        let words = usize::try_from(u64::from(wpl) * u64::from(height)).map_err(|_| too_large())?;
        Ok(Self {
            width,
            height,
            depth,
            wpl,
            text: None,
            data: vec![0; words],
        })
    }
}

/// Words per row for `width` pixels of `depth`, `None` past `u32::MAX`.
#[inline]
fn compute_wpl(width: u32, depth: PixelDepth) -> Option<u32> {
    let bits = u64::from(width) * u64::from(depth.bits());
    u32::try_from(bits.div_ceil(32)).ok()
}

/// Immutable page raster
///
/// Cloning shares the pixels.
///
/// # Examples
///
/// ```
/// use stemscale_core::{Pix, PixelDepth};
///
/// let pix = Pix::new(640, 480, PixelDepth::Bit1).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// assert_eq!(pix.count_pixels(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create an all-zero raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        Ok(Pix {
            inner: Arc::new(PixData::new(width, height, depth)?),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// 32-bit words per row
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Caption attached to the raster, if any
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.inner.text.as_deref()
    }

    /// All packed words, row after row
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Packed words of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &self.inner.data[start..end]
    }

    /// Same width, height and depth
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.depth == other.inner.depth
    }

    /// Same geometry and the same pixel values; row padding is ignored.
    pub fn equals(&self, other: &Pix) -> bool {
        if !self.sizes_equal(other) {
            return false;
        }
        (0..self.height()).all(|y| self.row_data_masked(y).eq(other.row_data_masked(y)))
    }

    /// Row words with the padding bits past `width` cleared.
    fn row_data_masked(&self, y: u32) -> impl Iterator<Item = u32> + '_ {
        let valid_bits = u64::from(self.width()) * u64::from(self.depth().bits());
        let wpl = self.wpl() as usize;
        let tail = (valid_bits % 32) as u32;
        self.row_data(y).iter().enumerate().map(move |(i, &word)| {
            if i + 1 == wpl && tail != 0 {
                word & (u32::MAX << (32 - tail))
            } else {
                word
            }
        })
    }

    /// Count the foreground pixels of a 1 bpp image.
    ///
    /// Returns 0 for other depths.
    pub fn count_pixels(&self) -> u64 {
        if self.depth() != PixelDepth::Bit1 {
            return 0;
        }
        (0..self.height())
            .map(|y| {
                self.row_data_masked(y)
                    .map(|w| u64::from(w.count_ones()))
                    .sum::<u64>()
            })
            .sum()
    }

    /// Take the pixels for writing, without copying.
    ///
    /// Gives the raster back unchanged while other clones share it.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Writable copy of the pixels
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: self.inner.as_ref().clone(),
        }
    }
}

/// Writable page raster, frozen into a [`Pix`] with `into()`
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Create an all-zero raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        Ok(PixMut {
            inner: PixData::new(width, height, depth)?,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Attach or clear the caption.
    pub fn set_text(&mut self, text: Option<String>) {
        self.inner.text = text;
    }

    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &self.inner.data[start..end]
    }

    /// Writable packed words of row `y`
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = (y * self.inner.wpl) as usize;
        let end = start + self.inner.wpl as usize;
        &mut self.inner.data[start..end]
    }

    /// Give every pixel the value `val`.
    pub fn set_all(&mut self, val: u32) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set_pixel_unchecked(x, y, val);
            }
        }
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}
