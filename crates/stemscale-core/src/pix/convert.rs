//! Depth conversion
//!
//! Conversions between the binary buffers used for run extraction and the
//! gray working images that shapes are painted on.

use super::{Pix, PixMut, PixelDepth, get_data_bit, get_data_byte, set_data_bit, set_data_byte};
use crate::error::{Error, Result};

impl Pix {
    /// Convert a 1 bpp image to 8 bpp.
    ///
    /// Background pixels (0) become `val0`, foreground pixels (1) become
    /// `val1`. The usual call for a paintable gray page is
    /// `convert_1_to_8(255, 0)`: white paper with black ink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if the image is not 1 bpp.
    pub fn convert_1_to_8(&self, val0: u8, val1: u8) -> Result<Pix> {
        if self.depth() != PixelDepth::Bit1 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        let (w, h) = (self.width(), self.height());
        let mut pixd = PixMut::new(w, h, PixelDepth::Bit8)?;
        pixd.set_text(self.text().map(str::to_string));
        for y in 0..h {
            let src = self.row_data(y);
            let dst = pixd.row_data_mut(y);
            for x in 0..w {
                let val = if get_data_bit(src, x) != 0 { val1 } else { val0 };
                set_data_byte(dst, x, u32::from(val));
            }
        }
        Ok(pixd.into())
    }

    /// Threshold an 8 bpp image to 1 bpp.
    ///
    /// Pixels with a value strictly below `thresh` become foreground (1),
    /// all others become background (0).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if the image is not 8 bpp and
    /// [`Error::InvalidParameter`] if `thresh` is outside `1..=255`.
    pub fn threshold_to_binary(&self, thresh: u32) -> Result<Pix> {
        if self.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        if thresh == 0 || thresh > 255 {
            return Err(Error::InvalidParameter(format!(
                "threshold must be in 1..=255, got {thresh}"
            )));
        }
        let (w, h) = (self.width(), self.height());
        let mut pixd = PixMut::new(w, h, PixelDepth::Bit1)?;
        pixd.set_text(self.text().map(str::to_string));
        for y in 0..h {
            let src = self.row_data(y);
            let dst = pixd.row_data_mut(y);
            for x in 0..w {
                if get_data_byte(src, x) < thresh {
                    set_data_bit(dst, x, 1);
                }
            }
        }
        Ok(pixd.into())
    }
}
