//! Synthetic binary pages
//!
//! Builders for the small 1 bpp pages the regression tests measure.
//! Every builder returns black-on-white content: foreground pixels are 1.

use crate::TestResult;
use stemscale_core::{Box, Pix, PixMut, PixelDepth};

/// An all-background page
pub fn blank(width: u32, height: u32) -> TestResult<Pix> {
    Ok(PixMut::new(width, height, PixelDepth::Bit1)?.into())
}

/// A page crossed top to bottom by vertical strokes.
///
/// Each `(x, width)` pair is one stroke whose left edge is column `x`.
/// Strokes are clipped to the page.
pub fn vertical_strokes(width: u32, height: u32, strokes: &[(i32, i32)]) -> TestResult<Pix> {
    let rects: Vec<Box> = strokes
        .iter()
        .map(|&(x, w)| Box::new_unchecked(x, 0, w, height as i32))
        .collect();
    filled_rects(width, height, &rects)
}

/// A page with the given rectangles filled with foreground
pub fn filled_rects(width: u32, height: u32, rects: &[Box]) -> TestResult<Pix> {
    let mut pm = PixMut::new(width, height, PixelDepth::Bit1)?;
    for rect in rects {
        pm.fill_box_val(rect, 1);
    }
    Ok(pm.into())
}
