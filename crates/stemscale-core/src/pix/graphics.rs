//! Graphics rendering functions
//!
//! This module provides functions for drawing on images:
//! - Lines (straight, with variable width)
//! - Filled boxes
//! - Filled polygons (even-odd scanline fill)
//! - Binary masks stamped at an offset
//!
//! All rendering clips silently against the image bounds.

use super::{Pix, PixMut, PixelDepth};
use crate::box_::Box;
use crate::error::{Error, Result};
use crate::pta::Pta;

/// RGB color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red color
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    /// Blue color
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    /// Convert to grayscale value (0-255)
    pub fn to_gray(&self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }

    /// Compose as 32-bit RGBA pixel
    pub fn to_pixel32(&self) -> u32 {
        crate::color::compose_rgb(self.r, self.g, self.b)
    }

    /// Pixel value of this color for an image of the given depth.
    ///
    /// For 1 bpp images, dark colors map to foreground (1).
    pub fn to_pixel(&self, depth: PixelDepth) -> u32 {
        match depth {
            PixelDepth::Bit1 => u32::from(self.to_gray() < 128),
            PixelDepth::Bit8 => self.to_gray() as u32,
            PixelDepth::Bit32 => self.to_pixel32(),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// =============================================================================
// Point array generation helpers
// =============================================================================

/// Generate a point array for a line using Bresenham's integer algorithm.
///
/// The line connects `(x1, y1)` to `(x2, y2)` with 8-connectivity.
pub fn generate_line_pta(x1: i32, y1: i32, x2: i32, y2: i32) -> Pta {
    if x1 == x2 && y1 == y2 {
        let mut pta = Pta::with_capacity(1);
        pta.push(x1 as f32, y1 as f32);
        return pta;
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1i32 } else { -1 };
    let sy = if y2 > y1 { 1i32 } else { -1 };

    let npts = dx.max(dy) + 1;
    let mut pta = Pta::with_capacity(npts as usize);

    let mut x = x1;
    let mut y = y1;

    if dx >= dy {
        let mut err = dx / 2;
        for _ in 0..npts {
            pta.push(x as f32, y as f32);
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        let mut err = dy / 2;
        for _ in 0..npts {
            pta.push(x as f32, y as f32);
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    pta
}

/// Generate a point array for a line with specified width.
///
/// For width > 1, parallel lines are added alternately on both sides,
/// offset along the minor axis of the line.
pub fn generate_wide_line_pta(x1: i32, y1: i32, x2: i32, y2: i32, width: u32) -> Pta {
    let width = width.max(1);
    let base = generate_line_pta(x1, y1, x2, y2);
    if width == 1 {
        return base;
    }

    let is_horizontal = (x2 - x1).abs() > (y2 - y1).abs();
    let mut result = Pta::with_capacity(base.len() * width as usize);
    for (x, y) in base.iter() {
        result.push(x, y);
    }

    for i in 1..width {
        let offset = ((i + 1) / 2) as i32;
        let offset = if i % 2 == 1 { -offset } else { offset };
        let parallel = if is_horizontal {
            generate_line_pta(x1, y1 + offset, x2, y2 + offset)
        } else {
            generate_line_pta(x1 + offset, y1, x2 + offset, y2)
        };
        for (x, y) in parallel.iter() {
            result.push(x, y);
        }
    }

    result
}

/// Build the quadrilateral covering a segment of the given thickness.
///
/// Vertices are in pixel-edge coordinates: the segment runs between the
/// two pixel centers `(x1 + 0.5, y1 + 0.5)` and `(x2 + 0.5, y2 + 0.5)`, and
/// the quadrilateral extends half a pixel past each end.
pub fn generate_thick_segment_polygon(x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32) -> Pta {
    let (cx1, cy1, cx2, cy2) = (x1 + 0.5, y1 + 0.5, x2 + 0.5, y2 + 0.5);
    let (dx, dy) = (cx2 - cx1, cy2 - cy1);
    let len = (dx * dx + dy * dy).sqrt();
    // Unit direction; a degenerate segment behaves as a vertical one
    let (ux, uy) = if len > f32::EPSILON {
        (dx / len, dy / len)
    } else {
        (0.0, 1.0)
    };
    let half = thickness.max(1.0) / 2.0;
    let (nx, ny) = (-uy * half, ux * half);
    let (ex, ey) = (ux * 0.5, uy * 0.5);
    [
        (cx1 - ex + nx, cy1 - ey + ny),
        (cx2 + ex + nx, cy2 + ey + ny),
        (cx2 + ex - nx, cy2 + ey - ny),
        (cx1 - ex - nx, cy1 - ey - ny),
    ]
    .into_iter()
    .collect()
}

// =============================================================================
// PixMut rendering implementations
// =============================================================================

impl PixMut {
    /// Render a point array with a specific color.
    ///
    /// For non-32bpp images, the color is converted to grayscale.
    pub fn render_pta_color(&mut self, pta: &Pta, color: Color) {
        let (w, h) = (self.width() as i32, self.height() as i32);
        let val = color.to_pixel(self.depth());

        for (x, y) in pta.iter() {
            let (xi, yi) = (x as i32, y as i32);
            if xi < 0 || xi >= w || yi < 0 || yi >= h {
                continue;
            }
            self.set_pixel_unchecked(xi as u32, yi as u32, val);
        }
    }

    /// Render a line from (x1, y1) to (x2, y2) with a specific color.
    pub fn render_line_color(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u32,
        color: Color,
    ) {
        let pta = generate_wide_line_pta(x1, y1, x2, y2, width);
        self.render_pta_color(&pta, color);
    }

    /// Fill a rectangle with a raw pixel value.
    ///
    /// The part of the box outside the image is ignored.
    pub fn fill_box_val(&mut self, b: &Box, val: u32) {
        let Some(clipped) = b.clip(self.width(), self.height()) else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.set_pixel_unchecked(x as u32, y as u32, val);
            }
        }
    }

    /// Fill a rectangle with a specific color.
    pub fn fill_box_color(&mut self, b: &Box, color: Color) {
        self.fill_box_val(b, color.to_pixel(self.depth()));
    }

    /// Fill the interior of a polygon with a specific color.
    ///
    /// Vertices are in pixel-edge coordinates; a pixel is filled when its
    /// center lies inside the polygon according to the even-odd rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if fewer than 3 vertices are given.
    pub fn fill_polygon_color(&mut self, pta: &Pta, color: Color) -> Result<()> {
        let n = pta.len();
        if n < 3 {
            return Err(Error::InvalidParameter(
                "polygon requires at least 3 vertices".to_string(),
            ));
        }
        let val = color.to_pixel(self.depth());
        let (w, h) = (self.width() as i32, self.height() as i32);
        let Some((_, _, fymin, fymax)) = pta.bounding_box() else {
            return Ok(());
        };
        let verts: Vec<(f32, f32)> = pta.iter().collect();

        let row_first = (fymin - 0.5).ceil().max(0.0) as i32;
        let row_last = ((fymax - 0.5).floor() as i32).min(h - 1);
        let mut xs: Vec<f32> = Vec::new();

        for row in row_first..=row_last {
            let fy = row as f32 + 0.5;
            xs.clear();
            for i in 0..n {
                let (x0, y0) = verts[i];
                let (x1, y1) = verts[(i + 1) % n];
                let (y_lo, y_hi, x_lo, x_hi) = if y0 <= y1 {
                    (y0, y1, x0, x1)
                } else {
                    (y1, y0, x1, x0)
                };
                if fy > y_lo && fy <= y_hi && (y_hi - y_lo).abs() > f32::EPSILON {
                    let t = (fy - y_lo) / (y_hi - y_lo);
                    xs.push(x_lo + t * (x_hi - x_lo));
                }
            }
            xs.sort_by(f32::total_cmp);
            for pair in xs.chunks_exact(2) {
                let x_start = ((pair[0] - 0.5).ceil() as i32).max(0);
                let x_end = ((pair[1] - 0.5).floor() as i32).min(w - 1);
                for x in x_start..=x_end {
                    self.set_pixel_unchecked(x as u32, row as u32, val);
                }
            }
        }

        Ok(())
    }

    /// Stamp the foreground of a 1 bpp mask with a specific color.
    ///
    /// The mask's top-left corner is placed at `(x0, y0)`; only mask pixels
    /// set to 1 are painted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if the mask is not 1 bpp.
    pub fn paint_mask_color(&mut self, mask: &Pix, x0: i32, y0: i32, color: Color) -> Result<()> {
        if mask.depth() != PixelDepth::Bit1 {
            return Err(Error::UnsupportedDepth(mask.depth().bits()));
        }
        let val = color.to_pixel(self.depth());
        let footprint = Box::new_unchecked(x0, y0, mask.width() as i32, mask.height() as i32);
        let Some(clipped) = footprint.clip(self.width(), self.height()) else {
            return Ok(());
        };
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if mask.get_pixel_unchecked((x - x0) as u32, (y - y0) as u32) != 0 {
                    self.set_pixel_unchecked(x as u32, y as u32, val);
                }
            }
        }
        Ok(())
    }
}
