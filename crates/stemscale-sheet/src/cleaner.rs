//! Footprint erasure on gray working images
//!
//! Erasing means painting white: on an 8 bpp page that is 255, on a 1 bpp
//! page it clears the foreground bit. Everything is clipped to the image.

use log::trace;
use stemscale_core::pix::graphics::generate_thick_segment_polygon;
use stemscale_core::{Color, PixMut};

use crate::{Geometry, Inter, SheetError, SheetResult, SystemInfo};

/// Erases symbols and system headers from a page image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCleaner {
    min_hide_grade: f64,
}

impl Default for PageCleaner {
    fn default() -> Self {
        Self {
            min_hide_grade: 0.5,
        }
    }
}

impl PageCleaner {
    /// # Errors
    ///
    /// Returns [`SheetError::InvalidParameter`] if `min_hide_grade` is not
    /// in `[0, 1]`.
    pub fn new(min_hide_grade: f64) -> SheetResult<Self> {
        if !(0.0..=1.0).contains(&min_hide_grade) {
            return Err(SheetError::InvalidParameter(format!(
                "min_hide_grade must be in [0, 1], got {min_hide_grade}"
            )));
        }
        Ok(Self { min_hide_grade })
    }

    pub fn min_hide_grade(&self) -> f64 {
        self.min_hide_grade
    }

    /// Whether `inter` is trusted enough to be painted out.
    ///
    /// Structural shapes always qualify; other shapes need a grade of at
    /// least `min_hide_grade`.
    pub fn can_hide(&self, inter: &Inter) -> bool {
        inter.shape.is_structural() || inter.grade >= self.min_hide_grade
    }

    /// Paint one footprint white.
    pub fn paint_footprint(&self, pix: &mut PixMut, geometry: &Geometry) -> SheetResult<()> {
        match geometry {
            Geometry::Rect(b) => pix.fill_box_color(b, Color::WHITE),
            Geometry::Polygon(pta) => pix.fill_polygon_color(pta, Color::WHITE)?,
            Geometry::Line {
                x1,
                y1,
                x2,
                y2,
                thickness,
            } => {
                let quad = generate_thick_segment_polygon(*x1, *y1, *x2, *y2, *thickness);
                pix.fill_polygon_color(&quad, Color::WHITE)?;
            }
            Geometry::Mask { mask, x, y } => pix.paint_mask_color(mask, *x, *y, Color::WHITE)?,
        }
        Ok(())
    }

    /// Paint the footprint of `inter` white.
    pub fn erase_inter(&self, pix: &mut PixMut, inter: &Inter) -> SheetResult<()> {
        trace!("erasing {} #{} at {:?}", inter.shape, inter.id, inter.geometry.bounds());
        self.paint_footprint(pix, &inter.geometry)
    }

    /// Paint the header area of `system` white, grown vertically by
    /// `margin` pixels above and below.
    ///
    /// Returns `false` when the system has no header.
    pub fn erase_system_header(&self, pix: &mut PixMut, system: &SystemInfo, margin: i32) -> bool {
        let Some(header) = system.header else {
            return false;
        };
        let area = header.area(margin);
        trace!("erasing header of system #{} over {:?}", system.id, area);
        pix.fill_box_color(&area, Color::WHITE);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Shape, SystemHeader};
    use stemscale_core::{Box, Pix, PixelDepth, Pta};

    fn black_page(w: u32, h: u32) -> PixMut {
        let mut pm = PixMut::new(w, h, PixelDepth::Bit8).unwrap();
        pm.set_all(0);
        pm
    }

    fn white_count(pm: &PixMut) -> usize {
        (0..pm.height())
            .flat_map(|y| (0..pm.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| pm.get_pixel_unchecked(x, y) == 255)
            .count()
    }

    fn inter(shape: Shape, grade: f64) -> Inter {
        Inter::new(1, shape, Geometry::Rect(Box::new_unchecked(0, 0, 1, 1)), grade)
    }

    #[test]
    fn test_can_hide() {
        let cleaner = PageCleaner::default();
        assert!(cleaner.can_hide(&inter(Shape::ThinBarline, 0.0)));
        assert!(cleaner.can_hide(&inter(Shape::Brace, 0.1)));
        assert!(cleaner.can_hide(&inter(Shape::Stem, 0.5)));
        assert!(!cleaner.can_hide(&inter(Shape::Stem, 0.49)));
        assert!(PageCleaner::new(1.5).is_err());
    }

    #[test]
    fn test_paint_rect_and_line() {
        let cleaner = PageCleaner::default();
        let mut pm = black_page(20, 10);
        cleaner
            .paint_footprint(&mut pm, &Geometry::Rect(Box::new_unchecked(18, 8, 5, 5)))
            .unwrap();
        assert_eq!(white_count(&pm), 4);

        let mut pm = black_page(20, 10);
        let line = Geometry::Line {
            x1: 5.0,
            y1: 0.0,
            x2: 5.0,
            y2: 9.0,
            thickness: 3.0,
        };
        cleaner.paint_footprint(&mut pm, &line).unwrap();
        assert_eq!(white_count(&pm), 30);
        assert_eq!(pm.get_pixel(4, 0), Some(255));
        assert_eq!(pm.get_pixel(6, 9), Some(255));
        assert_eq!(pm.get_pixel(7, 5), Some(0));
    }

    #[test]
    fn test_paint_polygon_and_mask() {
        let cleaner = PageCleaner::default();
        let mut pm = black_page(10, 10);
        let square: Pta = [(2.0, 2.0), (6.0, 2.0), (6.0, 5.0), (2.0, 5.0)]
            .into_iter()
            .collect();
        cleaner
            .paint_footprint(&mut pm, &Geometry::Polygon(square))
            .unwrap();
        assert_eq!(white_count(&pm), 12);

        let mut mask = PixMut::new(3, 3, PixelDepth::Bit1).unwrap();
        mask.set_pixel(0, 0, 1).unwrap();
        mask.set_pixel(2, 2, 1).unwrap();
        let mask: Pix = mask.into();
        let mut pm = black_page(10, 10);
        cleaner
            .paint_footprint(&mut pm, &Geometry::Mask { mask, x: 8, y: 1 })
            .unwrap();
        assert_eq!(white_count(&pm), 1);
        assert_eq!(pm.get_pixel(8, 1), Some(255));
    }

    #[test]
    fn test_erase_system_header() {
        let cleaner = PageCleaner::default();
        let mut pm = black_page(30, 30);
        let bare = SystemInfo::new(1);
        assert!(!cleaner.erase_system_header(&mut pm, &bare, 4));
        assert_eq!(white_count(&pm), 0);

        let system = SystemInfo::new(2).with_header(SystemHeader::new(5, 10, 10, 20));
        assert!(cleaner.erase_system_header(&mut pm, &system, 4));
        // rows 6..24, columns 5..10
        assert_eq!(white_count(&pm), 18 * 5);

        let mut pm = black_page(30, 30);
        assert!(cleaner.erase_system_header(&mut pm, &system, 15));
        // clipped to rows 0..30
        assert_eq!(white_count(&pm), 30 * 5);
    }
}
