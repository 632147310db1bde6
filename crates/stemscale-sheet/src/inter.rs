//! Symbol interpretations and their footprints

use stemscale_core::{Box, Pix, Pta};

/// Area a symbol covers on the page
#[derive(Debug, Clone)]
pub enum Geometry {
    /// Axis-aligned rectangle
    Rect(Box),
    /// Closed polygon, vertices in pixel-edge coordinates
    Polygon(Pta),
    /// Straight segment between two pixel centers, with a thickness
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        thickness: f32,
    },
    /// 1 bpp glyph bitmap whose top-left corner sits at `(x, y)`
    Mask { mask: Pix, x: i32, y: i32 },
}

impl Geometry {
    /// Bounding rectangle of the footprint, `None` for an empty polygon.
    pub fn bounds(&self) -> Option<Box> {
        match self {
            Geometry::Rect(b) => Some(*b),
            Geometry::Polygon(pta) => {
                let (xmin, xmax, ymin, ymax) = pta.bounding_box()?;
                Some(Box::from_corners(
                    xmin.floor() as i32,
                    ymin.floor() as i32,
                    xmax.ceil() as i32,
                    ymax.ceil() as i32,
                ))
            }
            Geometry::Line {
                x1,
                y1,
                x2,
                y2,
                thickness,
            } => {
                let pad = thickness.max(1.0) / 2.0 + 0.5;
                Some(Box::from_corners(
                    (x1.min(*x2) + 0.5 - pad).floor() as i32,
                    (y1.min(*y2) + 0.5 - pad).floor() as i32,
                    (x1.max(*x2) + 0.5 + pad).ceil() as i32,
                    (y1.max(*y2) + 0.5 + pad).ceil() as i32,
                ))
            }
            Geometry::Mask { mask, x, y } => Some(Box::new_unchecked(
                *x,
                *y,
                mask.width() as i32,
                mask.height() as i32,
            )),
        }
    }
}

/// One symbol interpretation
#[derive(Debug, Clone)]
pub struct Inter {
    pub id: u32,
    pub shape: crate::Shape,
    pub geometry: Geometry,
    /// Recognition confidence in `[0, 1]`
    pub grade: f64,
    /// Set once the interpretation has been discarded
    pub deleted: bool,
}

impl Inter {
    pub fn new(id: u32, shape: crate::Shape, geometry: Geometry, grade: f64) -> Self {
        Self {
            id,
            shape,
            geometry,
            grade,
            deleted: false,
        }
    }

    /// Mark the interpretation as discarded
    pub fn delete(&mut self) {
        self.deleted = true;
    }
}

/// Symbol interpretation graph of a system
///
/// Only the vertex set is modelled; relations between interpretations do
/// not matter for erasure.
#[derive(Debug, Clone, Default)]
pub struct Sig {
    inters: Vec<Inter>,
}

impl Sig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_inter(&mut self, inter: Inter) {
        self.inters.push(inter);
    }

    /// All interpretations, deleted ones included
    pub fn inters(&self) -> &[Inter] {
        &self.inters
    }

    pub fn inter_mut(&mut self, id: u32) -> Option<&mut Inter> {
        self.inters.iter_mut().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.inters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inters.is_empty()
    }
}
