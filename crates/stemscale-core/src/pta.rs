//! Pta - Point arrays
//!
//! Arrays of floating-point coordinate pairs, used for polygon footprints
//! and rendered lines.
//!
//! # Storage layout
//!
//! Points are stored as separate X and Y vectors (SoA layout).

/// Array of points.
///
/// Stores 2D points as parallel x/y coordinate vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pta {
    /// X coordinates
    x: Vec<f32>,
    /// Y coordinates
    y: Vec<f32>,
}

impl Pta {
    /// Create a new empty Pta.
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Create a Pta with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Get a point by index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<(f32, f32)> {
        Some((*self.x.get(index)?, *self.y.get(index)?))
    }

    /// Add a point.
    pub fn push(&mut self, x: f32, y: f32) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Iterate over the points.
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Get the bounding box as `(xmin, xmax, ymin, ymax)`.
    ///
    /// Returns `None` for an empty array.
    pub fn bounding_box(&self) -> Option<(f32, f32, f32, f32)> {
        let mut it = self.iter();
        let (x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(xmin, xmax, ymin, ymax), (x, y)| {
            (xmin.min(x), xmax.max(x), ymin.min(y), ymax.max(y))
        }))
    }
}

impl FromIterator<(f32, f32)> for Pta {
    fn from_iter<T: IntoIterator<Item = (f32, f32)>>(iter: T) -> Self {
        let mut pta = Pta::new();
        for (x, y) in iter {
            pta.push(x, y);
        }
        pta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pta_basics() {
        let mut pta = Pta::with_capacity(2);
        assert!(pta.is_empty());
        pta.push(1.0, 2.0);
        pta.push(-3.0, 7.5);
        assert_eq!(pta.len(), 2);
        assert_eq!(pta.get(1), Some((-3.0, 7.5)));
        assert_eq!(pta.get(2), None);
        assert_eq!(pta.bounding_box(), Some((-3.0, 1.0, 2.0, 7.5)));
    }

    #[test]
    fn test_pta_collect() {
        let pta: Pta = [(0.0, 0.0), (2.0, 1.0)].into_iter().collect();
        assert_eq!(pta.get(1), Some((2.0, 1.0)));
        assert_eq!(Pta::new().bounding_box(), None);
    }
}
