//! Page rasters

use std::collections::HashMap;

use stemscale_core::Pix;

use crate::{SheetError, SheetResult};

/// Identifies one raster derived from the scanned page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKey {
    /// Binarized page
    Binary,
    /// Binarized page with staff lines removed
    NoStaff,
}

/// The rasters of a page, all sharing the page dimensions
#[derive(Debug, Clone)]
pub struct Picture {
    width: u32,
    height: u32,
    sources: HashMap<SourceKey, Pix>,
}

impl Picture {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            sources: HashMap::new(),
        }
    }

    /// Register a raster, replacing any previous one for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::SourceMismatch`] if the raster size differs
    /// from the picture size.
    pub fn with_source(mut self, key: SourceKey, pix: Pix) -> SheetResult<Self> {
        if pix.width() != self.width || pix.height() != self.height {
            return Err(SheetError::SourceMismatch {
                key,
                width: self.width,
                height: self.height,
                actual_width: pix.width(),
                actual_height: pix.height(),
            });
        }
        self.sources.insert(key, pix);
        Ok(self)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raster registered under `key`, if any
    pub fn source(&self, key: SourceKey) -> Option<&Pix> {
        self.sources.get(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stemscale_core::PixelDepth;

    #[test]
    fn test_sources() {
        let pix = Pix::new(8, 4, PixelDepth::Bit1).unwrap();
        let picture = Picture::new(8, 4)
            .with_source(SourceKey::NoStaff, pix)
            .unwrap();
        assert!(picture.source(SourceKey::NoStaff).is_some());
        assert!(picture.source(SourceKey::Binary).is_none());
    }

    #[test]
    fn test_size_mismatch() {
        let pix = Pix::new(8, 5, PixelDepth::Bit1).unwrap();
        let err = Picture::new(8, 4)
            .with_source(SourceKey::Binary, pix)
            .unwrap_err();
        assert!(matches!(
            err,
            SheetError::SourceMismatch {
                actual_height: 5,
                ..
            }
        ));
    }
}
