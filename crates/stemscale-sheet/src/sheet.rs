//! Sheet and scale

use crate::{Picture, SheetError, SheetResult, SystemInfo};

/// Global scale statistics of a page, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    /// Distance between two staff lines
    pub interline: u32,
    /// Most frequent foreground run length (staff line thickness)
    pub main_fore: u32,
    /// Largest frequent foreground run length
    pub max_fore: u32,
}

impl Scale {
    /// # Errors
    ///
    /// Returns [`SheetError::InvalidParameter`] if `interline` is zero or
    /// `max_fore < main_fore`.
    pub fn new(interline: u32, main_fore: u32, max_fore: u32) -> SheetResult<Self> {
        if interline == 0 {
            return Err(SheetError::InvalidParameter(
                "interline must be positive".to_string(),
            ));
        }
        if max_fore < main_fore {
            return Err(SheetError::InvalidParameter(format!(
                "max_fore {max_fore} is below main_fore {main_fore}"
            )));
        }
        Ok(Self {
            interline,
            main_fore,
            max_fore,
        })
    }

    /// Convert a length in interlines to pixels, rounding half to even.
    pub fn to_pixels(&self, interlines: f64) -> i32 {
        (interlines * f64::from(self.interline)).round_ties_even() as i32
    }
}

/// One scanned page
#[derive(Debug, Clone)]
pub struct Sheet {
    id: String,
    picture: Picture,
    scale: Scale,
    systems: Vec<SystemInfo>,
}

impl Sheet {
    pub fn new(id: impl Into<String>, picture: Picture, scale: Scale) -> Self {
        Self {
            id: id.into(),
            picture,
            scale,
            systems: Vec::new(),
        }
    }

    pub fn with_system(mut self, system: SystemInfo) -> Self {
        self.systems.push(system);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn systems(&self) -> &[SystemInfo] {
        &self.systems
    }

    pub fn systems_mut(&mut self) -> &mut [SystemInfo] {
        &mut self.systems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_validation() {
        assert!(Scale::new(0, 3, 4).is_err());
        assert!(Scale::new(20, 5, 4).is_err());
        let scale = Scale::new(20, 3, 5).unwrap();
        assert_eq!(scale.to_pixels(2.0), 40);
        assert_eq!(scale.to_pixels(0.125), 2);
        assert_eq!(scale.to_pixels(0.375), 8);
    }
}
