//! Erasure of non-stem vertical structures

use log::debug;
use stemscale_core::PixMut;
use stemscale_sheet::{Inter, PageCleaner, Shape, Sheet};

use crate::StemResult;

/// Paints barlines, connectors and system headers out of a working image
pub(crate) struct StemsCleaner<'a> {
    sheet: &'a Sheet,
    cleaner: PageCleaner,
    /// Header margin in pixels, `None` to keep headers
    header_margin: Option<i32>,
}

impl<'a> StemsCleaner<'a> {
    pub(crate) fn new(sheet: &'a Sheet, cleaner: PageCleaner, header_margin: Option<i32>) -> Self {
        Self {
            sheet,
            cleaner,
            header_margin,
        }
    }

    /// Erase every live, hideable instance of `shapes`, system by system.
    ///
    /// Returns the number of erased instances.
    pub(crate) fn erase_shapes(&self, pix: &mut PixMut, shapes: &[Shape]) -> StemResult<usize> {
        let mut total = 0;
        for system in self.sheet.systems() {
            let erased: Vec<&Inter> = system
                .sig()
                .inters()
                .iter()
                .filter(|inter| !inter.deleted && shapes.contains(&inter.shape))
                .filter(|inter| self.cleaner.can_hide(inter))
                .collect();

            for inter in &erased {
                self.cleaner.erase_inter(pix, inter)?;
            }

            let header = match self.header_margin {
                Some(margin) => self.cleaner.erase_system_header(pix, system, margin),
                None => false,
            };
            debug!(
                "system #{}: erased {} inters, header {}",
                system.id,
                erased.len(),
                if header { "erased" } else { "kept" }
            );
            total += erased.len();
        }
        Ok(total)
    }
}
