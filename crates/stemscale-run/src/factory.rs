//! Run extraction from binary images
//!
//! Rows are scanned a 32-bit word at a time: `leading_zeros` on the masked
//! word jumps straight to the next transition instead of testing pixels
//! one by one. Columns cut across words and are read bit by bit.

use stemscale_core::pix::get_data_bit;
use stemscale_core::{Pix, PixelDepth};

use crate::table::{Orientation, Run, RunTable};
use crate::{RunError, RunResult};

/// Builds [`RunTable`]s from 1 bpp images
#[derive(Debug, Clone, Copy, Default)]
pub struct RunTableFactory {
    orientation: Orientation,
}

impl RunTableFactory {
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Extract the runs of a binary image.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::UnsupportedDepth`] if `pix` is not 1 bpp.
    pub fn create_table(&self, pix: &Pix) -> RunResult<RunTable> {
        if pix.depth() != PixelDepth::Bit1 {
            return Err(RunError::UnsupportedDepth {
                expected: "1 bpp",
                actual: pix.depth().bits(),
            });
        }
        let (w, h) = (pix.width(), pix.height());
        let lines = match self.orientation {
            Orientation::Horizontal => (0..h).map(|y| row_runs(pix.row_data(y), w)).collect(),
            Orientation::Vertical => (0..w).map(|x| column_runs(pix, x)).collect(),
        };
        Ok(RunTable::new(self.orientation, w, h, lines))
    }
}

fn row_runs(line: &[u32], width: u32) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut x = 0;
    while let Some(start) = next_transition(line, x, width, true) {
        let stop = next_transition(line, start, width, false).unwrap_or(width);
        runs.push(Run::new(start, stop - start));
        x = stop;
    }
    runs
}

/// First position `>= from` whose bit equals `set`, if any before `width`.
fn next_transition(line: &[u32], from: u32, width: u32, set: bool) -> Option<u32> {
    let mut x = from;
    while x < width {
        let word = line[(x >> 5) as usize];
        let word = if set { word } else { !word };
        let masked = word & (u32::MAX >> (x & 31));
        if masked != 0 {
            let pos = (x & !31) + masked.leading_zeros();
            return (pos < width).then_some(pos);
        }
        x = (x & !31) + 32;
    }
    None
}

fn column_runs(pix: &Pix, x: u32) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut start = None;
    for y in 0..pix.height() {
        let on = get_data_bit(pix.row_data(y), x) != 0;
        match (on, start) {
            (true, None) => start = Some(y),
            (false, Some(s)) => {
                runs.push(Run::new(s, y - s));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(Run::new(s, pix.height() - s));
    }
    runs
}
