//! Runs and run tables

use stemscale_core::{Pix, PixMut, PixelDepth};

use crate::RunResult;

/// Scanline direction of a run table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Runs along rows
    #[default]
    Horizontal,
    /// Runs along columns
    Vertical,
}

/// A maximal sequence of foreground pixels on one scanline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    start: u32,
    length: u32,
}

impl Run {
    /// Create a run; `length` must be at least 1.
    pub fn new(start: u32, length: u32) -> Self {
        debug_assert!(length >= 1, "empty run");
        Self { start, length }
    }

    /// First pixel coordinate along the scanline
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Number of pixels
    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Last pixel coordinate along the scanline (inclusive)
    #[inline]
    pub fn stop(&self) -> u32 {
        self.start + self.length - 1
    }
}

/// Runs of a binary image, grouped by scanline
///
/// For [`Orientation::Horizontal`] line `i` is row `i`; for
/// [`Orientation::Vertical`] it is column `i`. Within a line runs are
/// sorted by start and never touch each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTable {
    orientation: Orientation,
    width: u32,
    height: u32,
    lines: Vec<Vec<Run>>,
}

impl RunTable {
    pub(crate) fn new(orientation: Orientation, width: u32, height: u32, lines: Vec<Vec<Run>>) -> Self {
        Self {
            orientation,
            width,
            height,
            lines,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Width of the source image
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the source image
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of scanlines
    pub fn size(&self) -> usize {
        self.lines.len()
    }

    /// Runs of one scanline; empty for an out-of-range index.
    pub fn runs(&self, line: usize) -> &[Run] {
        self.lines.get(line).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate over scanlines in order
    pub fn lines(&self) -> impl Iterator<Item = &[Run]> + '_ {
        self.lines.iter().map(Vec::as_slice)
    }

    /// Iterate over every run of the table
    pub fn iter(&self) -> impl Iterator<Item = &Run> + '_ {
        self.lines.iter().flatten()
    }

    /// Total number of runs
    pub fn run_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    /// Total number of foreground pixels
    pub fn foreground_count(&self) -> u64 {
        self.iter().map(|r| u64::from(r.length())).sum()
    }

    /// Rebuild the binary image the table describes.
    pub fn to_pix(&self) -> RunResult<Pix> {
        let mut pm = PixMut::new(self.width, self.height, PixelDepth::Bit1)?;
        for (line, runs) in self.lines.iter().enumerate() {
            for run in runs {
                for pos in run.start()..=run.stop() {
                    let (x, y) = match self.orientation {
                        Orientation::Horizontal => (pos, line as u32),
                        Orientation::Vertical => (line as u32, pos),
                    };
                    pm.set_pixel_unchecked(x, y, 1);
                }
            }
        }
        Ok(pm.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_bounds() {
        let run = Run::new(5, 3);
        assert_eq!(run.start(), 5);
        assert_eq!(run.stop(), 7);
        assert_eq!(Run::new(0, 1).stop(), 0);
    }

    #[test]
    fn test_table_counts() {
        let table = RunTable::new(
            Orientation::Horizontal,
            10,
            2,
            vec![vec![Run::new(0, 2), Run::new(5, 4)], vec![]],
        );
        assert_eq!(table.size(), 2);
        assert_eq!(table.run_count(), 2);
        assert_eq!(table.foreground_count(), 6);
        assert!(table.runs(1).is_empty());
        assert!(table.runs(7).is_empty());
        assert_eq!(table.to_pix().unwrap().count_pixels(), 6);
    }

    #[test]
    fn test_default_orientation() {
        assert_eq!(Orientation::default(), Orientation::Horizontal);
    }
}
