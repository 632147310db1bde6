//! Histogram of horizontal run lengths

use log::{Level, debug, log_enabled};
use stemscale_core::IntegerHistogram;
use stemscale_run::RunTable;

use crate::{StemError, StemResult};

/// Accumulates short horizontal runs into a length histogram
///
/// The domain is `0..=max_black`; runs longer than `max_black` are too
/// wide to be stems and are left out.
#[derive(Debug, Clone)]
pub(crate) struct HistoKeeper {
    max_black: u32,
    histo: IntegerHistogram,
}

impl HistoKeeper {
    pub(crate) fn new(max_black: u32) -> StemResult<Self> {
        let x_max = i32::try_from(max_black).map_err(|_| {
            StemError::InvalidParameter(format!("run length cutoff {max_black} is too large"))
        })?;
        Ok(Self {
            max_black,
            histo: IntegerHistogram::new("stem", 0, x_max)?,
        })
    }

    /// Count every run of `table` not longer than `max_black`.
    pub(crate) fn build_histograms(&mut self, table: &RunTable) -> StemResult<()> {
        for line in table.lines() {
            for run in line.iter().filter(|r| r.length() <= self.max_black) {
                self.histo.add_value(run.length() as i32, 1)?;
            }
        }

        if log_enabled!(Level::Debug) {
            let mut dump = Vec::new();
            self.histo.print(&mut dump)?;
            debug!("{}", String::from_utf8_lossy(&dump).trim_end());
        }
        Ok(())
    }

    pub(crate) fn into_histogram(self) -> IntegerHistogram {
        self.histo
    }
}
