//! Stem thickness estimation
//!
//! # Algorithm
//!
//! 1. **Erasure**: the staff-free binary page is converted to gray, the
//!    barlines, connectors and system headers are painted white, and the
//!    result is thresholded back to binary.
//! 2. **Runs**: horizontal foreground runs are extracted from that buffer.
//! 3. **Histogram**: runs up to `max_countable_run_length` are counted by
//!    length.
//! 4. **Peak**: the strongest hi/lo peak gives the main and maximum stem
//!    thickness. Without a peak, both derive from the page foreground
//!    statistics.

use std::fmt;
use std::path::Path;

use log::{debug, info, warn};
use stemscale_core::{IntegerHistogram, PeakParams, Pix, Range};
use stemscale_io::ImageFormat;
use stemscale_run::{Orientation, RunTableFactory};
use stemscale_sheet::{PageCleaner, Sheet, SourceKey};

use crate::cleaner::StemsCleaner;
use crate::keeper::HistoKeeper;
use crate::watch::StopWatch;
use crate::{StemError, StemResult, StemScalerOptions, plot};

/// Gray levels up to 127 are foreground again after erasure
const BINARY_THRESHOLD: u32 = 128;

/// Stem thickness of a page, in pixels
///
/// Both values are at least 1 and `main <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemScale {
    /// Most frequent stem thickness
    pub main: u32,
    /// Largest common stem thickness
    pub max: u32,
}

impl StemScale {
    pub fn new(main: u32, max: u32) -> Self {
        debug_assert!(main <= max);
        Self { main, max }
    }
}

impl fmt::Display for StemScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stem(main:{} max:{})", self.main, self.max)
    }
}

/// Measures the stem thickness of one sheet
///
/// The buffer, histogram and peak of the last measurement are kept for
/// inspection and charting.
///
/// # Examples
///
/// ```no_run
/// use stemscale_stem::{StemScaler, StemScalerOptions};
/// # fn sheet() -> stemscale_sheet::Sheet { unimplemented!() }
///
/// let sheet = sheet();
/// let mut scaler = StemScaler::new(&sheet, StemScalerOptions::default()).unwrap();
/// let stem = scaler.retrieve_stem_width().unwrap();
/// println!("{stem}");
/// scaler.write_chart("/tmp/stem-chart.png").unwrap();
/// ```
pub struct StemScaler<'a> {
    sheet: &'a Sheet,
    options: StemScalerOptions,
    buffer: Option<Pix>,
    histogram: Option<IntegerHistogram>,
    peak: Option<Range>,
}

impl<'a> StemScaler<'a> {
    /// # Errors
    ///
    /// Returns [`StemError::InvalidParameter`] if `options` do not validate.
    pub fn new(sheet: &'a Sheet, options: StemScalerOptions) -> StemResult<Self> {
        options.validate()?;
        Ok(Self {
            sheet,
            options,
            buffer: None,
            histogram: None,
            peak: None,
        })
    }

    pub fn options(&self) -> &StemScalerOptions {
        &self.options
    }

    /// Measure the stem thickness of the sheet.
    ///
    /// Every call measures afresh and replaces the retained state; the
    /// result only depends on the sheet and the options.
    ///
    /// # Errors
    ///
    /// Returns [`StemError::MissingSource`] if the picture has no
    /// staff-free source, and propagates errors for a source that is not
    /// 1 bpp.
    pub fn retrieve_stem_width(&mut self) -> StemResult<StemScale> {
        let mut watch = StopWatch::new(format!("Stem scaler for {}", self.sheet.id()));
        let result = self.measure_timed(&mut watch);
        if self.options.print_timing {
            watch.print();
        }
        result
    }

    /// Alias of [`StemScaler::retrieve_stem_width`]
    pub fn measure(&mut self) -> StemResult<StemScale> {
        self.retrieve_stem_width()
    }

    fn measure_timed(&mut self, watch: &mut StopWatch) -> StemResult<StemScale> {
        self.buffer = None;
        self.histogram = None;
        self.peak = None;

        watch.start("get_buffer");
        let buffer = self.get_buffer()?;

        watch.start("stem retrieval");
        let table = RunTableFactory::new(Orientation::Horizontal).create_table(&buffer)?;
        let mut keeper = HistoKeeper::new(self.options.max_countable_run_length)?;
        keeper.build_histograms(&table)?;
        let histogram = keeper.into_histogram();

        let peak = self.find_peak(&histogram);
        let stem = match &peak {
            Some(range) => self.from_peak(range),
            None => self.from_scale(),
        };

        self.buffer = Some(buffer);
        self.histogram = Some(histogram);
        self.peak = peak;
        Ok(stem)
    }

    fn find_peak(&self, histogram: &IntegerHistogram) -> Option<Range> {
        let params = PeakParams::from_ratios(
            histogram.area(),
            self.options.min_gain_ratio,
            self.options.min_value_ratio,
            self.options.min_derivative_ratio,
        );
        histogram.hi_lo_peaks(&params).into_iter().next()
    }

    fn from_peak(&self, range: &Range) -> StemScale {
        let main = (range.main.round_ties_even() as u32).max(1);
        let max = (range.max.max(0) as u32).max(main);
        StemScale::new(main, max)
    }

    fn from_scale(&self) -> StemScale {
        let scale = self.sheet.scale();
        let ratio = self.options.stem_as_fore_ratio;
        let main = ((ratio * f64::from(scale.main_fore)).round_ties_even() as u32).max(1);
        let max = ((ratio * f64::from(scale.max_fore)).round_ties_even() as u32).max(main);
        info!("No stem peak found, computing defaults");
        StemScale::new(main, max)
    }

    /// Binary page with the non-stem vertical structures erased
    fn get_buffer(&self) -> StemResult<Pix> {
        let source = self
            .sheet
            .picture()
            .source(SourceKey::NoStaff)
            .ok_or(StemError::MissingSource(SourceKey::NoStaff))?;

        let gray = source.convert_1_to_8(255, 0)?;
        let mut page = gray.try_into_mut().unwrap_or_else(|pix| pix.to_mut());

        let header_margin = self
            .options
            .erase_header
            .then(|| self.sheet.scale().to_pixels(self.options.header_vertical_margin));
        let cleaner = PageCleaner::new(self.options.min_hide_grade)?;
        let count = StemsCleaner::new(self.sheet, cleaner, header_margin)
            .erase_shapes(&mut page, &self.options.erased_shapes)?;
        debug!("{}: {} inters erased", self.sheet.id(), count);

        let erased: Pix = page.into();
        if self.options.keep_debug_image {
            self.keep_debug_image(&erased);
        }
        Ok(erased.threshold_to_binary(BINARY_THRESHOLD)?)
    }

    fn keep_debug_image(&self, erased: &Pix) {
        let path = self
            .options
            .debug_dir
            .join(format!("{}.stem.png", self.sheet.id()));
        if let Err(e) = stemscale_io::write_image(erased, &path, ImageFormat::Png) {
            warn!("could not write {}: {}", path.display(), e);
        }
    }

    /// Render the retained histogram as a bar chart.
    ///
    /// Measures first if nothing has been measured yet.
    pub fn display_chart(&mut self) -> StemResult<Pix> {
        if self.histogram.is_none() {
            self.retrieve_stem_width()?;
        }
        let histogram = self.histogram.as_ref().ok_or_else(|| {
            StemError::InvalidParameter("no stem histogram available".to_string())
        })?;
        let title = format!("{} {}", self.sheet.id(), histogram.name());
        plot::render_chart(
            histogram,
            self.peak.as_ref(),
            self.options.max_countable_run_length,
            &title,
        )
    }

    /// Alias of [`StemScaler::display_chart`]
    pub fn visualize(&mut self) -> StemResult<Pix> {
        self.display_chart()
    }

    /// Render the chart and write it as PNG.
    pub fn write_chart<P: AsRef<Path>>(&mut self, path: P) -> StemResult<()> {
        let chart = self.display_chart()?;
        stemscale_io::write_image(&chart, path, ImageFormat::Png)?;
        Ok(())
    }

    /// Erased binary buffer of the last measurement
    pub fn buffer(&self) -> Option<&Pix> {
        self.buffer.as_ref()
    }

    /// Run-length histogram of the last measurement
    pub fn histogram(&self) -> Option<&IntegerHistogram> {
        self.histogram.as_ref()
    }

    /// Peak selected by the last measurement, `None` on the fallback path
    pub fn peak(&self) -> Option<&Range> {
        self.peak.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stemscale_core::{Box, PixelDepth};
    use stemscale_sheet::{Geometry, Inter, Picture, Scale, Shape, SystemHeader, SystemInfo, Sig};
    use stemscale_test::pages;

    fn sheet_with(pix: Pix, systems: Vec<SystemInfo>) -> Sheet {
        let picture = Picture::new(pix.width(), pix.height())
            .with_source(SourceKey::NoStaff, pix)
            .unwrap();
        let mut sheet = Sheet::new("test", picture, Scale::new(20, 3, 5).unwrap());
        for system in systems {
            sheet = sheet.with_system(system);
        }
        sheet
    }

    #[test]
    fn test_scenario_single_stroke() {
        let sheet = sheet_with(pages::vertical_strokes(100, 50, &[(40, 4)]).unwrap(), vec![]);
        let mut scaler = StemScaler::new(&sheet, StemScalerOptions::default()).unwrap();
        let stem = scaler.retrieve_stem_width().unwrap();
        assert_eq!(stem, StemScale::new(4, 4));
        assert_eq!(scaler.peak(), Some(&Range::new(4, 4.0, 4)));
        assert_eq!(scaler.histogram().unwrap().area(), 50);
    }

    #[test]
    fn test_blank_page_falls_back() {
        let sheet = sheet_with(pages::blank(60, 30).unwrap(), vec![]);
        let mut scaler = StemScaler::new(&sheet, StemScalerOptions::default()).unwrap();
        assert_eq!(scaler.measure().unwrap(), StemScale::new(3, 5));
        assert!(scaler.peak().is_none());
        assert_eq!(scaler.histogram().unwrap().area(), 0);

        let mut scaled = StemScaler::new(
            &sheet,
            StemScalerOptions::default().with_stem_as_fore_ratio(0.5),
        )
        .unwrap();
        // 1.5 and 2.5 round to even
        assert_eq!(scaled.measure().unwrap(), StemScale::new(2, 2));
    }

    #[test]
    fn test_fallback_clamps_to_one() {
        let picture = Picture::new(10, 10)
            .with_source(SourceKey::NoStaff, pages::blank(10, 10).unwrap())
            .unwrap();
        let sheet = Sheet::new("thin", picture, Scale::new(10, 0, 0).unwrap());
        let mut scaler = StemScaler::new(&sheet, StemScalerOptions::default()).unwrap();
        assert_eq!(scaler.measure().unwrap(), StemScale::new(1, 1));
    }

    #[test]
    fn test_missing_and_bad_sources() {
        let sheet = Sheet::new("none", Picture::new(10, 10), Scale::new(10, 2, 3).unwrap());
        let mut scaler = StemScaler::new(&sheet, StemScalerOptions::default()).unwrap();
        assert!(matches!(
            scaler.measure(),
            Err(StemError::MissingSource(SourceKey::NoStaff))
        ));

        let gray = Pix::new(10, 10, PixelDepth::Bit8).unwrap();
        let sheet = sheet_with(gray, vec![]);
        let mut scaler = StemScaler::new(&sheet, StemScalerOptions::default()).unwrap();
        assert!(matches!(scaler.measure(), Err(StemError::Core(_))));
        assert!(scaler.buffer().is_none());
    }

    #[test]
    fn test_invalid_options() {
        let sheet = sheet_with(pages::blank(10, 10).unwrap(), vec![]);
        let opts = StemScalerOptions::default().with_min_gain_ratio(3.0);
        assert!(StemScaler::new(&sheet, opts).is_err());
    }

    #[test]
    fn test_barline_and_header_erased() {
        let pix = pages::vertical_strokes(120, 60, &[(10, 3), (50, 9), (90, 3)]).unwrap();
        let mut sig = Sig::new();
        sig.add_inter(Inter::new(
            1,
            Shape::ThickBarline,
            Geometry::Rect(Box::new_unchecked(50, 0, 9, 60)),
            0.9,
        ));
        let system = SystemInfo::new(1)
            .with_sig(sig)
            .with_header(SystemHeader::new(85, 100, 20, 40));
        let sheet = sheet_with(pix, vec![system]);

        let opts = StemScalerOptions::default().with_header_vertical_margin(0.5);
        let mut scaler = StemScaler::new(&sheet, opts).unwrap();
        scaler.measure().unwrap();
        let histo = scaler.histogram().unwrap();
        assert_eq!(histo.value(9), 0);
        // header rows 10..50 of the right stroke are gone
        assert_eq!(histo.value(3), 60 + 20);
        let buffer = scaler.buffer().unwrap();
        assert_eq!(buffer.get_pixel(91, 30), Some(0));
        assert_eq!(buffer.get_pixel(91, 5), Some(1));
    }

    #[test]
    fn test_chart_measures_first() {
        let sheet = sheet_with(pages::vertical_strokes(60, 20, &[(5, 2)]).unwrap(), vec![]);
        let mut scaler = StemScaler::new(&sheet, StemScalerOptions::default()).unwrap();
        let chart = scaler.display_chart().unwrap();
        assert!(scaler.histogram().is_some());
        assert_eq!(chart.text(), Some("test stem"));
        assert_eq!(
            chart.width(),
            2 * plot::MARGIN + 21 * plot::BUCKET_PITCH
        );
    }

    #[test]
    fn test_deleted_barline_is_kept() {
        let pix = pages::vertical_strokes(60, 20, &[(5, 3), (30, 8)]).unwrap();
        let mut sig = Sig::new();
        sig.add_inter(Inter::new(
            7,
            Shape::ThinBarline,
            Geometry::Rect(Box::new_unchecked(30, 0, 8, 20)),
            0.9,
        ));
        let mut sheet = sheet_with(pix, vec![SystemInfo::new(1).with_sig(sig)]);
        if let Some(inter) = sheet.systems_mut()[0].sig.inter_mut(7) {
            inter.delete();
        }

        let mut scaler = StemScaler::new(&sheet, StemScalerOptions::default()).unwrap();
        scaler.measure().unwrap();
        assert_eq!(scaler.histogram().unwrap().value(8), 20);
        let chart = scaler.visualize().unwrap();
        assert_eq!(chart.depth(), PixelDepth::Bit32);
    }

    #[test]
    fn test_largest_header_margin_covers_page() {
        let pix = pages::vertical_strokes(100, 50, &[(5, 3), (50, 4)]).unwrap();
        let system = SystemInfo::new(1).with_header(SystemHeader::new(0, 20, 10, 40));
        let sheet = sheet_with(pix, vec![system]);

        let opts = StemScalerOptions::default()
            .with_header_vertical_margin(crate::options::MAX_HEADER_VERTICAL_MARGIN);
        let mut scaler = StemScaler::new(&sheet, opts).unwrap();
        assert_eq!(scaler.measure().unwrap(), StemScale::new(4, 4));
        let histo = scaler.histogram().unwrap();
        assert_eq!(histo.value(3), 0);
        assert_eq!(histo.value(4), 50);

        for margin in [f64::INFINITY, 2.0e8] {
            let opts = StemScalerOptions::default().with_header_vertical_margin(margin);
            assert!(matches!(
                StemScaler::new(&sheet, opts),
                Err(StemError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_saturated_header_margin_erases_full_height() {
        let pix = pages::vertical_strokes(100, 50, &[(5, 3)]).unwrap();
        let system = SystemInfo::new(1).with_header(SystemHeader::new(0, 20, 10, 40));
        let sheet = sheet_with(pix, vec![system]);

        let gray = sheet
            .picture()
            .source(SourceKey::NoStaff)
            .unwrap()
            .convert_1_to_8(255, 0)
            .unwrap();
        let mut page = gray.to_mut();
        let cleaner = PageCleaner::new(0.5).unwrap();
        StemsCleaner::new(&sheet, cleaner, Some(i32::MAX))
            .erase_shapes(&mut page, &[])
            .unwrap();
        for y in [0, 25, 49] {
            assert_eq!(page.get_pixel_unchecked(6, y), 255);
        }
    }

    #[test]
    fn test_threshold_keeps_mid_gray_as_ink() {
        let mut pm = Pix::new(2, 1, PixelDepth::Bit8).unwrap().to_mut();
        pm.set_pixel_unchecked(0, 0, 127);
        pm.set_pixel_unchecked(1, 0, 128);
        let binary = Pix::from(pm).threshold_to_binary(BINARY_THRESHOLD).unwrap();
        assert_eq!(binary.get_pixel(0, 0), Some(1));
        assert_eq!(binary.get_pixel(1, 0), Some(0));
    }
}
