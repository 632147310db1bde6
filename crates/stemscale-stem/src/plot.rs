//! Bar chart of the stem histogram
//!
//! One bar per bucket over `0..=cutoff`, scaled so the tallest bucket fills
//! the plot height. Buckets inside the peak are drawn darker, and the peak
//! bounds (blue) and main value (red) are drawn as full-height markers
//! through the bucket centers.

use stemscale_core::{Box, Color, IntegerHistogram, Pix, PixMut, PixelDepth, Range};

use crate::{StemError, StemResult};

/// Blank border around the plot area
pub const MARGIN: u32 = 10;
/// Horizontal pitch of one bucket
pub const BUCKET_PITCH: u32 = 10;
/// Height of the tallest bar
pub const PLOT_HEIGHT: u32 = 200;

const BAR_WIDTH: i32 = 8;
const BAR_COLOR: Color = Color::new(160, 160, 160);
const PEAK_BAR_COLOR: Color = Color::new(64, 64, 64);
const BOUND_COLOR: Color = Color::BLUE;
const MAIN_COLOR: Color = Color::RED;

/// x coordinate of the center column of `bucket`
pub fn bucket_center(bucket: i32) -> i32 {
    (MARGIN + BUCKET_PITCH / 2) as i32 + bucket * BUCKET_PITCH as i32
}

/// y coordinate of the axis line
pub fn axis_y() -> i32 {
    (MARGIN + PLOT_HEIGHT) as i32
}

/// Render `histo` over buckets `0..=cutoff` as a 32 bpp chart.
pub fn render_chart(
    histo: &IntegerHistogram,
    peak: Option<&Range>,
    cutoff: u32,
    title: &str,
) -> StemResult<Pix> {
    let too_wide = || StemError::InvalidParameter(format!("chart cutoff {cutoff} is too large"));
    let last = i32::try_from(cutoff).map_err(|_| too_wide())?;
    let width = cutoff
        .checked_add(1)
        .and_then(|buckets| buckets.checked_mul(BUCKET_PITCH))
        .and_then(|w| w.checked_add(2 * MARGIN))
        .filter(|&w| i32::try_from(w).is_ok())
        .ok_or_else(too_wide)?;
    let height = 2 * MARGIN + PLOT_HEIGHT + 1;
    let mut pm = PixMut::new(width, height, PixelDepth::Bit32)?;
    pm.set_all(Color::WHITE.to_pixel32());
    pm.set_text(Some(title.to_string()));

    let top = (0..=last).map(|x| histo.value(x)).max().unwrap_or(0);
    let axis = axis_y();
    if top > 0 {
        for bucket in 0..=last {
            let count = histo.value(bucket);
            let bar = (f64::from(count) * f64::from(PLOT_HEIGHT) / f64::from(top)).round() as i32;
            if bar == 0 {
                continue;
            }
            let color = match peak {
                Some(p) if p.contains(bucket) => PEAK_BAR_COLOR,
                _ => BAR_COLOR,
            };
            let rect = Box::new_unchecked(bucket_center(bucket) - BAR_WIDTH / 2, axis - bar, BAR_WIDTH, bar);
            pm.fill_box_color(&rect, color);
        }
    }

    pm.render_line_color(MARGIN as i32, axis, (width - MARGIN) as i32 - 1, axis, 1, Color::BLACK);

    if let Some(p) = peak {
        let y_top = MARGIN as i32;
        for bound in [p.min, p.max] {
            let x = bucket_center(bound);
            pm.render_line_color(x, y_top, x, axis - 1, 1, BOUND_COLOR);
        }
        let x = bucket_center(p.main.round() as i32);
        pm.render_line_color(x, y_top, x, axis - 1, 1, MAIN_COLOR);
    }

    Ok(pm.into())
}
