//! Halftone dot rendering.
//!
//! The source is desaturated, cut into `radius x radius` cells, and every
//! cell becomes one foreground dot on a background-filled canvas. Dot
//! diameter is `2 * radius * value`, where `value` is the normalized mean
//! intensity of the `(2 * radius + 1)` square window around the cell origin.

use crate::error::{FxError, Result};
use crate::types::{Palette, PixelGrid};

use super::grayscale::grayscale;
use super::sampler::EdgeClampSampler;

/// Dot diameter at full intensity, in multiples of the radius.
pub const DOT_SCALE: f64 = 2.0;

/// Render `grid` as a halftone with cells of `radius` pixels.
///
/// Fails if `radius` is zero.
pub fn halftone(grid: &PixelGrid, radius: u32, palette: &Palette) -> Result<PixelGrid> {
    if radius == 0 {
        return Err(FxError::InvalidParameter {
            message: "halftone radius must be at least 1".to_string(),
            help: Some("Pass --radius with a positive number of pixels".to_string()),
        });
    }

    let mut out = PixelGrid::filled(grid.width(), grid.height(), palette.background);

    let gray = grayscale(grid);
    let Some(sampler) = EdgeClampSampler::new(&gray) else {
        return Ok(out);
    };

    let step = radius as usize;
    for row in (0..grid.height()).step_by(step) {
        for col in (0..grid.width()).step_by(step) {
            let value = cell_value(&sampler, col as i64, row as i64, radius);
            let diameter = DOT_SCALE * f64::from(radius) * value;
            fill_circle(&mut out, col as f64, row as f64, diameter, palette);
        }
    }

    Ok(out)
}

/// Normalized intensity of the window centered on `(col, row)`, at most 1.0.
///
/// The sum runs over `(2r + 1)^2` samples but is divided by `4r^2 * 255`,
/// so bright windows overshoot 1.0 slightly before the clamp. Window
/// positions past an edge all read the edge pixel, so each in-range pixel
/// is visited once and weighted by how many window positions land on it.
pub fn cell_value(sampler: &EdgeClampSampler<'_>, col: i64, row: i64, radius: u32) -> f64 {
    let r = i64::from(radius);
    let cols = clamped_counts(col, r, sampler.width());
    let rows = clamped_counts(row, r, sampler.height());

    let mut sum: u128 = 0;
    for &(y, row_count) in &rows {
        for &(x, col_count) in &cols {
            // Channels are equal after desaturation; blue stands in for the gray.
            let blue = u128::from(sampler.sample(x, y).b);
            sum += blue * u128::from(col_count) * u128::from(row_count);
        }
    }

    let norm = 4.0 * f64::from(radius) * f64::from(radius) * 255.0;
    (sum as f64 / norm).min(1.0)
}

/// Distinct in-range indices hit by `center - r ..= center + r` on an axis
/// of length `len`, each with the number of window positions that clamp to it.
fn clamped_counts(center: i64, r: i64, len: usize) -> Vec<(i64, u64)> {
    let last = len as i64 - 1;
    let (lo, hi) = (center - r, center + r);

    (lo.clamp(0, last)..=hi.clamp(0, last))
        .map(|i| {
            let from = if i == 0 { lo } else { i };
            let to = if i == last { hi } else { i };
            let count = to.min(hi) - from.max(lo) + 1;
            (i, count as u64)
        })
        .collect()
}

/// Paint every pixel whose center lies strictly inside the circle.
///
/// `(cx, cy)` is a point in image space: pixel `(x, y)` covers
/// `[x, x + 1) x [y, y + 1)`, so its center is at `(x + 0.5, y + 0.5)`.
fn fill_circle(out: &mut PixelGrid, cx: f64, cy: f64, diameter: f64, palette: &Palette) {
    if diameter <= 0.0 {
        return;
    }

    let r = diameter / 2.0;
    let r_sq = r * r;

    let min_x = (cx - r).floor().max(0.0) as usize;
    let min_y = (cy - r).floor().max(0.0) as usize;
    let max_x = ((cx + r).ceil() as usize).min(out.width());
    let max_y = ((cy + r).ceil() as usize).min(out.height());

    for y in min_y..max_y {
        let dy = y as f64 + 0.5 - cy;
        for x in min_x..max_x {
            let dx = x as f64 + 0.5 - cx;
            if dx * dx + dy * dy < r_sq {
                out.set(x, y, palette.foreground);
            }
        }
    }
}
