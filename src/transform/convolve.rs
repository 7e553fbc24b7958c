//! Kernel convolution.
//!
//! The kernel is applied as a cross-correlation (no spatial flip), so kernel
//! files behave exactly as written. The first kernel index runs along image
//! columns and the second along rows. Neighbours past the image edge are
//! read through [`EdgeClampSampler`].
//!
//! Each channel sum is truncated toward zero before being clamped to
//! `0..=255`; values are never rounded.

use crate::types::{Colour, Kernel, PixelGrid};

use super::sampler::EdgeClampSampler;

/// Convolve every pixel of `grid` with `kernel`.
///
/// The output alpha of each pixel is the alpha of the source pixel at the
/// same coordinate.
pub fn convolve(grid: &PixelGrid, kernel: &Kernel) -> PixelGrid {
    let Some(sampler) = EdgeClampSampler::new(grid) else {
        return grid.clone();
    };

    PixelGrid::from_fn(grid.width(), grid.height(), |col, row| {
        convolve_pixel(&sampler, kernel, col as i64, row as i64)
    })
}

/// Weighted sum of the neighbourhood around `(col, row)`.
fn convolve_pixel(sampler: &EdgeClampSampler<'_>, kernel: &Kernel, col: i64, row: i64) -> Colour {
    let n = kernel.size();
    let half = kernel.radius() as i64;

    let mut red = 0.0_f64;
    let mut green = 0.0_f64;
    let mut blue = 0.0_f64;

    for i in 0..n {
        let x = col + i as i64 - half;
        for (j, &weight) in kernel.row(i).iter().enumerate() {
            let y = row + j as i64 - half;
            let sample = sampler.sample(x, y);

            // Products in single precision, sums in double.
            red += f64::from(f32::from(sample.r) * weight);
            green += f64::from(f32::from(sample.g) * weight);
            blue += f64::from(f32::from(sample.b) * weight);
        }
    }

    let alpha = sampler.sample(col, row).a;
    Colour::new(to_channel(red), to_channel(green), to_channel(blue), alpha)
}

/// Truncate toward zero, then clamp to a byte.
#[inline]
fn to_channel(value: f64) -> u8 {
    (value as i64).clamp(0, 255) as u8
}
