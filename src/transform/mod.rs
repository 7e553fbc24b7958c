//! Pixel transforms.
//!
//! All transforms read an immutable [`PixelGrid`] and return a new grid of
//! the same dimensions. [`apply_transform`] is the single entry point used
//! by the CLI; the individual functions are exported for library use.

mod convolve;
mod grayscale;
mod halftone;
mod sampler;

use std::fmt;

pub use convolve::convolve;
pub use grayscale::{grayscale, intensity, to_gray};
pub use halftone::{cell_value, halftone, DOT_SCALE};
pub use sampler::EdgeClampSampler;

use crate::error::Result;
use crate::types::{Kernel, Palette, PixelGrid};

/// A transform together with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// Luma grayscale.
    Grayscale,
    /// Cross-correlation with a kernel.
    Convolve(Kernel),
    /// Two-colour halftone with dot cells of `radius` pixels.
    Halftone { radius: u32, palette: Palette },
}

impl Transform {
    /// Short name used in status output.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Grayscale => "grayscale",
            Transform::Convolve(_) => "convolve",
            Transform::Halftone { .. } => "halftone",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Grayscale => write!(f, "grayscale"),
            Transform::Convolve(kernel) => {
                write!(f, "convolve ({0}x{0} kernel)", kernel.size())
            }
            Transform::Halftone { radius, palette } => write!(
                f,
                "halftone (radius {}, {} on {})",
                radius, palette.foreground, palette.background
            ),
        }
    }
}

/// Apply a transform to a grid, producing a new grid.
///
/// Parameters are validated before any output is produced.
pub fn apply_transform(grid: &PixelGrid, transform: &Transform) -> Result<PixelGrid> {
    match transform {
        Transform::Grayscale => Ok(grayscale(grid)),
        Transform::Convolve(kernel) => Ok(convolve(grid, kernel)),
        Transform::Halftone { radius, palette } => halftone(grid, *radius, palette),
    }
}
