//! Core data types for pixfx.

mod colour;
mod grid;
mod kernel;
mod palette;

pub use colour::Colour;
pub use grid::PixelGrid;
pub use kernel::{BuiltinKernels, Kernel, NamedKernel};
pub use palette::Palette;
