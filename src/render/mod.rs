//! Image input and output for pixfx.
//!
//! This module bridges `PixelGrid` and encoded image files.

mod raster;

pub use raster::{
    grid_from_rgba, grid_to_rgba, is_supported_image, load_grid, save_grid, SUPPORTED_EXTENSIONS,
};
