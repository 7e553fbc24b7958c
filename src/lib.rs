//! pixfx - Grayscale, convolution and halftone image transforms
//!
//! The core is a small pixel engine: an edge-clamped sampler and three
//! transforms built on it. Everything else (image files, kernel files,
//! the CLI) feeds grids into [`apply_transform`] and writes the result out.
//!
//! ```ignore
//! use pixfx::{apply_transform, BuiltinKernels, Transform};
//!
//! let grid = pixfx::render::load_grid(Path::new("photo.png"))?;
//! let kernel = BuiltinKernels::get("sharpen").unwrap();
//! let sharpened = apply_transform(&grid, &Transform::Convolve(kernel))?;
//! pixfx::render::save_grid(&sharpened, Path::new("sharp.png"))?;
//! ```

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod transform;
pub mod types;

pub use discovery::{scan_inputs, InputImage, Manifest, ScanResult};
pub use error::{FxError, Result};
pub use parser::{load_kernel, parse_kernel};
pub use render::{load_grid, save_grid};
pub use transform::{
    apply_transform, convolve, grayscale, halftone, to_gray, EdgeClampSampler, Transform,
};
pub use types::{BuiltinKernels, Colour, Kernel, NamedKernel, Palette, PixelGrid};
