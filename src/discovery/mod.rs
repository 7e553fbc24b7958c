//! Input discovery and project configuration.
//!
//! # Example
//!
//! ```ignore
//! use pixfx::discovery::{scan_inputs, Manifest};
//!
//! let manifest = Manifest::discover(None, Path::new("."))?;
//! let scan = scan_inputs(&[PathBuf::from("photos")], &manifest)?;
//! println!("Found {} images", scan.images.len());
//! ```

mod manifest;
mod scanner;

pub use manifest::{Manifest, DEFAULT_RADIUS, MANIFEST_FILE};
pub use scanner::{scan_directory, scan_inputs, InputImage, ScanResult};
