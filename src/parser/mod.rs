//! Parsers for pixfx text formats.
//!
//! # Usage
//!
//! ```ignore
//! use pixfx::parser::parse_kernel;
//!
//! let source = std::fs::read_to_string("kernels/sharpen.txt")?;
//! let kernel = parse_kernel(&source)?;
//! println!("{}x{} kernel", kernel.size(), kernel.size());
//! ```

pub mod kernel;

pub use kernel::{load_kernel, parse_kernel};
