//! Kernel file parser.
//!
//! A kernel file holds the side length `n` on its first line, followed by
//! `n` lines of `n` whitespace-separated numbers:
//!
//! ```text
//! 3
//! 0 -1 0
//! -1 5 -1
//! 0 -1 0
//! ```
//!
//! Blank lines and `//` comment lines are ignored anywhere in the file.

use std::fs;
use std::path::Path;

use crate::error::{FxError, Result};
use crate::types::Kernel;

/// Parse kernel source text.
///
/// Malformed numbers are parse errors. A row or column count that does not
/// match the declared size is rejected by [`Kernel::new`].
pub fn parse_kernel(source: &str) -> Result<Kernel> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with("//"));

    let (size_line, size_text) = lines.next().ok_or_else(|| FxError::Parse {
        message: "Kernel file is empty".to_string(),
        help: Some("The first line must be the kernel size, e.g. `3`".to_string()),
    })?;

    let size: usize = size_text.parse().map_err(|_| FxError::Parse {
        message: format!("Line {}: invalid kernel size `{}`", size_line, size_text),
        help: Some("The first line must be a single positive integer".to_string()),
    })?;

    let rows = lines
        .map(|(line_no, line)| parse_row(line_no, line))
        .collect::<Result<Vec<_>>>()?;

    if rows.len() != size {
        return Err(FxError::InvalidKernel {
            message: format!("declared size {} but found {} rows", size, rows.len()),
            help: Some(format!("Add exactly {} rows of {} numbers", size, size)),
        });
    }

    Kernel::new(rows)
}

/// Read and parse a kernel file.
pub fn load_kernel(path: &Path) -> Result<Kernel> {
    let source = fs::read_to_string(path).map_err(|e| FxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read kernel file: {}", e),
    })?;

    parse_kernel(&source)
}

fn parse_row(line_no: usize, line: &str) -> Result<Vec<f32>> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<f32>().map_err(|_| FxError::Parse {
                message: format!("Line {}: `{}` is not a number", line_no, token),
                help: None,
            })
        })
        .collect()
}
