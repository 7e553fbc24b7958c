//! File system scanner for discovering input images.
//!
//! Inputs given on the command line may be image files or directories.
//! Directories are walked recursively and every file with a supported
//! raster extension is picked up.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{FxError, Result};
use crate::render::is_supported_image;

use super::manifest::Manifest;

/// An image to transform and where its output goes, relative to the
/// output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputImage {
    pub path: PathBuf,
    pub relative: PathBuf,
}

impl InputImage {
    /// Output location under `output_dir`.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.relative)
    }
}

/// Result of scanning inputs.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Images to process, in walk order.
    pub images: Vec<InputImage>,
    /// Explicitly named files that are not supported images.
    pub skipped: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no images were discovered.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.images.extend(other.images);
        self.skipped.extend(other.skipped);
    }
}

/// Scan a directory for images.
///
/// Output paths keep the directory structure below `root`.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() || manifest.is_excluded(path) || !is_supported_image(path) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        result.images.push(InputImage {
            path: path.to_path_buf(),
            relative,
        });
    }

    result
}

/// Scan command-line inputs (files or directories).
///
/// A missing input is an error; an existing file that is not a supported
/// image is reported in `skipped`.
pub fn scan_inputs(inputs: &[PathBuf], manifest: &Manifest) -> Result<ScanResult> {
    let mut result = ScanResult::new();

    for input in inputs {
        if input.is_dir() {
            result.merge(scan_directory(input, manifest));
            continue;
        }

        if !input.exists() {
            return Err(FxError::Io {
                path: input.clone(),
                message: "Input not found".to_string(),
            });
        }

        if is_supported_image(input) {
            let relative = input
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| input.clone());
            result.images.push(InputImage {
                path: input.clone(),
                relative,
            });
        } else {
            result.skipped.push(input.clone());
        }
    }

    Ok(result)
}
