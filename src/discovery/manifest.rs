//! Project manifest (pixfx.yaml) parsing.
//!
//! The manifest holds per-project defaults: where outputs go, which kernel
//! `convolve` uses, and the halftone radius and colours. Command-line flags
//! take precedence over every field.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FxError, Result};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "pixfx.yaml";

/// Project manifest loaded from pixfx.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for transformed images.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Default kernel: a builtin name or a path to a kernel file.
    #[serde(default)]
    pub kernel: Option<String>,

    /// Default halftone cell radius.
    #[serde(default)]
    pub radius: Option<u32>,

    /// Default halftone background colour.
    #[serde(default)]
    pub background: Option<String>,

    /// Default halftone foreground colour.
    #[serde(default)]
    pub foreground: Option<String>,

    /// Patterns to exclude when scanning input directories.
    #[serde(default)]
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

/// Halftone radius used when neither flags nor manifest set one.
pub const DEFAULT_RADIUS: u32 = 4;

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            kernel: None,
            radius: None,
            background: None,
            foreground: None,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a pixfx.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load an explicit manifest, or `pixfx.yaml` in `dir` if present,
    /// or fall back to defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(MANIFEST_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty or comment-only file deserializes to null.
        if content.lines().all(|l| l.trim().is_empty() || l.trim().starts_with('#')) {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| FxError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check pixfx.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("/{}/", dir)) || path.starts_with(&format!("{}/", dir));
            }
            return path.ends_with(suffix) || path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !suffix.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get the effective halftone radius.
    pub fn effective_radius(&self) -> u32 {
        self.radius.unwrap_or(DEFAULT_RADIUS)
    }

    /// Commented manifest written by `pixfx init`.
    pub fn template() -> String {
        format!(
            "\
# pixfx project settings. Command-line flags override these values.

# Where transformed images are written.
output: dist

# Kernel used by `pixfx convolve`: a builtin name or a kernel file path.
# kernel: sharpen

# Halftone cell radius in pixels.
radius: {}

# Halftone colours (hex or CSS name).
background: black
foreground: white

# Skip matching paths when scanning directories.
excludes: []
",
            DEFAULT_RADIUS
        )
    }
}
