//! Watch mode: re-run a transform whenever an input image changes.
//!
//! The parent directory of every input is watched rather than the file
//! itself, so editors that save by replacing the file are still seen.
//! Bursts of events are collected for a short settle period and each
//! changed image is processed once per burst.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::discovery::InputImage;
use crate::error::{FxError, Result};
use crate::output::{display_path, plural, Printer};
use crate::transform::Transform;

use super::process::process_image;

/// How long to wait for more events before processing a burst.
const SETTLE: Duration = Duration::from_millis(150);

/// Block, re-processing inputs as they change, until the watcher stops.
pub fn watch_inputs(
    images: &[InputImage],
    output_dir: &Path,
    transform: &Transform,
    printer: &Printer,
) -> Result<()> {
    let watched: Vec<(PathBuf, &InputImage)> = images
        .iter()
        .map(|image| canonical(&image.path).map(|path| (path, image)))
        .collect::<Result<_>>()?;

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx).map_err(watch_error)?;

    let dirs: BTreeSet<&Path> = watched.iter().filter_map(|(path, _)| path.parent()).collect();
    for dir in &dirs {
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(watch_error)?;
    }

    printer.info(
        "Watching",
        &format!(
            "{} (Ctrl+C to stop)",
            plural(watched.len(), "image", "images")
        ),
    );

    while let Ok(first) = rx.recv() {
        let mut changed: BTreeSet<usize> = BTreeSet::new();
        collect(&first, &watched, &mut changed, printer);
        while let Ok(next) = rx.recv_timeout(SETTLE) {
            collect(&next, &watched, &mut changed, printer);
        }

        for index in changed {
            let image = watched[index].1;
            match process_image(image, output_dir, transform) {
                Ok(output) => printer.wrote(&image.path, &output),
                // A half-written file fails to decode; the next event retries it.
                Err(e) => printer.error("Failed", &format!("{}: {}", display_path(&image.path), e)),
            }
        }
    }

    Ok(())
}

fn collect(
    event: &notify::Result<Event>,
    watched: &[(PathBuf, &InputImage)],
    changed: &mut BTreeSet<usize>,
    printer: &Printer,
) {
    match event {
        Ok(event) => changed.extend(changed_inputs(event, watched)),
        Err(e) => printer.warning("Watch", &e.to_string()),
    }
}

/// Indices of watched inputs touched by a content-changing event.
fn changed_inputs(event: &Event, watched: &[(PathBuf, &InputImage)]) -> Vec<usize> {
    if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
        return vec![];
    }

    watched
        .iter()
        .enumerate()
        .filter(|(_, (path, _))| event.paths.iter().any(|p| p == path))
        .map(|(index, _)| index)
        .collect()
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| FxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to resolve path: {}", e),
    })
}

fn watch_error(e: notify::Error) -> FxError {
    FxError::Watch {
        message: e.to_string(),
    }
}
