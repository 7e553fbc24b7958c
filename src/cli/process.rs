//! Batch processing shared by the transform commands.
//!
//! Scans the inputs, applies one `Transform` to every image and writes the
//! results under the output directory. With `--watch` the inputs are then
//! handed to the file watcher.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::{scan_inputs, InputImage, Manifest};
use crate::error::{FxError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{load_grid, save_grid};
use crate::transform::{apply_transform, Transform};

use super::watch::watch_inputs;
use super::InputArgs;

/// Run `transform` over every input image.
pub fn run_transform(
    args: &InputArgs,
    manifest: &Manifest,
    transform: &Transform,
    printer: &Printer,
) -> Result<()> {
    let scan = scan_inputs(&args.inputs, manifest)?;

    for skipped in &scan.skipped {
        printer.warning("Skipping", &format!("{} (not a supported image)", display_path(skipped)));
    }

    if scan.is_empty() {
        printer.warning("Finished", "no images found");
        return Ok(());
    }

    let output_dir = args.output_dir(manifest);
    check_no_overwrite(&scan.images, &output_dir)?;
    check_distinct_outputs(&scan.images, &output_dir)?;

    printer.info("Applying", &transform.to_string());

    let mut written = 0;
    for image in &scan.images {
        let output = process_image(image, &output_dir, transform)?;
        printer.wrote(&image.path, &output);
        written += 1;
    }

    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(written, "image", "images"),
            display_path(&output_dir)
        ),
    );

    if args.watch {
        watch_inputs(&scan.images, &output_dir, transform, printer)?;
    }

    Ok(())
}

/// Load one image, transform it, and write the result. Returns the output path.
pub fn process_image(image: &InputImage, output_dir: &Path, transform: &Transform) -> Result<PathBuf> {
    let grid = load_grid(&image.path)?;
    let result = apply_transform(&grid, transform)?;

    let output = image.output_path(output_dir);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| FxError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    save_grid(&result, &output)?;
    Ok(output)
}

/// Refuse to write an output on top of its own input.
fn check_no_overwrite(images: &[InputImage], output_dir: &Path) -> Result<()> {
    for image in images {
        let output = image.output_path(output_dir);
        let same = match (fs::canonicalize(&image.path), fs::canonicalize(&output)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        };

        if same {
            return Err(FxError::InvalidParameter {
                message: format!("output would overwrite input {}", display_path(&image.path)),
                help: Some("Choose a different --output directory".to_string()),
            });
        }
    }

    Ok(())
}

/// Refuse two inputs that would write the same output file.
fn check_distinct_outputs(images: &[InputImage], output_dir: &Path) -> Result<()> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();

    for image in images {
        let output = image.output_path(output_dir);
        if let Some(first) = claimed.get(&output) {
            return Err(FxError::InvalidParameter {
                message: format!(
                    "{} and {} would both write {}",
                    display_path(first),
                    display_path(&image.path),
                    display_path(&output)
                ),
                help: Some("Rename one input or process them in separate runs".to_string()),
            });
        }
        claimed.insert(output, &image.path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, Palette, PixelGrid};
    use tempfile::tempdir;

    fn write_input(dir: &Path, name: &str, grid: &PixelGrid) -> PathBuf {
        let path = dir.join(name);
        save_grid(grid, &path).unwrap();
        path
    }

    fn args_for(inputs: Vec<PathBuf>, output: PathBuf) -> InputArgs {
        InputArgs {
            inputs,
            output: Some(output),
            config: None,
            watch: false,
        }
    }

    #[test]
    fn test_process_image_writes_transformed_output() {
        let dir = tempdir().unwrap();
        let grid = PixelGrid::filled(3, 2, Colour::rgb(255, 0, 0));
        let input = write_input(dir.path(), "red.png", &grid);

        let image = InputImage {
            path: input,
            relative: PathBuf::from("nested/red.png"),
        };
        let out_dir = dir.path().join("out");

        let output = process_image(&image, &out_dir, &Transform::Grayscale).unwrap();

        assert_eq!(output, out_dir.join("nested/red.png"));
        let written = load_grid(&output).unwrap();
        assert_eq!(written, PixelGrid::filled(3, 2, Colour::gray(76)));
    }

    #[test]
    fn test_run_transform_batch() {
        let dir = tempdir().unwrap();
        let inputs = dir.path().join("in");
        fs::create_dir_all(&inputs).unwrap();
        write_input(&inputs, "a.png", &PixelGrid::filled(4, 4, Colour::BLACK));
        write_input(&inputs, "b.png", &PixelGrid::filled(4, 4, Colour::BLACK));

        let out_dir = dir.path().join("out");
        let args = args_for(vec![inputs], out_dir.clone());
        let transform = Transform::Halftone {
            radius: 2,
            palette: Palette::new(Colour::rgb(9, 9, 9), Colour::WHITE),
        };

        run_transform(&args, &Manifest::default(), &transform, &Printer::plain()).unwrap();

        for name in ["a.png", "b.png"] {
            let written = load_grid(&out_dir.join(name)).unwrap();
            assert_eq!(written, PixelGrid::filled(4, 4, Colour::rgb(9, 9, 9)));
        }
    }

    #[test]
    fn test_run_transform_invalid_parameter_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "a.png", &PixelGrid::filled(2, 2, Colour::WHITE));
        let out_dir = dir.path().join("out");
        let args = args_for(vec![input], out_dir.clone());
        let transform = Transform::Halftone {
            radius: 0,
            palette: Palette::default(),
        };

        let result = run_transform(&args, &Manifest::default(), &transform, &Printer::plain());

        assert!(matches!(result, Err(FxError::InvalidParameter { .. })));
        assert!(!out_dir.join("a.png").exists());
    }

    #[test]
    fn test_refuses_to_overwrite_input() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "a.png", &PixelGrid::filled(2, 2, Colour::WHITE));
        let args = args_for(vec![input], dir.path().to_path_buf());

        let result = run_transform(
            &args,
            &Manifest::default(),
            &Transform::Grayscale,
            &Printer::plain(),
        );

        assert!(matches!(result, Err(FxError::InvalidParameter { .. })));
    }

    #[test]
    fn test_colliding_outputs_rejected() {
        let dir = tempdir().unwrap();
        let x = dir.path().join("x");
        let y = dir.path().join("y");
        fs::create_dir_all(&x).unwrap();
        fs::create_dir_all(&y).unwrap();
        let red = write_input(&x, "a.png", &PixelGrid::filled(1, 1, Colour::rgb(255, 0, 0)));
        let blue = write_input(&y, "a.png", &PixelGrid::filled(1, 1, Colour::rgb(0, 0, 255)));
        let out_dir = dir.path().join("out");

        for inputs in [vec![red, blue], vec![x, y]] {
            let args = args_for(inputs, out_dir.clone());
            let result = run_transform(
                &args,
                &Manifest::default(),
                &Transform::Grayscale,
                &Printer::plain(),
            );

            assert!(matches!(result, Err(FxError::InvalidParameter { .. })));
            assert!(!out_dir.join("a.png").exists());
        }
    }

    #[test]
    fn test_no_images_is_not_an_error() {
        let dir = tempdir().unwrap();
        let empty = dir.path().join("empty");
        fs::create_dir_all(&empty).unwrap();
        let args = args_for(vec![empty], dir.path().join("out"));

        run_transform(&args, &Manifest::default(), &Transform::Grayscale, &Printer::plain())
            .unwrap();
    }
}
