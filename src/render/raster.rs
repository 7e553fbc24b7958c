//! Image file input and output.
//!
//! Converts between `PixelGrid` and `image` crate buffers. Decoding and
//! encoding are left entirely to the `image` crate; the format is chosen
//! from the file extension.

use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba, RgbaImage};

use crate::error::{FxError, Result};
use crate::types::{Colour, PixelGrid};

/// Convert an RGBA buffer into a grid.
pub fn grid_from_rgba(img: &RgbaImage) -> PixelGrid {
    PixelGrid::from_fn(img.width() as usize, img.height() as usize, |col, row| {
        Colour::from(img.get_pixel(col as u32, row as u32).0)
    })
}

/// Convert a grid into an RGBA buffer.
pub fn grid_to_rgba(grid: &PixelGrid) -> RgbaImage {
    ImageBuffer::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        let colour = grid
            .get(x as usize, y as usize)
            .unwrap_or(Colour::TRANSPARENT);
        Rgba(colour.to_rgba())
    })
}

/// Decode an image file into a grid.
pub fn load_grid(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path)
        .map_err(|e| FxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to decode image: {}", e),
        })?
        .to_rgba8();

    Ok(grid_from_rgba(&img))
}

/// Encode a grid to an image file.
///
/// Formats without an alpha channel (JPEG) get the colour channels only.
pub fn save_grid(grid: &PixelGrid, path: &Path) -> Result<()> {
    let img = grid_to_rgba(grid);

    let result = match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) => DynamicImage::ImageRgba8(img).to_rgb8().save(path),
        _ => img.save(path),
    };

    result.map_err(|e| FxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
    })
}

/// True if the path has an extension this tool reads and writes.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e.as_str()))
}

/// Raster extensions picked up when scanning directories.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_rgba_round_trip_keeps_coordinates() {
        let grid = PixelGrid::from_fn(3, 2, |col, row| {
            Colour::new(col as u8, row as u8, 7, 200)
        });

        let img = grid_to_rgba(&grid);
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1).0, [2, 1, 7, 200]);
        assert_eq!(grid_from_rgba(&img), grid);
    }

    #[test]
    fn test_save_and_load_png() {
        let grid = PixelGrid::from_rows(&[
            vec![Colour::BLACK, Colour::WHITE],
            vec![Colour::new(255, 0, 0, 128), Colour::TRANSPARENT],
        ])
        .unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");

        save_grid(&grid, &path).unwrap();
        let loaded = load_grid(&path).unwrap();

        assert_eq!(loaded, grid);
    }

    #[test]
    fn test_save_jpeg_drops_alpha() {
        let grid = PixelGrid::filled(4, 4, Colour::new(200, 200, 200, 10));
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.jpg");

        save_grid(&grid, &path).unwrap();

        let loaded = load_grid(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (4, 4));
        assert!(loaded.pixels().iter().all(|c| c.is_opaque()));
    }

    #[test]
    fn test_load_missing() {
        let result = load_grid(&PathBuf::from("/nonexistent/in.png"));
        assert!(matches!(result, Err(FxError::Io { .. })));
    }

    #[test]
    fn test_is_supported_image() {
        assert!(is_supported_image(Path::new("a/b/photo.PNG")));
        assert!(is_supported_image(Path::new("shot.jpeg")));
        assert!(!is_supported_image(Path::new("kernel.txt")));
        assert!(!is_supported_image(Path::new("noext")));
    }
}
