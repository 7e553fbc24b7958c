//! Pixel grid storage.
//!
//! A `PixelGrid` is the in-memory raster every transform reads from and
//! writes to. Pixels are stored row-major; `(col, row)` addressing matches
//! image coordinates with the origin at the top-left corner.

use crate::error::{FxError, Result};
use crate::types::Colour;

/// A width x height grid of RGBA pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Colour>,
}

impl PixelGrid {
    /// Create a grid filled with a single colour.
    pub fn filled(width: usize, height: usize, colour: Colour) -> Self {
        Self {
            width,
            height,
            pixels: vec![colour; width * height],
        }
    }

    /// Create a grid from row-major pixels.
    ///
    /// Fails if the pixel count does not match `width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Colour>) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(FxError::InvalidParameter {
                message: format!(
                    "{} pixels supplied for a {}x{} grid",
                    pixels.len(),
                    width,
                    height
                ),
                help: Some(format!("Expected exactly {} pixels", width * height)),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<Colour>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(FxError::InvalidParameter {
                message: format!("row {} has {} pixels, expected {}", index, row.len(), width),
                help: None,
            });
        }

        Self::from_pixels(width, height, rows.concat())
    }

    /// Create a grid by evaluating `f(col, row)` for every coordinate.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Colour) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(col, row));
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the grid has no pixels (zero width or zero height).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the pixel at `(col, row)`, or `None` when out of bounds.
    pub fn get(&self, col: usize, row: usize) -> Option<Colour> {
        if col < self.width && row < self.height {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Set the pixel at `(col, row)`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, col: usize, row: usize, colour: Colour) {
        if col < self.width && row < self.height {
            self.pixels[row * self.width + col] = colour;
        }
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Colour]> {
        // chunks() panics on a zero chunk size
        self.pixels.chunks(self.width.max(1))
    }

    /// Build a new grid of the same size by mapping every pixel.
    pub fn map(&self, f: impl Fn(Colour) -> Colour) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&c| f(c)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled() {
        let grid = PixelGrid::filled(3, 2, Colour::WHITE);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.pixels().iter().all(|&c| c == Colour::WHITE));
    }

    #[test]
    fn test_from_pixels_length_mismatch() {
        let result = PixelGrid::from_pixels(2, 2, vec![Colour::BLACK; 3]);
        assert!(matches!(result, Err(FxError::InvalidParameter { .. })));
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![Colour::BLACK; 2], vec![Colour::BLACK; 1]];
        assert!(PixelGrid::from_rows(&rows).is_err());
    }

    #[test]
    fn test_get_set_row_major() {
        let mut grid = PixelGrid::filled(3, 2, Colour::BLACK);
        grid.set(2, 1, Colour::WHITE);

        assert_eq!(grid.get(2, 1), Some(Colour::WHITE));
        assert_eq!(grid.pixels()[5], Colour::WHITE);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_set_out_of_bounds_ignored() {
        let mut grid = PixelGrid::filled(1, 1, Colour::BLACK);
        grid.set(5, 5, Colour::WHITE);
        assert_eq!(grid, PixelGrid::filled(1, 1, Colour::BLACK));
    }

    #[test]
    fn test_from_fn_coordinates() {
        let grid = PixelGrid::from_fn(2, 2, |col, row| Colour::gray((col * 10 + row) as u8));
        assert_eq!(grid.get(1, 0), Some(Colour::gray(10)));
        assert_eq!(grid.get(0, 1), Some(Colour::gray(1)));
    }

    #[test]
    fn test_empty_grid() {
        let grid = PixelGrid::filled(0, 4, Colour::BLACK);
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 0);
        assert_eq!(grid.height(), 4);
    }
}
