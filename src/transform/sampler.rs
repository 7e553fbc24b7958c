//! Edge-clamped pixel sampling.
//!
//! Every transform that reads outside the current pixel goes through
//! [`EdgeClampSampler`]. Coordinates past an edge resolve to the nearest
//! pixel on that edge.

use crate::types::{Colour, PixelGrid};

/// Reads pixels at arbitrary integer coordinates by clamping to the grid.
#[derive(Debug, Clone, Copy)]
pub struct EdgeClampSampler<'a> {
    grid: &'a PixelGrid,
    max_col: i64,
    max_row: i64,
}

impl<'a> EdgeClampSampler<'a> {
    /// Create a sampler, or `None` if the grid has no pixels to clamp to.
    pub fn new(grid: &'a PixelGrid) -> Option<Self> {
        if grid.is_empty() {
            return None;
        }

        Some(Self {
            grid,
            max_col: grid.width() as i64 - 1,
            max_row: grid.height() as i64 - 1,
        })
    }

    /// Width of the underlying grid.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Height of the underlying grid.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The pixel at `(col, row)` after clamping each axis independently.
    #[inline]
    pub fn sample(&self, col: i64, row: i64) -> Colour {
        let col = col.clamp(0, self.max_col) as usize;
        let row = row.clamp(0, self.max_row) as usize;
        self.grid.pixels()[row * self.grid.width() + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize) -> PixelGrid {
        PixelGrid::from_fn(width, height, |col, row| {
            Colour::rgb(col as u8 * 10, row as u8 * 10, 0)
        })
    }

    #[test]
    fn test_in_bounds() {
        let grid = gradient(4, 3);
        let sampler = EdgeClampSampler::new(&grid).unwrap();
        assert_eq!(sampler.sample(2, 1), Colour::rgb(20, 10, 0));
    }

    #[test]
    fn test_clamps_columns() {
        let grid = gradient(4, 3);
        let sampler = EdgeClampSampler::new(&grid).unwrap();

        for row in 0..3 {
            assert_eq!(sampler.sample(-5, row), sampler.sample(0, row));
            assert_eq!(sampler.sample(4 + 5, row), sampler.sample(3, row));
        }
    }

    #[test]
    fn test_clamps_rows_and_corners() {
        let grid = gradient(4, 3);
        let sampler = EdgeClampSampler::new(&grid).unwrap();

        assert_eq!(sampler.sample(1, -1), grid.get(1, 0).unwrap());
        assert_eq!(sampler.sample(1, 100), grid.get(1, 2).unwrap());
        assert_eq!(sampler.sample(-1, -1), grid.get(0, 0).unwrap());
        assert_eq!(sampler.sample(i64::MAX, i64::MAX), grid.get(3, 2).unwrap());
    }

    #[test]
    fn test_single_pixel() {
        let grid = PixelGrid::filled(1, 1, Colour::WHITE);
        let sampler = EdgeClampSampler::new(&grid).unwrap();
        assert_eq!(sampler.sample(-3, 7), Colour::WHITE);
    }

    #[test]
    fn test_empty_grid_has_no_sampler() {
        let grid = PixelGrid::filled(0, 0, Colour::BLACK);
        assert!(EdgeClampSampler::new(&grid).is_none());
    }
}
