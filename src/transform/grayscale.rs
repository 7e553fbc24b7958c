//! Luma grayscale conversion.
//!
//! Uses the ITU-R BT.601 weights. Pixels that are already gray keep their
//! exact value instead of going through floating point.

use crate::types::{Colour, PixelGrid};

const RED_WEIGHT: f64 = 0.299;
const GREEN_WEIGHT: f64 = 0.587;
const BLUE_WEIGHT: f64 = 0.114;

/// Perceived brightness of a colour in [0, 255].
pub fn intensity(colour: Colour) -> f64 {
    if colour.is_gray() {
        return f64::from(colour.r);
    }

    RED_WEIGHT * f64::from(colour.r)
        + GREEN_WEIGHT * f64::from(colour.g)
        + BLUE_WEIGHT * f64::from(colour.b)
}

/// Convert one pixel to the gray of equal intensity, keeping its alpha.
pub fn to_gray(colour: Colour) -> Colour {
    // The weights sum to 1, so the rounded value always fits a u8.
    let y = intensity(colour).round() as u8;
    Colour::new(y, y, y, colour.a)
}

/// Convert every pixel of a grid to gray.
pub fn grayscale(grid: &PixelGrid) -> PixelGrid {
    grid.map(to_gray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primaries() {
        let grid = PixelGrid::from_rows(&[
            vec![Colour::rgb(255, 0, 0), Colour::rgb(0, 255, 0)],
            vec![Colour::rgb(0, 0, 255), Colour::rgb(255, 255, 255)],
        ])
        .unwrap();

        let gray = grayscale(&grid);

        let expected = PixelGrid::from_rows(&[
            vec![Colour::gray(76), Colour::gray(150)],
            vec![Colour::gray(29), Colour::gray(255)],
        ])
        .unwrap();
        assert_eq!(gray, expected);
    }

    #[test]
    fn test_matches_luma_formula() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(51) {
                    let c = Colour::rgb(r as u8, g as u8, b as u8);
                    let exact = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
                    assert!(exact.round() <= 255.0);
                    let out = to_gray(c);
                    assert_eq!(out.r as f64, exact.round(), "{:?}", c);
                    assert!(out.is_gray());
                }
            }
        }
    }

    #[test]
    fn test_idempotent_on_gray() {
        for y in 0..=255u8 {
            let once = to_gray(Colour::gray(y));
            assert_eq!(once, Colour::gray(y));
            assert_eq!(to_gray(once), once);
        }
    }

    #[test]
    fn test_preserves_alpha() {
        assert_eq!(to_gray(Colour::new(255, 0, 0, 40)), Colour::new(76, 76, 76, 40));
    }

    #[test]
    fn test_does_not_touch_input() {
        let grid = PixelGrid::filled(2, 2, Colour::rgb(10, 20, 30));
        let before = grid.clone();
        let _ = grayscale(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_empty() {
        let grid = PixelGrid::filled(0, 3, Colour::BLACK);
        let gray = grayscale(&grid);
        assert!(gray.is_empty());
        assert_eq!(gray.height(), 3);
    }
}
