//! Two-colour palette used by halftone rendering.

use crate::types::Colour;

/// Background and foreground colours for dot rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Colour every pixel starts as.
    pub background: Colour,
    /// Colour of the rendered dots.
    pub foreground: Colour,
}

impl Palette {
    pub const fn new(background: Colour, foreground: Colour) -> Self {
        Self {
            background,
            foreground,
        }
    }

    /// Swap background and foreground (dark dots on a light page).
    pub const fn inverted(self) -> Self {
        Self::new(self.foreground, self.background)
    }
}

impl Default for Palette {
    /// White dots on black.
    fn default() -> Self {
        Self::new(Colour::BLACK, Colour::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.background, Colour::BLACK);
        assert_eq!(palette.foreground, Colour::WHITE);
    }

    #[test]
    fn test_inverted() {
        let palette = Palette::default().inverted();
        assert_eq!(palette.background, Colour::WHITE);
        assert_eq!(palette.foreground, Colour::BLACK);
    }
}
