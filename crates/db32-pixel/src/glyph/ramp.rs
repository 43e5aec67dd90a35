//! The brightness ramp.

use crate::color::Color;

/// Characters from darkest to brightest.
pub const DEFAULT_RAMP: &str = " .:-=+*#%@";

/// An ordered character set indexed by brightness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    /// `floor(brightness / 255 * (N - 1))`
    #[inline]
    pub fn index_for(&self, brightness: u8) -> usize {
        brightness as usize * (self.glyphs.len() - 1) / 255
    }

    /// Glyph for a color, by its truncated luma.
    #[inline]
    pub fn glyph_for(&self, color: Color) -> char {
        self.glyphs[self.index_for(color.brightness())]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.chars().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        let ramp = GlyphRamp::default();
        assert_eq!(ramp.glyph_for(Color::BLACK), ' ');
        assert_eq!(ramp.glyph_for(Color::WHITE), '@');
    }

    #[test]
    fn test_index_floors() {
        let ramp = GlyphRamp::default();
        // 127 * 9 / 255 = 4.48
        assert_eq!(ramp.index_for(127), 4);
        // 254 * 9 / 255 = 8.96
        assert_eq!(ramp.index_for(254), 8);
        assert_eq!(ramp.index_for(255), 9);
    }
}
