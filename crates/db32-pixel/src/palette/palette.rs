//! Palette struct with first-wins nearest-color matching.
//!
//! The DB32 table is the only color vocabulary of the pixel-art pipeline.
//! Custom palettes exist for tests and embedding callers; they follow the
//! same matching rules.

use super::error::PaletteError;
use crate::color::Color;

/// The DawnBringer 32-color palette, in its reference order.
///
/// Order matters: when an input color is equidistant from several entries,
/// the one with the lowest index wins.
pub const DB32: [Color; 32] = [
    Color::new(0, 0, 0),
    Color::new(34, 32, 52),
    Color::new(69, 40, 60),
    Color::new(102, 57, 49),
    Color::new(143, 86, 59),
    Color::new(223, 113, 38),
    Color::new(217, 160, 102),
    Color::new(238, 195, 154),
    Color::new(251, 242, 54),
    Color::new(153, 229, 80),
    Color::new(106, 190, 48),
    Color::new(55, 148, 110),
    Color::new(75, 105, 47),
    Color::new(82, 75, 36),
    Color::new(50, 60, 57),
    Color::new(63, 63, 116),
    Color::new(48, 96, 130),
    Color::new(91, 110, 225),
    Color::new(99, 155, 255),
    Color::new(95, 205, 228),
    Color::new(203, 219, 252),
    Color::new(255, 255, 255),
    Color::new(155, 173, 183),
    Color::new(132, 126, 135),
    Color::new(105, 106, 106),
    Color::new(89, 86, 82),
    Color::new(118, 66, 138),
    Color::new(172, 50, 50),
    Color::new(217, 87, 99),
    Color::new(215, 123, 186),
    Color::new(143, 151, 74),
    Color::new(138, 111, 48),
];

/// Largest palette an 8-bit indexed PNG can address.
const MAX_COLORS: usize = 256;

/// An ordered, immutable set of reference colors.
///
/// Matching is a brute-force linear scan over the entries using squared RGB
/// distance. Duplicates are allowed; the first occurrence always wins, so a
/// later duplicate is never returned by [`Palette::nearest_index`].
///
/// # Example
///
/// ```
/// use db32_pixel::{Color, Palette};
///
/// let palette = Palette::db32();
/// assert_eq!(palette.len(), 32);
///
/// // Pure red lands on DB32's dark red
/// assert_eq!(palette.nearest(Color::new(255, 0, 0)), Color::new(172, 50, 50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from an ordered list of colors.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` is empty ([`PaletteError::EmptyPalette`])
    /// - `colors` has more than 256 entries ([`PaletteError::TooManyColors`])
    pub fn new(colors: &[Color]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
            });
        }
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// The 32-entry DB32 reference palette.
    pub fn db32() -> Self {
        Self {
            colors: DB32.to_vec(),
        }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Color {
        self.colors[idx]
    }

    /// All entries in declared order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Index of the entry closest to `color`.
    ///
    /// Linear scan tracking the running minimum. A candidate only replaces
    /// the best entry when it is strictly closer, so among equidistant
    /// entries the first in declared order is returned.
    #[inline]
    pub fn nearest_index(&self, color: Color) -> usize {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
                if dist == 0 {
                    break;
                }
            }
        }

        best_idx
    }

    /// The entry closest to `color` (see [`Palette::nearest_index`]).
    #[inline]
    pub fn nearest(&self, color: Color) -> Color {
        self.colors[self.nearest_index(color)]
    }

    /// Index of the first entry exactly equal to `color`, if any.
    pub fn index_of(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    /// Returns true if `color` is one of the palette entries.
    #[inline]
    pub fn contains(&self, color: Color) -> bool {
        self.index_of(color).is_some()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::db32()
    }
}
