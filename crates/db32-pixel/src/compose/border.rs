//! Border specification and the compositor stage.

use crate::color::Color;
use crate::grid::PixelGrid;
use crate::palette::Palette;

/// Outer stroke color of the default frame.
pub const FRAME_OUTER: Color = Color::WHITE;

/// Inner stroke color of the default frame.
pub const FRAME_INNER: Color = Color::new(91, 110, 225);

/// One rectangle outline in the margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderLayer {
    /// Stroke width in pixels
    pub thickness: usize,
    /// Requested color; resolved through the palette before drawing
    pub color: Color,
}

impl BorderLayer {
    pub fn new(thickness: usize, color: Color) -> Self {
        Self { thickness, color }
    }
}

/// Margin size plus the outlines drawn inside it, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BorderSpec {
    /// Pixels added on each side of the image
    pub margin: usize,
    /// Outlines, outermost first
    pub layers: Vec<BorderLayer>,
}

impl BorderSpec {
    pub fn new(margin: usize, layers: Vec<BorderLayer>) -> Self {
        Self { margin, layers }
    }

    /// No border at all; [`compose_border`] returns its input unchanged.
    pub fn none() -> Self {
        Self::default()
    }

    /// The default two-stroke frame for a given margin.
    ///
    /// Each stroke is `max(1, margin / 5)` pixels: white outside, blue inside,
    /// with the rest of the margin left black.
    ///
    /// ```
    /// use db32_pixel::BorderSpec;
    ///
    /// let spec = BorderSpec::frame(20);
    /// assert_eq!(spec.margin, 20);
    /// assert_eq!(spec.layers.len(), 2);
    /// assert_eq!(spec.layers[0].thickness, 4);
    /// ```
    pub fn frame(margin: usize) -> Self {
        Self::frame_with(margin, &[FRAME_OUTER, FRAME_INNER])
    }

    /// A frame with one `max(1, margin / 5)` pixel stroke per color,
    /// outermost first.
    pub fn frame_with(margin: usize, colors: &[Color]) -> Self {
        if margin == 0 {
            return Self::none();
        }
        let thickness = (margin / 5).max(1);
        Self {
            margin,
            layers: colors
                .iter()
                .map(|&color| BorderLayer::new(thickness, color))
                .collect(),
        }
    }

    /// True when composing with this spec is the identity.
    pub fn is_empty(&self) -> bool {
        self.margin == 0 || self.layers.is_empty()
    }
}

/// Stroke a `thickness`-wide outline just inside the rectangle
/// `[inset, w - inset) x [inset, h - inset)`.
fn stroke_outline(canvas: &mut PixelGrid, inset: usize, thickness: usize, color: Color) {
    let (w, h) = canvas.dimensions();
    let (x0, y0) = (inset, inset);
    let (x1, y1) = (w - inset, h - inset);

    // top, bottom, left, right
    canvas.fill_rect(x0, y0, x1, (y0 + thickness).min(y1), color);
    canvas.fill_rect(x0, y1.saturating_sub(thickness).max(y0), x1, y1, color);
    canvas.fill_rect(x0, y0, (x0 + thickness).min(x1), y1, color);
    canvas.fill_rect(x1.saturating_sub(thickness).max(x0), y0, x1, y1, color);
}

/// Surround `grid` with a framed margin.
///
/// Returns a `(w + 2m) x (h + 2m)` grid. Layer `i` is drawn at an inset equal
/// to the summed thickness of the layers before it. Every color, including
/// the black background, is passed through [`Palette::nearest`] so the result
/// only contains palette entries when the body does. Layers that no longer fit
/// inside the canvas are skipped. The body is placed last and is never
/// overdrawn.
///
/// An empty spec (zero margin or no layers) returns a copy of `grid`.
///
/// # Panics
///
/// Panics if the framed size overflows `usize`. The pipeline checks its
/// output size before calling this.
pub fn compose_border(grid: &PixelGrid, spec: &BorderSpec, palette: &Palette) -> PixelGrid {
    if spec.is_empty() {
        return grid.clone();
    }

    let m = spec.margin;
    let (w, h) = grid.dimensions();
    let background = palette.nearest(Color::BLACK);
    let mut canvas = PixelGrid::filled(w + 2 * m, h + 2 * m, background);

    let (cw, ch) = canvas.dimensions();
    let mut inset = 0;
    for layer in &spec.layers {
        if 2 * inset >= cw || 2 * inset >= ch {
            break;
        }
        if layer.thickness > 0 {
            stroke_outline(&mut canvas, inset, layer.thickness, palette.nearest(layer.color));
        }
        inset += layer.thickness;
    }

    canvas.blit(grid, m, m);
    canvas
}
