//! Owned pixel grid
//!
//! [`PixelGrid`] is the unit of data passed between pipeline stages. Stages
//! borrow their input and return a freshly allocated grid, so every stage can
//! be exercised in isolation.

mod error;
mod pixel_grid;

pub use error::GridError;
pub use pixel_grid::PixelGrid;
