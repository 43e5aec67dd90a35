//! Color type
//!
//! Every stage of the pipeline works on 8-bit RGB triples. There is no alpha
//! channel and no color space conversion: distances are measured directly on
//! the stored bytes.
//!
//! # Example
//!
//! ```
//! use db32_pixel::Color;
//!
//! let red = Color::new(255, 0, 0);
//! assert_eq!(red.distance_squared(Color::BLACK), 255 * 255);
//! assert_eq!(red.to_hex(), "#FF0000");
//! ```

mod error;
mod rgb;

pub use error::ParseColorError;
pub use rgb::Color;
