pub mod decode;
pub mod png_encode;

pub use decode::{grid_from_image, load_grid};
pub use png_encode::encode_png;
