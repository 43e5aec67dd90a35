use std::fmt;

/// A palette could not be built from the supplied colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors supplied
    EmptyPalette,
    /// More entries than an 8-bit indexed PNG can address
    TooManyColors {
        /// Number of colors supplied
        count: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => write!(f, "palette cannot be empty"),
            PaletteError::TooManyColors { count } => {
                write!(f, "palette has {} colors (max 256)", count)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
