use std::fmt;
use std::num::ParseIntError;

/// A hex color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Digit count after the optional `#` is not 3 or 6
    WrongLength(usize),
    /// A character is not a hex digit
    BadDigit(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::BadDigit(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::WrongLength(len) => {
                write!(f, "expected 3 or 6 hex digits, got {}", len)
            }
            ParseColorError::BadDigit(err) => write!(f, "bad hex digit: {}", err),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::BadDigit(err) => Some(err),
            ParseColorError::WrongLength(_) => None,
        }
    }
}
