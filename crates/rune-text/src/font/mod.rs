pub mod face;
pub mod metrics;

pub use face::FontFace;
pub use metrics::{FontMetrics, ScaledFontMetrics};

use core::fmt;

/// Errors that can occur while working with fonts.
#[derive(Debug)]
pub enum FontError {
    Io(std::io::Error),
    InvalidFont,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Io(err) => write!(f, "font I/O error: {err}"),
            FontError::InvalidFont => write!(f, "invalid font data"),
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontError::Io(err) => Some(err),
            FontError::InvalidFont => None,
        }
    }
}

impl From<std::io::Error> for FontError {
    fn from(err: std::io::Error) -> Self {
        FontError::Io(err)
    }
}

/// Convenient result alias for font-related operations.
pub type Result<T> = std::result::Result<T, FontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_font_bytes() {
        let err = FontFace::from_vec(vec![0u8; 16], 0).unwrap_err();
        assert!(matches!(err, FontError::InvalidFont));
        assert_eq!(err.to_string(), "invalid font data");
    }

    #[test]
    fn test_missing_font_file() {
        let err = FontFace::from_path("/nonexistent/rune-edit/font.ttf", 0).unwrap_err();
        assert!(matches!(err, FontError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
