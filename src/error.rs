//! Error types for layout modelling and verification

/// Result type alias for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised when building a target model or comparing two layouts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The platform-width integer has a width no known ABI uses for `time_t`
    #[error("Unsupported time_t width: {width} bytes (expected 4 or 8)")]
    UnsupportedTimeWidth { width: usize },

    /// Overall record size differs
    #[error("Size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Width of the platform-width integer differs
    #[error("time_t width mismatch: expected {expected}, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },

    /// A single field sits at a different offset
    #[error("Offset mismatch for {field}: expected {expected}, got {actual}")]
    OffsetMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl LayoutError {
    /// Create an unsupported width error
    pub fn unsupported_time_width(width: usize) -> Self {
        Self::UnsupportedTimeWidth { width }
    }

    /// Create a size mismatch error
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    /// Create a width mismatch error
    pub fn width_mismatch(expected: usize, actual: usize) -> Self {
        Self::WidthMismatch { expected, actual }
    }

    /// Create an offset mismatch error for a named field
    pub fn offset_mismatch(field: &'static str, expected: usize, actual: usize) -> Self {
        Self::OffsetMismatch {
            field,
            expected,
            actual,
        }
    }
}
