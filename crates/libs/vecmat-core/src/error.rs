//! Error type for vecmat.

/// Errors raised by the checked operations of the crate.
///
/// The unchecked arithmetic (normalisation, projection, inversion) never
/// produces these; degenerate inputs there yield NaN or infinity like plain
/// floating point arithmetic would.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Component or cell access outside of the valid range.
    #[error("Index {index} out of range for {len} elements")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of addressable elements.
        len: usize,
    },

    /// A flat array does not hold the number of elements the target needs.
    #[error("Expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Required number of elements.
        expected: usize,
        /// Provided number of elements.
        actual: usize,
    },

    /// The control polygon is too short to describe a curve.
    #[error("At least {required} control points are required, got {actual}")]
    NotEnoughControlPoints {
        /// Minimum number of control points.
        required: usize,
        /// Provided number of control points.
        actual: usize,
    },

    /// Input rejected by one of the strict `try_*` operations.
    #[error("Degenerate input: {0}")]
    Degenerate(&'static str),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::IndexOutOfRange { index: 4, len: 3 }.to_string(),
            "Index 4 out of range for 3 elements"
        );
        assert_eq!(
            Error::NotEnoughControlPoints {
                required: 2,
                actual: 0
            }
            .to_string(),
            "At least 2 control points are required, got 0"
        );
        assert_eq!(
            Error::Degenerate("zero-length vector").to_string(),
            "Degenerate input: zero-length vector"
        );
    }
}
