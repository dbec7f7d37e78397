// ============================================================================
// Numeric Errors
// Error types for the decimal-to-fixed conversion boundary
// ============================================================================

use std::fmt;

/// Errors reported by decimal-to-fixed conversion.
///
/// These are the only checked failures in the crate. Everything else
/// (overflow, division by zero, out-of-domain transcendental inputs) is
/// unchecked by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Scaled decimal magnitude is at least 1e9 and does not fit the
    /// 32 integer bits of a Q32.32 value
    OutOfRange,
    /// The input carried fractional digits beyond the requested precision,
    /// so converting it would silently lose information
    PrecisionLoss,
    /// The requested fractional-digit count is outside 0..=6
    InvalidPrecision,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::OutOfRange => {
                write!(f, "out of range: scaled decimal magnitude exceeds 32 integer bits")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: input has fractional digits beyond the requested precision"
            ),
            NumericError::InvalidPrecision => {
                write!(f, "invalid precision: only 0 to 6 fractional digits are supported")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for fallible conversions
pub type NumericResult<T> = Result<T, NumericError>;
