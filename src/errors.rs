// ============================================================================
// Conversion Errors
// Error types for exact amount/decimal-string conversions
// ============================================================================

use std::fmt;

/// Errors that can occur during exact conversion operations.
///
/// Only the exact paths (`parse_units`, `multiply`) fail. The normalizer and
/// the float approximators serve live-input and display paths and always
/// produce a best-effort value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvertError {
    /// Text does not match the canonical decimal-string grammar
    InvalidFormat,
    /// Fractional part has more digits than the supplied decimals count
    PrecisionOverflow,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidFormat => {
                write!(f, "invalid format: text is not a canonical decimal string")
            },
            ConvertError::PrecisionOverflow => write!(
                f,
                "precision overflow: fractional part exceeds the decimals count"
            ),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
