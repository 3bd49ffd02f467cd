// ============================================================================
// Token Units Library
// Exact conversions between smallest-unit amounts and decimal strings
// ============================================================================

//! # Token Units
//!
//! Pure, stateless conversion routines for token amounts stored as
//! arbitrary-precision integers ("smallest-unit" amounts, e.g. blockchain
//! balances) and their human-facing decimal representations.
//!
//! ## Features
//!
//! - **Keystroke normalization** into canonical unsigned decimal text
//! - **Exact integer ⇄ string codec** at a caller-supplied decimals count,
//!   with a lossless round-trip guarantee
//! - **Integer-only fixed-point multiplication** by a decimal factor, with
//!   documented truncation toward zero
//! - **Bounded-error f64 approximations** via 15-digit chunk decomposition
//!
//! Everything here is a pure function over immutable inputs: no I/O, no
//! shared state, safe to call from any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use num_bigint::BigUint;
//! use token_units::prelude::*;
//!
//! // Sanitize what the user typed
//! let text = normalize("00.50", true);
//! assert_eq!(text, "0.50");
//!
//! // Store it as an integer amount at 6 decimals
//! let amount = parse_units(&text, 6).unwrap();
//! assert_eq!(amount, BigUint::from(500_000u32));
//!
//! // Apply an exchange rate without leaving the integer domain
//! let converted = multiply(&amount, "1.25").unwrap();
//! assert_eq!(format_units(&converted, 6), "0.625000");
//! ```

pub mod approx;
pub mod codec;
pub mod errors;
pub mod multiply;
pub mod normalize;

pub use approx::{approximate_magnitude, approximate_with_factor};
pub use codec::{format_units, parse_units};
pub use errors::{ConvertError, ConvertResult};
pub use multiply::{multiply, multiply_decimal};
pub use normalize::{normalize, MAX_FRACTIONAL_DIGITS, MAX_INTEGER_DIGITS};

// Re-exports for convenience
pub mod prelude {
    pub use crate::approx::{approximate_magnitude, approximate_with_factor};
    pub use crate::codec::{format_units, parse_units};
    pub use crate::errors::{ConvertError, ConvertResult};
    pub use crate::multiply::{multiply, multiply_decimal};
    pub use crate::normalize::normalize;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use num_bigint::{BigInt, BigUint};

    #[test]
    fn test_keystrokes_to_stored_amount() {
        // Live typing: messy input settles into a canonical string
        let typed = normalize("0089.1250", false);
        assert_eq!(typed, "89.1250");

        let committed = normalize(&typed, true);
        let amount = parse_units(&committed, 8).unwrap();
        assert_eq!(amount, BigUint::from(8_912_500_000u64));

        // And renders back identically
        assert_eq!(format_units(&amount, 8), "89.12500000");
    }

    #[test]
    fn test_rate_conversion_pipeline() {
        // 1.5 tokens at 18 decimals, priced at 0.25 per token
        let amount = parse_units("1.5", 18).unwrap();
        let priced = multiply(&amount, "0.25").unwrap();
        assert_eq!(format_units(&priced, 18), "0.375000000000000000");
    }

    #[test]
    fn test_display_approximation_matches_exact_scale() {
        let amount = parse_units("1234567.89", 8).unwrap();
        let approx = approximate_with_factor(&amount, 1e-8);
        assert!((approx - 1234567.89).abs() < 1e-6);

        let coarse = approximate_magnitude(&BigInt::from(123_456_789_012u64));
        assert_eq!(coarse, 123_456_789_012.0);
    }

    #[test]
    fn test_error_paths_are_distinct() {
        assert_eq!(parse_units("1..2", 2), Err(ConvertError::InvalidFormat));
        assert_eq!(
            parse_units("1.234", 2),
            Err(ConvertError::PrecisionOverflow)
        );
    }
}
