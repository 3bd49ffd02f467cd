// ============================================================================
// Fixed-Point Multiplier
// Exact amount x decimal-factor multiplication, integer-only arithmetic
// ============================================================================

use super::errors::{ConvertError, ConvertResult};
use num_bigint::BigUint;
use num_traits::Zero;
use rust_decimal::Decimal;
use tracing::trace;

/// Multiply a smallest-unit amount by an unsigned decimal factor, staying in
/// the integer domain throughout.
///
/// The factor's dot is removed and compensated by a single integer division
/// by `10^k`, where `k` is the factor's fractional digit count after trailing
/// zeros are trimmed. The division truncates toward zero; that truncation is
/// policy, not rounding. Callers needing round-half-up must rescale the
/// amount before calling.
///
/// When the factor's fractional digits divide the product evenly, the result
/// is the mathematically exact rational product.
///
/// # Errors
/// Returns `InvalidFormat` when `factor` is not unsigned decimal text
/// (digits with at most one dot and at least one digit). Negative factors
/// are rejected.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use token_units::multiply;
///
/// let half = multiply(&BigUint::from(100u32), "0.5").unwrap();
/// assert_eq!(half, BigUint::from(50u32));
/// ```
pub fn multiply(amount: &BigUint, factor: &str) -> ConvertResult<BigUint> {
    let (int_part, frac_part) = match factor.find('.') {
        Some(pos) => (&factor[..pos], &factor[pos + 1..]),
        None => (factor, ""),
    };

    // A second dot lands in frac_part and fails the digit check.
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
        || (int_part.is_empty() && frac_part.is_empty())
    {
        return Err(ConvertError::InvalidFormat);
    }

    // "2.50" scales the same as "2.5"; trimming keeps k minimal so the
    // division discards nothing it does not have to.
    let frac_part = frac_part.trim_end_matches('0');
    let scale = frac_part.len() as u32;

    let literal = format!("{}{}", int_part, frac_part);
    let scaled: BigUint = if literal.is_empty() {
        BigUint::zero()
    } else {
        literal.parse().map_err(|_| ConvertError::InvalidFormat)?
    };

    let product = amount * scaled;
    if scale == 0 {
        return Ok(product);
    }

    let divisor = BigUint::from(10u8).pow(scale);
    let quotient = &product / &divisor;
    if !(&product % &divisor).is_zero() {
        trace!(scale, "multiply discarded a sub-unit remainder");
    }
    Ok(quotient)
}

/// Multiply a smallest-unit amount by a [`rust_decimal::Decimal`] rate.
///
/// Boundary convenience for callers holding rates as `Decimal`: the rate is
/// rendered to its exact decimal text and routed through [`multiply`], so
/// the arithmetic itself never leaves the integer domain.
///
/// # Errors
/// Returns `InvalidFormat` for negative rates.
pub fn multiply_decimal(amount: &BigUint, factor: Decimal) -> ConvertResult<BigUint> {
    if factor.is_sign_negative() && !factor.is_zero() {
        return Err(ConvertError::InvalidFormat);
    }
    multiply(amount, &factor.abs().to_string())
}
