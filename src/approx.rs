// ============================================================================
// Chunked Float Approximator
// Bounded-error big-integer -> f64 conversion via digit-chunk decomposition
// ============================================================================
//
// Two deliberately different precision levels:
// - approximate_with_factor sums every 15-digit chunk, so every digit of the
//   amount participates and the relative error stays near f64 epsilon per
//   chunk combination.
// - approximate_magnitude keeps only the leading 15 significant digits and
//   discards the rest. Cheaper, coarser, order-of-magnitude use only.
//
// The chunk width of 15 is load-bearing: 15 decimal digits always fit in
// f64's exact-integer range (2^53), so each chunk converts without error.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use smallvec::SmallVec;

/// Decimal digits per chunk; 10^15 - 1 < 2^53.
const CHUNK_DIGITS: usize = 15;

/// Convert a digit slice (at most `CHUNK_DIGITS` long) to f64 exactly.
#[inline]
fn chunk_to_f64(digits: &str) -> f64 {
    digits
        .bytes()
        .fold(0.0, |acc, b| acc * 10.0 + f64::from(b - b'0'))
}

/// Approximate `amount * factor` as an f64, keeping every digit in play.
///
/// The amount's digit string is split into 15-digit chunks from the least
/// significant end, each converted to f64 exactly, and the products
/// `chunk * 10^position * factor` are summed most-significant first. No
/// digit is dropped; the only error is f64 rounding in the combination,
/// bounded by roughly f64 epsilon per chunk.
///
/// The output is an approximation for display and magnitude math. Never
/// feed it back into settlement logic; use [`crate::multiply`] for exact
/// results.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use token_units::approximate_with_factor;
///
/// let amount = BigUint::from(1_500_000u64);
/// assert_eq!(approximate_with_factor(&amount, 0.5), 750_000.0);
/// ```
pub fn approximate_with_factor(amount: &BigUint, factor: f64) -> f64 {
    if amount.is_zero() {
        return 0.0;
    }

    let digits = amount.to_str_radix(10);

    // Least-significant first so only the leading chunk can be short.
    let mut chunks: SmallVec<[f64; 4]> = SmallVec::new();
    let mut end = digits.len();
    while end > 0 {
        let start = end.saturating_sub(CHUNK_DIGITS);
        chunks.push(chunk_to_f64(&digits[start..end]));
        end = start;
    }

    let mut sum = 0.0;
    for (position, chunk) in chunks.iter().enumerate().rev() {
        let weight = 10f64.powi((CHUNK_DIGITS * position) as i32);
        sum += chunk * weight * factor;
    }
    sum
}

/// Approximate an amount's magnitude as an f64 from its leading 15
/// significant digits.
///
/// Digits beyond the leading 15 are discarded, not summed; this is
/// intentionally coarser than [`approximate_with_factor`] and must not be
/// used where that function's precision is required. Suitable for UI
/// ordering and magnitude display only.
///
/// Alone among the conversion routines this one tolerates a signed input;
/// the sign is applied to the final magnitude.
pub fn approximate_magnitude(amount: &BigInt) -> f64 {
    if amount.is_zero() {
        return 0.0;
    }

    let digits = amount.magnitude().to_str_radix(10);
    let magnitude = if digits.len() <= CHUNK_DIGITS {
        chunk_to_f64(&digits)
    } else {
        chunk_to_f64(&digits[..CHUNK_DIGITS])
            * 10f64.powi((digits.len() - CHUNK_DIGITS) as i32)
    };

    if amount.sign() == Sign::Minus {
        -magnitude
    } else {
        magnitude
    }
}
