// ============================================================================
// Scaled-Integer Codec
// Exact integer <-> decimal-string conversion at a fixed decimals count
// ============================================================================

use super::errors::{ConvertError, ConvertResult};
use num_bigint::BigUint;

/// Render a smallest-unit amount as decimal text with `decimals` fractional
/// digits.
///
/// The amount's digit string is left-padded with zeros to at least
/// `decimals` digits, then a dot is inserted `decimals` digits from the
/// right. With `decimals == 0` the dot is omitted entirely.
///
/// The inverse of [`parse_units`]; the round-trip is exact for any amount
/// and any `decimals`.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use token_units::format_units;
///
/// assert_eq!(format_units(&BigUint::from(1234u32), 2), "12.34");
/// assert_eq!(format_units(&BigUint::from(5u32), 2), "0.05");
/// ```
pub fn format_units(amount: &BigUint, decimals: u32) -> String {
    let digits = amount.to_str_radix(10);
    let width = decimals as usize;

    if width == 0 {
        return digits;
    }

    let padded = if digits.len() < width {
        format!("{:0>width$}", digits)
    } else {
        digits
    };

    let insert = padded.len() - width;
    if insert == 0 {
        format!("0.{}", padded)
    } else {
        format!("{}.{}", &padded[..insert], &padded[insert..])
    }
}

/// Parse decimal text back into a smallest-unit amount at `decimals`
/// fractional digits.
///
/// This direction is lossless by contract: a fractional part longer than
/// `decimals` is rejected rather than silently truncated.
///
/// The integer part may exceed the normalizer's 9-digit cap so that
/// arbitrarily large formatted amounts round-trip.
///
/// # Errors
/// - `InvalidFormat` if `text` is not unsigned decimal text (nonempty
///   integer part without redundant leading zeros, at most one dot, nonempty
///   all-digit fractional part when a dot is present)
/// - `PrecisionOverflow` if the fractional part is longer than `decimals`
pub fn parse_units(text: &str, decimals: u32) -> ConvertResult<BigUint> {
    let (int_part, frac_part) = match text.find('.') {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    };

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConvertError::InvalidFormat);
    }
    if int_part.len() > 1 && int_part.starts_with('0') {
        return Err(ConvertError::InvalidFormat);
    }

    let frac = match frac_part {
        Some(frac) => {
            // A second dot lands in here and fails the digit check.
            if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ConvertError::InvalidFormat);
            }
            frac
        },
        None => "",
    };

    if frac.len() > decimals as usize {
        return Err(ConvertError::PrecisionOverflow);
    }

    // Right-pad the fraction to exactly `decimals` digits and read the
    // whole thing as one integer.
    let combined = format!("{}{:0<width$}", int_part, frac, width = decimals as usize);
    combined.parse().map_err(|_| ConvertError::InvalidFormat)
}
