// ============================================================================
// Decimal-String Normalizer
// Sanitizes raw keystrokes into canonical unsigned decimal text
// ============================================================================

use tracing::trace;

/// Maximum digits kept in the integer part of a normalized string.
pub const MAX_INTEGER_DIGITS: usize = 9;

/// Maximum digits kept in the fractional part of a normalized string.
pub const MAX_FRACTIONAL_DIGITS: usize = 18;

/// Normalize raw user input into canonical unsigned decimal text.
///
/// Designed for live-typing contexts: it never fails and never panics,
/// degrading any input to the best-effort canonical form instead. Excess
/// digits are truncated, not rounded.
///
/// Rules, in order:
/// - every character that is not an ASCII digit or `.` is stripped
/// - empty input stays empty (an empty field is "no value entered", not zero)
/// - input with no nonzero digit collapses to `"0"`
/// - redundant leading zeros are removed; a lone `0` survives before a dot
/// - only the first `.` is kept; later dots are deleted from the remainder
/// - a leading `.` gets a `0` prepended
/// - the integer part is truncated to 9 digits, the fractional part to 18
///
/// `strict_final` additionally strips a trailing dot with no digits after
/// it; pass it only when the field is being committed, not actively edited.
///
/// # Example
/// ```
/// use token_units::normalize;
///
/// assert_eq!(normalize("007", false), "7");
/// assert_eq!(normalize("12.34.56", false), "12.3456");
/// assert_eq!(normalize("5.", true), "5");
/// ```
pub fn normalize(raw: &str, strict_final: bool) -> String {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if filtered.is_empty() {
        return String::new();
    }

    if !filtered.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        return "0".to_string();
    }

    // Split on the first dot; any later dot is noise and its digits belong
    // to the fractional part.
    let (int_raw, frac_raw) = match filtered.find('.') {
        Some(pos) => {
            let frac: String = filtered[pos + 1..]
                .chars()
                .filter(char::is_ascii_digit)
                .collect();
            (&filtered[..pos], Some(frac))
        },
        None => (filtered.as_str(), None),
    };

    let mut int_part = int_raw.trim_start_matches('0');
    if int_part.is_empty() {
        int_part = "0";
    }
    if int_part.len() > MAX_INTEGER_DIGITS {
        trace!(
            dropped = int_part.len() - MAX_INTEGER_DIGITS,
            "integer part truncated during normalization"
        );
        int_part = &int_part[..MAX_INTEGER_DIGITS];
    }

    match frac_raw {
        Some(frac) => {
            let frac = if frac.len() > MAX_FRACTIONAL_DIGITS {
                trace!(
                    dropped = frac.len() - MAX_FRACTIONAL_DIGITS,
                    "fractional part truncated during normalization"
                );
                &frac[..MAX_FRACTIONAL_DIGITS]
            } else {
                frac.as_str()
            };

            if frac.is_empty() && strict_final {
                int_part.to_string()
            } else {
                format!("{}.{}", int_part, frac)
            }
        },
        None => int_part.to_string(),
    }
}
