//! Digit buffer extraction and per-country length capping.

use crate::registry::CountryEntry;

/// Strip everything that is not an ASCII digit.
///
/// Spaces, dashes, parentheses and the leading '+' are all dropped, so
/// `"+1 (618) 619-0000"` becomes `"16186190000"`.
pub fn extract_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Truncate `digits` so the national part fits `country.max_digits`.
///
/// When the buffer does not start with the country's calling code the cap
/// is applied to the total length instead, which yields the same bound.
/// Excess digits are dropped silently.
pub fn cap_to_country(digits: &str, country: &CountryEntry) -> String {
    let limit = country.max_total_digits();
    if digits.len() <= limit {
        return digits.to_string();
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        country = %country.iso,
        dropped = digits.len() - limit,
        "Truncating digits to country maximum"
    );

    // Digits are ASCII, so byte slicing is char-safe.
    digits[..limit].to_string()
}

/// The national digits of `digits` under `country`, if it carries the
/// country's calling code.
pub fn national_digits<'a>(digits: &'a str, country: &CountryEntry) -> Option<&'a str> {
    digits.strip_prefix(country.calling_code.as_str())
}
