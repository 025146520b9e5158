//! Display formatting of digit buffers.

use crate::digits::national_digits;
use crate::registry::CountryEntry;

/// Render `digits` for display under `country`.
///
/// Produces `"+<callingCode> <grouped national digits>"`. A buffer that does
/// not (yet) carry the country's calling code renders as `"+" + digits`, and
/// a buffer holding only the calling code renders without a trailing space.
/// Every input digit appears in the output, in order.
///
/// ```rust
/// use tel_input::{CountryRegistry, format};
///
/// let us = CountryRegistry::global().find_by_iso("us").unwrap();
/// assert_eq!(format("16186190000", us), "+1 618 619 0000");
/// assert_eq!(format("1618", us), "+1 618");
/// ```
pub fn format(digits: &str, country: &CountryEntry) -> String {
    if digits.is_empty() {
        return String::new();
    }

    let national = match national_digits(digits, country) {
        Some(national) => national,
        None => return format!("+{digits}"),
    };

    let mut out = country.seed();
    if national.is_empty() {
        return out;
    }

    out.push(' ');
    out.push_str(&group(national, country.format.groups()));
    out
}

/// Split `national` into space separated groups of the given sizes.
/// Whatever exceeds the pattern stays in the last group.
fn group(national: &str, groups: &[usize]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(groups.len());
    let mut rest = national;

    for (idx, &size) in groups.iter().enumerate() {
        if rest.is_empty() {
            break;
        }
        let is_last = idx + 1 == groups.len();
        let take = if is_last { rest.len() } else { size.min(rest.len()) };
        if take == 0 {
            continue;
        }
        let (head, tail) = rest.split_at(take);
        parts.push(head);
        rest = tail;
    }

    if !rest.is_empty() {
        parts.push(rest);
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::extract_digits;
    use crate::registry::CountryRegistry;

    fn country(iso: &str) -> &'static CountryEntry {
        CountryRegistry::global().find_by_iso(iso).unwrap()
    }

    #[test]
    fn test_format_full_us_number() {
        assert_eq!(format("16186190000", country("us")), "+1 618 619 0000");
    }

    #[test]
    fn test_format_partial_input() {
        let us = country("us");
        assert_eq!(format("1", us), "+1");
        assert_eq!(format("16", us), "+1 6");
        assert_eq!(format("161861", us), "+1 618 61");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format("", country("gb")), "");
    }

    #[test]
    fn test_format_shorter_than_calling_code() {
        assert_eq!(format("3", country("lv")), "+3");
        assert_eq!(format("37", country("lv")), "+37");
        assert_eq!(format("371", country("lv")), "+371");
    }

    #[test]
    fn test_format_other_calling_code() {
        assert_eq!(format("4420", country("us")), "+4420");
    }

    #[test]
    fn test_format_country_patterns() {
        assert_eq!(format("447911123456", country("gb")), "+44 7911 123456");
        assert_eq!(format("37121234567", country("lv")), "+371 2123 4567");
        assert_eq!(format("33612345678", country("fr")), "+33 6 12 34 56 78");
    }

    #[test]
    fn test_format_overflow_stays_in_last_group() {
        assert_eq!(format("1618619000012", country("us")), "+1 618 619 000012");
    }

    #[test]
    fn test_group_skips_zero_sizes() {
        assert_eq!(group("123456", &[0, 3, 3]), "123 456");
    }

    #[test]
    fn test_format_is_idempotent() {
        let inputs = ["", "1", "12", "1268", "16186190000", "161861900001", "4420", "371"];
        for iso in ["us", "gb", "lv", "ag", "fr", "de"] {
            let c = country(iso);
            for digits in inputs {
                let once = format(digits, c);
                let twice = format(&extract_digits(&once), c);
                assert_eq!(once, twice, "not idempotent for {digits} under {iso}");
            }
        }
    }
}
