//! Country resolution for digit sequences that may match several countries.
//!
//! Every entry whose calling code prefixes the digits is a candidate. An
//! entry with area codes stays a candidate only while one of its area codes
//! can still match the national digits typed so far. Candidates are ranked
//! by specificity: the calling code length plus the length of a fully
//! matched area code. Ties keep the current country when it is among the
//! winners, so a bare shared code like "+1" never flips the active flag.

use crate::digits::national_digits;
use crate::registry::{CountryEntry, CountryRegistry};

/// Whether `national` is still compatible with `area_code`: one of them is
/// a prefix of the other.
fn area_code_compatible(national: &str, area_code: &str) -> bool {
    national.starts_with(area_code) || area_code.starts_with(national)
}

/// Specificity of `entry` for `digits`, or `None` if it is not a plausible
/// match. `digits` must start with the entry's calling code.
fn specificity(entry: &CountryEntry, digits: &str) -> Option<usize> {
    let national = national_digits(digits, entry)?;
    let cc_len = entry.calling_code.len();

    if entry.area_codes.is_empty() {
        return Some(cc_len);
    }

    let mut plausible = false;
    let mut matched = 0;
    for area_code in &entry.area_codes {
        if area_code_compatible(national, area_code) {
            plausible = true;
            if national.starts_with(area_code.as_str()) {
                matched = matched.max(area_code.len());
            }
        }
    }

    plausible.then_some(cc_len + matched)
}

/// Pick the country `digits` belongs to.
///
/// Falls back to `current` when nothing matches, including for an empty
/// buffer; the widget never ends up without a country.
pub fn resolve<'a>(
    registry: &'a CountryRegistry,
    digits: &str,
    current: &'a CountryEntry,
) -> &'a CountryEntry {
    if digits.is_empty() {
        return current;
    }

    let mut best: Option<(&CountryEntry, usize)> = None;
    let mut current_score = None;

    for candidate in registry.candidates_for(digits) {
        let Some(score) = specificity(candidate, digits) else {
            continue;
        };
        if candidate.iso == current.iso {
            current_score = Some(score);
        }
        // Strictly greater keeps the earliest declaration on ties.
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }

    match (best, current_score) {
        (None, _) => current,
        (Some((_, top)), Some(score)) if score == top => current,
        (Some((winner, _)), _) => {
            #[cfg(feature = "tracing")]
            if winner.iso != current.iso {
                tracing::debug!(from = %current.iso, to = %winner.iso, "Resolved country changed");
            }
            winner
        }
    }
}
