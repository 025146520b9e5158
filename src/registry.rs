//! Country registry: the static table of calling codes, lengths and formats.

use crate::types::{CallingCode, CallingCodeError, FormatPattern};
use keshvar::{Country, CountryIterator};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Error when loading a country table.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The table is not valid JSON or does not match the entry schema.
    #[error("invalid country table: {0}")]
    Json(#[from] serde_json::Error),
    /// Two entries share an ISO identifier.
    #[error("duplicate country entry '{iso}'")]
    DuplicateIso { iso: String },
    /// An entry has a malformed calling code.
    #[error("invalid calling code for country '{iso}': {source}")]
    InvalidCallingCode {
        iso: String,
        #[source]
        source: CallingCodeError,
    },
    /// An entry has no display groups.
    #[error("empty format pattern for country '{iso}'")]
    EmptyFormat { iso: String },
    /// The table has no entries.
    #[error("country table is empty")]
    Empty,
}

/// One country of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryEntry {
    /// Lowercase ISO 3166-1 alpha-2 identifier (e.g. "us").
    pub iso: String,
    /// Display name from the table.
    pub name: String,
    /// International calling code, possibly shared with other entries.
    pub calling_code: CallingCode,
    /// Maximum number of national digits after the calling code.
    pub max_digits: usize,
    /// Grouping of national digits for display.
    pub format: FormatPattern,
    /// Prefixes following a shared calling code that identify this country
    /// (e.g. "268" for Antigua under "+1"). Empty for the main country.
    pub area_codes: Vec<String>,
}

/// Raw JSON entry; the calling code is validated separately so errors can
/// name the offending entry.
#[derive(Debug, Deserialize)]
struct RawCountryEntry {
    iso: String,
    name: String,
    calling_code: String,
    max_digits: usize,
    format: Vec<usize>,
    #[serde(default)]
    area_codes: Vec<String>,
}

impl CountryEntry {
    /// Build an entry, validating the calling code.
    pub fn new(
        iso: impl Into<String>,
        name: impl Into<String>,
        calling_code: &str,
        max_digits: usize,
        format: impl Into<Vec<usize>>,
    ) -> Result<Self, RegistryError> {
        let iso = iso.into().to_ascii_lowercase();
        let calling_code = CallingCode::new(calling_code).map_err(|source| {
            RegistryError::InvalidCallingCode {
                iso: iso.clone(),
                source,
            }
        })?;
        let format = FormatPattern::new(format);
        if format.is_empty() {
            return Err(RegistryError::EmptyFormat { iso });
        }
        Ok(Self {
            iso,
            name: name.into(),
            calling_code,
            max_digits,
            format,
            area_codes: Vec::new(),
        })
    }

    /// Attach disambiguating area codes.
    pub fn with_area_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.area_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Maximum total digit count: calling code plus national digits.
    pub fn max_total_digits(&self) -> usize {
        self.calling_code.len() + self.max_digits
    }

    /// The default value shown on focus, e.g. `"+44"`.
    pub fn seed(&self) -> String {
        self.calling_code.seed()
    }

    /// ISO country metadata for this entry, if the identifier is known.
    pub fn country(&self) -> Option<Country> {
        Country::try_from(self.iso.to_ascii_uppercase().as_str()).ok()
    }

    /// ISO short name when known, otherwise the table name.
    pub fn display_name(&self) -> String {
        self.country()
            .map(|c| c.iso_short_name().to_string())
            .unwrap_or_else(|| self.name.clone())
    }

    fn from_raw(raw: RawCountryEntry) -> Result<Self, RegistryError> {
        Ok(Self::new(raw.iso, raw.name, &raw.calling_code, raw.max_digits, raw.format)?
            .with_area_codes(raw.area_codes))
    }
}

/// Embedded default country table.
static COUNTRIES_JSON: &str = include_str!("../assets/countries.json");

/// Longest international number allowed by E.164, calling code included.
const E164_MAX_DIGITS: usize = 15;

static GLOBAL: Lazy<CountryRegistry> = Lazy::new(|| {
    CountryRegistry::from_json(COUNTRIES_JSON)
        .expect("assets/countries.json is invalid")
        .with_iso_countries()
});

/// Groups of three, the last one absorbing the remainder.
fn generic_format(max_digits: usize) -> Vec<usize> {
    let mut groups = vec![3; max_digits / 3];
    match groups.last_mut() {
        Some(last) => *last += max_digits % 3,
        None => groups.push(max_digits),
    }
    groups
}

/// Read-only lookup table of countries, in declaration order.
///
/// Declaration order is the stable tie-break between entries sharing a
/// calling code, so the main country of a shared code comes first.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    entries: Vec<CountryEntry>,
    by_iso: HashMap<String, usize>,
}

impl CountryRegistry {
    /// The embedded default registry, shared process-wide.
    pub fn global() -> &'static CountryRegistry {
        &GLOBAL
    }

    /// Build a registry from entries, rejecting duplicates.
    pub fn new(entries: Vec<CountryEntry>) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut by_iso = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if by_iso.insert(entry.iso.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateIso {
                    iso: entry.iso.clone(),
                });
            }
        }
        Ok(Self { entries, by_iso })
    }

    /// Load a registry from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: Vec<RawCountryEntry> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(CountryEntry::from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Append an entry for every ISO country the table does not list, with
    /// the calling code keshvar knows for it.
    ///
    /// Length and format are borrowed from the first listed entry with the
    /// same calling code, else derived from the E.164 limit. Appended entries
    /// come after the table, so they never win a tie against it.
    pub fn with_iso_countries(mut self) -> Self {
        for country in CountryIterator::new() {
            let iso = country.alpha2().to_string().to_ascii_lowercase();
            if self.by_iso.contains_key(&iso) || country.country_code() == 0 {
                continue;
            }
            let code = country.country_code().to_string();
            let Ok(calling_code) = CallingCode::new(&code) else {
                continue;
            };
            let (max_digits, format) = self
                .all_sharing_calling_code(&calling_code)
                .next()
                .map(|e| (e.max_digits, e.format.groups().to_vec()))
                .unwrap_or_else(|| {
                    let max_digits = E164_MAX_DIGITS.saturating_sub(calling_code.len());
                    (max_digits, generic_format(max_digits))
                });
            let Ok(entry) =
                CountryEntry::new(iso, country.iso_short_name(), &code, max_digits, format)
            else {
                continue;
            };

            #[cfg(feature = "tracing")]
            tracing::trace!(iso = %entry.iso, calling_code = %entry.calling_code, "Added country from ISO data");

            self.by_iso.insert(entry.iso.clone(), self.entries.len());
            self.entries.push(entry);
        }
        self
    }

    /// Look up an entry by ISO identifier (case-insensitive).
    pub fn find_by_iso(&self, iso: &str) -> Option<&CountryEntry> {
        self.by_iso
            .get(&iso.trim().to_ascii_lowercase())
            .map(|&idx| &self.entries[idx])
    }

    /// All entries with the given calling code, in declaration order.
    pub fn all_sharing_calling_code<'a>(
        &'a self,
        calling_code: &CallingCode,
    ) -> impl Iterator<Item = &'a CountryEntry> {
        self.entries
            .iter()
            .filter(move |e| &e.calling_code == calling_code)
    }

    /// All entries whose calling code prefixes `digits`, in declaration order.
    pub fn candidates_for<'a>(&'a self, digits: &str) -> impl Iterator<Item = &'a CountryEntry> {
        self.entries
            .iter()
            .filter(move |e| e.calling_code.prefixes(digits))
    }

    /// Iterate over all entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
