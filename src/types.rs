//! Core value types shared by the phone-input engine.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// CallingCode
// =============================================================================

/// Error when parsing a calling code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallingCodeError {
    /// Calling code contains non-digit characters.
    #[error("calling code must contain only digits")]
    NonDigit,
    /// Calling code is empty.
    #[error("calling code cannot be empty")]
    Empty,
}

/// International calling code (e.g., "1" for the NANP, "44" for the UK).
///
/// Calling codes are stored without the leading '+' sign. Several countries
/// may share one calling code.
///
/// # Example
///
/// ```rust
/// use tel_input::CallingCode;
///
/// let cc = CallingCode::new("+371").unwrap();
/// assert_eq!(cc.to_string(), "371");
/// assert_eq!(cc.seed(), "+371");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CallingCode(String);

impl CallingCode {
    /// Create a new CallingCode from a string.
    ///
    /// The input can include a leading '+' which will be stripped.
    pub fn new(s: impl AsRef<str>) -> Result<Self, CallingCodeError> {
        let n = s.as_ref().trim().trim_start_matches('+');
        if n.is_empty() {
            return Err(CallingCodeError::Empty);
        }
        if !n.chars().all(|c| c.is_ascii_digit()) {
            return Err(CallingCodeError::NonDigit);
        }
        Ok(Self(n.to_string()))
    }

    /// Get the calling code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits in the calling code.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; an empty calling code cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a digit sequence begins with this calling code.
    pub fn prefixes(&self, digits: &str) -> bool {
        digits.starts_with(self.0.as_str())
    }

    /// The default field value for this calling code, e.g. `"+44"`.
    pub fn seed(&self) -> String {
        format!("+{}", self.0)
    }
}

impl FromStr for CallingCode {
    type Err = CallingCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for CallingCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CallingCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for CallingCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        CallingCode::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for CallingCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// FormatPattern
// =============================================================================

/// Grouping of national digits for display, as a list of group sizes.
///
/// `[3, 3, 4]` renders `6186190000` as `618 619 0000`. Digits beyond the
/// pattern are appended to the last group so no digit is ever dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatPattern(Vec<usize>);

impl FormatPattern {
    /// Create a pattern from group sizes. Zero-sized groups are ignored.
    pub fn new(groups: impl Into<Vec<usize>>) -> Self {
        let mut groups = groups.into();
        groups.retain(|&g| g > 0);
        Self(groups)
    }

    /// Group sizes in display order.
    pub fn groups(&self) -> &[usize] {
        &self.0
    }

    /// Whether the pattern has no groups at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of digits covered by the pattern.
    pub fn capacity(&self) -> usize {
        self.0.iter().sum()
    }
}

impl From<Vec<usize>> for FormatPattern {
    fn from(groups: Vec<usize>) -> Self {
        Self::new(groups)
    }
}
