//! Widget construction errors.

use thiserror::Error;

/// Errors raised while setting up a phone input.
///
/// Typing never fails; these only surface from misconfiguration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneInputError {
    /// The configured default country is not in the registry.
    #[error("unknown default country '{iso}'")]
    UnknownCountry { iso: String },
}
