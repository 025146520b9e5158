//! # tel-input
//!
//! Engine behind an international telephone-number input field.
//!
//! As the user types, the engine keeps a normalized digit buffer, works out
//! which country the number belongs to (including countries sharing a
//! calling code), caps the buffer at that country's maximum length and
//! formats it for display. It also manages the calling-code "seed" that
//! appears on focus and disappears on blur when left untouched.
//!
//! ## Quick Start
//!
//! ```rust
//! use tel_input::{InputWidget, PhoneInput};
//!
//! let mut input = PhoneInput::builder().default_country("us").build()?;
//!
//! let cmd = input.on_input("+16186190000");
//! assert_eq!(input.value(), "+1 618 619 0000");
//! assert_eq!(cmd.map(|c| c.value().to_string()), Some("+1 618 619 0000".into()));
//!
//! input.select_flag(("Canada", "ca"));
//! assert_eq!(input.active_country().iso, "ca");
//! # Ok::<(), tel_input::PhoneInputError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! PhoneInput            (entry points: on_input / select_flag / focus / blur)
//!     │
//!     ├── digits        extract_digits, cap_to_country
//!     ├── resolver      resolve (longest specific prefix wins)
//!     ├── formatter     format ("+<code> <groups>")
//!     └── lifecycle     SeedState (empty / seeded / touched)
//!             │
//!             ▼
//!     CountryRegistry   (embedded country table, completed from keshvar)
//! ```
//!
//! ## Features
//!
//! - `tracing` - tracing instrumentation of the widget entry points (enabled by default)

pub mod digits;
pub mod formatter;
pub mod input;
pub mod lifecycle;
pub mod registry;
pub mod resolver;
pub mod types;
pub mod utils;

// Re-export commonly used types at the crate root
pub use digits::{cap_to_country, extract_digits};
pub use formatter::format;
pub use input::{
    Command, EmailInput, EmailInputConfig, EmailInputConfigBuilder, FlagSelection, InputWidget,
    PhoneInput, PhoneInputBuilder, PhoneInputConfig, PhoneInputConfigBuilder, PhoneInputError,
    PhoneInputState, is_valid_email,
};
pub use lifecycle::SeedState;
pub use registry::{CountryEntry, CountryRegistry, RegistryError};
pub use resolver::resolve;
pub use types::{CallingCode, CallingCodeError, FormatPattern};
