//! Input widgets: the phone field controller and the email field.

pub(crate) mod command;
pub(crate) mod config;
pub(crate) mod email;
pub(crate) mod error;
pub(crate) mod phone;
pub(crate) mod traits;

pub use command::Command;
pub use config::{
    EmailInputConfig, EmailInputConfigBuilder, PhoneInputConfig, PhoneInputConfigBuilder,
};
pub use email::{EmailInput, is_valid_email};
pub use error::PhoneInputError;
pub use phone::{FlagSelection, PhoneInput, PhoneInputBuilder, PhoneInputState};
pub use traits::InputWidget;
