//! Phone input controller.

use super::command::Command;
use super::config::PhoneInputConfig;
use super::error::PhoneInputError;
use super::traits::InputWidget;
use crate::digits::{cap_to_country, extract_digits, national_digits};
use crate::formatter::format;
use crate::lifecycle::SeedState;
use crate::registry::{CountryEntry, CountryRegistry};
use crate::resolver::resolve;
use serde::Serialize;

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// A "flag selected" event from the country dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSelection {
    /// Name shown in the dropdown row.
    pub display_name: String,
    /// ISO identifier of the selected country.
    pub iso: String,
}

impl FlagSelection {
    /// Create a new selection event.
    pub fn new(display_name: impl Into<String>, iso: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            iso: iso.into(),
        }
    }
}

impl<N: Into<String>, I: Into<String>> From<(N, I)> for FlagSelection {
    fn from((display_name, iso): (N, I)) -> Self {
        Self::new(display_name, iso)
    }
}

/// Observable snapshot of a phone input, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneInputState {
    /// Text shown in the field.
    pub display_value: String,
    /// Canonical digit buffer, calling code included.
    pub raw_digits: String,
    /// ISO identifier of the active country, for the flag icon.
    pub active_iso: String,
    /// Whether the country dropdown is open.
    pub dropdown_open: bool,
    /// Whether the user typed past the seed.
    pub touched: bool,
}

/// Interactive international phone field.
///
/// Every entry point re-derives the display value from the digit buffer and
/// the active country, and returns the [`Command`] the host should
/// dispatch. Mounting never produces a command.
///
/// # Example
///
/// ```rust
/// use tel_input::{InputWidget, PhoneInput};
///
/// let mut input = PhoneInput::builder().default_country("gb").build().unwrap();
///
/// input.on_focus();
/// assert_eq!(input.value(), "+44");
///
/// let cmd = input.on_input("+1268").unwrap();
/// assert_eq!(input.active_country().iso, "ag");
/// assert_eq!(cmd.value(), "+1 268");
/// ```
#[derive(Debug, Clone)]
pub struct PhoneInput<'r> {
    registry: &'r CountryRegistry,
    config: PhoneInputConfig,
    active: &'r CountryEntry,
    raw_digits: String,
    display_value: String,
    seed_state: SeedState,
    focused: bool,
    dropdown_open: bool,
    last_notified: Option<String>,
}

impl PhoneInput<'static> {
    /// Create an empty phone input over the embedded country table.
    pub fn new(config: PhoneInputConfig) -> Result<Self, PhoneInputError> {
        Self::with_registry(CountryRegistry::global(), config)
    }

    /// Create a new builder over the embedded country table.
    pub fn builder() -> PhoneInputBuilder<'static> {
        PhoneInputBuilder::new(CountryRegistry::global())
    }
}

impl<'r> PhoneInput<'r> {
    /// Create an empty phone input over a custom country table.
    pub fn with_registry(
        registry: &'r CountryRegistry,
        config: PhoneInputConfig,
    ) -> Result<Self, PhoneInputError> {
        let active = registry.find_by_iso(&config.default_country).ok_or_else(|| {
            PhoneInputError::UnknownCountry {
                iso: config.default_country.clone(),
            }
        })?;

        Ok(Self {
            registry,
            config,
            active,
            raw_digits: String::new(),
            display_value: String::new(),
            seed_state: SeedState::Empty,
            focused: false,
            dropdown_open: false,
            last_notified: None,
        })
    }

    /// Create a phone input holding an initial value.
    ///
    /// The value is normalized (country resolved, capped, formatted) without
    /// producing a change notification.
    pub fn mount(
        registry: &'r CountryRegistry,
        config: PhoneInputConfig,
        initial: &str,
    ) -> Result<Self, PhoneInputError> {
        let mut input = Self::with_registry(registry, config)?;
        let digits = extract_digits(initial);
        if !digits.is_empty() {
            input.apply_digits(&digits);
        }
        Ok(input)
    }

    /// Explicitly select a country from the dropdown.
    ///
    /// Bypasses resolution, closes the dropdown and keeps the national digits
    /// typed so far under the new calling code. Unknown identifiers are
    /// ignored.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "phone_input.select_flag", skip_all)
    )]
    pub fn select_flag(&mut self, selection: impl Into<FlagSelection>) -> Option<Command> {
        let selection = selection.into();
        self.dropdown_open = false;

        let Some(entry) = self.registry.find_by_iso(&selection.iso) else {
            #[cfg(feature = "tracing")]
            warn!(iso = %selection.iso, "Ignoring selection of unknown country");
            return None;
        };

        let previous = self.active;
        self.active = entry;

        if self.raw_digits.is_empty() {
            self.refresh_display();
        } else {
            // A buffer outside the previous calling code is kept as typed.
            let digits = match national_digits(&self.raw_digits, previous) {
                Some(national) => format!("{}{}", entry.calling_code, national),
                None => self.raw_digits.clone(),
            };
            self.raw_digits = cap_to_country(&digits, entry);
            self.seed_state = self
                .seed_state
                .on_input(&self.raw_digits, entry.calling_code.as_str());
            self.refresh_display();
        }

        #[cfg(feature = "tracing")]
        debug!(from = %previous.iso, to = %entry.iso, name = %selection.display_name, "Country selected");

        Some(self.notify())
    }

    /// Flip the dropdown open/closed.
    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// Close the dropdown.
    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Whether the dropdown is open.
    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// The active country.
    pub fn active_country(&self) -> &'r CountryEntry {
        self.active
    }

    /// Canonical digit buffer, calling code included.
    pub fn raw_digits(&self) -> &str {
        &self.raw_digits
    }

    /// The seed for the active country, e.g. `"+371"`.
    pub fn default_value(&self) -> String {
        self.active.seed()
    }

    /// Current seed lifecycle state.
    pub fn seed_state(&self) -> SeedState {
        self.seed_state
    }

    /// Whether the user typed past the seed.
    pub fn is_touched(&self) -> bool {
        self.seed_state.is_touched()
    }

    /// Whether the field has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The value carried by the most recent change notification.
    pub fn last_notified(&self) -> Option<&str> {
        self.last_notified.as_deref()
    }

    /// The configuration this input was created with.
    pub fn config(&self) -> &PhoneInputConfig {
        &self.config
    }

    /// Snapshot of the observable fields.
    pub fn state(&self) -> PhoneInputState {
        PhoneInputState {
            display_value: self.display_value.clone(),
            raw_digits: self.raw_digits.clone(),
            active_iso: self.active.iso.clone(),
            dropdown_open: self.dropdown_open,
            touched: self.is_touched(),
        }
    }

    /// Resolve, cap and format a non-empty digit buffer.
    fn apply_digits(&mut self, digits: &str) {
        let resolved = resolve(self.registry, digits, self.active);
        self.active = resolved;
        self.raw_digits = cap_to_country(digits, resolved);
        self.seed_state = self
            .seed_state
            .on_input(&self.raw_digits, resolved.calling_code.as_str());
        self.refresh_display();
    }

    /// Put the bare calling code of the active country in the buffer.
    fn seed(&mut self) {
        self.raw_digits = self.active.calling_code.to_string();
        self.seed_state = SeedState::Seeded;
        self.refresh_display();
    }

    fn clear(&mut self) {
        self.raw_digits.clear();
        self.display_value.clear();
        self.seed_state = SeedState::Empty;
    }

    fn refresh_display(&mut self) {
        self.display_value = format(&self.raw_digits, self.active);
    }

    fn notify(&mut self) -> Command {
        self.last_notified = Some(self.display_value.clone());
        Command::change(self.display_value.clone())
    }
}

impl InputWidget for PhoneInput<'_> {
    /// Run the digit pipeline over the field text.
    ///
    /// Deleting everything (or typing a bare '+') restores the seed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "phone_input.on_input", skip_all, fields(active = %self.active.iso))
    )]
    fn on_input(&mut self, text: &str) -> Option<Command> {
        let digits = extract_digits(text);
        if digits.is_empty() {
            self.seed();
        } else {
            self.apply_digits(&digits);
        }
        Some(self.notify())
    }

    fn on_focus(&mut self) -> Option<Command> {
        self.focused = true;
        if self.config.seed_on_focus && self.raw_digits.is_empty() {
            self.seed();
            #[cfg(feature = "tracing")]
            debug!(seed = %self.display_value, "Seeded empty field on focus");
        }
        None
    }

    /// Clear an untouched seed. The host is told only if it had seen a
    /// non-empty value before.
    fn on_blur(&mut self) -> Option<Command> {
        self.focused = false;
        let (next, clear) = self
            .seed_state
            .on_blur(&self.display_value, &self.active.seed());
        self.seed_state = next;
        if !clear {
            return None;
        }

        #[cfg(feature = "tracing")]
        debug!(seed = %self.display_value, "Clearing untouched seed on blur");

        self.clear();
        let host_saw_value = self.last_notified.as_deref().is_some_and(|v| !v.is_empty());
        host_saw_value.then(|| self.notify())
    }

    fn value(&self) -> &str {
        &self.display_value
    }
}

/// Builder for PhoneInput.
///
/// # Example
///
/// ```rust
/// use tel_input::PhoneInput;
///
/// let input = PhoneInput::builder()
///     .default_country("lv")
///     .initial_value("+371 2123 4567")
///     .build()
///     .unwrap();
///
/// assert_eq!(input.active_country().iso, "lv");
/// assert!(input.last_notified().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PhoneInputBuilder<'r> {
    registry: &'r CountryRegistry,
    config: PhoneInputConfig,
    initial_value: String,
}

impl<'r> PhoneInputBuilder<'r> {
    /// Create a new builder over the given country table.
    pub fn new(registry: &'r CountryRegistry) -> Self {
        Self {
            registry,
            config: PhoneInputConfig::default(),
            initial_value: String::new(),
        }
    }

    /// Use another country table.
    pub fn registry<'n>(self, registry: &'n CountryRegistry) -> PhoneInputBuilder<'n> {
        PhoneInputBuilder {
            registry,
            config: self.config,
            initial_value: self.initial_value,
        }
    }

    /// Set the country active at mount.
    ///
    /// Default: "us"
    pub fn default_country(mut self, iso: impl Into<String>) -> Self {
        self.config.default_country = iso.into();
        self
    }

    /// Set whether focus seeds an empty field.
    ///
    /// Default: true
    pub fn seed_on_focus(mut self, enabled: bool) -> Self {
        self.config.seed_on_focus = enabled;
        self
    }

    /// Set the full configuration.
    pub fn config(mut self, config: PhoneInputConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the value present at mount.
    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    /// Build the PhoneInput.
    pub fn build(self) -> Result<PhoneInput<'r>, PhoneInputError> {
        PhoneInput::mount(self.registry, self.config, &self.initial_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(iso: &str) -> PhoneInput<'static> {
        PhoneInput::builder().default_country(iso).build().unwrap()
    }

    #[test]
    fn test_unknown_default_country() {
        let err = PhoneInput::builder().default_country("zz").build().unwrap_err();
        assert_eq!(err, PhoneInputError::UnknownCountry { iso: "zz".into() });
    }

    #[test]
    fn test_mount_normalizes_silently() {
        let input = PhoneInput::builder()
            .default_country("gb")
            .initial_value("+16186190000")
            .build()
            .unwrap();
        assert_eq!(input.active_country().iso, "us");
        assert_eq!(input.value(), "+1 618 619 0000");
        assert!(input.last_notified().is_none());
    }

    #[test]
    fn test_input_emits_formatted_value() {
        let mut input = input("us");
        let cmd = input.on_input("+16186190000");
        assert_eq!(cmd, Some(Command::change("+1 618 619 0000")));
        assert_eq!(input.raw_digits(), "16186190000");
        assert!(input.is_touched());
    }

    #[test]
    fn test_input_truncates_to_resolved_country() {
        let mut input = input("us");
        input.on_input("+161861900000");
        assert_eq!(input.raw_digits().len(), 11);
    }

    #[test]
    fn test_empty_input_restores_seed() {
        let mut input = input("gb");
        let cmd = input.on_input("");
        assert_eq!(input.value(), "+44");
        assert_eq!(cmd, Some(Command::change("+44")));
        assert_eq!(input.seed_state(), SeedState::Seeded);

        input.on_input("+");
        assert_eq!(input.value(), "+44");
    }

    #[test]
    fn test_default_value_follows_active_country() {
        let mut input = input("lv");
        input.on_input("");
        assert_eq!(input.default_value(), "+371");
    }

    #[test]
    fn test_focus_seeds_without_emitting() {
        let mut input = input("gb");
        assert_eq!(input.on_focus(), None);
        assert_eq!(input.value(), "+44");
        assert!(input.is_focused());
        assert!(input.last_notified().is_none());
    }

    #[test]
    fn test_focus_without_seeding() {
        let mut input = PhoneInput::builder()
            .default_country("gb")
            .seed_on_focus(false)
            .build()
            .unwrap();
        input.on_focus();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_blur_clears_seed_silently_when_host_never_saw_it() {
        let mut input = input("gb");
        input.on_focus();
        assert_eq!(input.on_blur(), None);
        assert_eq!(input.value(), "");
        assert_eq!(input.raw_digits(), "");
        assert_eq!(input.seed_state(), SeedState::Empty);
    }

    #[test]
    fn test_blur_clear_notifies_host_that_saw_seed() {
        let mut input = input("gb");
        input.on_input("");
        assert_eq!(input.on_blur(), Some(Command::change("")));
    }

    #[test]
    fn test_blur_keeps_touched_value() {
        let mut input = input("gb");
        input.on_focus();
        input.on_input("+447");
        assert_eq!(input.on_blur(), None);
        assert_eq!(input.value(), "+44 7");
    }

    #[test]
    fn test_typing_back_to_seed_stays_touched() {
        let mut input = input("gb");
        input.on_focus();
        input.on_input("+447");
        input.on_input("+44");
        assert!(input.is_touched());
        assert_eq!(input.on_blur(), None);
        assert_eq!(input.value(), "+44");
        assert_eq!(input.seed_state(), SeedState::Touched);
    }

    #[test]
    fn test_empty_input_resets_touched() {
        let mut input = input("gb");
        input.on_focus();
        input.on_input("+447");
        input.on_input("");
        assert_eq!(input.seed_state(), SeedState::Seeded);
        input.on_blur();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_select_flag_overrides_resolution() {
        let mut input = input("us");
        input.toggle_dropdown();
        input.on_input("+1618");
        let cmd = input.select_flag(("test", "ca"));
        assert_eq!(input.active_country().iso, "ca");
        assert!(!input.is_dropdown_open());
        assert_eq!(cmd, Some(Command::change("+1 618")));
    }

    #[test]
    fn test_select_flag_swaps_calling_code() {
        let mut input = input("us");
        input.on_input("+1 618 619 0000");
        input.select_flag(("Latvia", "lv"));
        assert_eq!(input.raw_digits(), "37161861900");
        assert_eq!(input.value(), "+371 6186 1900");
    }

    #[test]
    fn test_select_flag_keeps_unresolved_digits() {
        let mut input = input("us");
        input.on_input("+0601");
        assert_eq!(input.raw_digits(), "0601");
        let cmd = input.select_flag(("Latvia", "lv"));
        assert_eq!(input.active_country().iso, "lv");
        assert_eq!(input.raw_digits(), "0601");
        assert_eq!(cmd, Some(Command::change("+0601")));
    }

    #[test]
    fn test_select_flag_on_seed_reseeds() {
        let mut input = input("us");
        input.on_focus();
        input.select_flag(("United Kingdom", "gb"));
        assert_eq!(input.value(), "+44");
        input.on_blur();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_select_unknown_flag_is_ignored() {
        let mut input = input("us");
        input.toggle_dropdown();
        assert_eq!(input.select_flag(("Nowhere", "zz")), None);
        assert_eq!(input.active_country().iso, "us");
        assert!(!input.is_dropdown_open());
    }

    #[test]
    fn test_dropdown_toggle() {
        let mut input = input("us");
        assert!(!input.is_dropdown_open());
        input.toggle_dropdown();
        assert!(input.is_dropdown_open());
        input.close_dropdown();
        assert!(!input.is_dropdown_open());
    }

    #[test]
    fn test_state_snapshot() {
        let mut input = input("us");
        input.on_input("+1268");
        let state = input.state();
        assert_eq!(state.active_iso, "ag");
        assert_eq!(state.display_value, "+1 268");
        assert_eq!(state.raw_digits, "1268");
        assert!(state.touched);
        assert!(!state.dropdown_open);
    }
}
