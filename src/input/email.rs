//! Email input with domain autocompletion.

use super::command::Command;
use super::config::EmailInputConfig;
use super::traits::InputWidget;
use crate::utils::navigation::{Direction, advance};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Email field that suggests domains once the user types '@'.
#[derive(Debug, Clone)]
pub struct EmailInput {
    value: String,
    focused: bool,
    domains: Vec<String>,
    domain_focus: usize,
}

impl EmailInput {
    /// Create an empty email input.
    pub fn new(config: EmailInputConfig) -> Self {
        Self::mount(config, "")
    }

    /// Create an email input holding an initial value, without notifying.
    pub fn mount(config: EmailInputConfig, initial: &str) -> Self {
        Self {
            value: initial.to_string(),
            focused: false,
            domains: config.domains,
            domain_focus: 0,
        }
    }

    /// Whether the value looks like a complete address.
    pub fn is_valid(&self) -> bool {
        is_valid_email(&self.value)
    }

    /// Domains completing what was typed after '@'; exact matches excluded.
    pub fn suggestions(&self) -> Vec<&str> {
        let Some((local, typed)) = self.value.split_once('@') else {
            return Vec::new();
        };
        if local.is_empty() {
            return Vec::new();
        }
        self.domains
            .iter()
            .map(String::as_str)
            .filter(|d| d.starts_with(typed) && *d != typed)
            .collect()
    }

    /// Whether the suggestion list should be shown.
    pub fn show_autocomplete(&self) -> bool {
        self.focused && !self.suggestions().is_empty()
    }

    /// Index of the highlighted domain in the configured list.
    pub fn domain_focus(&self) -> usize {
        self.domain_focus
    }

    /// The highlighted domain, if the list is not empty.
    pub fn focused_domain(&self) -> Option<&str> {
        self.domains.get(self.domain_focus).map(String::as_str)
    }

    /// Highlight the next domain, wrapping to the first.
    ///
    /// Navigation steps over the whole configured list, not the filtered
    /// suggestions.
    pub fn key_down(&mut self) {
        self.domain_focus = advance(self.domain_focus, self.domains.len(), Direction::Next);
    }

    /// Highlight the previous domain, wrapping to the last.
    pub fn key_up(&mut self) {
        self.domain_focus = advance(self.domain_focus, self.domains.len(), Direction::Previous);
    }

    /// Complete the value with the highlighted domain.
    ///
    /// Needs a non-empty local part before '@'.
    pub fn select(&mut self) -> Option<Command> {
        let local = self
            .value
            .split_once('@')
            .map(|(local, _)| local)
            .filter(|local| !local.is_empty())?;
        let domain = self.focused_domain()?;
        self.value = format!("{local}@{domain}");
        self.domain_focus = 0;
        Some(Command::change(self.value.clone()))
    }

    /// Whether the field has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Default for EmailInput {
    fn default() -> Self {
        Self::new(EmailInputConfig::default())
    }
}

impl InputWidget for EmailInput {
    fn on_input(&mut self, text: &str) -> Option<Command> {
        self.value = text.to_string();
        self.domain_focus = 0;
        Some(Command::change(self.value.clone()))
    }

    fn on_focus(&mut self) -> Option<Command> {
        self.focused = true;
        None
    }

    fn on_blur(&mut self) -> Option<Command> {
        self.focused = false;
        None
    }

    fn value(&self) -> &str {
        &self.value
    }
}

/// Validity predicate for an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
