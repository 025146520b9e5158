//! Widget configuration types.

/// Default country used when none is configured.
pub const DEFAULT_COUNTRY: &str = "us";

/// Default candidate domains for email autocompletion.
pub const DEFAULT_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "icloud.com",
    "yandex.ru",
];

/// Configuration for the phone input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneInputConfig {
    /// ISO identifier of the country active at mount.
    pub default_country: String,
    /// Whether focusing an empty field injects the calling-code seed.
    pub seed_on_focus: bool,
}

impl Default for PhoneInputConfig {
    fn default() -> Self {
        Self {
            default_country: DEFAULT_COUNTRY.to_string(),
            seed_on_focus: true,
        }
    }
}

impl PhoneInputConfig {
    /// Create a new builder for PhoneInputConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tel_input::PhoneInputConfig;
    ///
    /// let config = PhoneInputConfig::builder()
    ///     .default_country("gb")
    ///     .seed_on_focus(false)
    ///     .build();
    ///
    /// assert_eq!(config.default_country, "gb");
    /// assert!(!config.seed_on_focus);
    /// ```
    pub fn builder() -> PhoneInputConfigBuilder {
        PhoneInputConfigBuilder::default()
    }

    /// Use a different default country.
    pub fn with_default_country(mut self, iso: impl Into<String>) -> Self {
        self.default_country = iso.into();
        self
    }

    /// Enable or disable seeding on focus.
    pub fn with_seed_on_focus(mut self, enabled: bool) -> Self {
        self.seed_on_focus = enabled;
        self
    }
}

/// Builder for PhoneInputConfig.
#[derive(Debug, Clone)]
pub struct PhoneInputConfigBuilder {
    pub(crate) default_country: String,
    pub(crate) seed_on_focus: bool,
}

impl Default for PhoneInputConfigBuilder {
    fn default() -> Self {
        let config = PhoneInputConfig::default();
        Self {
            default_country: config.default_country,
            seed_on_focus: config.seed_on_focus,
        }
    }
}

impl PhoneInputConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the country active at mount.
    ///
    /// Default: "us"
    pub fn default_country(mut self, iso: impl Into<String>) -> Self {
        self.default_country = iso.into();
        self
    }

    /// Set whether focus seeds an empty field.
    ///
    /// Default: true
    pub fn seed_on_focus(mut self, enabled: bool) -> Self {
        self.seed_on_focus = enabled;
        self
    }

    /// Build the PhoneInputConfig.
    pub fn build(self) -> PhoneInputConfig {
        PhoneInputConfig {
            default_country: self.default_country,
            seed_on_focus: self.seed_on_focus,
        }
    }
}

/// Configuration for the email input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailInputConfig {
    /// Candidate domains offered after '@', in display order.
    pub domains: Vec<String>,
}

impl Default for EmailInputConfig {
    fn default() -> Self {
        Self {
            domains: DEFAULT_DOMAINS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl EmailInputConfig {
    /// Create a new builder for EmailInputConfig.
    pub fn builder() -> EmailInputConfigBuilder {
        EmailInputConfigBuilder::default()
    }

    /// Replace the candidate domains.
    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = domains.into_iter().map(Into::into).collect();
        self
    }
}

/// Builder for EmailInputConfig.
#[derive(Debug, Clone, Default)]
pub struct EmailInputConfigBuilder {
    pub(crate) domains: Option<Vec<String>>,
}

impl EmailInputConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one candidate domain. The first call replaces the defaults.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domains.get_or_insert_with(Vec::new).push(domain.into());
        self
    }

    /// Build the EmailInputConfig.
    pub fn build(self) -> EmailInputConfig {
        match self.domains {
            Some(domains) => EmailInputConfig { domains },
            None => EmailInputConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_config_default() {
        let config = PhoneInputConfig::default();
        assert_eq!(config.default_country, "us");
        assert!(config.seed_on_focus);
    }

    #[test]
    fn test_phone_config_builder() {
        let config = PhoneInputConfig::builder()
            .default_country("lv")
            .seed_on_focus(false)
            .build();
        assert_eq!(config.default_country, "lv");
        assert!(!config.seed_on_focus);
    }

    #[test]
    fn test_phone_config_builder_default() {
        assert_eq!(
            PhoneInputConfigBuilder::new().build(),
            PhoneInputConfig::default()
        );
    }

    #[test]
    fn test_phone_config_with_methods() {
        let config = PhoneInputConfig::default()
            .with_default_country("gb")
            .with_seed_on_focus(false);
        assert_eq!(config.default_country, "gb");
        assert!(!config.seed_on_focus);
    }

    #[test]
    fn test_email_config_default() {
        let config = EmailInputConfig::default();
        assert_eq!(config.domains.len(), DEFAULT_DOMAINS.len());
        assert_eq!(config.domains[0], "gmail.com");
    }

    #[test]
    fn test_email_config_builder_replaces_defaults() {
        let config = EmailInputConfig::builder()
            .domain("google.com")
            .domain("yandex.com")
            .build();
        assert_eq!(config.domains, vec!["google.com", "yandex.com"]);
        assert_eq!(EmailInputConfigBuilder::new().build(), EmailInputConfig::default());
    }

    #[test]
    fn test_email_config_with_domains() {
        let config = EmailInputConfig::default().with_domains(["a.com"]);
        assert_eq!(config.domains, vec!["a.com"]);
    }
}
