//! # Form Configuration
//!
//! Deployment knobs for the checkout form, loadable from YAML:
//!
//! ```yaml
//! allowed_brands: [visa, mastercard]
//! submit_text: Pay now
//! cvv_length: 3
//! ```
//!
//! Every key is optional; omitted keys take the defaults shown above
//! (`submit_text` defaults to `Submit`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use checkout_core::CardBrand;

/// Error loading or validating a [`FormConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The YAML is malformed or names an unknown key or brand.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The YAML parsed but its values are unusable.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Checkout form configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Brands the card number may belong to, in icon order.
    pub allowed_brands: Vec<CardBrand>,
    /// Label of the submit button.
    pub submit_text: String,
    /// Exact number of characters the CVV must have.
    pub cvv_length: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            allowed_brands: CardBrand::DEFAULT_ACCEPTED.to_vec(),
            submit_text: "Submit".to_string(),
            cvv_length: 3,
        }
    }
}

impl FormConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Reject configurations no card could satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_brands.is_empty() {
            return Err(ConfigError::Invalid(
                "allowed_brands must name at least one brand".to_string(),
            ));
        }
        if let Some((i, brand)) = self
            .allowed_brands
            .iter()
            .enumerate()
            .find(|(i, brand)| self.allowed_brands[..*i].contains(*brand))
        {
            return Err(ConfigError::Invalid(format!(
                "allowed_brands lists {brand} more than once (entry {})",
                i + 1
            )));
        }
        if !(3..=4).contains(&self.cvv_length) {
            return Err(ConfigError::Invalid(format!(
                "cvv_length must be 3 or 4, got {}",
                self.cvv_length
            )));
        }
        Ok(())
    }

    /// The message shown when a valid card has a brand outside
    /// `allowed_brands`.
    pub fn unsupported_brand_message(&self) -> String {
        let mut allowed = self.allowed_brands.clone();
        allowed.sort();
        allowed.dedup();
        if allowed == [CardBrand::Visa, CardBrand::Mastercard] {
            return "Must be Visa / Master card type".to_string();
        }
        let names: Vec<&str> = self
            .allowed_brands
            .iter()
            .map(CardBrand::display_name)
            .collect();
        format!("Must be {} card type", names.join(" / "))
    }

    /// The message shown when the CVV length is wrong.
    pub fn wrong_length_message(&self) -> String {
        format!("Maximum {} digits", self.cvv_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = FormConfig::default();
        assert_eq!(config.allowed_brands, vec![CardBrand::Visa, CardBrand::Mastercard]);
        assert_eq!(config.submit_text, "Submit");
        assert_eq!(config.cvv_length, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = FormConfig::from_yaml_str("submit_text: Pay now\n").unwrap();
        assert_eq!(config.submit_text, "Pay now");
        assert_eq!(config.allowed_brands, CardBrand::DEFAULT_ACCEPTED.to_vec());
    }

    #[test]
    fn unknown_brand_rejected() {
        let err = FormConfig::from_yaml_str("allowed_brands: [visa, paypal]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = FormConfig::from_yaml_str("currency: EUR\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn empty_brand_list_rejected() {
        let err = FormConfig::from_yaml_str("allowed_brands: []\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn duplicate_brand_rejected() {
        let err = FormConfig::from_yaml_str("allowed_brands: [visa, visa]\n").unwrap_err();
        let ConfigError::Invalid(message) = err else {
            panic!("expected Invalid, got {err:?}");
        };
        assert!(message.contains("visa"), "{message}");

        let config = FormConfig {
            allowed_brands: vec![CardBrand::Visa, CardBrand::Amex, CardBrand::Visa],
            ..FormConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn cvv_length_bounds() {
        assert!(FormConfig::from_yaml_str("cvv_length: 4\n").is_ok());
        assert!(matches!(
            FormConfig::from_yaml_str("cvv_length: 5\n").unwrap_err(),
            ConfigError::Invalid(_)
        ));
    }

    #[test]
    fn brand_messages() {
        assert_eq!(
            FormConfig::default().unsupported_brand_message(),
            "Must be Visa / Master card type"
        );
        let config = FormConfig {
            allowed_brands: vec![CardBrand::Mastercard, CardBrand::Visa],
            ..FormConfig::default()
        };
        assert_eq!(config.unsupported_brand_message(), "Must be Visa / Master card type");

        let config = FormConfig {
            allowed_brands: vec![CardBrand::Visa, CardBrand::Amex],
            ..FormConfig::default()
        };
        assert_eq!(
            config.unsupported_brand_message(),
            "Must be Visa / American Express card type"
        );
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "allowed_brands: [visa]").unwrap();
        writeln!(file, "cvv_length: 3").unwrap();
        let config = FormConfig::load(file.path()).unwrap();
        assert_eq!(config.allowed_brands, vec![CardBrand::Visa]);
    }

    #[test]
    fn load_missing_file() {
        let err = FormConfig::load(Path::new("/nonexistent/checkout.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
