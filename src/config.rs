//! Widget configuration (the props contract).
//!
//! [`DropDownConfig`] carries every prop with its documented default, so a
//! host that omits a field (or the whole file) still gets a working widget.
//! Props are checked once at mount with [`DropDownConfig::validate`];
//! problems are reported as [`ConfigIssue`]s and never abort rendering.
//!
//! # Configuration File Location
//!
//! - Linux: `~/.config/balance-dropdown/config.json`
//! - macOS: `~/Library/Application Support/balance-dropdown/config.json`
//! - Windows: `%APPDATA%/balance-dropdown/config.json`
//!
//! # Example
//!
//! ```json
//! {
//!   "balance": 1234.5,
//!   "currency": "EUR",
//!   "account": "Company Inc.",
//!   "items": ["Account", "Contacts", "Logout"],
//!   "icons": ["arrow_downward", "contacts", "logout"],
//!   "dropDownFontSize": 16
//! }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    constants::{
        DEFAULT_ACCOUNT, DEFAULT_CURRENCY, DEFAULT_FONT_SIZE, DEFAULT_ICON, DEFAULT_ICONS,
        DEFAULT_ITEMS,
    },
    error::DropDownError,
    format::Balance,
};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
const APP_NAME: &str = "balance-dropdown";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// ConfigIssue
// ============================================================================

/// A non-fatal problem found in the props.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigIssue {
    /// `items` and `icons` are not index-aligned.
    #[error("items has {items} entries but icons has {icons}")]
    LengthMismatch { items: usize, icons: usize },

    /// The panel has nothing to show.
    #[error("items is empty, the panel will not open")]
    EmptyItems,

    /// Font size is not a positive finite number.
    #[error("dropDownFontSize {0} is not a positive number, using the default")]
    InvalidFontSize(f64),
}

// ============================================================================
// DropDownConfig
// ============================================================================

/// Props of the balance dropdown.
///
/// Deserialization falls back one field at a time: a missing, `null` or
/// wrongly typed prop takes its default and the other props are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropDownConfig {
    /// Balance shown in the summary, number or decimal string.
    pub balance: Balance,
    /// Currency code appended to the balance.
    pub currency: String,
    /// Account name, displayed verbatim.
    pub account: String,
    /// Toggle icon identifier.
    pub icon: String,
    /// Row labels, in display order.
    pub items: Vec<String>,
    /// Row icon identifiers, index-aligned with `items`.
    pub icons: Vec<String>,
    /// Row text size in px.
    pub drop_down_font_size: f64,
}

impl Default for DropDownConfig {
    fn default() -> Self {
        Self {
            balance: Balance::default(),
            currency: DEFAULT_CURRENCY.to_string(),
            account: DEFAULT_ACCOUNT.to_string(),
            icon: DEFAULT_ICON.to_string(),
            items: DEFAULT_ITEMS.iter().map(ToString::to_string).collect(),
            icons: DEFAULT_ICONS.iter().map(ToString::to_string).collect(),
            drop_down_font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl<'de> Deserialize<'de> for DropDownConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        let mut config = Self::default();

        for (key, value) in fields {
            let applied = match key.as_str() {
                "balance" => assign(&mut config.balance, value),
                "currency" => assign(&mut config.currency, value),
                "account" => assign(&mut config.account, value),
                "icon" => assign(&mut config.icon, value),
                "items" => assign(&mut config.items, value),
                "icons" => assign(&mut config.icons, value),
                "dropDownFontSize" => assign(&mut config.drop_down_font_size, value),
                _ => {
                    tracing::debug!("dropdown config: unknown prop {key}");
                    Ok(())
                }
            };
            if let Err(err) = applied {
                tracing::warn!("dropdown config: {key} ignored, using the default: {err}");
            }
        }
        Ok(config)
    }
}

/// Overwrite `slot` with `value`; `null` keeps the default.
fn assign<T: DeserializeOwned>(slot: &mut T, value: Value) -> Result<(), serde_json::Error> {
    if !value.is_null() {
        *slot = serde_json::from_value(value)?;
    }
    Ok(())
}

impl DropDownConfig {
    /// Icon identifier for row `index`, if one was supplied.
    #[must_use]
    pub fn row_icon(&self, index: usize) -> Option<&str> {
        self.icons.get(index).map(String::as_str)
    }

    /// Rows in display order: one per item, paired with its icon if present.
    pub fn rows(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(index, label)| (label.as_str(), self.row_icon(index)))
    }

    /// Report every non-fatal problem with the props.
    #[must_use]
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.items.len() != self.icons.len() {
            issues.push(ConfigIssue::LengthMismatch {
                items: self.items.len(),
                icons: self.icons.len(),
            });
        }
        if self.items.is_empty() {
            issues.push(ConfigIssue::EmptyItems);
        }
        if !(self.drop_down_font_size.is_finite() && self.drop_down_font_size > 0.0) {
            issues.push(ConfigIssue::InvalidFontSize(self.drop_down_font_size));
        }
        issues
    }

    /// Validate, log each issue, and replace values that cannot be rendered.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        for issue in self.validate() {
            tracing::warn!("dropdown config: {issue}");
            if let ConfigIssue::InvalidFontSize(_) = issue {
                self.drop_down_font_size = DEFAULT_FONT_SIZE;
            }
        }
        self
    }

    /// Returns the default configuration file path.
    ///
    /// # Errors
    ///
    /// Returns [`DropDownError::ConfigDir`] if the platform has no
    /// configuration directory.
    pub fn config_path() -> Result<PathBuf, DropDownError> {
        let mut path = dirs::config_dir().ok_or(DropDownError::ConfigDir)?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn try_load_from(path: &Path) -> Result<Self, DropDownError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Loads the configuration at `path`, falling back to defaults.
    ///
    /// A missing file is expected on first run and is not reported.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(config) => config,
            Err(DropDownError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Loads the configuration from the default path, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Saves the configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), DropDownError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Saves the configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or written.
    pub fn save(&self) -> Result<(), DropDownError> {
        self.save_to(&Self::config_path()?)
    }
}

// ============================================================================
// Tests
// ============================================================================
