//! # Workflow Configuration
//!
//! Text and paths used by the commerce workflows.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_HOME_PATH=/home                                         │
//! │     STOREFRONT_WELCOME_SUBJECT="Welcome aboard!"                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/workflows.toml (Linux)                        │
//! │     ~/Library/Application Support/com.storefront.storefront/... (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # workflows.toml
//! [pages]
//! home_path = "/home"
//! home_content = "<div>content</div>"
//!
//! [email]
//! welcome_subject = "Welcome aboard!"
//! welcome_body = "Thanks for signing up. Welcome to the store!"
//! login_subject = "Your login code"
//!
//! [shipping]
//! unavailable_message = "Shipping Unavailable"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{WorkflowError, WorkflowResult};

// =============================================================================
// Page Settings
// =============================================================================

/// What `render_page` reports and returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSettings {
    /// Path reported to analytics as a page view.
    #[serde(default = "default_home_path")]
    pub home_path: String,

    /// Content returned to the caller.
    #[serde(default = "default_home_content")]
    pub home_content: String,
}

fn default_home_path() -> String {
    "/home".to_string()
}

fn default_home_content() -> String {
    "<div>content</div>".to_string()
}

impl Default for PageSettings {
    fn default() -> Self {
        PageSettings {
            home_path: default_home_path(),
            home_content: default_home_content(),
        }
    }
}

// =============================================================================
// Email Settings
// =============================================================================

/// Subjects and bodies of emails sent by the account workflows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSettings {
    /// Subject of the sign-up email. Must mention "welcome".
    #[serde(default = "default_welcome_subject")]
    pub welcome_subject: String,

    #[serde(default = "default_welcome_body")]
    pub welcome_body: String,

    /// Subject of the login code email.
    #[serde(default = "default_login_subject")]
    pub login_subject: String,
}

fn default_welcome_subject() -> String {
    "Welcome aboard!".to_string()
}

fn default_welcome_body() -> String {
    "Thanks for signing up. Welcome to the store!".to_string()
}

fn default_login_subject() -> String {
    "Your login code".to_string()
}

impl Default for EmailSettings {
    fn default() -> Self {
        EmailSettings {
            welcome_subject: default_welcome_subject(),
            welcome_body: default_welcome_body(),
            login_subject: default_login_subject(),
        }
    }
}

// =============================================================================
// Shipping Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingSettings {
    /// Returned when the shipping service has no quote.
    #[serde(default = "default_unavailable_message")]
    pub unavailable_message: String,
}

fn default_unavailable_message() -> String {
    "Shipping Unavailable".to_string()
}

impl Default for ShippingSettings {
    fn default() -> Self {
        ShippingSettings {
            unavailable_message: default_unavailable_message(),
        }
    }
}

// =============================================================================
// Main Workflow Configuration
// =============================================================================

/// Complete workflow configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    #[serde(default)]
    pub pages: PageSettings,

    #[serde(default)]
    pub email: EmailSettings,

    #[serde(default)]
    pub shipping: ShippingSettings,
}

impl WorkflowConfig {
    /// Creates a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, or the platform default location)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> WorkflowResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading workflow config from file");
                config = Self::load_from_path(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load workflow config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Reads and parses one TOML file, without env overrides or validation.
    pub fn load_from_path(path: &Path) -> WorkflowResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses TOML text. Missing sections and keys fall back to defaults.
    pub fn from_toml_str(contents: &str) -> WorkflowResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Renders the config as pretty TOML.
    pub fn to_toml_string(&self) -> WorkflowResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> WorkflowResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| WorkflowError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| WorkflowError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = self.to_toml_string()?;
        std::fs::write(&path, contents).map_err(|e| WorkflowError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Workflow config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> WorkflowResult<()> {
        if !self.pages.home_path.starts_with('/') {
            return Err(WorkflowError::InvalidConfig(format!(
                "home_path must start with '/', got: {}",
                self.pages.home_path
            )));
        }

        // Sign-up emails are recognised downstream by this word
        let welcome = format!("{} {}", self.email.welcome_subject, self.email.welcome_body);
        if !welcome.to_lowercase().contains("welcome") {
            return Err(WorkflowError::InvalidConfig(
                "welcome email must mention \"welcome\"".into(),
            ));
        }

        if !self
            .shipping
            .unavailable_message
            .to_lowercase()
            .contains("unavailable")
        {
            return Err(WorkflowError::InvalidConfig(
                "unavailable_message must mention \"unavailable\"".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("STOREFRONT_HOME_PATH") {
            debug!(path = %path, "Overriding home path from environment");
            self.pages.home_path = path;
        }

        if let Ok(subject) = std::env::var("STOREFRONT_WELCOME_SUBJECT") {
            debug!(subject = %subject, "Overriding welcome subject from environment");
            self.email.welcome_subject = subject;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("workflows.toml"))
    }
}
