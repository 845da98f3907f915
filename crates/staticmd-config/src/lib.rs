//! Staticmd Config
//!
//! This crate handles configuration loading and management
//! for staticmd, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is looked up in order:
//! - `staticmd.toml` in the working directory
//! - the platform-specific config file:
//!   - Linux: `~/.config/staticmd/config.toml`
//!   - macOS: `~/Library/Application Support/staticmd/config.toml`
//!   - Windows: `%APPDATA%\staticmd\config.toml`
//! - built-in defaults
//!
//! # Example
//!
//! ```no_run
//! use staticmd_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod site;
mod template;

pub use site::{PartialSiteConfig, SiteConfig};
pub use template::{PartialTemplateConfig, TemplateConfig};

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use staticmd_core::{Result, StaticmdError};

/// Name of the per-project config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "staticmd.toml";

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[site]
Content  = "content"
Static   = "static"
Output   = "docs"
Template = "template.html"
BasePath = "/"

[template]
Title   = "{{ Title }}"
Content = "{{ Content }}"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Site layout configuration
    #[serde(default)]
    pub site: SiteConfig,

    /// Template placeholder configuration
    #[serde(default)]
    pub template: TemplateConfig,
}

/// An override config: only the keys it names are applied by [`Config::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialConfig {
    #[serde(default)]
    pub site: PartialSiteConfig,

    #[serde(default)]
    pub template: PartialTemplateConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use staticmd_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[site]"));
    /// assert!(toml.contains("[template]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "staticmd")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the first config file found.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(&local);
        }

        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use staticmd_config::Config;
    /// use std::path::Path;
    /// let config = Config::load_from(Path::new("./staticmd.toml")).unwrap();
    /// ```
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| StaticmdError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config via [`Config::load`]
    /// 2. If `override_config` names an existing file, load and merge it;
    ///    otherwise parse it as inline TOML and merge that
    ///
    /// # Example
    ///
    /// ```no_run
    /// use staticmd_config::Config;
    ///
    /// // Load with inline TOML override
    /// let config = Config::load_with_override(Some("[site]\nOutput = \"public\"")).unwrap();
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(override_str) = override_config {
            config.apply_override(override_str)?;
        }
        Ok(config)
    }

    /// Merge an override given as a file path or inline TOML into this config.
    ///
    /// Keys the override leaves out keep their current values.
    pub fn apply_override(&mut self, override_str: &str) -> Result<()> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.exists() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        let partial: PartialConfig = toml::from_str(&override_toml)
            .map_err(|e| StaticmdError::Config(format!("Override parse error: {}", e)))?;

        self.merge(&partial);
        Ok(())
    }

    /// Merge another config into this one.
    ///
    /// Values set in `other` take precedence over values in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use staticmd_config::{Config, PartialConfig};
    ///
    /// let mut base = Config::default();
    /// let override_config: PartialConfig = toml::from_str(r#"
    ///     [site]
    ///     BasePath = "/blog/"
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.site.base_path, "/blog/");
    /// ```
    pub fn merge(&mut self, other: &PartialConfig) {
        self.site.merge(&other.site);
        self.template.merge(&other.template);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| StaticmdError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
