//! Configuration file support for qf-inspect.
//!
//! Provides YAML-based configuration through `qf-inspect.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! built-in defaults. The password is never read from the file.

use anyhow::{bail, Context};
use qf_inspect::adapters::outbound::network::Qf3Settings;
use qf_inspect::application::dto::{DEFAULT_RELEASE_WINDOW_DAYS, MAX_RELEASE_WINDOW_DAYS};
use qf_inspect::application::use_cases::DEFAULT_LINE_PAGE_SIZE;
use qf_inspect::inspection::services::{DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
use qf_inspect::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "qf-inspect.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub language_code: Option<String>,
    pub company_id: Option<i64>,
    pub plant_id: Option<i64>,
    pub company_code: Option<String>,
    pub user_key: Option<String>,
    pub check_class: Option<String>,
    pub release_window_days: Option<i64>,
    pub page_size: Option<u32>,
    pub max_pages: Option<u32>,
    pub line_page_size: Option<u32>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after applying built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub connection: Qf3Settings,
    pub company_code: Option<String>,
    pub user_key: Option<String>,
    pub check_class: String,
    pub release_window_days: i64,
    pub page_size: u32,
    pub max_pages: u32,
    pub line_page_size: u32,
}

impl AppConfig {
    pub fn from_file(file: ConfigFile) -> Self {
        let defaults = Qf3Settings::default();
        Self {
            connection: Qf3Settings {
                base_url: file
                    .base_url
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.base_url),
                language_code: file.language_code.unwrap_or(defaults.language_code),
                company_id: file.company_id.unwrap_or(defaults.company_id),
                plant_id: file.plant_id.unwrap_or(defaults.plant_id),
            },
            company_code: file.company_code,
            user_key: file.user_key,
            check_class: file.check_class.unwrap_or_else(|| "OPR".to_string()),
            release_window_days: file
                .release_window_days
                .unwrap_or(DEFAULT_RELEASE_WINDOW_DAYS),
            page_size: file.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            max_pages: file.max_pages.unwrap_or(DEFAULT_MAX_PAGES),
            line_page_size: file.line_page_size.unwrap_or(DEFAULT_LINE_PAGE_SIZE),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_file(ConfigFile::default())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref url) = config.base_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!(
                "Invalid config: base_url '{}' must start with http:// or https://",
                url
            );
        }
    }

    let counts = [
        ("page_size", config.page_size),
        ("max_pages", config.max_pages),
        ("line_page_size", config.line_page_size),
    ];
    for (name, value) in counts {
        if value == Some(0) {
            bail!(
                "Invalid config: {} must be at least 1.\n\n💡 Hint: Remove the field to use the default.",
                name
            );
        }
    }

    if config.release_window_days.is_some_and(|days| days < 0) {
        bail!("Invalid config: release_window_days must not be negative.");
    }
    if config
        .release_window_days
        .is_some_and(|days| days > MAX_RELEASE_WINDOW_DAYS)
    {
        bail!(
            "Invalid config: release_window_days must be at most {}.",
            MAX_RELEASE_WINDOW_DAYS
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}
