//! Site configuration
//!
//! JSON file describing where portfolio data comes from, how the carousel
//! behaves and which contact channels the site advertises. Every field has a
//! serde default, so a partial file is enough.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::constants::{carousel, github, validation};

/// How fetched repositories combine with the seed projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Seed projects first, then fetched repositories
    #[default]
    Append,
    /// Fetched repositories only (seed is kept as the failure fallback)
    Replace,
}

/// Top-level site configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub github: GithubSettings,
    #[serde(default)]
    pub carousel: CarouselSettings,
    #[serde(default)]
    pub contact: ContactSettings,
}

/// Repository listing source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GithubSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_github_user")]
    pub user: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub merge: MergePolicy,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselSettings {
    /// Auto-advance period in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

/// Contact channels shown in the contact section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactSettings {
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// International number without '+' or separators, as wa.me expects
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_github_user() -> String {
    github::DEFAULT_USER.to_string()
}

fn default_per_page() -> u32 {
    github::DEFAULT_PER_PAGE
}

fn default_timeout_secs() -> u64 {
    github::DEFAULT_TIMEOUT_SECS
}

fn default_interval_ms() -> u64 {
    carousel::DEFAULT_INTERVAL_MS
}

fn default_email() -> String {
    "emanuelabreudev@gmail.com".to_string()
}

fn default_location() -> String {
    "Fortaleza, CE - Brasil".to_string()
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            user: default_github_user(),
            per_page: default_per_page(),
            merge: MergePolicy::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            email: default_email(),
            phone: String::new(),
            whatsapp: String::new(),
            location: default_location(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            github: GithubSettings::default(),
            carousel: CarouselSettings::default(),
            contact: ContactSettings::default(),
        }
    }
}

impl SiteConfig {
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load configuration from the default location or create it
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from `path`, writing defaults if the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, creating default config at {:?}", path);
            let config = SiteConfig::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let mut config: SiteConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", path))?;
        config.validate_and_clamp();

        info!(
            github_enabled = config.github.enabled,
            github_user = %config.github.user,
            interval_ms = config.carousel.interval_ms,
            "Loaded site config"
        );
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Clamp values to safe ranges after loading a hand-edited file
    fn validate_and_clamp(&mut self) {
        use validation::*;

        let interval = self.carousel.interval_ms;
        if interval < MIN_INTERVAL_MS || interval > MAX_INTERVAL_MS {
            let clamped = interval.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
            warn!(interval_ms = interval, using = clamped, "carousel interval out of range, clamping");
            self.carousel.interval_ms = clamped;
        }

        let per_page = self.github.per_page;
        if per_page < MIN_PER_PAGE || per_page > MAX_PER_PAGE {
            let clamped = per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE);
            warn!(per_page, using = clamped, "github per_page out of range, clamping");
            self.github.per_page = clamped;
        }

        let timeout = self.github.timeout_secs;
        if timeout < MIN_TIMEOUT_SECS || timeout > MAX_TIMEOUT_SECS {
            let clamped = timeout.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
            warn!(timeout_secs = timeout, using = clamped, "github timeout out of range, clamping");
            self.github.timeout_secs = clamped;
        }

        if self.github.enabled && self.github.user.trim().is_empty() {
            warn!("github.user is empty, disabling repository fetch");
            self.github.enabled = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");

        let config = SiteConfig::load_from(&path).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert!(path.exists());

        let reloaded = SiteConfig::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        fs::write(&path, r#"{ "github": { "user": "octocat", "merge": "replace" } }"#).unwrap();

        let config = SiteConfig::load_from(&path).unwrap();
        assert_eq!(config.github.user, "octocat");
        assert_eq!(config.github.merge, MergePolicy::Replace);
        assert!(config.github.enabled);
        assert_eq!(config.github.per_page, github::DEFAULT_PER_PAGE);
        assert_eq!(config.carousel.interval_ms, carousel::DEFAULT_INTERVAL_MS);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        fs::write(
            &path,
            r#"{
                "carousel": { "interval_ms": 10 },
                "github": { "per_page": 0, "timeout_secs": 9000 }
            }"#,
        )
        .unwrap();

        let config = SiteConfig::load_from(&path).unwrap();
        assert_eq!(config.carousel.interval_ms, validation::MIN_INTERVAL_MS);
        assert_eq!(config.github.per_page, validation::MIN_PER_PAGE);
        assert_eq!(config.github.timeout_secs, validation::MAX_TIMEOUT_SECS);
    }

    #[test]
    fn test_oversized_per_page_clamps_and_keeps_other_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        fs::write(
            &path,
            r#"{
                "github": { "user": "octocat", "per_page": 300, "merge": "replace" },
                "carousel": { "interval_ms": 8000 },
                "contact": { "whatsapp": "5585999999999" }
            }"#,
        )
        .unwrap();

        let config = SiteConfig::load_from(&path).unwrap();
        assert_eq!(config.github.per_page, validation::MAX_PER_PAGE);
        assert_eq!(config.github.user, "octocat");
        assert_eq!(config.github.merge, MergePolicy::Replace);
        assert_eq!(config.carousel.interval_ms, 8000);
        assert_eq!(config.contact.whatsapp, "5585999999999");
    }

    #[test]
    fn test_blank_user_disables_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        fs::write(&path, r#"{ "github": { "user": "  " } }"#).unwrap();

        let config = SiteConfig::load_from(&path).unwrap();
        assert!(!config.github.enabled);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        fs::write(&path, "log_level = 'debug'").unwrap();

        assert!(SiteConfig::load_from(&path).is_err());
    }
}
