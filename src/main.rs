#![forbid(unsafe_code)]

mod config;
mod constants;
mod contact;
mod gui;
mod portfolio;
mod theme;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use config::SiteConfig;
use gui::LaunchOptions;

#[derive(Parser, Debug)]
#[command(name = "folio-showcase", version, about = "Portfolio showcase window")]
struct Args {
    /// Site config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not fetch repositories; show the bundled projects only
    #[arg(long)]
    offline: bool,

    /// GitHub account whose repositories are listed
    #[arg(long, value_name = "NAME")]
    github_user: Option<String>,

    /// trace, debug, info, warn or error (overrides LOG_LEVEL and the config)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn parse_level(level: &str) -> TraceLevel {
    match level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn load_config(path: Option<&PathBuf>) -> (SiteConfig, Option<anyhow::Error>) {
    let loaded = match path {
        Some(path) => SiteConfig::load_from(path),
        None => SiteConfig::load(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    }
}

/// Point the fetch at `user`; a blank name leaves the config untouched
fn override_github_user(config: &mut SiteConfig, user: &str) {
    let user = user.trim();
    if user.is_empty() {
        warn!("Ignoring blank --github-user");
        return;
    }
    info!(user = %user, "GitHub user overridden from command line");
    config.github.user = user.to_string();
    config.github.enabled = true;
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read before logging starts because it can set the level;
    // a load failure is reported once the subscriber is up
    let (mut config, config_error) = load_config(args.config.as_ref());

    let level = args
        .log_level
        .clone()
        .or_else(|| std::env::var("LOG_LEVEL").ok())
        .unwrap_or_else(|| config.log_level.clone());

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&level))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(err) = config_error {
        error!(error = ?err, "Failed to load site config, using defaults");
    }

    if let Some(user) = args.github_user.as_deref() {
        override_github_user(&mut config, user);
    }

    info!(offline = args.offline, level = %level, "Starting folio-showcase");

    gui::run_gui(LaunchOptions {
        config,
        offline: args.offline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), TraceLevel::DEBUG);
        assert_eq!(parse_level("warn"), TraceLevel::WARN);
        assert_eq!(parse_level("verbose"), TraceLevel::INFO);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["folio-showcase", "--offline", "--github-user", "octocat"]);
        assert!(args.offline);
        assert_eq!(args.github_user.as_deref(), Some("octocat"));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_github_user_override() {
        let mut config = SiteConfig::default();
        config.github.enabled = false;

        override_github_user(&mut config, " octocat ");
        assert_eq!(config.github.user, "octocat");
        assert!(config.github.enabled);
    }

    #[test]
    fn test_blank_github_user_override_is_ignored() {
        let mut config = SiteConfig::default();
        config.github.enabled = false;

        for blank in ["", "   "] {
            override_github_user(&mut config, blank);
            assert_eq!(config.github.user, SiteConfig::default().github.user);
            assert!(!config.github.enabled);
        }
    }

    #[test]
    fn test_broken_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, "{ broken").unwrap();

        let (config, err) = load_config(Some(&path));
        assert_eq!(config, SiteConfig::default());
        assert!(err.is_some());
    }
}
