//! Repository listing collaborator
//!
//! [`RepositorySource`] is the seam between the portfolio and wherever
//! project records come from. [`GithubSource`] lists a user's most recently
//! updated public repositories (one page, no auth, no retry) and maps them
//! onto [`ProjectItem`]s.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use super::{ImpactMetric, ProjectItem, ProjectOrigin};
use crate::config::site::GithubSettings;
use crate::constants::{accent, github};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("repository request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("repository listing returned {0}")]
    Status(StatusCode),
    #[error("malformed repository listing: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("failed to start fetch runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("fetch worker exited without a result")]
    WorkerGone,
}

/// Asynchronous provider of project records, called once at startup
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<ProjectItem>, FetchError>;
}

/// Subset of the GitHub repository object the portfolio displays
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    /// Absent on older API versions; an empty list still means "no tags"
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    pub html_url: String,
    pub owner: GithubOwner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubOwner {
    pub login: String,
}

pub struct GithubSource {
    client: Client,
    user: String,
    per_page: u32,
}

impl GithubSource {
    pub fn new(settings: &GithubSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(github::USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            user: settings.user.trim().to_string(),
            per_page: settings.per_page,
        })
    }

    fn listing_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            github::API_BASE,
            self.user,
            self.per_page
        )
    }
}

#[async_trait]
impl RepositorySource for GithubSource {
    async fn fetch(&self) -> Result<Vec<ProjectItem>, FetchError> {
        let url = self.listing_url();
        debug!(url = %url, "Requesting repository listing");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let projects = parse_repositories(&body)?;
        info!(user = %self.user, count = projects.len(), "Fetched repositories");
        Ok(projects)
    }
}

/// Decode a listing payload; anything but a JSON array of repositories fails
pub fn parse_repositories(body: &[u8]) -> Result<Vec<ProjectItem>, FetchError> {
    let repos: Vec<GithubRepo> = serde_json::from_slice(body)?;
    Ok(repos
        .iter()
        .enumerate()
        .map(|(index, repo)| repo_to_project(repo, index))
        .collect())
}

pub fn repo_to_project(repo: &GithubRepo, index: usize) -> ProjectItem {
    let language = repo.language.clone().filter(|lang| !lang.is_empty());

    let stack = match &repo.topics {
        Some(topics) => topics.iter().take(github::MAX_TOPIC_TAGS).cloned().collect(),
        None => language.iter().cloned().collect(),
    };

    let description = repo
        .description
        .clone()
        .filter(|desc| !desc.trim().is_empty())
        .unwrap_or_else(|| github::FALLBACK_DESCRIPTION.to_string());

    let color = if index % 2 == 0 { accent::TEAL } else { accent::CORAL };

    ProjectItem {
        title: title_case(&repo.name),
        client: github::CLIENT_LABEL.to_string(),
        segment: github::SEGMENT_LABEL.to_string(),
        description,
        problem: github::PROBLEM_STATEMENT.to_string(),
        impact: vec![
            ImpactMetric::new("Stars", format!("\u{2B50} {}", repo.stargazers_count)),
            ImpactMetric::new("Forks", format!("\u{1F531} {}", repo.forks_count)),
            ImpactMetric::new("Language", language.unwrap_or_else(|| "N/A".to_string())),
        ],
        stack,
        color: color.to_string(),
        image: format!("{}/{}/{}", github::OPENGRAPH_BASE, repo.owner.login, repo.name),
        url: repo.html_url.clone(),
        origin: ProjectOrigin::Repository,
    }
}

/// `my-cool_repo` -> `My Cool_repo`: dashes become spaces, each word is capitalised
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;

    for ch in name.chars().map(|c| if c == '-' { ' ' } else { c }) {
        let is_word_char = ch.is_alphanumeric() || ch == '_';
        if is_word_char && !in_word {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        in_word = is_word_char;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[
        {
            "name": "rust-cli-tools",
            "description": "Small utilities",
            "stargazers_count": 12,
            "forks_count": 3,
            "language": "Rust",
            "topics": ["cli", "rust", "tools", "terminal", "unix", "productivity"],
            "html_url": "https://github.com/octocat/rust-cli-tools",
            "owner": { "login": "octocat" },
            "private": false
        },
        {
            "name": "dotfiles",
            "description": null,
            "stargazers_count": 0,
            "forks_count": 0,
            "language": null,
            "html_url": "https://github.com/octocat/dotfiles",
            "owner": { "login": "octocat" }
        }
    ]"#;

    #[test]
    fn test_parse_maps_repositories_in_order() {
        let projects = parse_repositories(LISTING.as_bytes()).unwrap();
        assert_eq!(projects.len(), 2);

        let first = &projects[0];
        assert_eq!(first.title, "Rust Cli Tools");
        assert_eq!(first.client, github::CLIENT_LABEL);
        assert_eq!(first.segment, github::SEGMENT_LABEL);
        assert_eq!(first.description, "Small utilities");
        assert_eq!(first.stack, vec!["cli", "rust", "tools", "terminal", "unix"]);
        assert_eq!(first.color, accent::TEAL);
        assert_eq!(first.image, "https://opengraph.githubassets.com/1/octocat/rust-cli-tools");
        assert_eq!(first.url, "https://github.com/octocat/rust-cli-tools");
        assert_eq!(first.origin, ProjectOrigin::Repository);
        assert_eq!(first.impact[0].value, "\u{2B50} 12");
        assert_eq!(first.impact[1].value, "\u{1F531} 3");
        assert_eq!(first.impact[2], ImpactMetric::new("Language", "Rust"));
    }

    #[test]
    fn test_missing_fields_use_fallbacks() {
        let projects = parse_repositories(LISTING.as_bytes()).unwrap();
        let second = &projects[1];

        assert_eq!(second.title, "Dotfiles");
        assert_eq!(second.description, github::FALLBACK_DESCRIPTION);
        assert!(second.stack.is_empty());
        assert_eq!(second.impact[2].value, "N/A");
        assert_eq!(second.color, accent::CORAL);
    }

    #[test]
    fn test_language_used_when_no_topics() {
        let repo: GithubRepo = serde_json::from_str(
            r#"{ "name": "api", "language": "Go", "html_url": "u", "owner": { "login": "o" } }"#,
        )
        .unwrap();
        assert_eq!(repo_to_project(&repo, 0).stack, vec!["Go"]);
    }

    #[test]
    fn test_empty_topics_show_no_tags() {
        let repo: GithubRepo = serde_json::from_str(
            r#"{ "name": "api", "language": "Go", "topics": [], "html_url": "u", "owner": { "login": "o" } }"#,
        )
        .unwrap();
        assert!(repo_to_project(&repo, 0).stack.is_empty());
    }

    #[test]
    fn test_non_array_payload_is_malformed() {
        // GitHub answers rate-limited requests with an object
        let body = br#"{ "message": "API rate limit exceeded" }"#;
        assert!(matches!(parse_repositories(body), Err(FetchError::Malformed(_))));
        assert!(matches!(parse_repositories(b"not json"), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_empty_listing() {
        assert!(parse_repositories(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("my-portfolio-site"), "My Portfolio Site");
        assert_eq!(title_case("folio_showcase"), "Folio_showcase");
        assert_eq!(title_case("v2.api"), "V2.Api");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_listing_url() {
        let settings = GithubSettings {
            user: " octocat ".to_string(),
            per_page: 6,
            ..GithubSettings::default()
        };
        let source = GithubSource::new(&settings).unwrap();
        assert_eq!(
            source.listing_url(),
            "https://api.github.com/users/octocat/repos?sort=updated&per_page=6"
        );
    }
}
