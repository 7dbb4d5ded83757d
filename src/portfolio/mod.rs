//! Portfolio data and its carousel
//!
//! The collection starts as the bundled showcase projects. Once the
//! repository fetch resolves, [`Portfolio::apply_fetch`] combines the outcome
//! with the seed according to the configured [`MergePolicy`]; a failed fetch
//! leaves the seed in place. Either way the portfolio leaves the loading state.

pub mod carousel;
pub mod github;
pub mod seed;
pub mod worker;

pub use carousel::CarouselController;
pub use github::GithubSource;
pub use worker::{FetchHandle, FetchOutcome, spawn_fetch};

use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::config::MergePolicy;
use crate::constants::carousel::PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactMetric {
    pub label: String,
    pub value: String,
}

impl ImpactMetric {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Where a project record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectOrigin {
    Showcase,
    Repository,
}

/// One card in the portfolio; every field is display-only
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectItem {
    pub title: String,
    pub client: String,
    pub segment: String,
    pub description: String,
    pub problem: String,
    pub impact: Vec<ImpactMetric>,
    pub stack: Vec<String>,
    /// Accent color as `#RRGGBB`
    pub color: String,
    pub image: String,
    pub url: String,
    pub origin: ProjectOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    /// Fetch in flight; the view shows placeholders
    Loading,
    Ready,
}

pub struct Portfolio {
    seed: Vec<ProjectItem>,
    policy: MergePolicy,
    state: FeedState,
    carousel: CarouselController<ProjectItem>,
}

impl Portfolio {
    /// Portfolio waiting for a fetch outcome
    pub fn loading(seed: Vec<ProjectItem>, policy: MergePolicy, interval: Duration) -> Self {
        Self {
            carousel: CarouselController::new(seed.clone(), PAGE_SIZE, interval),
            seed,
            policy,
            state: FeedState::Loading,
        }
    }

    /// Portfolio that never fetches (offline or fetch disabled)
    pub fn seed_only(seed: Vec<ProjectItem>, interval: Duration) -> Self {
        let mut portfolio = Self::loading(seed, MergePolicy::Append, interval);
        portfolio.state = FeedState::Ready;
        portfolio
    }

    #[cfg(test)]
    pub fn state(&self) -> FeedState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FeedState::Loading
    }

    pub fn carousel(&self) -> &CarouselController<ProjectItem> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CarouselController<ProjectItem> {
        &mut self.carousel
    }

    /// Fold the fetch outcome into the collection; later outcomes are ignored
    pub fn apply_fetch(&mut self, outcome: FetchOutcome, now: Instant) {
        if self.state == FeedState::Ready {
            warn!("Ignoring repository fetch outcome, portfolio already settled");
            return;
        }

        let items = match outcome {
            Ok(fetched) => {
                info!(fetched = fetched.len(), policy = ?self.policy, "Merging fetched repositories");
                match self.policy {
                    MergePolicy::Append => self.seed.iter().cloned().chain(fetched).collect(),
                    MergePolicy::Replace => fetched,
                }
            }
            Err(err) => {
                warn!(error = %err, "Repository fetch failed, showing showcase projects only");
                self.seed.clone()
            }
        };

        self.carousel.replace_items(items, now);
        self.state = FeedState::Ready;
    }
}
