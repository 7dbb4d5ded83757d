//! Configuration management for folio-showcase
//!
//! This module provides two stores:
//! - **site**: SiteConfig describing data sources, carousel timing and contact channels
//! - **preferences**: key/value flags the user changes from the UI (theme)

pub mod preferences;
pub mod site;

// Re-export commonly used types
pub use preferences::{JsonPreferenceStore, PreferenceStore};
#[cfg(test)]
pub use preferences::MemoryPreferenceStore;
pub use site::{MergePolicy, SiteConfig};
