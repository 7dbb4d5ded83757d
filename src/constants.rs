//! Application-wide constants
//!
//! This module contains the magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Config file locations (relative to the platform config dir)
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "folio-showcase";

    /// Site configuration file name
    pub const FILENAME: &str = "site.json";

    /// Persisted user preferences (theme flag)
    pub const PREFERENCES_FILENAME: &str = "preferences.json";
}

/// Theme preference persistence
pub mod theme {
    /// Storage key holding the persisted mode
    pub const STORAGE_KEY: &str = "theme";

    pub const LIGHT: &str = "light";
    pub const DARK: &str = "dark";
}

/// Portfolio carousel behaviour
pub mod carousel {
    /// Projects shown per page
    pub const PAGE_SIZE: usize = 3;

    /// Default auto-advance period
    pub const DEFAULT_INTERVAL_MS: u64 = 5000;
}

/// GitHub repository listing
pub mod github {
    pub const API_BASE: &str = "https://api.github.com";

    /// Open Graph preview images, addressed by `{owner}/{repo}`
    pub const OPENGRAPH_BASE: &str = "https://opengraph.githubassets.com/1";

    pub const DEFAULT_USER: &str = "emanuelabreudev";
    pub const DEFAULT_PER_PAGE: u32 = 2;
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// GitHub rejects requests without a User-Agent
    pub const USER_AGENT: &str = concat!("folio-showcase/", env!("CARGO_PKG_VERSION"));

    /// Maximum number of topics turned into technology tags
    pub const MAX_TOPIC_TAGS: usize = 5;

    pub const CLIENT_LABEL: &str = "Open Source Project";
    pub const SEGMENT_LABEL: &str = "GitHub";
    pub const FALLBACK_DESCRIPTION: &str = "Development project available on GitHub";
    pub const PROBLEM_STATEMENT: &str =
        "Open source project hosted on GitHub. See the repository for details.";
}

/// Accent colors used on project cards
pub mod accent {
    pub const TEAL: &str = "#17A2B8";
    pub const CORAL: &str = "#FF6B6B";
}

/// Config value ranges enforced after loading
pub mod validation {
    pub const MIN_INTERVAL_MS: u64 = 1000;
    pub const MAX_INTERVAL_MS: u64 = 60_000;

    pub const MIN_PER_PAGE: u32 = 1;
    pub const MAX_PER_PAGE: u32 = 100;

    pub const MIN_TIMEOUT_SECS: u64 = 1;
    pub const MAX_TIMEOUT_SECS: u64 = 120;
}

/// Outbound contact links
pub mod contact {
    pub const WHATSAPP_BASE: &str = "https://wa.me";
    pub const WHATSAPP_GREETING: &str = "Hi! I'd like to talk about your services.";
    pub const SUBJECT_PREFIX: &str = "Portfolio contact: ";
    pub const COMPANY_NOT_PROVIDED: &str = "Not provided";
}

/// Public profile shown in the about section and footer
pub mod profile {
    pub const NAME: &str = "Emanuel Abreu";
    pub const ROLE: &str = "Software Engineer";
    pub const GITHUB_URL: &str = "https://github.com/emanuelabreudev";
    pub const LINKEDIN_URL: &str = "https://linkedin.com/in/emanuelabreudev";
}
