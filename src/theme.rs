//! Light/dark theme resolution and persistence
//!
//! Precedence at startup: persisted choice > host "prefers dark" signal > light.
//! Only an explicit toggle changes the mode afterwards, and every toggle is
//! written back to the preference store.

use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::config::PreferenceStore;
use crate::constants::theme::{DARK, LIGHT, STORAGE_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }

    fn from_host_signal(prefers_dark: Option<bool>) -> Self {
        match prefers_dark {
            Some(true) => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            LIGHT => Ok(ThemeMode::Light),
            DARK => Ok(ThemeMode::Dark),
            other => Err(UnknownThemeMode(other.to_string())),
        }
    }
}

/// Whatever draws the UI; receives the active mode as a plain flag
pub trait ThemeSurface {
    fn apply_mode(&mut self, mode: ThemeMode);
}

impl ThemeSurface for egui::Context {
    fn apply_mode(&mut self, mode: ThemeMode) {
        let theme = if mode.is_dark() {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        };
        self.set_theme(theme);
    }
}

/// Resolve the startup mode without side effects
///
/// Storage errors and unrecognised values count as "no persisted choice".
pub fn resolve_initial_theme(store: &dyn PreferenceStore, host_prefers_dark: Option<bool>) -> ThemeMode {
    let persisted = match store.load(STORAGE_KEY) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "Failed to read theme preference, ignoring");
            None
        }
    };

    if let Some(raw) = persisted {
        match raw.parse::<ThemeMode>() {
            Ok(mode) => {
                debug!(mode = %mode, "Using persisted theme");
                return mode;
            }
            Err(UnknownThemeMode(value)) => {
                warn!(value = %value, "Ignoring unrecognised persisted theme");
            }
        }
    }

    let mode = ThemeMode::from_host_signal(host_prefers_dark);
    debug!(mode = %mode, host_prefers_dark = ?host_prefers_dark, "Using host theme preference");
    mode
}

/// Owns the active mode and its persistence
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the startup mode from `store` and the host signal
    pub fn new(store: S, host_prefers_dark: Option<bool>) -> Self {
        let mode = resolve_initial_theme(&store, host_prefers_dark);
        info!(mode = %mode, "Resolved initial theme");
        Self { store, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn apply(&self, surface: &mut dyn ThemeSurface) {
        surface.apply_mode(self.mode);
    }

    /// Flip the mode, persist it and push it to `surface`
    ///
    /// A failed write is logged; the in-memory mode still changes.
    pub fn toggle(&mut self, surface: &mut dyn ThemeSurface) -> ThemeMode {
        self.mode = self.mode.toggled();

        if let Err(err) = self.store.store(STORAGE_KEY, self.mode.as_str()) {
            warn!(error = %err, mode = %self.mode, "Failed to persist theme preference");
        }

        self.apply(surface);
        info!(mode = %self.mode, "Theme toggled");
        self.mode
    }
}
