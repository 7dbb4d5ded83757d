//! GUI-specific constants for layout, status colors and intervals

use egui;

/// Window dimensions
pub const WINDOW_WIDTH: f32 = 1180.0;
pub const WINDOW_HEIGHT: f32 = 860.0;
pub const WINDOW_MIN_WIDTH: f32 = 760.0;
pub const WINDOW_MIN_HEIGHT: f32 = 560.0;

/// Layout spacing
pub const PADDING: f32 = 12.0;
pub const SECTION_SPACING: f32 = 32.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const CARD_MIN_HEIGHT: f32 = 420.0;
pub const ACCENT_BAR_HEIGHT: f32 = 4.0;

/// Brand colors
pub const BRAND_TEAL: egui::Color32 = egui::Color32::from_rgb(0x17, 0xA2, 0xB8);
pub const BRAND_CORAL: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x6B, 0x6B);

/// Status colors
pub const STATUS_SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 170, 90);
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);

/// Repaint cadence while the repository fetch is pending
pub const LOADING_REPAINT_MS: u64 = 100;

/// How long a status message stays visible
pub const STATUS_MESSAGE_SECS: u64 = 6;
