// ContactDeck - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Accent colour for the selected dataset button and badges.
pub const ACCENT: Color32 = Color32::from_rgb(34, 211, 238); // Cyan 400

/// Colour for load-error banners (missing file / missing sheet).
pub const ERROR_TEXT: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Muted colour for captions and category labels.
pub const MUTED_TEXT: Color32 = Color32::from_rgb(148, 163, 184); // Slate 400

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 260.0;
pub const OUTREACH_PANE_HEIGHT: f32 = 220.0;
pub const ROW_HEIGHT: f32 = 22.0;
pub const MESSAGE_EDIT_ROWS: usize = 10;
