//! egui widgets for the color bridge.
//!
//! - **Picker**: the color picker panel, reporting change-complete events
//! - **Colors**: swatches and conversions to egui colors
//! - **Tracker**: the change-complete rule, independent of any UI
//! - **Menu** / **Layout**: panel frame and section labels

pub mod colors;
pub mod layout;
pub mod menu;
pub mod picker;
pub mod tracker;

pub use colors::{colors_match, rgb_to_color32, to_color32, ColorSwatch, ColorSwatchStyle};
pub use layout::section_label;
pub use menu::panel_frame;
pub use picker::{bridge_picker, ColorPicker, PickerConfig};
pub use tracker::ChangeTracker;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Preset swatch size
    pub const SMALL: f32 = 20.0;
    /// Height of the current-color preview
    pub const PREVIEW_HEIGHT: f32 = 48.0;
    /// Gap between preset swatches
    pub const PRESET_GAP: f32 = 6.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
