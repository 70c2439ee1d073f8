//! Styled egui controls for the BounceBox property panel.
//!
//! - **Frame**: the floating panel frame
//! - **Layout**: section labels, separators
//! - **Controls**: labeled sliders, shape selection combo, color and text rows

pub mod controls;
pub mod frame;
pub mod layout;

pub use controls::{
    labeled_checkbox, labeled_slider, name_field, rgb_picker, selected_text, selection_combo, vec2_slider,
};
pub use frame::panel_frame;
pub use layout::{section_label, separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 6;
    /// Horizontal panel padding
    pub const PANEL_MARGIN_X: i8 = 12;
    /// Vertical panel padding
    pub const PANEL_MARGIN_Y: i8 = 10;
    /// Text size of section headings
    pub const SECTION_TEXT_SIZE: f32 = 11.0;
    /// Width reserved for a control's value area
    pub const CONTROL_WIDTH: f32 = 180.0;
    /// Spacing between control rows
    pub const ROW_SPACING: f32 = 4.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(250, 250, 252);
}
