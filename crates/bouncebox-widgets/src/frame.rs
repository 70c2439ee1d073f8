//! Panel frames.

use egui::{CornerRadius, Frame, Margin, Stroke};

use crate::{sizing, theme};

/// Frame of the floating property panel.
///
/// Opaque so the moving scene never shows through the controls, and flat:
/// no drop shadow over the shapes.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .inner_margin(Margin::symmetric(sizing::PANEL_MARGIN_X, sizing::PANEL_MARGIN_Y))
}
