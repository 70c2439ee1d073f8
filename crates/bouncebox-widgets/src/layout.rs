//! Section headings and dividers for the property panel.

use egui::{RichText, Sense, Stroke, Ui, vec2};

use crate::{sizing, theme};

/// A full-width divider between panel sections, drawn in the border color.
pub fn separator(ui: &mut Ui) {
    ui.add_space(sizing::ROW_SPACING);
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 1.0), Sense::hover());
    ui.painter()
        .hline(rect.x_range(), rect.center().y, Stroke::new(1.0, theme::BORDER));
    ui.add_space(sizing::ROW_SPACING);
}

/// An uppercase heading above a group of rows.
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text.to_uppercase())
            .size(sizing::SECTION_TEXT_SIZE)
            .strong()
            .color(theme::TEXT_MUTED),
    );
}
