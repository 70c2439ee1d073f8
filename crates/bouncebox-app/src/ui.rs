//! The "Shape Properties" panel.

use std::ops::RangeInclusive;

use bouncebox_core::{EditorSession, NAME_CHAR_LIMIT, PropertyEdit, Shape};
use bouncebox_widgets::{
    labeled_checkbox, labeled_slider, name_field, panel_frame, rgb_picker, section_label, selection_combo,
    separator, sizing, vec2_slider,
};

pub const PANEL_TITLE: &str = "Shape Properties";
pub const SCALE_RANGE: RangeInclusive<f64> = 0.0..=4.0;
pub const VELOCITY_RANGE: RangeInclusive<f64> = -8.0..=8.0;

/// Show the property panel for the session's selected shape.
///
/// Nothing is shown when there are no shapes.
pub fn properties_panel(ctx: &egui::Context, session: &mut EditorSession, shapes: &mut [Shape]) {
    session.edit(shapes, |edit| {
        egui::Window::new(PANEL_TITLE)
            .frame(panel_frame())
            .resizable(false)
            .default_pos([10.0, 200.0])
            .show(ctx, |ui| property_rows(ui, edit));
    });
}

fn property_rows(ui: &mut egui::Ui, edit: &mut PropertyEdit<'_>) {
    ui.spacing_mut().item_spacing.y = sizing::ROW_SPACING;

    section_label(ui, "SELECTION");
    selection_combo(ui, "Shape", &edit.names, &mut edit.requested);
    separator(ui);

    section_label(ui, "PROPERTIES");
    labeled_checkbox(ui, "Draw Shape", edit.visible);
    labeled_slider(ui, "Scale", edit.scale, SCALE_RANGE);
    vec2_slider(ui, "Velocity", &mut edit.buffers.velocity, VELOCITY_RANGE);
    rgb_picker(ui, "Color", &mut edit.buffers.color);
    name_field(ui, "Name", &mut edit.buffers.name, NAME_CHAR_LIMIT);
}
