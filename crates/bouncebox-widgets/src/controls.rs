//! Labeled property controls.
//!
//! Every control draws its value widget first and its label on the right,
//! and returns `true` when the user changed the value this frame. Sliders
//! only clamp values the user edits, so out-of-range values loaded from a
//! scene survive until touched.

use std::ops::RangeInclusive;

use egui::{ComboBox, RichText, Slider, SliderClamping, TextEdit, Ui};

use crate::{sizing, theme};

fn row_label(ui: &mut Ui, label: &str) {
    ui.label(RichText::new(label).color(theme::TEXT));
}

/// Text shown for the selected entry of a combo, empty when out of range.
pub fn selected_text(names: &[String], index: usize) -> &str {
    names.get(index).map(String::as_str).unwrap_or_default()
}

/// A combo box listing `names`, writing the chosen index into `selected`.
pub fn selection_combo(ui: &mut Ui, label: &str, names: &[String], selected: &mut usize) -> bool {
    let before = *selected;
    ComboBox::from_label(RichText::new(label).color(theme::TEXT))
        .selected_text(selected_text(names, before))
        .width(sizing::CONTROL_WIDTH)
        .show_ui(ui, |ui| {
            for (index, name) in names.iter().enumerate() {
                ui.selectable_value(selected, index, name.as_str());
            }
        });
    *selected != before
}

/// A checkbox with its label.
pub fn labeled_checkbox(ui: &mut Ui, label: &str, value: &mut bool) -> bool {
    ui.checkbox(value, RichText::new(label).color(theme::TEXT)).changed()
}

/// A single-value slider.
pub fn labeled_slider(ui: &mut Ui, label: &str, value: &mut f64, range: RangeInclusive<f64>) -> bool {
    ui.horizontal(|ui| {
        ui.spacing_mut().slider_width = sizing::CONTROL_WIDTH;
        let changed = ui
            .add(Slider::new(value, range).clamping(SliderClamping::Edits))
            .changed();
        row_label(ui, label);
        changed
    })
    .inner
}

/// Two sliders editing an `[x, y]` pair, shown with three decimals.
pub fn vec2_slider(ui: &mut Ui, label: &str, value: &mut [f64; 2], range: RangeInclusive<f64>) -> bool {
    ui.horizontal(|ui| {
        ui.spacing_mut().slider_width = sizing::CONTROL_WIDTH / 2.0;
        let mut changed = false;
        for component in value.iter_mut() {
            changed |= ui
                .add(
                    Slider::new(component, range.clone())
                        .fixed_decimals(3)
                        .clamping(SliderClamping::Edits),
                )
                .changed();
        }
        row_label(ui, label);
        changed
    })
    .inner
}

/// An RGB color button with a picker popup. Channels are in `0.0..=1.0`.
pub fn rgb_picker(ui: &mut Ui, label: &str, rgb: &mut [f32; 3]) -> bool {
    ui.horizontal(|ui| {
        let changed = ui.color_edit_button_rgb(rgb).changed();
        row_label(ui, label);
        changed
    })
    .inner
}

/// A single-line text field holding at most `char_limit` characters.
pub fn name_field(ui: &mut Ui, label: &str, text: &mut String, char_limit: usize) -> bool {
    ui.horizontal(|ui| {
        let changed = ui
            .add(
                TextEdit::singleline(text)
                    .char_limit(char_limit)
                    .desired_width(sizing::CONTROL_WIDTH),
            )
            .changed();
        row_label(ui, label);
        changed
    })
    .inner
}
