//! Painting the bouncing shapes and the config dump.
//!
//! Everything here draws onto a painter for egui's background layer, so the
//! property panel always sits on top of the scene.

use bouncebox_core::{FontSettings, GameConfig, Shape, ShapeColor};
use egui::{Align2, Color32, CornerRadius, FontFamily, FontId, Painter, Pos2, Rect, pos2};

/// Heading printed above the config dump.
pub const DUMP_HEADER: &str = "config.txt content:";
/// Character size of the config dump.
pub const DUMP_FONT_SIZE: f32 = 16.0;
/// Left margin of the config dump.
const DUMP_MARGIN: f32 = 10.0;
/// Fraction of a short shape's height used for its label.
const LABEL_SHRINK: f32 = 0.9;

/// Font and color used for shape labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub family: FontFamily,
    /// Unscaled character size in points.
    pub size: f32,
    pub color: Color32,
}

impl LabelStyle {
    pub fn from_font(font: &FontSettings, family: FontFamily) -> Self {
        Self {
            family,
            size: font.size as f32,
            color: to_color32(font.color),
        }
    }
}

pub fn to_color32(color: ShapeColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

pub fn to_egui_rect(rect: kurbo::Rect) -> Rect {
    Rect::from_min_max(
        pos2(rect.x0 as f32, rect.y0 as f32),
        pos2(rect.x1 as f32, rect.y1 as f32),
    )
}

/// Label character size for a shape drawn `shape_height` points tall.
///
/// Labels taller than their shape are cut down to 90% of its height before
/// the shape's scale is applied.
pub fn label_size(font_size: f32, scale: f32, shape_height: f32) -> f32 {
    let base = if shape_height < font_size {
        shape_height * LABEL_SHRINK
    } else {
        font_size
    };
    base * scale
}

/// Text of the config dump.
pub fn config_dump(config: &GameConfig) -> String {
    format!("{DUMP_HEADER}\n{config}")
}

pub fn paint_config_dump(painter: &Painter, text: &str, family: FontFamily) {
    painter.text(
        Pos2::new(DUMP_MARGIN, 0.0),
        Align2::LEFT_TOP,
        text,
        FontId::new(DUMP_FONT_SIZE, family),
        Color32::WHITE,
    );
}

/// Paint every visible shape with its centered name.
pub fn paint_shapes(painter: &Painter, shapes: &[Shape], labels: &LabelStyle) {
    for shape in shapes.iter().filter(|s| s.is_visible()) {
        let color = to_color32(shape.props().color);
        let bounds = to_egui_rect(shape.bounds());
        match shape {
            Shape::Circle(circle) => {
                let center = circle.center();
                painter.circle_filled(
                    egui::pos2(center.x as f32, center.y as f32),
                    circle.scaled_radius() as f32,
                    color,
                );
            }
            Shape::Rectangle(_) => {
                painter.rect_filled(bounds, CornerRadius::ZERO, color);
            }
        }

        let size = label_size(labels.size, shape.props().scale as f32, bounds.height());
        // egui cannot lay out text at a non-positive size
        if size > 0.0 {
            painter.text(
                bounds.center(),
                Align2::CENTER_CENTER,
                shape.name(),
                FontId::new(size, labels.family.clone()),
                labels.color,
            );
        }
    }
}
