//! Shape definitions for the bouncing scene.

mod circle;
mod rectangle;

pub use circle::Circle;
pub use rectangle::Rectangle;

use kurbo::{Point, Rect, Size, Vec2};
use std::fmt;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ShapeColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Build a color from integer channels, clamping each into `0..=255`.
    ///
    /// Returns the color and whether any channel had to be clamped.
    pub fn from_channels(r: i64, g: i64, b: i64) -> (Self, bool) {
        let clamp = |c: i64| c.clamp(0, 255) as u8;
        let clamped = [r, g, b].iter().any(|c| !(0..=255).contains(c));
        (Self::new(clamp(r), clamp(g), clamp(b)), clamped)
    }

    /// Channels as floats in `0.0..=1.0`, the form color pickers edit.
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Inverse of [`to_unit_rgb`](Self::to_unit_rgb): `round(channel * 255)`.
    pub fn from_unit_rgb(rgb: [f32; 3]) -> Self {
        let channel = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(channel(rgb[0]), channel(rgb[1]), channel(rgb[2]))
    }
}

impl fmt::Display for ShapeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.r, self.g, self.b)
    }
}

/// Attributes shared by every shape kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeProps {
    /// Label drawn on the shape. Not required to be unique.
    pub name: String,
    /// Hidden shapes keep moving but are not drawn.
    pub visible: bool,
    /// Top-left corner of the bounding box.
    pub position: Point,
    /// Displacement per frame, in pixels.
    pub velocity: Vec2,
    pub color: ShapeColor,
    /// Uniform multiplier applied to the drawn size and the collision extent.
    pub scale: f64,
}

impl ShapeProps {
    /// Create visible, unscaled props.
    pub fn new(name: impl Into<String>, position: Point, velocity: Vec2, color: ShapeColor) -> Self {
        Self {
            name: name.into(),
            visible: true,
            position,
            velocity,
            color,
            scale: 1.0,
        }
    }
}

/// Discriminant of a [`Shape`], for code that only needs to know the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Shared attributes.
    fn props(&self) -> &ShapeProps;

    /// Mutable shared attributes.
    fn props_mut(&mut self) -> &mut ShapeProps;

    /// Bounding size along each axis after `scale` is applied.
    fn extent(&self) -> Size;

    /// Append the kind-specific geometry to a description.
    fn fmt_geometry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A shape in the scene. The variant is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    pub fn props(&self) -> &ShapeProps {
        match self {
            Shape::Circle(s) => s.props(),
            Shape::Rectangle(s) => s.props(),
        }
    }

    pub fn props_mut(&mut self) -> &mut ShapeProps {
        match self {
            Shape::Circle(s) => s.props_mut(),
            Shape::Rectangle(s) => s.props_mut(),
        }
    }

    pub fn extent(&self) -> Size {
        match self {
            Shape::Circle(s) => s.extent(),
            Shape::Rectangle(s) => s.extent(),
        }
    }

    /// Axis-aligned box from `position` to `position + extent`.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.props().position, self.extent())
    }

    pub fn name(&self) -> &str {
        &self.props().name
    }

    pub fn is_visible(&self) -> bool {
        self.props().visible
    }

    /// Get the circle if this shape is a circle.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Get the rectangle if this shape is a rectangle.
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Shape::Rectangle(r) => Some(r),
            _ => None,
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let props = self.props();
        write!(
            f,
            "{} {}, draw={}, scale={}, position ({},{}), velocity ({},{}), color {}",
            self.kind(),
            props.name,
            props.visible,
            props.scale,
            props.position.x,
            props.position.y,
            props.velocity.x,
            props.velocity.y,
            props.color,
        )?;
        match self {
            Shape::Circle(s) => s.fmt_geometry(f),
            Shape::Rectangle(s) => s.fmt_geometry(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle() -> Shape {
        Circle::new(
            ShapeProps::new("A", Point::new(790.0, 100.0), Vec2::new(5.0, 0.0), ShapeColor::new(255, 0, 0)),
            10.0,
        )
        .into()
    }

    fn rectangle() -> Shape {
        Rectangle::new(
            ShapeProps::new("B", Point::new(10.5, 20.0), Vec2::new(-1.25, 2.0), ShapeColor::new(0, 128, 255)),
            Size::new(50.0, 25.0),
        )
        .into()
    }

    #[test]
    fn test_kind_identification() {
        assert_eq!(circle().kind(), ShapeKind::Circle);
        assert!(circle().as_circle().is_some());
        assert!(circle().as_rectangle().is_none());

        assert_eq!(rectangle().kind(), ShapeKind::Rectangle);
        assert!(rectangle().as_rectangle().is_some());
        assert!(rectangle().as_circle().is_none());
    }

    #[test]
    fn test_new_props_are_visible_and_unscaled() {
        let shape = circle();
        assert!(shape.is_visible());
        assert!((shape.props().scale - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_describe_circle() {
        assert_eq!(
            circle().to_string(),
            "Circle A, draw=true, scale=1, position (790,100), velocity (5,0), color (255,0,0), radius=10"
        );
    }

    #[test]
    fn test_describe_rectangle() {
        let mut shape = rectangle();
        shape.props_mut().visible = false;
        shape.props_mut().scale = 1.5;
        assert_eq!(
            shape.to_string(),
            "Rectangle B, draw=false, scale=1.5, position (10.5,20), velocity (-1.25,2), color (0,128,255), size (50,25)"
        );
    }

    #[test]
    fn test_bounds_follow_extent() {
        let mut shape = circle();
        shape.props_mut().scale = 2.0;
        let bounds = shape.bounds();
        assert!((bounds.x0 - 790.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.width() - 40.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_color_unit_round_trip() {
        for value in 0..=255u8 {
            let color = ShapeColor::new(value, 255 - value, value / 2);
            assert_eq!(ShapeColor::from_unit_rgb(color.to_unit_rgb()), color);
        }
    }

    #[test]
    fn test_color_from_unit_rounds() {
        // 0.5 * 255 = 127.5 rounds away from zero
        let color = ShapeColor::from_unit_rgb([0.5, 1.0, 0.0]);
        assert_eq!(color, ShapeColor::new(128, 255, 0));
        assert_eq!(ShapeColor::from_unit_rgb([1.2, -0.1, 0.999]), ShapeColor::new(255, 0, 255));
    }

    #[test]
    fn test_color_from_channels_clamps() {
        let (color, clamped) = ShapeColor::from_channels(12, 34, 56);
        assert_eq!(color, ShapeColor::new(12, 34, 56));
        assert!(!clamped);

        let (color, clamped) = ShapeColor::from_channels(300, -4, 255);
        assert_eq!(color, ShapeColor::new(255, 0, 255));
        assert!(clamped);
    }
}
