//! Rectangle shape.

use super::{ShapeProps, ShapeTrait};
use kurbo::Size;
use std::fmt;

/// An axis-aligned rectangle. `props.position` is its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub props: ShapeProps,
    /// Unscaled width and height.
    pub size: Size,
}

impl Rectangle {
    pub fn new(props: ShapeProps, size: Size) -> Self {
        Self { props, size }
    }
}

impl ShapeTrait for Rectangle {
    fn props(&self) -> &ShapeProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut ShapeProps {
        &mut self.props
    }

    fn extent(&self) -> Size {
        self.size * self.props.scale
    }

    fn fmt_geometry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ", size ({},{})", self.size.width, self.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeColor;
    use kurbo::{Point, Vec2};

    #[test]
    fn test_rectangle_creation() {
        let props = ShapeProps::new("r", Point::new(10.0, 20.0), Vec2::new(1.0, 2.0), ShapeColor::white());
        let rect = Rectangle::new(props, Size::new(100.0, 50.0));
        assert!((rect.props.position.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.props.position.y - 20.0).abs() < f64::EPSILON);
        assert!((rect.size.width - 100.0).abs() < f64::EPSILON);
        assert!((rect.size.height - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extent_scales_both_axes() {
        let mut props = ShapeProps::new("r", Point::ZERO, Vec2::ZERO, ShapeColor::white());
        props.scale = 3.0;
        let extent = Rectangle::new(props, Size::new(100.0, 50.0)).extent();
        assert!((extent.width - 300.0).abs() < f64::EPSILON);
        assert!((extent.height - 150.0).abs() < f64::EPSILON);
    }
}
