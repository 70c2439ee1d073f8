//! Circle shape.

use super::{ShapeProps, ShapeTrait};
use kurbo::{Point, Size};
use std::fmt;

/// A circle. `props.position` is the top-left of its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub props: ShapeProps,
    /// Unscaled radius.
    pub radius: f64,
}

impl Circle {
    pub fn new(props: ShapeProps, radius: f64) -> Self {
        Self { props, radius }
    }

    /// Radius after `scale` is applied.
    pub fn scaled_radius(&self) -> f64 {
        self.radius * self.props.scale
    }

    /// Center of the scaled circle.
    pub fn center(&self) -> Point {
        let r = self.scaled_radius();
        Point::new(self.props.position.x + r, self.props.position.y + r)
    }
}

impl ShapeTrait for Circle {
    fn props(&self) -> &ShapeProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut ShapeProps {
        &mut self.props
    }

    fn extent(&self) -> Size {
        let diameter = 2.0 * self.scaled_radius();
        Size::new(diameter, diameter)
    }

    fn fmt_geometry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ", radius={}", self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeColor;
    use kurbo::Vec2;

    fn circle(radius: f64, scale: f64) -> Circle {
        let mut props = ShapeProps::new("c", Point::new(10.0, 20.0), Vec2::ZERO, ShapeColor::white());
        props.scale = scale;
        Circle::new(props, radius)
    }

    #[test]
    fn test_extent_is_scaled_diameter() {
        let extent = circle(10.0, 1.0).extent();
        assert!((extent.width - 20.0).abs() < f64::EPSILON);
        assert!((extent.height - 20.0).abs() < f64::EPSILON);

        let extent = circle(10.0, 0.5).extent();
        assert!((extent.width - 10.0).abs() < f64::EPSILON);
        assert!((extent.height - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_center() {
        let center = circle(10.0, 2.0).center();
        assert!((center.x - 30.0).abs() < f64::EPSILON);
        assert!((center.y - 40.0).abs() < f64::EPSILON);
    }
}
