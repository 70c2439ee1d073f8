//! Per-frame motion and wall bounce.
//!
//! Each axis is handled independently: if the shape's box already sticks out
//! of the window on that axis, the velocity component is negated, and then
//! the (possibly negated) velocity is added to the position. The test uses
//! the position from *before* the move, so a shape overlaps the wall for one
//! frame before it turns around.

use crate::config::WindowSettings;
use crate::shapes::Shape;

/// Window area shapes bounce inside, with the origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<WindowSettings> for Bounds {
    fn from(window: WindowSettings) -> Self {
        Self::new(window.width as f64, window.height as f64)
    }
}

/// Which velocity components were negated by a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// `true` when the span `[start, start + extent]` leaves `[0, limit]`.
fn out_of_range(start: f64, extent: f64, limit: f64) -> bool {
    start < 0.0 || start + extent > limit
}

/// Advance one shape by one frame.
pub fn step(shape: &mut Shape, bounds: Bounds) -> Reflection {
    let extent = shape.extent();
    let props = shape.props_mut();

    let reflection = Reflection {
        x: out_of_range(props.position.x, extent.width, bounds.width),
        y: out_of_range(props.position.y, extent.height, bounds.height),
    };
    if reflection.x {
        props.velocity.x = -props.velocity.x;
    }
    if reflection.y {
        props.velocity.y = -props.velocity.y;
    }
    props.position += props.velocity;

    if reflection.any() {
        log::trace!(
            "{} bounced (x: {}, y: {}), velocity now ({}, {})",
            props.name,
            reflection.x,
            reflection.y,
            props.velocity.x,
            props.velocity.y
        );
    }
    reflection
}

/// Advance every shape by one frame, in order. Hidden shapes move too.
pub fn step_all(shapes: &mut [Shape], bounds: Bounds) {
    for shape in shapes.iter_mut() {
        step(shape, bounds);
    }
}
