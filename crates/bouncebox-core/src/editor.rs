//! Property editor binding.
//!
//! An [`EditorSession`] binds one selected shape to a property panel. Each
//! frame the session copies the selected shape's editable fields into
//! [`EditBuffers`], lets the UI mutate them, and writes them back before the
//! scene is stepped. `visible` and `scale` are handed to the UI as direct
//! references into the shape.

use crate::shapes::{Shape, ShapeColor};
use kurbo::Vec2;

/// Maximum number of characters kept in a shape name.
pub const NAME_CHAR_LIMIT: usize = 255;

/// Scratch copies of the fields the panel edits through widgets that need
/// their own storage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditBuffers {
    pub velocity: [f64; 2],
    /// Channels in `0.0..=1.0`.
    pub color: [f32; 3],
    pub name: String,
}

/// Everything the UI sees for one frame.
pub struct PropertyEdit<'a> {
    /// Index of the shape being edited.
    pub selected: usize,
    /// Index the UI wants to edit next. Applied on the following frame.
    pub requested: usize,
    /// Names of every shape, in scene order.
    pub names: Vec<String>,
    pub visible: &'a mut bool,
    pub scale: &'a mut f64,
    pub buffers: &'a mut EditBuffers,
}

/// Selection state and edit buffers, threaded through the frame loop.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    selected: usize,
    pending: Option<usize>,
    buffers: EditBuffers,
}

impl EditorSession {
    /// A session with the first shape selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn buffers(&self) -> &EditBuffers {
        &self.buffers
    }

    /// Ask for another shape to be edited. Takes effect on the next [`read`](Self::read).
    pub fn request_selection(&mut self, index: usize) {
        self.pending = Some(index);
    }

    /// Apply any pending selection, then fill the buffers from the selected shape.
    ///
    /// Returns `false` when there is nothing to edit.
    pub fn read(&mut self, shapes: &[Shape]) -> bool {
        if let Some(index) = self.pending.take() {
            if index < shapes.len() {
                if index != self.selected {
                    log::debug!("Editor selection {} -> {}", self.selected, index);
                }
                self.selected = index;
            } else {
                log::warn!(
                    "Ignoring selection of shape {} (only {} shape(s))",
                    index,
                    shapes.len()
                );
            }
        }

        let Some(shape) = shapes.get(self.selected) else {
            return false;
        };
        let props = shape.props();
        self.buffers.velocity = [props.velocity.x, props.velocity.y];
        self.buffers.color = props.color.to_unit_rgb();
        self.buffers.name.clone_from(&props.name);
        true
    }

    /// Copy velocity, color and name from the buffers into `shape`.
    pub fn write_back(&self, shape: &mut Shape) {
        let props = shape.props_mut();
        props.velocity = Vec2::new(self.buffers.velocity[0], self.buffers.velocity[1]);
        props.color = ShapeColor::from_unit_rgb(self.buffers.color);
        props.name = self.buffers.name.chars().take(NAME_CHAR_LIMIT).collect();
    }

    /// Run one frame of editing: read, let `f` edit, write back.
    ///
    /// Returns `None` without calling `f` when `shapes` is empty.
    pub fn edit<R>(
        &mut self,
        shapes: &mut [Shape],
        f: impl FnOnce(&mut PropertyEdit<'_>) -> R,
    ) -> Option<R> {
        if !self.read(shapes) {
            return None;
        }

        let selected = self.selected;
        let names = shapes.iter().map(|s| s.name().to_owned()).collect();
        let props = shapes[selected].props_mut();
        let mut edit = PropertyEdit {
            selected,
            requested: selected,
            names,
            visible: &mut props.visible,
            scale: &mut props.scale,
            buffers: &mut self.buffers,
        };
        let result = f(&mut edit);
        let requested = edit.requested;

        self.write_back(&mut shapes[selected]);
        if requested != selected {
            self.request_selection(requested);
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle, ShapeProps};
    use kurbo::{Point, Size};

    fn scene() -> Vec<Shape> {
        vec![
            Circle::new(
                ShapeProps::new("CGreen", Point::new(100.0, 100.0), Vec2::new(-0.03, 0.02), ShapeColor::new(0, 255, 0)),
                50.0,
            )
            .into(),
            Rectangle::new(
                ShapeProps::new("RRed", Point::new(200.0, 200.0), Vec2::new(0.1, 0.15), ShapeColor::new(255, 0, 0)),
                Size::new(50.0, 25.0),
            )
            .into(),
        ]
    }

    #[test]
    fn test_new_session_selects_first_shape() {
        let session = EditorSession::new();
        assert_eq!(session.selected(), 0);
    }

    #[test]
    fn test_read_fills_buffers() {
        let shapes = scene();
        let mut session = EditorSession::new();
        assert!(session.read(&shapes));
        let buffers = session.buffers();
        assert!((buffers.velocity[0] - -0.03).abs() < f64::EPSILON);
        assert!((buffers.velocity[1] - 0.02).abs() < f64::EPSILON);
        assert_eq!(buffers.color, [0.0, 1.0, 0.0]);
        assert_eq!(buffers.name, "CGreen");
    }

    #[test]
    fn test_write_back_without_edits_is_identity() {
        let mut shapes = scene();
        let before = shapes.clone();
        let mut session = EditorSession::new();
        for _ in 0..3 {
            session.edit(&mut shapes, |_| ());
        }
        assert_eq!(shapes, before);
    }

    #[test]
    fn test_edits_are_written_back() {
        let mut shapes = scene();
        let mut session = EditorSession::new();
        session.edit(&mut shapes, |edit| {
            edit.buffers.velocity = [1.5, -2.0];
            edit.buffers.color = [0.5, 0.0, 1.0];
            edit.buffers.name = "Renamed".to_string();
        });

        let props = shapes[0].props();
        assert!((props.velocity.x - 1.5).abs() < f64::EPSILON);
        assert!((props.velocity.y - -2.0).abs() < f64::EPSILON);
        assert_eq!(props.color, ShapeColor::new(128, 0, 255));
        assert_eq!(props.name, "Renamed");
        assert_eq!(shapes[1].name(), "RRed");
    }

    #[test]
    fn test_visible_and_scale_bind_directly() {
        let mut shapes = scene();
        let mut session = EditorSession::new();
        session.edit(&mut shapes, |edit| {
            *edit.visible = false;
            *edit.scale = 2.5;
        });
        assert!(!shapes[0].is_visible());
        assert!((shapes[0].props().scale - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_selection_takes_effect_next_frame() {
        let mut shapes = scene();
        let mut session = EditorSession::new();

        let seen = session.edit(&mut shapes, |edit| {
            assert_eq!(edit.names, ["CGreen", "RRed"]);
            edit.requested = 1;
            edit.buffers.name.clone()
        });
        assert_eq!(seen.as_deref(), Some("CGreen"));
        assert_eq!(session.selected(), 0);

        let seen = session.edit(&mut shapes, |edit| {
            assert_eq!(edit.selected, 1);
            edit.buffers.name.clone()
        });
        assert_eq!(seen.as_deref(), Some("RRed"));
        assert_eq!(session.selected(), 1);
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let shapes = scene();
        let mut session = EditorSession::new();
        session.request_selection(7);
        assert!(session.read(&shapes));
        assert_eq!(session.selected(), 0);
        assert_eq!(session.buffers().name, "CGreen");
    }

    #[test]
    fn test_empty_scene_does_nothing() {
        let mut shapes: Vec<Shape> = Vec::new();
        let mut session = EditorSession::new();
        let called = session.edit(&mut shapes, |_| true);
        assert_eq!(called, None);
    }

    #[test]
    fn test_name_is_truncated_on_write_back() {
        let mut shapes = scene();
        let mut session = EditorSession::new();
        session.edit(&mut shapes, |edit| {
            edit.buffers.name = "x".repeat(NAME_CHAR_LIMIT + 10);
        });
        assert_eq!(shapes[0].name().chars().count(), NAME_CHAR_LIMIT);
    }
}
