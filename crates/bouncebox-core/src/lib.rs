//! BounceBox Core Library
//!
//! Platform-agnostic shape model, config parsing, bounce physics and
//! property editing for the BounceBox scene.

pub mod config;
pub mod editor;
pub mod motion;
pub mod shapes;

pub use config::{
    ConfigError, DEFAULT_CONFIG_PATH, FontSettings, GameConfig, NumericPolicy, WindowSettings, parse_str,
};
pub use editor::{EditBuffers, EditorSession, NAME_CHAR_LIMIT, PropertyEdit};
pub use motion::{Bounds, Reflection, step, step_all};
pub use shapes::{Circle, Rectangle, Shape, ShapeColor, ShapeKind, ShapeProps};
