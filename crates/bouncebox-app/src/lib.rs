//! BounceBox Application
//!
//! The window shell: loads the scene, then runs the frame loop that edits,
//! steps and paints the shapes.

mod app;
mod error;
mod fonts;
mod pacing;
mod scene;
mod ui;

pub use app::{App, AppConfig, window_size};
pub use error::{AppError, AppResult};
pub use pacing::FramePacer;
