use bouncebox_core::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while starting or running the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not load font {path}: {source}")]
    FontLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a usable font: {source}")]
    InvalidFont {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },
    #[error("window size {width}x{height} must be positive")]
    InvalidWindowSize { width: i32, height: i32 },
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface is not supported by the selected adapter")]
    UnsupportedSurface,
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
