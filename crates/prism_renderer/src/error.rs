//! Error types for scene validation and rendering.
//!
//! Nothing on the per-ray path returns these; misses, absorption and the
//! depth cutoff are ordinary values. Errors surface once, before tracing
//! starts or when the finished image is written.

use thiserror::Error;

/// A scene that cannot be rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("scene has no objects")]
    NoObjects,

    #[error("scene has no camera")]
    MissingCamera,
}

/// Errors that can occur while rendering or saving an image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid scene: {0}")]
    InvalidScene(#[from] SceneError),

    #[error("invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("invalid gamma {0}, must be positive")]
    InvalidGamma(f64),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;
