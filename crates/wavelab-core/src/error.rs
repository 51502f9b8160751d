// File: crates/wavelab-core/src/error.rs
// Summary: Error type shared by the core crate and its renderers.

use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    /// Axis scale must be a finite, strictly positive pixel-per-unit factor.
    #[error("invalid axis scale: {scale} (must be finite and > 0)")]
    InvalidScale { scale: f64 },

    #[error("invalid modulator frequency `{entry}`")]
    InvalidModulator { entry: String },

    #[error("invalid number for {field}: `{entry}`")]
    InvalidNumber { field: &'static str, entry: String },

    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurfaceSize { width: i32, height: i32 },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure reported by a drawing backend (encoding, pixel readback, ...).
    #[error("backend error: {0}")]
    Backend(String),
}
