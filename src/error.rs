use thiserror::Error;

/// Top-level error type for the Penrose tiling crate.
#[derive(Debug, Error)]
pub enum PenroseError {
    #[error(transparent)]
    Tiling(#[from] TilingError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while building or pruning a tiling.
#[derive(Debug, Error)]
pub enum TilingError {
    #[error("cannot subdivide triangle tagged {0:?}: only acute and obtuse triangles are supported")]
    UnsupportedTriangleType(String),

    #[error("invalid tiling parameters: {0}")]
    InvalidParameters(String),
}

/// Errors raised while rendering a tiling.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render parameters: {0}")]
    InvalidParameters(String),

    #[error("failed to format output: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`PenroseError`].
pub type Result<T> = std::result::Result<T, PenroseError>;
