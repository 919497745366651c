use thiserror::Error;

/// Top-level error type for fractal generation and rendering.
#[derive(Debug, Error)]
pub enum FractalError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Expansion(#[from] ExpansionError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to geometric input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

/// Errors raised while expanding a fractal.
///
/// Apart from the depth variants, every variant signals a rule that broke
/// the rule contract, i.e. a programming error in the rule.
#[derive(Debug, Error)]
pub enum ExpansionError {
    #[error("depth must be non-negative, got {0}")]
    NegativeDepth(i64),

    #[error("depth {0} is out of range")]
    DepthOutOfRange(i64),

    #[error("rule produced no segments")]
    EmptyRuleOutput,

    #[error("rule moved the {which} endpoint by {distance}")]
    EndpointMismatch {
        which: &'static str,
        distance: f64,
    },

    #[error("segment {index} does not connect to its successor (gap {gap})")]
    Disconnected { index: usize, gap: f64 },
}

/// Errors related to document serialization.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot render an empty path")]
    EmptyPath,

    #[error("invalid render parameters: {0}")]
    InvalidParameters(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`FractalError`].
pub type Result<T> = std::result::Result<T, FractalError>;
