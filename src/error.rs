use thiserror::Error;

/// Top-level error type for the hidden-line pipeline.
#[derive(Debug, Error)]
pub enum HiddenLineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while validating shape or figure configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("world transform is not invertible")]
    NonInvertibleTransform,

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Convenience type alias for results using [`HiddenLineError`].
pub type Result<T> = std::result::Result<T, HiddenLineError>;
