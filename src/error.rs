use thiserror::Error;

/// Errors raised by the stateful parts of ELS.
/// The pure transforms never fail; only sessions and config loading do.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElsError {
    #[error("non-finite input for {field}: {value}")]
    NonFiniteInput { field: &'static str, value: f64 },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("{field} = {value} outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("config parse failed: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ElsError>;
