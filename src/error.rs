use thiserror::Error;

/// Shape of a matrix as `(rows, cols)`.
pub type Dims = (usize, usize);

/// # Explanation
/// Errors returned by the filter. Both are recoverable: the stored estimate is left as it
/// was before the failing call and the filter stays usable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KalmanError {
    #[error("matrix dimension {found:?} does not match the expected {expected:?}")]
    DimensionMismatch { expected: Dims, found: Dims },

    #[error("innovation covariance is singular")]
    SingularMatrix,
}

impl KalmanError {
    pub(crate) fn mismatch(expected: Dims, found: Dims) -> Self {
        KalmanError::DimensionMismatch { expected, found }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid filter configuration: {0}")]
    Filter(#[from] KalmanError),

    #[error("logging initialization error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
