use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algebra::MatrixOps;
use crate::error::{ConfigError, KalmanError};
use crate::kalman::estimator::KalmanFilter;

/// # Explanation
/// Settings read from a TOML file:
///
/// ```toml
/// log_level = "info"
///
/// [filter]
/// initial_state = [0.0, 0.0]
/// initial_covariance = [[1.0, 0.0], [0.0, 1.0]]
/// process_noise = [0.2, 0.2]
/// measurement_noise = [0.2, 0.2]
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub log_level: String,
    pub filter: FilterConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterConfig {
    pub initial_state: Vec<f64>,
    /// Rows of the initial error covariance.
    pub initial_covariance: Vec<Vec<f64>>,
    pub process_noise: Vec<f64>,
    pub measurement_noise: Vec<f64>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

impl FilterConfig {
    pub fn build<M: MatrixOps>(&self) -> Result<KalmanFilter<M>, KalmanError> {
        let rows = self.initial_covariance.len();
        let cols = self.initial_covariance.first().map_or(0, Vec::len);
        if let Some(row) = self.initial_covariance.iter().find(|row| row.len() != cols) {
            return Err(KalmanError::DimensionMismatch {
                expected: (1, cols),
                found: (1, row.len()),
            });
        }

        let data: Vec<f64> = self.initial_covariance.concat();
        let initial_covariance = M::from_row_slice(rows, cols, &data)?;

        KalmanFilter::new(
            &self.initial_state,
            initial_covariance,
            &self.process_noise,
            &self.measurement_noise,
        )
    }
}
