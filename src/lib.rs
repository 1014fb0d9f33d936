//! Linear discrete-time Kalman filter.
//!
//! [`KalmanFilter`] keeps the current estimate (state and error covariance) and refines it
//! with `predict` and `update`. The matrices come from any backend implementing
//! [`MatrixOps`]; `nalgebra::DMatrix<f64>` is supported out of the box.

pub mod algebra;
pub mod config;
pub mod error;
pub mod estimator;
pub mod kalman;
pub mod logging;
pub mod model;
pub mod state;
pub mod track;

pub use algebra::MatrixOps;
pub use error::KalmanError;
pub use estimator::{Estimator, Filter, Predictor};
pub use kalman::estimator::KalmanFilter;
pub use state::GaussianState;
