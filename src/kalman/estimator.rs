use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use nalgebra::DMatrix;

use crate::algebra::MatrixOps;
use crate::error::KalmanError;
use crate::estimator::{Filter, Predictor};
use crate::kalman::chain::Chain;
use crate::state::GaussianState;

/// # Explanation
/// Linear discrete-time Kalman filter. It owns the current estimate (state and error
/// covariance) together with the fixed process noise Q and measurement noise R, both
/// diagonal.
///
/// The state dimension n is taken from the initial state and never changes. Every input
/// is checked against n before the estimate is touched, and the estimate is replaced as
/// a whole, so a failed call always leaves the previous estimate in place.
///
/// The estimate sits behind a reader/writer lock: `predict` and `update` hold the write
/// side for their whole read-compute-write sequence, `state` only reads. Share the
/// filter between threads with an `Arc`.
#[derive(Debug)]
pub struct KalmanFilter<M = DMatrix<f64>> {
    dim: usize,
    process_noise: M,
    measurement_noise: M,
    current: RwLock<GaussianState<M>>,
}

impl<M: MatrixOps> KalmanFilter<M> {
    pub fn new(
        initial_state: &[f64],
        initial_covariance: M,
        process_noise: &[f64],
        measurement_noise: &[f64],
    ) -> Result<Self, KalmanError> {
        let dim = initial_state.len();
        if dim == 0 {
            return Err(KalmanError::mismatch((1, 1), (0, 1)));
        }
        check_dims((dim, dim), initial_covariance.dims())?;
        check_dims((dim, 1), (process_noise.len(), 1))?;
        check_dims((dim, 1), (measurement_noise.len(), 1))?;

        log::debug!("Created a kalman filter with {} states.", dim);

        Ok(Self {
            dim,
            process_noise: M::from_diagonal(process_noise),
            measurement_noise: M::from_diagonal(measurement_noise),
            current: RwLock::new(GaussianState::new(
                M::from_column(initial_state),
                initial_covariance,
            )),
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// # Returns
    /// Returns a copy of the current estimate.
    pub fn state(&self) -> GaussianState<M> {
        self.read().clone()
    }

    pub fn process_noise(&self) -> &M {
        &self.process_noise
    }

    pub fn measurement_noise(&self) -> &M {
        &self.measurement_noise
    }

    /// Starts a chain of predict/update calls on this filter.
    pub fn chain(&self) -> Chain<'_, M> {
        Chain::new(self)
    }

    fn read(&self) -> RwLockReadGuard<'_, GaussianState<M>> {
        // the estimate is only ever replaced whole, so a poisoned lock still holds a
        // consistent pair
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GaussianState<M>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<M: MatrixOps> Predictor<M> for KalmanFilter<M> {
    fn predict(
        &self,
        transition: &M,
        control_transition: &M,
        control: &M,
    ) -> Result<GaussianState<M>, KalmanError> {
        let n = self.dim;
        check_dims((n, n), transition.dims())
            .and_then(|_| check_rows(n, control_transition.dims()))
            .and_then(|_| check_cols(1, control.dims()))
            .map_err(|e| {
                log::warn!("Rejected predict input: {}", e);
                e
            })?;

        let mut current = self.write();

        // computed into locals first; B·u may still reject its inner dimension
        let estimate = transition
            .try_mul(&current.estimate)?
            .try_add(&control_transition.try_mul(control)?)?;
        let error = transition
            .try_mul(&current.error)?
            .try_mul(&transition.transposed())?
            .try_add(&self.process_noise)?;

        let prediction = GaussianState::new(estimate, error);
        *current = prediction.clone();
        log::debug!("Predicted state {:?}", prediction.estimate_values());

        Ok(prediction)
    }
}

impl<M: MatrixOps> Filter<M> for KalmanFilter<M> {
    fn update(
        &self,
        measurements: &[f64],
        measurement_matrix: &M,
    ) -> Result<GaussianState<M>, KalmanError> {
        let n = self.dim;
        check_dims((n, 1), (measurements.len(), 1))
            .and_then(|_| check_dims((n, n), measurement_matrix.dims()))
            .map_err(|e| {
                log::warn!("Rejected update input: {}", e);
                e
            })?;

        let measurement = M::from_column(measurements);
        let measurement_matrix_t = measurement_matrix.transposed();

        let mut current = self.write();
        let prior = &*current;

        let innovation_error = measurement_matrix
            .try_mul(&prior.error)?
            .try_mul(&measurement_matrix_t)?
            .try_add(&self.measurement_noise)?;
        let innovation_error_inverse = innovation_error.inverse().map_err(|e| {
            log::warn!("Update skipped: {}", e);
            e
        })?;

        let kalman_gain = prior
            .error
            .try_mul(&measurement_matrix_t)?
            .try_mul(&innovation_error_inverse)?;

        let innovation = measurement.try_sub(&measurement_matrix.try_mul(&prior.estimate)?)?;
        let estimate = prior.estimate.try_add(&kalman_gain.try_mul(&innovation)?)?;
        let error = prior.error.try_sub(
            &kalman_gain
                .try_mul(measurement_matrix)?
                .try_mul(&prior.error)?,
        )?;

        let filtered = GaussianState::new(estimate, error);
        *current = filtered.clone();
        log::debug!("Filtered state {:?}", filtered.estimate_values());

        Ok(filtered)
    }
}

fn check_dims(expected: (usize, usize), found: (usize, usize)) -> Result<(), KalmanError> {
    if expected == found {
        Ok(())
    } else {
        Err(KalmanError::mismatch(expected, found))
    }
}

fn check_rows(rows: usize, found: (usize, usize)) -> Result<(), KalmanError> {
    check_dims((rows, found.1), found)
}

fn check_cols(cols: usize, found: (usize, usize)) -> Result<(), KalmanError> {
    check_dims((found.0, cols), found)
}
