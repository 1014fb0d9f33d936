use crate::algebra::MatrixOps;
use crate::error::KalmanError;
use crate::estimator::{Filter, Predictor};
use crate::kalman::estimator::KalmanFilter;
use crate::state::GaussianState;

/// # Explanation
/// Fluent wrapper over [`KalmanFilter::predict`] and [`KalmanFilter::update`].
///
/// ```
/// use kalmf::kalman::estimator::KalmanFilter;
/// use nalgebra::DMatrix;
///
/// let filter =
///     KalmanFilter::new(&[0., 0.], DMatrix::<f64>::zeros(2, 2), &[0.2, 0.2], &[0.2, 0.2])
///         .unwrap();
/// let transition = DMatrix::from_row_slice(2, 2, &[1., 1., 0., 1.]);
/// let control_transition = DMatrix::from_row_slice(2, 1, &[0.5, 1.]);
///
/// let state = filter
///     .chain()
///     .predict(&transition, &control_transition, &DMatrix::from_row_slice(1, 1, &[2.]))
///     .update(&[1., 2.], &DMatrix::identity(2, 2))
///     .finish()
///     .unwrap();
/// assert_eq!(state.dim(), 2);
/// ```
///
/// After the first failing step the remaining steps are skipped and `finish` returns
/// that error.
pub struct Chain<'a, M> {
    filter: &'a KalmanFilter<M>,
    outcome: Result<Option<GaussianState<M>>, KalmanError>,
}

impl<'a, M: MatrixOps> Chain<'a, M> {
    pub(crate) fn new(filter: &'a KalmanFilter<M>) -> Self {
        Self {
            filter,
            outcome: Ok(None),
        }
    }

    pub fn predict(self, transition: &M, control_transition: &M, control: &M) -> Self {
        let filter = self.filter;
        self.then(|| filter.predict(transition, control_transition, control))
    }

    pub fn update(self, measurements: &[f64], measurement_matrix: &M) -> Self {
        let filter = self.filter;
        self.then(|| filter.update(measurements, measurement_matrix))
    }

    /// # Returns
    /// Returns the estimate of the last step, or the current estimate if no step ran.
    pub fn finish(self) -> Result<GaussianState<M>, KalmanError> {
        match self.outcome {
            Ok(Some(state)) => Ok(state),
            Ok(None) => Ok(self.filter.state()),
            Err(e) => Err(e),
        }
    }

    fn then(self, step: impl FnOnce() -> Result<GaussianState<M>, KalmanError>) -> Self {
        let outcome = match self.outcome {
            Ok(_) => step().map(Some),
            Err(e) => Err(e),
        };
        Self {
            filter: self.filter,
            outcome,
        }
    }
}
