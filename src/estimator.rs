use crate::error::KalmanError;
use crate::state::GaussianState;

/// # Explanation
/// Time propagation of the stored estimate.
///
/// `transition` (F) must be n×n, `control_transition` (B) n×m and `control` (u) m×1.
pub trait Predictor<M> {
    fn predict(
        &self,
        transition: &M,
        control_transition: &M,
        control: &M,
    ) -> Result<GaussianState<M>, KalmanError>;
}

/// # Explanation
/// Measurement correction of the stored estimate.
///
/// `measurements` (z) must have length n and `measurement_matrix` (H) must be n×n.
pub trait Filter<M> {
    fn update(
        &self,
        measurements: &[f64],
        measurement_matrix: &M,
    ) -> Result<GaussianState<M>, KalmanError>;
}

/// A full predict/update cycle. Each of the two steps is atomic on its own; another
/// caller may run between them.
pub trait Estimator<M> {
    fn estimate(
        &self,
        transition: &M,
        control_transition: &M,
        control: &M,
        measurements: &[f64],
        measurement_matrix: &M,
    ) -> Result<GaussianState<M>, KalmanError>;
}

impl<M, T> Estimator<M> for T
where
    T: Predictor<M> + Filter<M> + ?Sized,
{
    fn estimate(
        &self,
        transition: &M,
        control_transition: &M,
        control: &M,
        measurements: &[f64],
        measurement_matrix: &M,
    ) -> Result<GaussianState<M>, KalmanError> {
        self.predict(transition, control_transition, control)?;
        self.update(measurements, measurement_matrix)
    }
}
