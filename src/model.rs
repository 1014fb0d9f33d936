use chrono::Duration;

/// # Explanation
/// The LinearTransitionModel provides the matrices of the predict step: the transition matrix
/// (F) and the control transition matrix (B). Both usually depend on the time that has passed,
/// so the delta time is passed as an argument.
pub trait LinearTransitionModel<M> {
    /// # Returns
    /// Returns the n×n transition matrix for a step of length dt.
    fn transition_matrix(&self, dt: Duration) -> M;

    /// # Returns
    /// Returns the n×m control transition matrix for a step of length dt.
    fn control_matrix(&self, dt: Duration) -> M;
}

/// # Explanation
/// The measurement matrix transforms the state into the measurement space. The filter expects
/// it to be square (n×n); state entries that are not observed get a zero row.
pub trait LinearMeasurementModel<M> {
    fn measurement_matrix(&self) -> M;
}

pub(crate) fn seconds(dt: Duration) -> f64 {
    dt.num_milliseconds() as f64 / 1000.0
}
