use chrono::Duration;
use nalgebra::DMatrix;

use crate::model::{seconds, LinearMeasurementModel, LinearTransitionModel};

/// # Explanation
/// The constant velocity transition model assumes that the object moves with a constant
/// velocity that is only changed by the control input (an acceleration per axis).
/// The state vector consists of all positions followed by all velocities, so for two axes
/// it is (x, y, vx, vy) and the control vector is (ax, ay).
#[derive(Copy, Clone, Debug)]
pub struct ConstantVelocity {
    axes: usize,
}

impl ConstantVelocity {
    pub fn new(axes: usize) -> Self {
        Self { axes }
    }

    pub fn state_dim(&self) -> usize {
        2 * self.axes
    }
}

impl LinearTransitionModel<DMatrix<f64>> for ConstantVelocity {
    /// # Returns
    /// | I  dt*I |<br>
    /// | 0     I |<br>
    fn transition_matrix(&self, dt: Duration) -> DMatrix<f64> {
        let dt = seconds(dt);
        let k = self.axes;
        DMatrix::from_fn(2 * k, 2 * k, |i, j| {
            if i == j {
                1.
            } else if j == i + k {
                dt
            } else {
                0.
            }
        })
    }

    /// # Returns
    /// | dt^2/2*I |<br>
    /// |     dt*I |<br>
    fn control_matrix(&self, dt: Duration) -> DMatrix<f64> {
        let dt = seconds(dt);
        let k = self.axes;
        DMatrix::from_fn(2 * k, k, |i, j| {
            if i == j {
                dt.powi(2) / 2.
            } else if i == j + k {
                dt
            } else {
                0.
            }
        })
    }
}

/// # Explanation
/// The position measurement model assumes that only the positions of a constant velocity
/// state are measured. The velocity rows of the measurement matrix are zero, so the velocity
/// entries of the measurement vector are ignored.
#[derive(Copy, Clone, Debug)]
pub struct PositionMeasurementModel {
    axes: usize,
}

impl PositionMeasurementModel {
    pub fn new(axes: usize) -> Self {
        Self { axes }
    }
}

impl LinearMeasurementModel<DMatrix<f64>> for PositionMeasurementModel {
    fn measurement_matrix(&self) -> DMatrix<f64> {
        let k = self.axes;
        DMatrix::from_fn(2 * k, 2 * k, |i, j| if i == j && i < k { 1. } else { 0. })
    }
}

/// # Explanation
/// The MeasureAllModel assumes that all state variables are also measured (so the
/// measurement matrix is the identity matrix).
#[derive(Copy, Clone, Debug)]
pub struct MeasureAllModel {
    dim: usize,
}

impl MeasureAllModel {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl LinearMeasurementModel<DMatrix<f64>> for MeasureAllModel {
    fn measurement_matrix(&self) -> DMatrix<f64> {
        DMatrix::identity(self.dim, self.dim)
    }
}
