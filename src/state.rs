use nalgebra::DMatrix;

use crate::algebra::MatrixOps;

/// # Explanation
/// The gaussian state consists of the expected state (n×1 column) and the uncertainty
/// (n×n covariance matrix). The filter stores exactly one of these and hands out clones,
/// so a returned state is always an independent snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianState<M = DMatrix<f64>> {
    pub estimate: M,
    pub error: M,
}

impl<M: MatrixOps> GaussianState<M> {
    pub fn new(estimate: M, error: M) -> Self {
        Self { estimate, error }
    }

    pub fn estimate_values(&self) -> Vec<f64> {
        self.estimate.column_values()
    }

    pub fn dim(&self) -> usize {
        self.estimate.dims().0
    }
}
