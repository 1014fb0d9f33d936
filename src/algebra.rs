use std::fmt::Debug;

use nalgebra::{DMatrix, DVector};

use crate::error::KalmanError;

/// # Explanation
/// The matrix operations the filter needs from a linear algebra backend. All values are
/// treated as immutable: every operation returns a new matrix.
///
/// Shape errors are reported as `KalmanError::DimensionMismatch` instead of panicking, so
/// the filter can surface them to its caller before touching the stored estimate.
pub trait MatrixOps: Clone + Debug + Send + Sync + Sized {
    /// n×n matrix with `values` on the diagonal and zero everywhere else.
    fn from_diagonal(values: &[f64]) -> Self;

    /// n×1 column matrix.
    fn from_column(values: &[f64]) -> Self;

    fn from_row_slice(rows: usize, cols: usize, data: &[f64]) -> Result<Self, KalmanError>;

    fn dims(&self) -> (usize, usize);

    fn at(&self, i: usize, j: usize) -> f64;

    fn transposed(&self) -> Self;

    fn try_add(&self, other: &Self) -> Result<Self, KalmanError>;

    fn try_sub(&self, other: &Self) -> Result<Self, KalmanError>;

    fn try_mul(&self, other: &Self) -> Result<Self, KalmanError>;

    /// # Returns
    /// Returns the inverse, or `SingularMatrix` if the matrix is not invertible or so badly
    /// conditioned that it is numerically rank deficient.
    fn inverse(&self) -> Result<Self, KalmanError>;

    /// Reads the first column back into a vector.
    fn column_values(&self) -> Vec<f64> {
        let (rows, _) = self.dims();
        (0..rows).map(|i| self.at(i, 0)).collect()
    }
}

impl MatrixOps for DMatrix<f64> {
    fn from_diagonal(values: &[f64]) -> Self {
        DMatrix::from_diagonal(&DVector::from_column_slice(values))
    }

    fn from_column(values: &[f64]) -> Self {
        DMatrix::from_column_slice(values.len(), 1, values)
    }

    fn from_row_slice(rows: usize, cols: usize, data: &[f64]) -> Result<Self, KalmanError> {
        if data.len() != rows * cols {
            return Err(KalmanError::mismatch((rows, cols), (data.len(), 1)));
        }
        Ok(DMatrix::from_row_slice(rows, cols, data))
    }

    fn dims(&self) -> (usize, usize) {
        self.shape()
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        self[(i, j)]
    }

    fn transposed(&self) -> Self {
        self.transpose()
    }

    fn try_add(&self, other: &Self) -> Result<Self, KalmanError> {
        if self.shape() != other.shape() {
            return Err(KalmanError::mismatch(self.shape(), other.shape()));
        }
        Ok(self + other)
    }

    fn try_sub(&self, other: &Self) -> Result<Self, KalmanError> {
        if self.shape() != other.shape() {
            return Err(KalmanError::mismatch(self.shape(), other.shape()));
        }
        Ok(self - other)
    }

    fn try_mul(&self, other: &Self) -> Result<Self, KalmanError> {
        if self.ncols() != other.nrows() {
            return Err(KalmanError::mismatch(
                (self.ncols(), other.ncols()),
                other.shape(),
            ));
        }
        Ok(self * other)
    }

    fn inverse(&self) -> Result<Self, KalmanError> {
        if !self.is_square() {
            return Err(KalmanError::mismatch(
                (self.nrows(), self.nrows()),
                self.shape(),
            ));
        }
        if !self.iter().all(|value| value.is_finite()) {
            return Err(KalmanError::SingularMatrix);
        }

        // rank tolerance: singular values below max(σ) * n * ε count as zero
        let singular_values = self.singular_values();
        let tolerance = singular_values.max() * self.nrows() as f64 * f64::EPSILON;
        if singular_values.max() == 0. || singular_values.min() <= tolerance {
            return Err(KalmanError::SingularMatrix);
        }

        self.clone()
            .try_inverse()
            .ok_or(KalmanError::SingularMatrix)
    }
}
