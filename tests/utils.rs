#![allow(dead_code)]

use kalmf::algebra::MatrixOps;
use kalmf::KalmanFilter;
use nalgebra::DMatrix;

pub const TOLERANCE: f64 = 1e-3;

pub fn equal_floats(floats1: &[f64], floats2: &[f64]) -> bool {
    floats1.len() == floats2.len()
        && floats1
            .iter()
            .zip(floats2)
            .all(|(a, b)| (a - b).abs() <= TOLERANCE)
}

/// Row-major values of a matrix.
pub fn values(matrix: &DMatrix<f64>) -> Vec<f64> {
    let (rows, cols) = matrix.dims();
    (0..rows)
        .flat_map(|i| (0..cols).map(move |j| matrix.at(i, j)))
        .collect()
}

pub fn matrix(rows: usize, cols: usize, data: &[f64]) -> DMatrix<f64> {
    DMatrix::from_row_slice(rows, cols, data)
}

/// The two state constant velocity setup: x0 = 0, P0 = 0, Q = R = diag(0.2, 0.2).
pub fn constant_velocity_filter() -> KalmanFilter {
    KalmanFilter::new(&[0., 0.], DMatrix::zeros(2, 2), &[0.2, 0.2], &[0.2, 0.2]).unwrap()
}

pub fn transition() -> DMatrix<f64> {
    matrix(2, 2, &[1., 1., 0., 1.])
}

pub fn control_transition() -> DMatrix<f64> {
    matrix(2, 1, &[0.5, 1.])
}

pub fn control(value: f64) -> DMatrix<f64> {
    matrix(1, 1, &[value])
}

pub struct FloatRangeInclusive {
    current: f64,
    end: f64,
    step: f64,
}

impl FloatRangeInclusive {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self {
            current: start,
            end,
            step,
        }
    }
}

impl Iterator for FloatRangeInclusive {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current > self.end {
            None
        } else {
            let value = Some(self.current);
            self.current += self.step;
            value
        }
    }
}
