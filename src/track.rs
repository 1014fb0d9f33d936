use chrono::{DateTime, Utc};
use nalgebra::DMatrix;

use crate::state::GaussianState;

pub type Waypoint<M = DMatrix<f64>> = TimedGaussianState<M>;

#[derive(Debug, Clone)]
pub struct TimedGaussianState<M = DMatrix<f64>> {
    pub timestamp: DateTime<Utc>,
    pub state: GaussianState<M>,
}

impl<M> TimedGaussianState<M> {
    pub fn new(timestamp: DateTime<Utc>, state: GaussianState<M>) -> Self {
        Self { timestamp, state }
    }
}

/// # Explanation
/// History of the estimates a filter returned, oldest first. A track is never empty.
#[derive(Debug, Clone)]
pub struct Track<M = DMatrix<f64>> {
    waypoints: Vec<Waypoint<M>>,
}

impl<M> Track<M> {
    pub fn new(initial_waypoint: Waypoint<M>) -> Self {
        Self {
            waypoints: vec![initial_waypoint],
        }
    }

    pub fn add_waypoint(&mut self, waypoint: Waypoint<M>) {
        self.waypoints.push(waypoint);
    }

    pub fn get_latest_waypoint(&self) -> &Waypoint<M> {
        &self.waypoints[self.waypoints.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint<M>> {
        self.waypoints.iter()
    }
}

impl<M> IntoIterator for Track<M> {
    type Item = Waypoint<M>;
    type IntoIter = std::vec::IntoIter<Waypoint<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.into_iter()
    }
}
