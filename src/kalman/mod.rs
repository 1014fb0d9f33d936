pub mod chain;
pub mod estimator;
pub mod model;
