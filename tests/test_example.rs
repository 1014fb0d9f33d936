use chrono::{Duration, TimeZone, Utc};
use nalgebra::DMatrix;
use rand::Rng;

use kalmf::kalman::model::{ConstantVelocity, MeasureAllModel, PositionMeasurementModel};
use kalmf::model::{LinearMeasurementModel, LinearTransitionModel};
use kalmf::track::{Track, Waypoint};
use kalmf::{Estimator, KalmanFilter};

mod utils;

#[test]
fn test_example() {
    let _ = kalmf::logging::init_logger("warn");

    let model = ConstantVelocity::new(2);
    let filter = KalmanFilter::new(
        &[0., 0., 1., 2.],
        DMatrix::<f64>::identity(4, 4),
        &[0.01, 0.01, 0.01, 0.01],
        &[0.01, 0.01, 1., 1.],
    )
    .unwrap();
    let measurement_model = PositionMeasurementModel::new(2);

    let dt = Duration::milliseconds(100);
    let transition = model.transition_matrix(dt);
    let control_transition = model.control_matrix(dt);
    let measurement_matrix = measurement_model.measurement_matrix();

    let mut track = Track::new(Waypoint::new(timestamp(0.), filter.state()));
    let mut score: f64 = 0.0;
    let mut rng = rand::thread_rng();

    let times: Vec<f64> = utils::FloatRangeInclusive::new(0.1, 10.0, 0.1).collect();
    for &t in times.iter() {
        let (x, y) = p(t);
        let (ax, ay) = a(t - 0.1);
        let control = DMatrix::from_row_slice(2, 1, &[ax, ay]);
        let measurements = [
            x + rng.gen_range(-0.1..=0.1),
            y + rng.gen_range(-0.1..=0.1),
            // velocities are not measured
            0.,
            0.,
        ];

        let state = filter
            .estimate(
                &transition,
                &control_transition,
                &control,
                &measurements,
                &measurement_matrix,
            )
            .unwrap();
        let estimate = state.estimate_values();
        score = score.max((estimate[0] - x).abs()).max((estimate[1] - y).abs());
        track.add_waypoint(Waypoint::new(timestamp(t), state));
    }

    assert_eq!(track.len(), times.len() + 1);
    assert!(track.get_latest_waypoint().timestamp > track.iter().next().unwrap().timestamp);
    assert!(score <= 0.5); // quite arbitrary for now
}

#[test]
fn test_constant_velocity_model() {
    let model = ConstantVelocity::new(1);
    assert_eq!(model.state_dim(), 2);

    let dt = Duration::seconds(1);
    assert_eq!(
        utils::values(&model.transition_matrix(dt)),
        vec![1., 1., 0., 1.]
    );
    assert_eq!(utils::values(&model.control_matrix(dt)), vec![0.5, 1.]);

    let model = ConstantVelocity::new(2);
    let dt = Duration::milliseconds(500);
    assert_eq!(
        utils::values(&model.transition_matrix(dt)),
        vec![
            1., 0., 0.5, 0., //
            0., 1., 0., 0.5, //
            0., 0., 1., 0., //
            0., 0., 0., 1.,
        ]
    );
    assert_eq!(
        utils::values(&model.control_matrix(dt)),
        vec![0.125, 0., 0., 0.125, 0.5, 0., 0., 0.5]
    );
}

#[test]
fn test_measurement_models() {
    assert_eq!(
        utils::values(&PositionMeasurementModel::new(1).measurement_matrix()),
        vec![1., 0., 0., 0.]
    );
    assert_eq!(
        MeasureAllModel::new(3).measurement_matrix(),
        DMatrix::<f64>::identity(3, 3)
    );
}

#[test]
fn test_track_keeps_order() {
    let filter = utils::constant_velocity_filter();
    let mut track = Track::new(Waypoint::new(timestamp(0.), filter.state()));
    for (i, control) in [2., 3.].iter().enumerate() {
        let state = kalmf::Predictor::predict(
            &filter,
            &utils::transition(),
            &utils::control_transition(),
            &utils::control(*control),
        )
        .unwrap();
        track.add_waypoint(Waypoint::new(timestamp(i as f64 + 1.), state));
    }

    let positions: Vec<f64> = track
        .into_iter()
        .map(|waypoint| waypoint.state.estimate_values()[0])
        .collect();
    assert!(utils::equal_floats(&positions, &[0., 1., 4.5]));
}

fn timestamp(t: f64) -> chrono::DateTime<Utc> {
    Utc.timestamp_nanos((t * 1_000_000_000.0) as i64)
}

fn p(t: f64) -> (f64, f64) {
    // position: shape of 8
    (t.sin(), (2. * t).sin())
}

fn a(t: f64) -> (f64, f64) {
    (-t.sin(), -4. * (2. * t).sin())
}
