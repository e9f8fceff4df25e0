use std::f64::consts::TAU;

use approx::assert_relative_eq;
use smd_oscillator::{DampedOscillator, Error, ModelParameters, Sample, State, integrate, steps};

fn params(zeta: f64) -> ModelParameters {
    ModelParameters::new(TAU, zeta, 0.01, 10.0).expect("valid parameters")
}

fn sign_changes(trajectory: &[Sample]) -> usize {
    trajectory
        .windows(2)
        .filter(|pair| pair[0].displacement().signum() != pair[1].displacement().signum())
        .count()
}

#[test]
fn length_is_floor_of_duration_over_dt() {
    for (dt, duration, expected) in [(0.01, 10.0, 1000), (0.3, 1.0, 3), (0.25, 0.25, 1), (0.5, 1.2, 2)] {
        let params = ModelParameters::new(TAU, 0.25, dt, duration).unwrap();
        let trajectory = integrate(&params).unwrap();

        assert_eq!(trajectory.len(), expected, "dt = {dt}, duration = {duration}");
        assert_eq!(trajectory.len(), params.step_count());
    }
}

#[test]
fn first_sample_is_fixed_initial_condition() {
    for zeta in [0.0, 0.25, 1.0, 3.0] {
        let trajectory = integrate(&params(zeta)).unwrap();
        assert_eq!(
            trajectory.samples()[0],
            Sample {
                time: 0.0,
                state: State {
                    displacement: 2.0,
                    velocity: 0.0,
                },
            }
        );
    }
}

#[test]
fn runs_are_bit_identical() {
    let p = params(0.25);
    assert_eq!(integrate(&p).unwrap(), integrate(&p).unwrap());
}

#[test]
fn consecutive_samples_satisfy_the_euler_recurrence() {
    let p = params(0.25);
    let (w, z, dt) = (p.omega0(), p.zeta(), p.dt());
    let trajectory = integrate(&p).unwrap();

    for pair in trajectory.samples().windows(2) {
        let (t, x, v) = (pair[0].time, pair[0].displacement(), pair[0].velocity());
        let next = pair[1];

        assert_relative_eq!(next.time, t + dt, max_relative = 1e-12);
        assert_relative_eq!(next.displacement(), x + dt * v, epsilon = 1e-12, max_relative = 1e-12);
        assert_relative_eq!(
            next.velocity(),
            v + dt * (-2.0 * z * w * v - w * w * x),
            epsilon = 1e-12,
            max_relative = 1e-12
        );
    }
}

#[test]
fn samples_are_evenly_spaced_in_time() {
    let trajectory = integrate(&params(0.25)).unwrap();

    for (i, sample) in trajectory.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let expected = i as f64 * 0.01;
        assert_relative_eq!(sample.time, expected, epsilon = 1e-9);
    }
}

#[test]
fn undamped_run_oscillates_and_gains_energy() {
    let p = params(0.0);
    let model = DampedOscillator::new(&p);
    let trajectory = integrate(&p).unwrap();

    assert_eq!(trajectory.len(), 1000);
    assert_eq!(trajectory.samples()[0], Sample::INITIAL);
    assert!(sign_changes(trajectory.samples()) >= 18);

    // Forward Euler scales the energy by (1 + ω₀²Δt²) every step.
    let growth = 1.0 + (p.omega0() * p.dt()).powi(2);
    for pair in trajectory.samples().windows(2) {
        let before = model.energy(&pair[0].state);
        let after = model.energy(&pair[1].state);
        assert!(after > before);
        assert_relative_eq!(after, before * growth, max_relative = 1e-9);
    }

    let late_peak = trajectory.samples()[900..]
        .iter()
        .map(|s| s.displacement().abs())
        .fold(0.0, f64::max);
    assert!(late_peak > 2.0, "amplitude should not decay, got {late_peak}");
}

#[test]
fn critically_damped_run_decays_without_crossing_zero() {
    let trajectory = integrate(&params(1.0)).unwrap();
    let samples = trajectory.samples();

    assert_eq!(samples.len(), 1000);
    assert_eq!(sign_changes(samples), 0);
    assert!(samples.iter().all(|s| s.displacement() > 0.0));
    for pair in samples.windows(2) {
        assert!(pair[1].displacement() <= pair[0].displacement());
    }
    assert!(samples[999].displacement() < 1e-20);
}

#[test]
fn underdamped_reference_run_decays() {
    let trajectory = integrate(&ModelParameters::default()).unwrap();
    let samples = trajectory.samples();

    assert!(sign_changes(samples) > 0);
    let late_peak = samples[900..]
        .iter()
        .map(|s| s.displacement().abs())
        .fold(0.0, f64::max);
    assert!(late_peak < 0.01);
}

#[test]
fn invalid_parameters_are_rejected_before_integration() {
    for (omega0, dt, duration) in [(TAU, 0.0, 10.0), (TAU, 0.01, -1.0), (-1.0, 0.01, 10.0)] {
        let result = ModelParameters::new(omega0, 0.25, dt, duration);
        assert!(
            matches!(result, Err(Error::InvalidParameter { .. })),
            "omega0 = {omega0}, dt = {dt}, duration = {duration}"
        );
    }
}

#[test]
fn duration_shorter_than_dt_gives_empty_trajectory() {
    let p = ModelParameters::new(TAU, 0.25, 0.01, 0.005).unwrap();
    let trajectory = integrate(&p).unwrap();

    assert!(trajectory.is_empty());
    assert!(trajectory.displacement_series().is_empty());
}

#[test]
fn lazy_steps_match_materialized_trajectory() {
    for zeta in [0.0, 0.25, 1.0] {
        let p = params(zeta);
        let streamed: Vec<Sample> = steps(&p).unwrap().collect();
        assert_eq!(streamed.as_slice(), integrate(&p).unwrap().samples());
    }
}

#[test]
fn displacement_series_pairs_time_with_displacement() {
    let p = ModelParameters::new(TAU, 0.25, 0.5, 1.5).unwrap();
    let trajectory = integrate(&p).unwrap();
    let series = trajectory.displacement_series();

    assert_eq!(series.len(), 3);
    for (point, sample) in series.iter().zip(&trajectory) {
        assert_eq!(*point, [sample.time, sample.displacement()]);
    }
}
