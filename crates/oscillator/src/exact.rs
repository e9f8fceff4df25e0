//! Closed-form displacement of the continuous oscillator.
//!
//! Used to measure how far a forward Euler run has drifted. All three damping
//! regimes start from the same initial condition as the integrator,
//! `x(0) = 2`, `v(0) = 0`.

use crate::{ModelParameters, State};

/// Exact displacement at time `t` for the oscillator described by `params`.
#[must_use]
pub fn displacement(params: &ModelParameters, t: f64) -> f64 {
    let x0 = State::INITIAL.displacement;
    let omega0 = params.omega0();
    let zeta = params.zeta();

    if omega0 == 0.0 {
        // No restoring force and no damping force: the mass stays put.
        return x0;
    }

    let decay = zeta * omega0;
    if zeta < 1.0 {
        let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
        x0 * (-decay * t).exp() * ((omega_d * t).cos() + decay / omega_d * (omega_d * t).sin())
    } else if zeta == 1.0 {
        x0 * (1.0 + omega0 * t) * (-omega0 * t).exp()
    } else {
        let spread = omega0 * (zeta * zeta - 1.0).sqrt();
        let (slow, fast) = (-decay + spread, -decay - spread);
        let a = -x0 * fast / (slow - fast);
        let b = x0 * slow / (slow - fast);
        a * (slow * t).exp() + b * (fast * t).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::TAU;

    use approx::assert_relative_eq;

    use crate::integrate;

    #[test]
    fn starts_at_initial_displacement_in_every_regime() {
        for zeta in [0.0, 0.25, 1.0, 2.0] {
            let params = ModelParameters::new(TAU, zeta, 0.01, 1.0).unwrap();
            assert_relative_eq!(displacement(&params, 0.0), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn undamped_period_matches_natural_frequency() {
        let params = ModelParameters::new(TAU, 0.0, 0.01, 1.0).unwrap();

        assert_relative_eq!(displacement(&params, 0.5), -2.0, epsilon = 1e-12);
        assert_relative_eq!(displacement(&params, 1.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn overdamped_solution_stays_positive_and_decays() {
        let params = ModelParameters::new(TAU, 2.0, 0.01, 1.0).unwrap();

        let early = displacement(&params, 0.1);
        let late = displacement(&params, 2.0);
        assert!(early > late && late > 0.0);
    }

    #[test]
    fn euler_converges_to_exact_solution_as_dt_shrinks() {
        let error_at = |dt: f64| {
            let params = ModelParameters::new(TAU, 0.25, dt, 1.0).unwrap();
            integrate(&params)
                .unwrap()
                .iter()
                .map(|s| (s.displacement() - displacement(&params, s.time)).abs())
                .fold(0.0, f64::max)
        };

        let coarse = error_at(1e-3);
        let fine = error_at(1e-4);

        assert!(fine < 0.05);
        // First-order method: ten times smaller step, roughly ten times smaller error.
        assert!(coarse / fine > 5.0);
    }
}
