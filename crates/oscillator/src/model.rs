//! The damped oscillator as a [`Model`] and the [`OdeProblem`] that steps it.

use std::convert::Infallible;

use smd_core::{DerivativeOf, Model, OdeProblem};

use crate::{Derivative, ModelParameters, Sample, State};

/// Right-hand side of `x'' + 2ζω₀x' + ω₀²x = 0` as a first-order system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampedOscillator {
    omega0: f64,
    zeta: f64,
}

impl DampedOscillator {
    /// Creates the oscillator described by `params`.
    #[must_use]
    pub fn new(params: &ModelParameters) -> Self {
        Self {
            omega0: params.omega0(),
            zeta: params.zeta(),
        }
    }

    /// Evaluates `(v, -2ζω₀v - ω₀²x)` at `state`.
    #[must_use]
    pub fn derivative(&self, state: &State) -> Derivative {
        let State {
            displacement: x,
            velocity: v,
        } = *state;
        let Self { omega0, zeta } = *self;

        Derivative {
            displacement: v,
            velocity: -2.0 * zeta * omega0 * v - omega0 * omega0 * x,
        }
    }

    /// Mechanical energy per unit mass, `v²/2 + ω₀²x²/2`.
    #[must_use]
    pub fn energy(&self, state: &State) -> f64 {
        0.5 * state.velocity * state.velocity
            + 0.5 * self.omega0 * self.omega0 * state.displacement * state.displacement
    }
}

impl Model for DampedOscillator {
    type Input = Sample;
    type Output = Derivative;
    type Error = Infallible;

    fn call(&self, input: &Sample) -> Result<Derivative, Infallible> {
        Ok(self.derivative(&input.state))
    }
}

/// Steps a [`DampedOscillator`] in time.
///
/// The state is the sample's `(x, v)` pair and each step advances the sample
/// time by exactly `dt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OscillatorProblem;

impl OdeProblem for OscillatorProblem {
    type Input = Sample;
    type Output = Derivative;
    type Delta = f64;
    type State = State;
    type Error = Infallible;

    fn state(&self, input: &Sample) -> Result<State, Infallible> {
        Ok(input.state)
    }

    fn derivative(
        &self,
        _input: &Sample,
        output: &Derivative,
    ) -> Result<DerivativeOf<State, f64>, Infallible> {
        Ok(*output)
    }

    fn build_input(&self, base: &Sample, state: &State, dt: &f64) -> Result<Sample, Infallible> {
        Ok(Sample {
            time: base.time + dt,
            state: *state,
        })
    }
}
