/// A state that can be advanced one explicit step using its derivative.
///
/// `step` must return `self + derivative * delta`, evaluated componentwise from
/// the state as it was before the step. Every component is advanced with the
/// derivative taken at the old state, so no component sees another
/// component's updated value within the same step.
///
/// `Delta` is the independent variable's increment, usually a time step in
/// seconds as a plain `f64`.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for [`StepIntegrable::Derivative`].
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Phase {
        x: f64,
        v: f64,
    }

    struct PhaseRate {
        dx: f64,
        dv: f64,
    }

    impl StepIntegrable<f64> for Phase {
        type Derivative = PhaseRate;

        fn step(&self, derivative: PhaseRate, delta: f64) -> Self {
            Phase {
                x: self.x + delta * derivative.dx,
                v: self.v + delta * derivative.dv,
            }
        }
    }

    #[test]
    fn step_uses_supplied_derivative_only() {
        let phase = Phase { x: 1.0, v: 0.0 };
        let rate: DerivativeOf<Phase, f64> = PhaseRate { dx: 0.0, dv: -4.0 };

        let next = phase.step(rate, 0.5);

        // x does not pick up the new velocity within the same step.
        assert_eq!(next, Phase { x: 1.0, v: -2.0 });
    }
}
