use smd_core::Observer;
use smd_solvers::transient::euler;
use tracing::debug;

use crate::{
    DampedOscillator, Derivative, Error, ModelParameters, OscillatorProblem, Sample, Trajectory,
};

/// Event handed to an observer of [`integrate_observed`] after each sample.
pub type StepEvent = euler::Event<Sample, Derivative>;

/// Integrates the oscillator over `params.duration()` with forward Euler.
///
/// The returned trajectory holds `params.step_count()` samples, starting at
/// [`Sample::INITIAL`] and spaced exactly `dt` apart. When the duration is
/// shorter than one step the trajectory is empty.
///
/// # Errors
///
/// Returns [`Error::Solver`] if the solver fails. The oscillator model itself
/// cannot fail, so valid parameters always produce a trajectory.
pub fn integrate(params: &ModelParameters) -> Result<Trajectory, Error> {
    integrate_observed(params, ())
}

/// Integrates like [`integrate`], handing each sample to `observer` as it is
/// produced.
///
/// The observer sees every sample before the next one is computed. If it
/// returns [`euler::Action::StopEarly`] the run ends and the trajectory holds
/// only the samples produced so far.
///
/// # Errors
///
/// Returns [`Error::Solver`] if the solver fails.
pub fn integrate_observed<Obs>(params: &ModelParameters, observer: Obs) -> Result<Trajectory, Error>
where
    Obs: Observer<StepEvent, euler::Action>,
{
    let samples = params.step_count();
    debug!(
        omega0 = params.omega0(),
        zeta = params.zeta(),
        dt = params.dt(),
        duration = params.duration(),
        samples,
        "integrating damped oscillator"
    );

    // The initial sample counts as one of the n samples.
    let Some(steps) = samples.checked_sub(1) else {
        return Ok(Trajectory::default());
    };

    let model = DampedOscillator::new(params);
    let solution = euler::solve(
        &model,
        &OscillatorProblem,
        Sample::INITIAL,
        params.dt(),
        steps,
        observer,
    )?;

    debug!(status = ?solution.status, steps = solution.steps, "integration finished");

    Ok(Trajectory::from_samples(solution.into_inputs()))
}
