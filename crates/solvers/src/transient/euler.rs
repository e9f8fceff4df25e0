//! Fixed-step forward Euler for ODE problems.
//!
//! Each step advances the state with the derivative evaluated at the start of
//! the step:
//!
//! ```text
//! state_{n+1} = state_n + derivative(state_n) * dt
//! ```
//!
//! The method is explicit and first-order accurate. It is only conditionally
//! stable and lets amplitude and phase drift over long horizons; the solver
//! performs no correction of either.
//!
//! # Example
//!
//! ```ignore
//! use smd_solvers::transient::euler;
//!
//! let solution = euler::solve_unobserved(&model, &problem, initial_input, dt, steps)?;
//!
//! for snapshot in &solution.history {
//!     println!("{:?} -> {:?}", snapshot.input, snapshot.output);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use smd_core::{Model, Observer, OdeProblem, Snapshot, StepIntegrable};
use tracing::{debug, trace};

/// Integrates an ODE problem using forward Euler.
///
/// # Algorithm
///
/// 1. Call the model with the initial input and emit step 0.
/// 2. For each of the `steps` integration steps:
///    - Extract the state and its derivative from the current snapshot.
///    - Step the state forward: `state + derivative * dt`.
///    - Build the next input from the stepped state.
///    - Call the model at the next input.
///    - Emit an [`Event`] to the observer.
/// 3. Return the solution with the full history (`steps + 1` snapshots).
///
/// The observer sees each event before the next step is computed. Returning
/// [`Action::StopEarly`] ends the run with the history produced so far.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    debug!(steps, "starting forward Euler run");

    let initial_output = model.call(&initial).map_err(Error::model)?;
    let mut current = Snapshot::new(initial, initial_output);

    let mut history = Vec::with_capacity(steps + 1);
    history.push(current.clone());

    if emit(&mut observer, 0, &current) {
        return Ok(stopped(history, 0));
    }

    for step in 1..=steps {
        let next = advance(model, problem, &current, &dt)?;
        trace!(step, "accepted Euler step");

        history.push(next.clone());

        if emit(&mut observer, step, &next) {
            return Ok(stopped(history, step));
        }

        current = next;
    }

    debug!(steps, "forward Euler run complete");

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Integrates an ODE problem using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    solve(model, problem, initial, dt, steps, ())
}

/// Takes one explicit step from `current`.
///
/// The state and derivative both come from `current`, so the stepped state
/// depends on the previous step only.
fn advance<M, P>(
    model: &M,
    problem: &P,
    current: &Snapshot<M::Input, M::Output>,
    dt: &P::Delta,
) -> Result<Snapshot<M::Input, M::Output>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    let state = problem.state(&current.input).map_err(Error::problem)?;
    let derivative = problem
        .derivative(&current.input, &current.output)
        .map_err(Error::problem)?;

    let next_state = state.step(derivative, dt.clone());

    let next_input = problem
        .build_input(&current.input, &next_state, dt)
        .map_err(Error::problem)?;
    let next_output = model.call(&next_input).map_err(Error::model)?;

    Ok(Snapshot::new(next_input, next_output))
}

/// Sends an event to the observer, returning `true` if it asked to stop.
fn emit<I, O, Obs>(observer: &mut Obs, step: usize, snapshot: &Snapshot<I, O>) -> bool
where
    I: Clone,
    O: Clone,
    Obs: Observer<Event<I, O>, Action>,
{
    let event = Event {
        step,
        snapshot: snapshot.clone(),
    };

    match observer.observe(&event) {
        Some(Action::StopEarly) => {
            debug!(step, "observer stopped the run");
            true
        }
        None => false,
    }
}

fn stopped<I, O>(history: Vec<Snapshot<I, O>>, steps: usize) -> Solution<I, O> {
    Solution {
        status: Status::StoppedByObserver,
        history,
        steps,
    }
}
