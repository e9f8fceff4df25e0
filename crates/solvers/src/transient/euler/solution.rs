use smd_core::Snapshot;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler integration.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// How the solver terminated.
    pub status: Status,

    /// Snapshots in step order, starting with the initial one.
    pub history: Vec<Snapshot<I, O>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<I, O> Solution<I, O> {
    /// Consumes the solution, returning the model inputs in step order.
    pub fn into_inputs(self) -> Vec<I> {
        self.history.into_iter().map(Snapshot::into_input).collect()
    }
}
