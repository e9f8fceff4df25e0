use smd_core::Snapshot;

/// Event emitted by the Euler solver once per snapshot.
///
/// Step 0 carries the initial input. Steps `1..=N` follow each accepted
/// integration step, in order.
#[derive(Debug, Clone)]
pub struct Event<I, O> {
    /// The step number (0 for the initial snapshot).
    pub step: usize,

    /// Model input and output at this step.
    pub snapshot: Snapshot<I, O>,
}
