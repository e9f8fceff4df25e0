//! Core traits and types shared by the spring-mass-damper crates.
//!
//! The solver, the oscillator domain and the renderer all build on these
//! abstractions:
//!
//! - [`Model`] — a deterministic callable from a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OdeProblem`] — adapts a model's input and output to a steppable state
//! - [`StepIntegrable`] — a state that can be advanced by `derivative * delta`

mod model;
mod observer;
mod problem;
mod step;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problem::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
