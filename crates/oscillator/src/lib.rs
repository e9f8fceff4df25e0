//! Forward Euler integration of a damped spring-mass oscillator.
//!
//! The oscillator obeys
//!
//! ```text
//! x'' + 2ζω₀x' + ω₀²x = 0
//! ```
//!
//! reduced to the first-order system `x' = v`, `v' = -2ζω₀v - ω₀²x` and
//! stepped with a fixed `dt` from `x(0) = 2`, `v(0) = 0`.
//!
//! # Usage
//!
//! ```
//! use smd_oscillator::{ModelParameters, integrate};
//!
//! let params = ModelParameters::default();
//! let trajectory = integrate(&params)?;
//!
//! assert_eq!(trajectory.len(), 1000);
//! # Ok::<(), smd_oscillator::Error>(())
//! ```
//!
//! [`steps`] yields the same samples lazily, one per `next` call.
//! [`integrate_observed`] hands each step to an [`Observer`] as it is made.
//! [`exact::displacement`] gives the closed-form solution to compare against.
//!
//! [`Observer`]: smd_core::Observer

pub mod config;
pub mod exact;

mod error;
mod integrate;
mod model;
mod params;
mod state;
mod steps;
mod trajectory;

pub use error::Error;
pub use integrate::{StepEvent, integrate, integrate_observed};
pub use model::{DampedOscillator, OscillatorProblem};
pub use params::ModelParameters;
pub use state::{Derivative, Sample, State};
pub use steps::{Steps, steps};
pub use trajectory::Trajectory;
