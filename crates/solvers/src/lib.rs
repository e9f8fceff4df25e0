//! Fixed-step solvers for models built on `smd-core`.
//!
//! # Modules
//!
//! - [`transient`] — explicit time-stepping of ODE problems

pub mod transient;
