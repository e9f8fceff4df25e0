//! Solvers that march an [`OdeProblem`] forward in time with a fixed step.
//!
//! # Solvers
//!
//! - [`euler`] — explicit, first-order forward Euler
//!
//! [`OdeProblem`]: smd_core::OdeProblem

pub mod euler;
