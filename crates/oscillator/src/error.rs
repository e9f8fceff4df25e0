use smd_solvers::transient::euler;

/// Errors raised while setting up or running an oscillator integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A model parameter is outside its valid range.
    ///
    /// Raised before any sample is computed.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The underlying Euler solver failed.
    #[error(transparent)]
    Solver(#[from] euler::Error),
}
