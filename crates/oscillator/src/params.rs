use std::f64::consts::TAU;

use crate::Error;

/// Validated parameters for one integration run.
///
/// Construct with [`ModelParameters::new`], which rejects values the
/// integrator cannot use. Fields are read-only once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    omega0: f64,
    zeta: f64,
    dt: f64,
    duration: f64,
}

impl ModelParameters {
    /// Natural frequency used when none is configured (2π rad/s, a 1 s period).
    pub const DEFAULT_OMEGA0: f64 = TAU;
    pub const DEFAULT_ZETA: f64 = 0.25;
    pub const DEFAULT_DT: f64 = 0.01;
    pub const DEFAULT_DURATION: f64 = 10.0;

    /// Creates parameters from natural frequency `omega0` (rad/s), damping
    /// ratio `zeta`, time step `dt` (s) and total `duration` (s).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `dt` or `duration` is not
    /// positive, if `omega0` or `zeta` is negative, or if any value is NaN or
    /// infinite.
    pub fn new(omega0: f64, zeta: f64, dt: f64, duration: f64) -> Result<Self, Error> {
        require_positive("dt", dt)?;
        require_positive("duration", duration)?;
        require_non_negative("omega0", omega0)?;
        require_non_negative("zeta", zeta)?;

        Ok(Self {
            omega0,
            zeta,
            dt,
            duration,
        })
    }

    /// Natural frequency ω₀ in rad/s.
    #[must_use]
    pub fn omega0(&self) -> f64 {
        self.omega0
    }

    /// Damping ratio ζ.
    #[must_use]
    pub fn zeta(&self) -> f64 {
        self.zeta
    }

    /// Time step Δt in seconds.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Total simulated duration T in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of samples in a run, `floor(T / Δt)`.
    ///
    /// This is zero when `duration < dt`.
    #[must_use]
    pub fn step_count(&self) -> usize {
        // Both values are finite and positive, so the cast only saturates for
        // absurdly small steps.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = (self.duration / self.dt).floor() as usize;
        n
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            omega0: Self::DEFAULT_OMEGA0,
            zeta: Self::DEFAULT_ZETA,
            dt: Self::DEFAULT_DT,
            duration: Self::DEFAULT_DURATION,
        }
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be finite and greater than zero",
        })
    }
}

fn require_non_negative(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be finite and non-negative",
        })
    }
}
