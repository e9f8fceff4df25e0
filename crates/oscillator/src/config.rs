//! Run configuration loaded from TOML.
//!
//! Every field is optional and falls back to the reference run:
//!
//! ```toml
//! omega0 = 6.283185307179586  # natural frequency, rad/s
//! zeta = 0.25                 # damping ratio
//! dt = 0.01                   # time step, s
//! duration = 10.0             # simulated time, s
//! ```
//!
//! Values are only range-checked when converted with
//! [`OscillatorConfig::into_parameters`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, ModelParameters};

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] Error),
}

/// Unvalidated oscillator settings as written in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OscillatorConfig {
    pub omega0: f64,
    pub zeta: f64,
    pub dt: f64,
    pub duration: f64,
}

impl OscillatorConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys, or
    /// non-numeric values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Validates the settings into [`ModelParameters`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] wrapping [`Error::InvalidParameter`]
    /// if any value is out of range.
    pub fn into_parameters(self) -> Result<ModelParameters, ConfigError> {
        Ok(ModelParameters::new(
            self.omega0,
            self.zeta,
            self.dt,
            self.duration,
        )?)
    }
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            omega0: ModelParameters::DEFAULT_OMEGA0,
            zeta: ModelParameters::DEFAULT_ZETA,
            dt: ModelParameters::DEFAULT_DT,
            duration: ModelParameters::DEFAULT_DURATION,
        }
    }
}
