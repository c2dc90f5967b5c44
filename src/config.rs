/*
    Process-wide configuration
*/

use std::env::{self, VarError};
use std::sync::OnceLock;

use crate::ConfigError;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Settings shared by every conversion in the process.
///
/// The only setting is the working precision: the number of significant
/// decimal digits the rounding step keeps from a decimal value.
/// It must be installed (if at all) before any concurrent use and is
/// never changed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    precision: usize,
}

impl Config {
    /// Default working precision.
    pub const DEFAULT_PRECISION: usize = 1024;

    /// Smallest accepted working precision. Every midpoint between two
    /// adjacent binary64 values has fewer significant digits than this.
    pub const MIN_PRECISION: usize = 800;

    /// Largest accepted working precision.
    pub const MAX_PRECISION: usize = 1_000_000;

    /// Environment variable read by [`Config::from_env`].
    pub const ENV: &'static str = "EXACT_FLOAT_PRECISION";

    /// Creates a configuration with the default working precision.
    pub fn new() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
        }
    }

    /// Sets the working precision.
    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = digits;
        self
    }

    /// Returns the working precision.
    pub fn working_precision(&self) -> usize {
        self.precision
    }

    /// Reads the working precision from `EXACT_FLOAT_PRECISION`,
    /// falling back to the default when the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(Self::ENV) {
            Ok(value) => match value.trim().parse::<usize>() {
                Ok(digits) => Ok(Self::new().precision(digits)),
                Err(_) => Err(ConfigError::InvalidEnv {
                    var: Self::ENV,
                    value,
                }),
            },
            Err(VarError::NotPresent) => Ok(Self::new()),
            Err(VarError::NotUnicode(value)) => Err(ConfigError::InvalidEnv {
                var: Self::ENV,
                value: value.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Checks that the working precision is within the accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (Self::MIN_PRECISION..=Self::MAX_PRECISION).contains(&self.precision) {
            Ok(())
        } else {
            Err(ConfigError::PrecisionOutOfRange {
                requested: self.precision,
                min: Self::MIN_PRECISION,
                max: Self::MAX_PRECISION,
            })
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Installs `config` as the process-wide configuration.
///
/// Fails if the configuration is invalid or if a configuration was already
/// installed or already read by [`parse`](crate::parse). Only rounding reads
/// the configuration: [`stringify`](crate::stringify) and [`ExactDecimal`]
/// parsing leave it untouched.
///
/// [`ExactDecimal`]: crate::ExactDecimal
pub fn init(config: Config) -> Result<(), ConfigError> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    tracing::info!(precision = config.precision, "installed exact-float configuration");
    Ok(())
}

/// Returns the process-wide configuration, installing the default
/// if none was installed.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::new)
}
