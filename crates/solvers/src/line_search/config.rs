use thiserror::Error;

/// Configuration for the backtracking line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    c: f64,
    rho: f64,
    alpha_init: f64,
    max_shrinks: usize,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("c must lie strictly between 0 and 1")]
    C,

    #[error("rho must lie strictly between 0 and 1")]
    Rho,

    #[error("alpha_init must be finite and positive")]
    AlphaInit,

    #[error("max_shrinks must be positive")]
    MaxShrinks,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.7, 0.6, 1.0).unwrap()
    }
}

impl Config {
    /// Default cap on step reductions.
    ///
    /// With `rho = 0.6` this shrinks the initial step by roughly 22 orders
    /// of magnitude before giving up.
    pub const DEFAULT_MAX_SHRINKS: usize = 100;

    /// Creates a new config with validated parameters.
    ///
    /// The shrink cap starts at [`Config::DEFAULT_MAX_SHRINKS`];
    /// use [`Config::with_max_shrinks`] to change it.
    ///
    /// # Errors
    ///
    /// Returns an error if `c` or `rho` is outside `(0, 1)`,
    /// or if `alpha_init` is not finite and positive.
    pub fn new(c: f64, rho: f64, alpha_init: f64) -> Result<Self, ConfigError> {
        if !(c > 0.0 && c < 1.0) {
            return Err(ConfigError::C);
        }
        if !(rho > 0.0 && rho < 1.0) {
            return Err(ConfigError::Rho);
        }
        if !alpha_init.is_finite() || alpha_init <= 0.0 {
            return Err(ConfigError::AlphaInit);
        }

        Ok(Self {
            c,
            rho,
            alpha_init,
            max_shrinks: Self::DEFAULT_MAX_SHRINKS,
        })
    }

    /// Returns a copy with a different cap on step reductions.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_shrinks` is zero.
    pub fn with_max_shrinks(self, max_shrinks: usize) -> Result<Self, ConfigError> {
        if max_shrinks == 0 {
            return Err(ConfigError::MaxShrinks);
        }
        Ok(Self {
            max_shrinks,
            ..self
        })
    }

    /// Returns the sufficient-decrease parameter.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Returns the factor applied to the step after each rejected trial.
    #[must_use]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns the first step length tried.
    #[must_use]
    pub fn alpha_init(&self) -> f64 {
        self.alpha_init
    }

    /// Returns the maximum number of step reductions.
    #[must_use]
    pub fn max_shrinks(&self) -> usize {
        self.max_shrinks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = Config::default();

        assert_eq!(config.c(), 0.7);
        assert_eq!(config.rho(), 0.6);
        assert_eq!(config.alpha_init(), 1.0);
        assert_eq!(config.max_shrinks(), Config::DEFAULT_MAX_SHRINKS);
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert_eq!(Config::new(0.0, 0.5, 1.0), Err(ConfigError::C));
        assert_eq!(Config::new(1.0, 0.5, 1.0), Err(ConfigError::C));
        assert_eq!(Config::new(f64::NAN, 0.5, 1.0), Err(ConfigError::C));
        assert_eq!(Config::new(0.5, 0.0, 1.0), Err(ConfigError::Rho));
        assert_eq!(Config::new(0.5, 1.5, 1.0), Err(ConfigError::Rho));
        assert_eq!(Config::new(0.5, 0.5, 0.0), Err(ConfigError::AlphaInit));
        assert_eq!(Config::new(0.5, 0.5, f64::INFINITY), Err(ConfigError::AlphaInit));
    }

    #[test]
    fn max_shrinks_must_be_positive() {
        let config = Config::default();

        assert_eq!(config.with_max_shrinks(0), Err(ConfigError::MaxShrinks));
        assert_eq!(config.with_max_shrinks(5).map(|c| c.max_shrinks()), Ok(5));
    }
}
