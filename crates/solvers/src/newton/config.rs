use thiserror::Error;

/// Configuration for Newton's method.
///
/// There is no `Default`: the stopping tolerance must be chosen by the
/// caller. Newton's method converges quadratically near a minimizer, so a
/// looser tolerance than for steepest descent (for example `1e-3`) is common.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
    max_condition: f64,
}

/// Errors that can occur when validating a Newton config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("max_iters must be positive")]
    MaxIters,

    #[error("max_condition must be finite and at least 1")]
    MaxCondition,
}

impl Config {
    /// Default limit on the Hessian condition number.
    pub const DEFAULT_MAX_CONDITION: f64 = 1e12;

    /// Creates a new config with validated stopping criteria.
    ///
    /// The condition limit starts at [`Config::DEFAULT_MAX_CONDITION`];
    /// use [`Config::with_max_condition`] to change it.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and positive,
    /// or if `max_iters` is zero.
    pub fn new(epsilon: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            epsilon,
            max_iters,
            max_condition: Self::DEFAULT_MAX_CONDITION,
        })
    }

    /// Returns a copy with a different limit on the Hessian condition number.
    ///
    /// Hessians whose condition number exceeds the limit are rejected as
    /// singular rather than solved.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_condition` is not finite or is less than 1.
    pub fn with_max_condition(self, max_condition: f64) -> Result<Self, ConfigError> {
        if !max_condition.is_finite() || max_condition < 1.0 {
            return Err(ConfigError::MaxCondition);
        }
        Ok(Self {
            max_condition,
            ..self
        })
    }

    /// Returns the gradient-norm tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the limit on the Hessian condition number.
    #[must_use]
    pub fn max_condition(&self) -> f64 {
        self.max_condition
    }
}
