use thiserror::Error;

use crate::line_search;

/// Configuration for the steepest descent solver.
///
/// There is no `Default`: the stopping tolerance depends on the scaling of
/// the problem and must be chosen by the caller. `Config::new(1e-8, 100)` is
/// a common starting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
    line_search: line_search::Config,
}

/// Errors that can occur when validating a steepest descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("max_iters must be positive")]
    MaxIters,
}

impl Config {
    /// Creates a new config with validated stopping criteria.
    ///
    /// The line search starts from [`line_search::Config::default`].
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
            line_search: line_search::Config::default(),
        })
    }

    /// Returns a copy that uses `line_search` to size each step.
    #[must_use]
    pub fn with_line_search(self, line_search: line_search::Config) -> Self {
        Self {
            line_search,
            ..self
        }
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

    /// Returns the line search configuration.
    #[must_use]
    pub fn line_search(&self) -> &line_search::Config {
        &self.line_search
    }
}
