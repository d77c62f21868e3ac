use thiserror::Error;

use crate::line_search;

/// Errors that can occur during steepest descent.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial point contains non-finite values")]
    NonFiniteStart,

    #[error("objective is not finite at iteration {iter}")]
    NonFiniteObjective { iter: usize },

    #[error("gradient is not finite at iteration {iter}")]
    NonFiniteGradient { iter: usize },

    #[error("line search failed at iteration {iter}")]
    LineSearch {
        iter: usize,
        #[source]
        source: line_search::Error,
    },
}
