use thiserror::Error;

/// Errors that can occur during a backtracking line search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The objective or its directional derivative is NaN or infinite at the
    /// starting point, so the sufficient-decrease test is meaningless.
    #[error("non-finite start: objective = {value}, directional derivative = {slope}")]
    NonFinite { value: f64, slope: f64 },

    /// No trial step satisfied the sufficient-decrease condition.
    ///
    /// This usually means the direction is not a descent direction, or the
    /// objective is not smooth near the starting point.
    #[error("no sufficient decrease after {shrinks} step reductions (last alpha = {alpha:e})")]
    ShrinkLimit { shrinks: usize, alpha: f64 },
}
