use thiserror::Error;

/// Errors that can occur during Newton's method.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial point contains non-finite values")]
    NonFiniteStart,

    #[error("objective is not finite at iteration {iter}")]
    NonFiniteObjective { iter: usize },

    #[error("gradient is not finite at iteration {iter}")]
    NonFiniteGradient { iter: usize },

    #[error("hessian is not finite at iteration {iter}")]
    NonFiniteHessian { iter: usize },

    /// The Hessian is singular or too ill-conditioned to solve reliably.
    ///
    /// `condition` is the ratio of the largest to smallest singular value,
    /// infinite when the Hessian is exactly singular.
    #[error("singular hessian at iteration {iter} (condition number {condition:e})")]
    SingularHessian { iter: usize, condition: f64 },

    #[error("newton step is not finite at iteration {iter}")]
    NonFiniteStep { iter: usize },
}
