/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The gradient norm fell to or below the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a descent solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// The final iterate.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub objective: f64,

    /// Gradient norm at `x`.
    pub gradient_norm: f64,

    /// Number of iterations performed.
    pub iters: usize,
}

impl<const N: usize> Solution<N> {
    pub(crate) fn new(
        status: Status,
        x: [f64; N],
        objective: f64,
        gradient_norm: f64,
        iters: usize,
    ) -> Self {
        Self {
            status,
            x,
            objective,
            gradient_norm,
            iters,
        }
    }

    /// Returns `true` if the gradient norm reached the tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
