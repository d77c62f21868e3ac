/// Event emitted by the steepest descent solver.
///
/// Iteration 0 is the starting point, before any step is taken.
/// Iterations 1..N are emitted after each accepted step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<const N: usize> {
    /// The iteration number (0 for the starting point).
    pub iter: usize,

    /// The current iterate.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub objective: f64,

    /// Gradient norm at `x`.
    pub gradient_norm: f64,

    /// The step length accepted by the line search, or `None` for the
    /// starting point.
    pub step: Option<f64>,
}
