use crate::{Hessian, Objective, TwiceDifferentiable};

/// The Rosenbrock function `f(x) = (a − x₀)² + b·(x₁ − x₀²)²`.
///
/// The global minimizer is `(a, a²)`, where `f = 0`. The minimizer sits in a
/// long, curved valley, which makes this a standard stress test for descent
/// methods. [`Rosenbrock::default`] uses the classic `a = 1`, `b = 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rosenbrock {
    pub a: f64,
    pub b: f64,
}

impl Rosenbrock {
    /// Creates the Rosenbrock function with parameters `a` and `b`.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Returns the global minimizer `(a, a²)`.
    #[must_use]
    pub fn minimizer(&self) -> [f64; 2] {
        [self.a, self.a * self.a]
    }
}

impl Default for Rosenbrock {
    fn default() -> Self {
        Self::new(1.0, 100.0)
    }
}

impl Objective<2> for Rosenbrock {
    fn value(&self, x: &[f64; 2]) -> f64 {
        let [x0, x1] = *x;
        (self.a - x0).powi(2) + self.b * (x1 - x0 * x0).powi(2)
    }

    fn gradient(&self, x: &[f64; 2]) -> [f64; 2] {
        let [x0, x1] = *x;
        let valley = x1 - x0 * x0;
        [
            -2.0 * (self.a - x0) - 4.0 * self.b * x0 * valley,
            2.0 * self.b * valley,
        ]
    }
}

impl TwiceDifferentiable<2> for Rosenbrock {
    fn hessian(&self, x: &[f64; 2]) -> Hessian<2> {
        let [x0, x1] = *x;
        let off_diagonal = -4.0 * self.b * x0;
        [
            [2.0 - 4.0 * self.b * (x1 - x0 * x0) + 8.0 * self.b * x0 * x0, off_diagonal],
            [off_diagonal, 2.0 * self.b],
        ]
    }
}
