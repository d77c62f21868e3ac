//! Reference objectives with closed-form derivatives.
//!
//! These are the standard test problems for descent methods:
//!
//! - [`Quadratic`]: `x₀² + a·x₁²`, whose condition number grows with `a`
//! - [`QuadraticForm`]: `½xᵀQx` in any dimension
//! - [`Rosenbrock`]: the curved-valley function with minimizer `(a, a²)`

mod quadratic;
mod rosenbrock;

pub use quadratic::{Quadratic, QuadraticForm};
pub use rosenbrock::Rosenbrock;
