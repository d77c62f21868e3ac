//! Finite-difference approximations for checking analytic derivatives.
//!
//! Hand-derived gradients and Hessians are easy to get wrong by a sign or a
//! factor. These helpers compute central-difference approximations so tests
//! can compare them against an objective's analytic derivatives.
//!
//! Central differences have truncation error `O(h²)`; a step around `1e-5`
//! balances truncation against rounding for well-scaled problems.

use crate::{Hessian, Objective};

/// Approximates the gradient of `objective` at `x` by central differences.
///
/// Each component is `(f(x + h·eᵢ) − f(x − h·eᵢ)) / 2h`.
#[must_use]
pub fn gradient_fd<const N: usize, O>(objective: &O, x: &[f64; N], h: f64) -> [f64; N]
where
    O: Objective<N> + ?Sized,
{
    std::array::from_fn(|i| {
        let (plus, minus) = perturb(x, i, h);
        (objective.value(&plus) - objective.value(&minus)) / (2.0 * h)
    })
}

/// Approximates the Hessian of `objective` at `x` by central differences
/// of its analytic gradient.
///
/// Column `j` is `(∇f(x + h·eⱼ) − ∇f(x − h·eⱼ)) / 2h`. The result is
/// symmetrized, so it checks the Hessian against the gradient rather than
/// against the function value.
#[must_use]
pub fn hessian_fd<const N: usize, O>(objective: &O, x: &[f64; N], h: f64) -> Hessian<N>
where
    O: Objective<N> + ?Sized,
{
    let columns: [[f64; N]; N] = std::array::from_fn(|j| {
        let (plus, minus) = perturb(x, j, h);
        let g_plus = objective.gradient(&plus);
        let g_minus = objective.gradient(&minus);
        std::array::from_fn(|i| (g_plus[i] - g_minus[i]) / (2.0 * h))
    });

    std::array::from_fn(|i| std::array::from_fn(|j| 0.5 * (columns[j][i] + columns[i][j])))
}

fn perturb<const N: usize>(x: &[f64; N], i: usize, h: f64) -> ([f64; N], [f64; N]) {
    let mut plus = *x;
    let mut minus = *x;
    plus[i] += h;
    minus[i] -= h;
    (plus, minus)
}
