//! Helpers for fixed-size vectors.
//!
//! Points, gradients, and search directions are all plain `[f64; N]` arrays.
//! These functions cover the handful of operations the solvers need without
//! pulling a linear algebra crate into every signature.

/// Returns the inner product `⟨a, b⟩`.
#[must_use]
pub fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Returns the Euclidean norm `‖v‖`.
#[must_use]
pub fn norm<const N: usize>(v: &[f64; N]) -> f64 {
    dot(v, v).sqrt()
}

/// Returns `x + alpha * d`.
#[must_use]
pub fn axpy<const N: usize>(x: &[f64; N], alpha: f64, d: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| x[i] + alpha * d[i])
}

/// Returns `alpha * v`.
#[must_use]
pub fn scale<const N: usize>(alpha: f64, v: &[f64; N]) -> [f64; N] {
    v.map(|vi| alpha * vi)
}

/// Returns `true` if every component is finite.
#[must_use]
pub fn is_finite<const N: usize>(v: &[f64; N]) -> bool {
    v.iter().all(|vi| vi.is_finite())
}
