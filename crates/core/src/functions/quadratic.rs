use crate::{Hessian, Objective, TwiceDifferentiable, vector::dot};

/// The two-variable quadratic `f(x) = x₀² + a·x₁²`.
///
/// The Hessian is `diag(2, 2a)`, so for `a ≥ 1` its condition number is `a`.
/// The global minimizer is the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    pub a: f64,
}

impl Quadratic {
    /// Creates the quadratic with curvature parameter `a`.
    #[must_use]
    pub fn new(a: f64) -> Self {
        Self { a }
    }
}

impl Objective<2> for Quadratic {
    fn value(&self, x: &[f64; 2]) -> f64 {
        x[0] * x[0] + self.a * x[1] * x[1]
    }

    fn gradient(&self, x: &[f64; 2]) -> [f64; 2] {
        [2.0 * x[0], 2.0 * self.a * x[1]]
    }
}

impl TwiceDifferentiable<2> for Quadratic {
    fn hessian(&self, _x: &[f64; 2]) -> Hessian<2> {
        [[2.0, 0.0], [0.0, 2.0 * self.a]]
    }
}

/// The quadratic form `f(x) = ½xᵀQx` for a symmetric matrix `Q`.
///
/// The gradient is `Qx` and the Hessian is `Q` everywhere. When `Q` is
/// positive definite the unique minimizer is the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticForm<const N: usize> {
    pub q: Hessian<N>,
}

impl<const N: usize> QuadraticForm<N> {
    /// Creates the quadratic form for `q`.
    ///
    /// `q` is used as given; callers are responsible for its symmetry.
    #[must_use]
    pub fn new(q: Hessian<N>) -> Self {
        Self { q }
    }

    /// Creates the quadratic form with a diagonal `Q`.
    #[must_use]
    pub fn diagonal(diag: [f64; N]) -> Self {
        Self::new(std::array::from_fn(|i| {
            std::array::from_fn(|j| if i == j { diag[i] } else { 0.0 })
        }))
    }
}

impl<const N: usize> Objective<N> for QuadraticForm<N> {
    fn value(&self, x: &[f64; N]) -> f64 {
        0.5 * dot(x, &self.gradient(x))
    }

    fn gradient(&self, x: &[f64; N]) -> [f64; N] {
        std::array::from_fn(|i| dot(&self.q[i], x))
    }
}

impl<const N: usize> TwiceDifferentiable<N> for QuadraticForm<N> {
    fn hessian(&self, _x: &[f64; N]) -> Hessian<N> {
        self.q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::derivative::{gradient_fd, hessian_fd};

    #[test]
    fn quadratic_at_origin_is_zero() {
        let f = Quadratic::new(10.0);

        assert_eq!(f.value(&[0.0, 0.0]), 0.0);
        assert_eq!(f.gradient(&[0.0, 0.0]), [0.0, 0.0]);
    }

    #[test]
    fn quadratic_values() {
        let f = Quadratic::new(10.0);

        assert_relative_eq!(f.value(&[1.0, 1.0]), 11.0);
        assert_eq!(f.gradient(&[1.0, 1.0]), [2.0, 20.0]);
        assert_eq!(f.hessian(&[1.0, 1.0]), [[2.0, 0.0], [0.0, 20.0]]);
    }

    #[test]
    fn quadratic_derivatives_match_finite_differences() {
        let f = Quadratic::new(7.5);
        let x = [0.3, -1.2];

        let g = f.gradient(&x);
        let g_fd = gradient_fd(&f, &x, 1e-5);
        let h = f.hessian(&x);
        let h_fd = hessian_fd(&f, &x, 1e-5);

        for i in 0..2 {
            assert_relative_eq!(g[i], g_fd[i], max_relative = 1e-8);
            for j in 0..2 {
                assert_relative_eq!(h[i][j], h_fd[i][j], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn quadratic_form_matches_quadratic() {
        // ½xᵀ·diag(2, 2a)·x = x₀² + a·x₁²
        let a = 4.0;
        let form = QuadraticForm::diagonal([2.0, 2.0 * a]);
        let quad = Quadratic::new(a);
        let x = [0.7, -2.0];

        assert_relative_eq!(form.value(&x), quad.value(&x), max_relative = 1e-12);
        assert_eq!(form.gradient(&x), quad.gradient(&x));
        assert_eq!(form.hessian(&x), quad.hessian(&x));
    }

    #[test]
    fn quadratic_form_derivatives_match_finite_differences() {
        let form = QuadraticForm::new([[4.0, 1.0, 0.5], [1.0, 3.0, -0.2], [0.5, -0.2, 2.0]]);
        let x = [1.0, -0.5, 2.0];

        let g = form.gradient(&x);
        let g_fd = gradient_fd(&form, &x, 1e-5);

        for i in 0..3 {
            assert_relative_eq!(g[i], g_fd[i], max_relative = 1e-8);
        }
    }
}
