/// A dense `N × N` matrix of second derivatives, stored row-major.
pub type Hessian<const N: usize> = [[f64; N]; N];

/// A differentiable scalar function of `N` variables.
///
/// This is the capability required by the line search and by steepest
/// descent. Implementations must be pure: the same `x` always produces the
/// same value and gradient, and [`Objective::gradient`] must be the analytic
/// derivative of [`Objective::value`].
///
/// Neither method can fail. An objective that produces NaN or infinity is
/// detected by the solvers and reported as an error there.
pub trait Objective<const N: usize> {
    /// Evaluates the objective at `x`.
    fn value(&self, x: &[f64; N]) -> f64;

    /// Evaluates the gradient of the objective at `x`.
    fn gradient(&self, x: &[f64; N]) -> [f64; N];
}

/// An [`Objective`] that can also provide its Hessian.
///
/// Newton's method requires this capability; steepest descent and the line
/// search only need [`Objective`].
pub trait TwiceDifferentiable<const N: usize>: Objective<N> {
    /// Evaluates the Hessian of the objective at `x`.
    ///
    /// The result must be the analytic derivative of [`Objective::gradient`]
    /// and is expected to be symmetric.
    fn hessian(&self, x: &[f64; N]) -> Hessian<N>;
}

impl<const N: usize, T> Objective<N> for &T
where
    T: Objective<N> + ?Sized,
{
    fn value(&self, x: &[f64; N]) -> f64 {
        (**self).value(x)
    }

    fn gradient(&self, x: &[f64; N]) -> [f64; N] {
        (**self).gradient(x)
    }
}

impl<const N: usize, T> TwiceDifferentiable<N> for &T
where
    T: TwiceDifferentiable<N> + ?Sized,
{
    fn hessian(&self, x: &[f64; N]) -> Hessian<N> {
        (**self).hessian(x)
    }
}
