//! Newton's method for unconstrained minimization.
//!
//! # Algorithm
//!
//! Each iteration solves the Newton system and takes the full step:
//!
//! ```text
//! H(x)·δ = ∇f(x)
//! x ← x − δ
//! ```
//!
//! The system is solved by LU decomposition; the Hessian is never inverted.
//! There is no line search, so the step length is always 1.
//!
//! # Convergence
//!
//! On a quadratic with positive definite Hessian, one step lands exactly on
//! the minimizer regardless of the start or the conditioning. On other
//! objectives convergence is only local: quadratic once inside the basin of
//! attraction of a minimizer, with no guarantee from a distant start. There
//! is no fallback to gradient steps.
//!
//! # Failure
//!
//! Away from a minimizer the Hessian may be singular or nearly so. Before
//! solving, its condition number is compared against
//! [`Config::max_condition`]; a Hessian beyond that limit stops the solver
//! with [`Error::SingularHessian`] instead of producing a meaningless step.
//!
//! # Observer Events
//!
//! The solver emits an [`Event`] for the starting point (`iter = 0`) and one
//! after every step. Observers can return [`Action::StopEarly`] to halt and
//! receive the current iterate with [`Status::StoppedByObserver`].

mod config;
mod error;
mod event;
mod linear;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use descent_core::{
    Objective, Observer, TwiceDifferentiable,
    vector::{axpy, is_finite, norm},
};
use log::debug;

use crate::{Action, Solution, Status};

/// Minimizes the objective by Newton's method, starting from `x0`.
///
/// The observer receives an [`Event`] for the starting point and after each
/// step. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, if the objective, gradient,
/// Hessian, or step becomes non-finite, or if the Hessian is singular
/// or ill-conditioned beyond [`Config::max_condition`].
pub fn minimize<const N: usize, O, Obs>(
    objective: &O,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: TwiceDifferentiable<N> + ?Sized,
    Obs: Observer<Event<N>, Action>,
{
    if !is_finite(&x0) {
        return Err(Error::NonFiniteStart);
    }

    let mut x = x0;
    let mut gradient = objective.gradient(&x);
    let (mut value, mut gradient_norm) = evaluate(objective, &x, &gradient, 0)?;

    let event = Event {
        iter: 0,
        x,
        objective: value,
        gradient_norm,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution::new(Status::StoppedByObserver, x, value, gradient_norm, 0));
    }

    for iter in 1..=config.max_iters() {
        if gradient_norm <= config.epsilon() {
            debug!("newton: converged after {} iterations", iter - 1);
            return Ok(Solution::new(Status::Converged, x, value, gradient_norm, iter - 1));
        }

        let hessian = objective.hessian(&x);
        if !hessian.iter().all(is_finite) {
            return Err(Error::NonFiniteHessian { iter });
        }

        let delta = linear::solve(&hessian, &gradient, config.max_condition())
            .map_err(|condition| Error::SingularHessian { iter, condition })?;

        x = axpy(&x, -1.0, &delta);
        if !is_finite(&x) {
            return Err(Error::NonFiniteStep { iter });
        }

        gradient = objective.gradient(&x);
        (value, gradient_norm) = evaluate(objective, &x, &gradient, iter)?;

        debug!("newton: iter = {iter}, f = {value:e}, |g| = {gradient_norm:e}");

        let event = Event {
            iter,
            x,
            objective: value,
            gradient_norm,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, x, value, gradient_norm, iter));
        }
    }

    let status = if gradient_norm <= config.epsilon() {
        Status::Converged
    } else {
        debug!(
            "newton: |g| = {gradient_norm:e} after {} iterations",
            config.max_iters()
        );
        Status::MaxIters
    };

    Ok(Solution::new(status, x, value, gradient_norm, config.max_iters()))
}

/// Minimizes the objective by Newton's method without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn minimize_unobserved<const N: usize, O>(
    objective: &O,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    O: TwiceDifferentiable<N> + ?Sized,
{
    minimize(objective, x0, config, ())
}

/// Returns the objective and gradient norm at `x`, checking both are finite.
fn evaluate<const N: usize, O>(
    objective: &O,
    x: &[f64; N],
    gradient: &[f64; N],
    iter: usize,
) -> Result<(f64, f64), Error>
where
    O: Objective<N> + ?Sized,
{
    let gradient_norm = norm(gradient);
    if !gradient_norm.is_finite() {
        return Err(Error::NonFiniteGradient { iter });
    }

    let value = objective.value(x);
    if !value.is_finite() {
        return Err(Error::NonFiniteObjective { iter });
    }

    Ok((value, gradient_norm))
}
