//! Steepest descent with backtracking line search.
//!
//! # Algorithm
//!
//! Each iteration moves along the negative gradient:
//!
//! ```text
//! d = −∇f(x)
//! x ← x + alpha·d
//! ```
//!
//! where `alpha` comes from [`line_search::backtracking`](crate::line_search::backtracking),
//! so every step strictly decreases the objective. Iteration stops as soon as
//! `‖∇f(x)‖ ≤ epsilon` or the iteration cap is reached.
//!
//! # Convergence
//!
//! Steepest descent converges on smooth objectives but slowly on
//! ill-conditioned ones: for a convex quadratic the number of iterations
//! grows with the condition number of its Hessian. Reaching the cap is
//! reported as [`Status::MaxIters`], not as an error.
//!
//! # Observer Events
//!
//! The solver emits an [`Event`] for the starting point (`iter = 0`) and one
//! after every step. Observers can return [`Action::StopEarly`] to halt and
//! receive the current iterate with [`Status::StoppedByObserver`].

mod config;
mod error;
mod event;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use descent_core::{
    Objective, Observer,
    vector::{is_finite, norm, scale},
};
use log::debug;

use crate::{Action, Solution, Status, line_search};

/// Minimizes the objective by steepest descent, starting from `x0`.
///
/// The observer receives an [`Event`] for the starting point and after each
/// step. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, if the objective or its gradient
/// becomes non-finite, or if the line search fails to find a step.
pub fn minimize<const N: usize, O, Obs>(
    objective: &O,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: Objective<N> + ?Sized,
    Obs: Observer<Event<N>, Action>,
{
    if !is_finite(&x0) {
        return Err(Error::NonFiniteStart);
    }

    let mut x = x0;
    let mut value = objective.value(&x);
    if !value.is_finite() {
        return Err(Error::NonFiniteObjective { iter: 0 });
    }
    let mut gradient = objective.gradient(&x);
    let mut gradient_norm = checked_norm(&gradient, 0)?;

    let event = Event {
        iter: 0,
        x,
        objective: value,
        gradient_norm,
        step: None,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution::new(Status::StoppedByObserver, x, value, gradient_norm, 0));
    }

    for iter in 1..=config.max_iters() {
        if gradient_norm <= config.epsilon() {
            debug!("steepest descent: converged after {} iterations", iter - 1);
            return Ok(Solution::new(Status::Converged, x, value, gradient_norm, iter - 1));
        }

        let direction = scale(-1.0, &gradient);
        let step = line_search::search(
            objective,
            &x,
            value,
            &gradient,
            &direction,
            config.line_search(),
        )
        .map_err(|source| Error::LineSearch { iter, source })?;

        if !step.value.is_finite() {
            return Err(Error::NonFiniteObjective { iter });
        }

        x = step.x;
        value = step.value;
        gradient = objective.gradient(&x);
        gradient_norm = checked_norm(&gradient, iter)?;

        debug!(
            "steepest descent: iter = {iter}, f = {value:e}, |g| = {gradient_norm:e}, alpha = {:e}",
            step.alpha
        );

        let event = Event {
            iter,
            x,
            objective: value,
            gradient_norm,
            step: Some(step.alpha),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, x, value, gradient_norm, iter));
        }
    }

    let status = if gradient_norm <= config.epsilon() {
        Status::Converged
    } else {
        debug!(
            "steepest descent: |g| = {gradient_norm:e} after {} iterations",
            config.max_iters()
        );
        Status::MaxIters
    };

    Ok(Solution::new(status, x, value, gradient_norm, config.max_iters()))
}

/// Minimizes the objective by steepest descent without observer support.
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
    O: Objective<N> + ?Sized,
{
    minimize(objective, x0, config, ())
}

fn checked_norm<const N: usize>(gradient: &[f64; N], iter: usize) -> Result<f64, Error> {
    let gradient_norm = norm(gradient);
    if gradient_norm.is_finite() {
        Ok(gradient_norm)
    } else {
        Err(Error::NonFiniteGradient { iter })
    }
}
