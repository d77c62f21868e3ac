//! Backtracking line search with the Armijo sufficient-decrease condition.
//!
//! # Algorithm
//!
//! Starting from `alpha = alpha_init`, the search accepts the first step for
//! which
//!
//! ```text
//! f(x + alpha·d) < f(x) + c·alpha·⟨∇f(x), d⟩
//! ```
//!
//! and otherwise shrinks `alpha` by the factor `rho` and tries again. For a
//! descent direction (`⟨∇f(x), d⟩ < 0`) and a smooth objective, some small
//! enough step always passes, and the accepted step strictly decreases `f`.
//!
//! # Failure
//!
//! The search does not check that `d` is a descent direction. A direction
//! that is not (or an objective that is not smooth) makes every trial fail,
//! so the number of reductions is capped by [`Config::max_shrinks`] and
//! exceeding it returns [`Error::ShrinkLimit`]. A trial whose objective is NaN
//! counts as a failed trial.

mod config;
mod error;

pub use config::{Config, ConfigError};
pub use error::Error;

use descent_core::{
    Objective,
    vector::{axpy, dot},
};
use log::trace;

/// Finds a step length along `direction` that satisfies the Armijo condition.
///
/// # Errors
///
/// Returns [`Error::NonFinite`] if the objective or its directional derivative
/// is not finite at `x`, and [`Error::ShrinkLimit`] if no step passes within
/// [`Config::max_shrinks`] reductions.
pub fn backtracking<const N: usize, O>(
    objective: &O,
    x: &[f64; N],
    direction: &[f64; N],
    config: &Config,
) -> Result<f64, Error>
where
    O: Objective<N> + ?Sized,
{
    let value = objective.value(x);
    let gradient = objective.gradient(x);
    search(objective, x, value, &gradient, direction, config).map(|step| step.alpha)
}

/// An accepted step: its length, the new point, and the objective there.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Step<const N: usize> {
    pub(crate) alpha: f64,
    pub(crate) x: [f64; N],
    pub(crate) value: f64,
}

/// Backtracking search reusing a known value and gradient at `x`.
pub(crate) fn search<const N: usize, O>(
    objective: &O,
    x: &[f64; N],
    value: f64,
    gradient: &[f64; N],
    direction: &[f64; N],
    config: &Config,
) -> Result<Step<N>, Error>
where
    O: Objective<N> + ?Sized,
{
    let slope = dot(gradient, direction);
    if !value.is_finite() || !slope.is_finite() {
        return Err(Error::NonFinite { value, slope });
    }

    let mut alpha = config.alpha_init();
    let mut shrinks = 0;

    loop {
        let trial = axpy(x, alpha, direction);
        let trial_value = objective.value(&trial);

        if trial_value < value + config.c() * alpha * slope {
            trace!("backtracking: accepted alpha = {alpha:e} after {shrinks} reductions");
            return Ok(Step {
                alpha,
                x: trial,
                value: trial_value,
            });
        }

        if shrinks == config.max_shrinks() {
            return Err(Error::ShrinkLimit { shrinks, alpha });
        }

        trace!("backtracking: rejected alpha = {alpha:e}, f = {trial_value:e}");
        alpha *= config.rho();
        shrinks += 1;
    }
}
