//! Line-search descent solvers for unconstrained minimization.
//!
//! Every solver takes the objective as an explicit argument and owns its
//! iteration state, so independent solves can run on separate threads.
//!
//! # Solvers
//!
//! - [`line_search`]: Armijo backtracking along a descent direction
//! - [`steepest_descent`]: negative-gradient steps sized by [`line_search`]
//! - [`newton`]: full Newton steps from a dense linear solve
//!
//! Both iterative solvers stop when the gradient norm falls to the configured
//! tolerance or the iteration cap is reached, and report which happened through
//! [`Status`]. Reaching the cap is not an error: the [`Solution`] still carries
//! the last iterate.

mod action;
mod solution;

pub mod line_search;
pub mod newton;
pub mod steepest_descent;

pub use action::Action;
pub use solution::{Solution, Status};
