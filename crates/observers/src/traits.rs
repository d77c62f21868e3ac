//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events tagged with an iteration number
//! - [`HasObjective`]: events that carry an objective value
//! - [`HasGradientNorm`]: events that carry a gradient norm
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use descent_core::Observer;
//! use descent_observers::traits::{CanStopEarly, HasGradientNorm};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasGradientNorm, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.gradient_norm() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use descent_solvers::{Action, newton, steepest_descent};

/// An event tagged with the iteration that produced it.
pub trait HasIteration {
    /// Returns the iteration number, with 0 for the starting point.
    fn iter(&self) -> usize;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective at the event's iterate.
    fn objective(&self) -> f64;
}

/// An event that carries a gradient norm.
pub trait HasGradientNorm {
    /// Returns the gradient norm at the event's iterate.
    fn gradient_norm(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- steepest_descent::Event ---

impl<const N: usize> HasIteration for steepest_descent::Event<N> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl<const N: usize> HasObjective for steepest_descent::Event<N> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl<const N: usize> HasGradientNorm for steepest_descent::Event<N> {
    fn gradient_norm(&self) -> f64 {
        self.gradient_norm
    }
}

// --- newton::Event ---

impl<const N: usize> HasIteration for newton::Event<N> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl<const N: usize> HasObjective for newton::Event<N> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl<const N: usize> HasGradientNorm for newton::Event<N> {
    fn gradient_norm(&self) -> f64 {
        self.gradient_norm
    }
}

// --- CanStopEarly ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
