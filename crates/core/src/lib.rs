//! Core traits and types for line-search descent solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Objective`]: a scalar function with its gradient
//! - [`TwiceDifferentiable`]: an [`Objective`] that also provides its Hessian
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! Supporting modules:
//!
//! - [`vector`]: small helpers over fixed-size `[f64; N]` points
//! - [`derivative`]: central-difference checks for analytic derivatives
//! - [`functions`]: reference objectives (quadratics and Rosenbrock)

mod objective;
mod observer;

pub mod derivative;
pub mod functions;
pub mod vector;

pub use objective::{Hessian, Objective, TwiceDifferentiable};
pub use observer::Observer;
