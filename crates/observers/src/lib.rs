//! Reusable observers for line-search descent solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in `descent-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasObjective`], [`HasGradientNorm`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Trajectory`]: records one [`Sample`] per event, the data behind a
//!   convergence curve
//! - [`StallGuard`]: stops a solver whose objective has stopped improving
//! - [`LogObserver`]: forwards progress to the `log` facade
//!
//! [`Observer`]: descent_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasObjective`]: traits::HasObjective
//! [`HasGradientNorm`]: traits::HasGradientNorm
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logging;
mod stall;
mod trajectory;

pub use logging::LogObserver;
pub use stall::StallGuard;
pub use trajectory::{Sample, Trajectory};
