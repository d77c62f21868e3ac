use descent_core::Observer;
use log::{Level, log, log_enabled};

use crate::traits::{HasGradientNorm, HasIteration, HasObjective};

/// An observer that reports solver progress through the `log` facade.
///
/// Every `every`-th iteration (and the starting point) is logged at the
/// configured level under the given label. The observer never steers the
/// solver, and logs nothing unless the application installs a logger.
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: String,
    level: Level,
    every: usize,
}

impl LogObserver {
    /// Creates an observer that logs every iteration at `Info` level.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            level: Level::Info,
            every: 1,
        }
    }

    /// Sets the level progress lines are logged at.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Logs only every `every`-th iteration; zero is treated as one.
    #[must_use]
    pub fn every(mut self, every: usize) -> Self {
        self.every = every.max(1);
        self
    }

    /// Returns `true` if an event at `iter` would be logged.
    #[must_use]
    pub fn logs(&self, iter: usize) -> bool {
        iter % self.every == 0
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIteration + HasObjective + HasGradientNorm,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.logs(event.iter()) && log_enabled!(self.level) {
            log!(
                self.level,
                "{}: iter = {}, f = {:e}, |g| = {:e}",
                self.label,
                event.iter(),
                event.objective(),
                event.gradient_norm()
            );
        }
        None
    }
}
