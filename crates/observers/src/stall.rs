use descent_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// An observer that stops a solver once the objective stops improving.
///
/// An event counts as progress when its objective is below the best seen so
/// far by more than `min_decrease`. The observer tolerates `patience`
/// consecutive events without progress and requests an early stop on the
/// next one.
#[derive(Debug, Clone)]
pub struct StallGuard {
    patience: usize,
    min_decrease: f64,
    best: f64,
    stalled: usize,
}

impl StallGuard {
    /// Creates a guard that tolerates `patience` events without a decrease
    /// larger than `min_decrease`.
    #[must_use]
    pub fn new(patience: usize, min_decrease: f64) -> Self {
        Self {
            patience,
            min_decrease,
            best: f64::INFINITY,
            stalled: 0,
        }
    }

    /// Returns the lowest objective observed so far.
    #[must_use]
    pub fn best(&self) -> f64 {
        self.best
    }

    fn update(&mut self, objective: f64) -> bool {
        if objective < self.best - self.min_decrease {
            self.best = objective;
            self.stalled = 0;
        } else {
            self.best = self.best.min(objective);
            self.stalled += 1;
        }
        self.stalled > self.patience
    }
}

impl<E, A> Observer<E, A> for StallGuard
where
    E: HasObjective,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.update(event.objective()).then(A::stop_early)
    }
}
