use descent_core::Observer;

use crate::traits::{HasGradientNorm, HasIteration, HasObjective};

/// One recorded point of a solver's progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub iter: usize,
    pub objective: f64,
    pub gradient_norm: f64,
}

/// An observer that records a [`Sample`] for every event.
///
/// The samples are what a convergence plot draws: objective value and
/// gradient norm against iteration. The observer never steers the solver.
///
/// Pass `&mut Trajectory` as the observer to keep the recording after the
/// solve completes:
///
/// ```rust
/// use descent_core::functions::Quadratic;
/// use descent_observers::Trajectory;
/// use descent_solvers::steepest_descent;
///
/// let config = steepest_descent::Config::new(1e-8, 500).unwrap();
/// let mut trajectory = Trajectory::new();
///
/// let solution =
///     steepest_descent::minimize(&Quadratic::new(4.0), [1.0, 1.0], &config, &mut trajectory)
///         .unwrap();
///
/// assert_eq!(trajectory.samples().len(), solution.iters + 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    /// Creates an empty trajectory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded samples in the order they were observed.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Consumes the trajectory and returns its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    /// Returns the gradient norms in order, one per sample.
    pub fn gradient_norms(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.gradient_norm)
    }

    /// Records a sample from any event that carries the needed values.
    pub fn record<E>(&mut self, event: &E)
    where
        E: HasIteration + HasObjective + HasGradientNorm,
    {
        self.samples.push(Sample {
            iter: event.iter(),
            objective: event.objective(),
            gradient_norm: event.gradient_norm(),
        });
    }
}

impl<E, A> Observer<E, A> for Trajectory
where
    E: HasIteration + HasObjective + HasGradientNorm,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut Trajectory` to be passed to solvers that take an observer by
/// value, so the samples remain available after the solve.
impl<E, A> Observer<E, A> for &mut Trajectory
where
    E: HasIteration + HasObjective + HasGradientNorm,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
