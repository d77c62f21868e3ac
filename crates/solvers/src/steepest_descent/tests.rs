use approx::assert_abs_diff_eq;
use descent_core::{
    Objective,
    functions::{Quadratic, Rosenbrock},
};

use super::{Action, Config, Error, Event, Status, minimize, minimize_unobserved};
use crate::line_search;

fn config(epsilon: f64, max_iters: usize) -> Config {
    Config::new(epsilon, max_iters).expect("valid config")
}

#[test]
fn minimizes_quadratic() {
    let f = Quadratic::new(10.0);

    let solution = minimize_unobserved(&f, [1.0, 1.0], &config(1e-8, 5000)).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.converged());
    assert!(solution.gradient_norm <= 1e-8);
    assert!(solution.iters > 1);
    assert_abs_diff_eq!(solution.x[0], 0.0, epsilon = 1e-8);
    assert_abs_diff_eq!(solution.x[1], 0.0, epsilon = 1e-8);
    assert_abs_diff_eq!(solution.objective, f.value(&solution.x));
}

#[test]
fn converges_across_condition_numbers() {
    let iters: Vec<usize> = (0..10)
        .map(|k| {
            let a = f64::from(1_u32 << k);
            let solution = minimize_unobserved(&Quadratic::new(a), [1.0, 1.0], &config(1e-8, 5000))
                .expect("should solve");
            assert_eq!(solution.status, Status::Converged, "a = {a}");
            solution.iters
        })
        .collect();

    // Iteration counts grow with the condition number a, though not strictly
    // at every doubling: accepted steps are powers of rho, so the contraction
    // rate jumps between neighbouring values of a.
    let coarse = [iters[0], iters[2], iters[5], iters[9]];
    assert!(coarse.windows(2).all(|w| w[0] <= w[1]), "{iters:?}");
    assert!(iters[9] > 10 * iters[0], "{iters:?}");
}

#[test]
fn reports_max_iters_without_error() {
    let f = Quadratic::new(512.0);

    let solution = minimize_unobserved(&f, [1.0, 1.0], &config(1e-8, 10)).expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    assert!(!solution.converged());
    assert_eq!(solution.iters, 10);
    assert!(solution.gradient_norm > 1e-8);
    assert!(solution.objective < f.value(&[1.0, 1.0]));
}

#[test]
fn does_not_move_from_minimizer() {
    let solution =
        minimize_unobserved(&Quadratic::new(3.0), [0.0, 0.0], &config(1e-8, 100)).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.x, [0.0, 0.0]);

    let rosenbrock = Rosenbrock::default();
    let solution = minimize_unobserved(&rosenbrock, [1.0, 1.0], &config(1e-8, 100)).unwrap();

    assert_eq!(solution.iters, 0);
    assert_eq!(solution.x, [1.0, 1.0]);
}

#[test]
fn approaches_rosenbrock_minimizer() {
    let f = Rosenbrock::default();

    let solution = minimize_unobserved(&f, [-1.2, 1.0], &config(1e-4, 20_000)).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.x[0], 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(solution.x[1], 1.0, epsilon = 1e-3);
}

#[test]
fn uses_configured_line_search() {
    let f = Quadratic::new(1.0);

    // With c = 0.1, the first trial step of 0.5 lands exactly on the minimizer.
    let ls = line_search::Config::new(0.1, 0.5, 0.5).unwrap();
    let solution =
        minimize_unobserved(&f, [3.0, -4.0], &config(1e-8, 100).with_line_search(ls)).unwrap();

    assert_eq!(solution.iters, 1);
    assert_eq!(solution.x, [0.0, 0.0]);
}

#[test]
fn every_step_decreases_the_objective() {
    let f = Rosenbrock::default();
    let mut events = Vec::new();

    let observer = |event: &Event<2>| {
        events.push(*event);
        None
    };

    let solution = minimize(&f, [-1.2, 1.0], &config(1e-8, 50), observer).unwrap();

    assert_eq!(events.len(), solution.iters + 1);
    assert_eq!(events[0].iter, 0);
    assert_eq!(events[0].step, None);
    assert!(events[1..].iter().all(|e| e.step.is_some_and(|a| a > 0.0 && a <= 1.0)));
    assert!(events.windows(2).all(|w| w[1].objective < w[0].objective));
    assert_eq!(events.last().map(|e| e.x), Some(solution.x));
}

#[test]
fn observer_can_stop_early() {
    let f = Quadratic::new(10.0);

    let observer = |event: &Event<2>| (event.iter == 3).then_some(Action::StopEarly);

    let solution = minimize(&f, [1.0, 1.0], &config(1e-8, 1000), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
}

#[test]
fn observer_can_stop_before_first_step() {
    let observer = |_: &Event<2>| Some(Action::StopEarly);

    let solution = minimize(&Quadratic::new(1.0), [1.0, 1.0], &config(1e-8, 10), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.x, [1.0, 1.0]);
}

#[test]
fn rejects_non_finite_start() {
    let f = Quadratic::new(1.0);

    let err = minimize_unobserved(&f, [f64::INFINITY, 0.0], &config(1e-8, 10)).unwrap_err();

    assert_eq!(err, Error::NonFiniteStart);
}

/// An objective whose gradient blows up away from the origin.
struct Overflowing;

impl Objective<1> for Overflowing {
    fn value(&self, x: &[f64; 1]) -> f64 {
        x[0] * x[0]
    }

    fn gradient(&self, x: &[f64; 1]) -> [f64; 1] {
        if x[0].abs() > 1.0 { [f64::NAN] } else { [2.0 * x[0]] }
    }
}

#[test]
fn reports_non_finite_gradient() {
    let err = minimize_unobserved(&Overflowing, [2.0], &config(1e-8, 10)).unwrap_err();

    assert_eq!(err, Error::NonFiniteGradient { iter: 0 });
}

/// A finite gradient paired with a NaN objective.
struct Undefined;

impl Objective<1> for Undefined {
    fn value(&self, _x: &[f64; 1]) -> f64 {
        f64::NAN
    }

    fn gradient(&self, x: &[f64; 1]) -> [f64; 1] {
        [2.0 * x[0]]
    }
}

#[test]
fn reports_non_finite_objective_at_start() {
    let err = minimize_unobserved(&Undefined, [1.0], &config(1e-8, 10)).unwrap_err();

    assert_eq!(err, Error::NonFiniteObjective { iter: 0 });
}

/// x² for x ≥ 0 with a drop to −∞ below zero.
struct Cliff;

impl Objective<1> for Cliff {
    fn value(&self, x: &[f64; 1]) -> f64 {
        if x[0] < 0.0 { f64::NEG_INFINITY } else { x[0] * x[0] }
    }

    fn gradient(&self, x: &[f64; 1]) -> [f64; 1] {
        [2.0 * x[0]]
    }
}

#[test]
fn reports_non_finite_objective_after_a_step() {
    // The first trial step from 1 lands on −1, where −∞ passes the Armijo test.
    let err = minimize_unobserved(&Cliff, [1.0], &config(1e-8, 10)).unwrap_err();

    assert_eq!(err, Error::NonFiniteObjective { iter: 1 });
}

/// A gradient with the wrong sign, so `−∇f` points uphill.
struct UphillGradient;

impl Objective<2> for UphillGradient {
    fn value(&self, x: &[f64; 2]) -> f64 {
        Quadratic::new(1.0).value(x)
    }

    fn gradient(&self, x: &[f64; 2]) -> [f64; 2] {
        [-2.0 * x[0], -2.0 * x[1]]
    }
}

#[test]
fn surfaces_line_search_failure() {
    let err = minimize_unobserved(&UphillGradient, [1.0, 1.0], &config(1e-8, 10)).unwrap_err();

    match err {
        Error::LineSearch { iter, source } => {
            assert_eq!(iter, 1);
            assert!(matches!(source, line_search::Error::ShrinkLimit { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn works_through_a_trait_object() {
    let f: &dyn Objective<2> = &Quadratic::new(2.0);

    let solution = minimize_unobserved(f, [1.0, -1.0], &config(1e-8, 1000)).unwrap();

    assert!(solution.converged());
}
