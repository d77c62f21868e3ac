//! Compares steepest descent and Newton's method as conditioning worsens.
//!
//! Minimizes `f(x) = x₀² + a·x₁²` from `(1, 1)` for `a = 1, 2, 4, …, 512` and
//! prints the number of iterations each method needs. Steepest descent slows
//! as `a` grows; Newton's method always takes a single step.
//!
//! # Usage
//!
//! ```text
//! cargo run --example condition_sweep
//! cargo run --example condition_sweep -- 12
//! ```
//!
//! The optional argument sets the largest exponent `k` in `a = 2^k`.

use std::{error::Error, thread};

use descent_core::functions::Quadratic;
use descent_solvers::{Solution, newton, steepest_descent};

type BoxError = Box<dyn Error + Send + Sync>;
type Row = (f64, Solution<2>, Solution<2>);

fn main() -> Result<(), BoxError> {
    let max_exponent: u32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 9,
    };

    let steepest = steepest_descent::Config::new(1e-8, 50_000)?;
    let newton = newton::Config::new(1e-3, 100)?;

    let rows = thread::scope(|s| {
        let handles: Vec<_> = (0..=max_exponent)
            .map(|k| {
                let (steepest, newton) = (&steepest, &newton);
                s.spawn(move || -> Result<Row, BoxError> {
                    let f = Quadratic::new(2.0_f64.powf(f64::from(k)));
                    let sd = steepest_descent::minimize_unobserved(&f, [1.0, 1.0], steepest)?;
                    let nt = newton::minimize_unobserved(&f, [1.0, 1.0], newton)?;
                    Ok((f.a, sd, nt))
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| -> Result<Row, BoxError> {
                h.join().map_err(|_| "solver thread panicked")?
            })
            .collect::<Result<Vec<_>, _>>()
    })?;

    println!("{:>8}  {:>16}  {:>8}", "a", "steepest descent", "newton");
    for (a, sd, nt) in rows {
        println!("{a:>8}  {:>16}  {:>8}", describe(&sd), describe(&nt));
    }

    Ok(())
}

fn describe(solution: &Solution<2>) -> String {
    if solution.converged() {
        solution.iters.to_string()
    } else {
        format!("> {}", solution.iters)
    }
}
