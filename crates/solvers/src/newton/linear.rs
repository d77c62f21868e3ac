use descent_core::Hessian;
use nalgebra::{DMatrix, DVector};

/// Solves `H·δ = g` for the Newton step `δ`.
///
/// The Hessian is rejected when its 2-norm condition number exceeds
/// `max_condition`; the returned error carries that condition number,
/// which is infinite for an exactly singular matrix.
pub(super) fn solve<const N: usize>(
    hessian: &Hessian<N>,
    gradient: &[f64; N],
    max_condition: f64,
) -> Result<[f64; N], f64> {
    let h = DMatrix::from_fn(N, N, |i, j| hessian[i][j]);

    let condition = condition_number(&h);
    if condition.is_nan() || condition > max_condition {
        return Err(condition);
    }

    let g = DVector::from_column_slice(gradient);
    let delta = h.lu().solve(&g).ok_or(f64::INFINITY)?;

    Ok(std::array::from_fn(|i| delta[i]))
}

/// Ratio of the largest to smallest singular value.
fn condition_number(h: &DMatrix<f64>) -> f64 {
    let singular_values = h.singular_values();
    let largest = singular_values.iter().copied().fold(0.0, f64::max);
    let smallest = singular_values.iter().copied().fold(f64::INFINITY, f64::min);

    if smallest > 0.0 {
        largest / smallest
    } else {
        f64::INFINITY
    }
}
