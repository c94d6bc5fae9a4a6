//! Stateless reductions and predicates over borrowed matrices and vectors.
//!
//! None of these functions allocate or mutate; they read the views they are
//! given and return a scalar or a boolean.

use ndarray::{ArrayView1, ArrayView2, Zip};

/// Returns `true` if `a[i, j] >= b[i, j]` for every entry.
///
/// Matrices of different shapes are never ordered. A `NaN` on either side
/// fails the comparison.
#[must_use]
pub fn matrix_geq(a: ArrayView2<'_, f64>, b: ArrayView2<'_, f64>) -> bool {
    a.dim() == b.dim() && Zip::from(&a).and(&b).all(|&x, &y| x >= y)
}

/// Returns the sum of the entries of `v`.
#[must_use]
pub fn vector_sum(v: ArrayView1<'_, f64>) -> f64 {
    v.sum()
}

/// Returns the smallest entry of `v`.
///
/// An empty vector yields `f64::INFINITY`. A `NaN` entry propagates.
#[must_use]
pub fn vector_min(v: ArrayView1<'_, f64>) -> f64 {
    v.fold(f64::INFINITY, |acc, &x| if x.is_nan() || x < acc { x } else { acc })
}

/// Returns `true` if every entry of `m` is finite.
#[must_use]
pub fn matrix_finite(m: ArrayView2<'_, f64>) -> bool {
    m.iter().all(|x| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn geq_is_elementwise_and_inclusive() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[1.0, 1.5], [3.0, 0.0]];

        assert!(matrix_geq(a.view(), b.view()));
        assert!(!matrix_geq(b.view(), a.view()));
        assert!(matrix_geq(a.view(), a.view()));
    }

    #[test]
    fn geq_rejects_shape_mismatch() {
        let a = array![[1.0, 1.0, 1.0]];
        let b = array![[0.0], [0.0], [0.0]];

        assert!(!matrix_geq(a.view(), b.view()));
    }

    #[test]
    fn geq_fails_on_nan() {
        let a = array![[f64::NAN]];
        let b = array![[0.0]];

        assert!(!matrix_geq(a.view(), b.view()));
        assert!(!matrix_geq(b.view(), a.view()));
    }

    #[test]
    fn sum_and_min_of_row() {
        let m = array![[0.5, -0.25, 2.0], [1.0, 1.0, 1.0]];

        assert_relative_eq!(vector_sum(m.row(0)), 2.25);
        assert_relative_eq!(vector_min(m.row(0)), -0.25);
        assert_relative_eq!(vector_sum(m.row(1)), 3.0);
        assert_relative_eq!(vector_min(m.row(1)), 1.0);
    }

    #[test]
    fn min_propagates_nan() {
        let v = array![1.0, f64::NAN, -3.0];
        assert!(vector_min(v.view()).is_nan());
    }

    #[test]
    fn finiteness() {
        assert!(matrix_finite(array![[0.0, 1e300]].view()));
        assert!(!matrix_finite(array![[0.0, f64::INFINITY]].view()));
        assert!(!matrix_finite(array![[f64::NAN, 0.0]].view()));
    }
}
