use ndarray::ArrayView1;

/// A separable convex functional over a set of densities.
///
/// The objective is evaluated one support point at a time. At point `k`, `x`
/// holds the `n` density values stacked as a column of the density matrix.
pub trait Objective {
    /// Evaluates the objective term at support point `k`.
    fn value(&self, x: ArrayView1<'_, f64>, k: usize) -> f64;

    /// Returns the partial derivative of [`Objective::value`] with respect
    /// to `x[n]` at support point `k`.
    fn derivative(&self, n: usize, x: ArrayView1<'_, f64>, k: usize) -> f64;
}

impl<O: Objective + ?Sized> Objective for &O {
    fn value(&self, x: ArrayView1<'_, f64>, k: usize) -> f64 {
        (**self).value(x, k)
    }

    fn derivative(&self, n: usize, x: ArrayView1<'_, f64>, k: usize) -> f64 {
        (**self).derivative(n, x, k)
    }
}

/// An [`Objective`] assembled from an evaluator, its derivative, and a
/// borrowed parameter context shared by both.
pub struct FnObjective<'p, F, D, P: ?Sized> {
    f: F,
    df: D,
    params: &'p P,
}

impl<'p, F, D, P: ?Sized> FnObjective<'p, F, D, P> {
    /// Bundles the evaluator `f`, the derivative `df`, and their parameters.
    pub fn new(f: F, df: D, params: &'p P) -> Self {
        Self { f, df, params }
    }

    /// Returns the shared parameter context.
    #[must_use]
    pub fn params(&self) -> &'p P {
        self.params
    }
}

impl<F, D, P> Objective for FnObjective<'_, F, D, P>
where
    P: ?Sized,
    F: Fn(ArrayView1<'_, f64>, usize, &P) -> f64,
    D: Fn(usize, ArrayView1<'_, f64>, usize, &P) -> f64,
{
    fn value(&self, x: ArrayView1<'_, f64>, k: usize) -> f64 {
        (self.f)(x, k, self.params)
    }

    fn derivative(&self, n: usize, x: ArrayView1<'_, f64>, k: usize) -> f64 {
        (self.df)(n, x, k, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    /// Weighted sum of squares: `sum_n w[n] * x[n]^2`.
    fn weighted_squares(x: ArrayView1<'_, f64>, _k: usize, w: &[f64]) -> f64 {
        x.iter().zip(w).map(|(xi, wi)| wi * xi * xi).sum()
    }

    fn weighted_squares_derivative(n: usize, x: ArrayView1<'_, f64>, _k: usize, w: &[f64]) -> f64 {
        2.0 * w[n] * x[n]
    }

    #[test]
    fn forwards_params_to_both_functions() {
        let weights = vec![0.5, 2.0];
        let objective = FnObjective::new(
            weighted_squares,
            weighted_squares_derivative,
            weights.as_slice(),
        );
        let x = array![2.0, 1.0];

        assert_relative_eq!(objective.value(x.view(), 0), 4.0);
        assert_relative_eq!(objective.derivative(0, x.view(), 0), 2.0);
        assert_relative_eq!(objective.derivative(1, x.view(), 0), 4.0);
        assert_eq!(objective.params(), &[0.5, 2.0]);
    }

    fn shifted_total(x: ArrayView1<'_, f64>, k: usize, offsets: &[f64; 3]) -> f64 {
        x.sum() + offsets[k]
    }

    fn unit_slope(_n: usize, _x: ArrayView1<'_, f64>, _k: usize, _offsets: &[f64; 3]) -> f64 {
        1.0
    }

    #[test]
    fn terms_can_depend_on_support_index() {
        let offsets = [10.0, 20.0, 30.0];
        let objective = FnObjective::new(shifted_total, unit_slope, &offsets);
        let x = array![1.0, 1.0];

        assert_relative_eq!(objective.value(x.view(), 0), 12.0);
        assert_relative_eq!(objective.value(x.view(), 2), 32.0);
        assert_relative_eq!(slope_at(&objective, x.view(), 2), 1.0);
    }

    fn slope_at<O: Objective>(objective: O, x: ArrayView1<'_, f64>, k: usize) -> f64 {
        objective.derivative(1, x, k)
    }

    #[test]
    fn references_and_trait_objects_are_objectives() {
        let weights = [1.0, 3.0];
        let objective = FnObjective::new(
            weighted_squares,
            weighted_squares_derivative,
            weights.as_slice(),
        );
        let boxed: Box<dyn Objective + '_> = Box::new(FnObjective::new(
            weighted_squares,
            weighted_squares_derivative,
            weights.as_slice(),
        ));
        let x = array![1.0, 2.0];

        assert_relative_eq!(slope_at(&objective, x.view(), 0), 12.0);
        assert_relative_eq!(slope_at(boxed.as_ref(), x.view(), 0), 12.0);
    }
}
