use ndarray::{ArrayView1, ArrayView2, Axis};

/// Lower and upper density bands, borrowed for the lifetime of a problem.
///
/// Row `n` of each matrix bounds density `n` at every support point.
/// A `Bands` value stored on a [`Problem`](crate::Problem) has passed
/// [`check_bands`](crate::check::check_bands).
#[derive(Debug, Clone, Copy)]
pub struct Bands<'a> {
    lower: ArrayView2<'a, f64>,
    upper: ArrayView2<'a, f64>,
}

impl<'a> Bands<'a> {
    pub(crate) fn new(lower: ArrayView2<'a, f64>, upper: ArrayView2<'a, f64>) -> Self {
        Self { lower, upper }
    }

    /// Returns the lower band `P_min`.
    #[must_use]
    pub fn lower(&self) -> ArrayView2<'a, f64> {
        self.lower
    }

    /// Returns the upper band `P_max`.
    #[must_use]
    pub fn upper(&self) -> ArrayView2<'a, f64> {
        self.upper
    }

    /// Returns the `(lower, upper)` row pair bounding density `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a valid row index.
    #[must_use]
    pub fn row(&self, n: usize) -> (ArrayView1<'a, f64>, ArrayView1<'a, f64>) {
        (
            self.lower.index_axis_move(Axis(0), n),
            self.upper.index_axis_move(Axis(0), n),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn rows_outlive_the_bands_value() {
        let lower = array![[0.0, 0.1], [0.2, 0.3]];
        let upper = array![[1.0, 1.1], [1.2, 1.3]];

        let (lo, hi) = {
            let bands = Bands::new(lower.view(), upper.view());
            bands.row(1)
        };

        assert_eq!(lo, lower.row(1));
        assert_eq!(hi, upper.row(1));
    }
}
