use thiserror::Error;

/// Fixed size of a problem: `n` densities over `k` support points spaced by `mu`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    n: usize,
    k: usize,
    mu: f64,
}

/// Errors that can occur when creating [`Dimensions`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DimensionError {
    #[error("number of densities must be positive")]
    ZeroDensities,

    #[error("number of support points must be positive")]
    ZeroPoints,

    #[error("grid spacing must be finite and positive, got {mu}")]
    InvalidSpacing { mu: f64 },
}

impl Dimensions {
    /// Creates validated problem dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` or `k` is zero, or if `mu` is not a finite
    /// positive number.
    pub fn new(n: usize, k: usize, mu: f64) -> Result<Self, DimensionError> {
        if n == 0 {
            return Err(DimensionError::ZeroDensities);
        }
        if k == 0 {
            return Err(DimensionError::ZeroPoints);
        }
        if !mu.is_finite() || mu <= 0.0 {
            return Err(DimensionError::InvalidSpacing { mu });
        }

        Ok(Self { n, k, mu })
    }

    /// Returns the number of densities (hypotheses).
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the number of support points.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the mass carried by each support point.
    #[must_use]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Returns the `(n, k)` shape every density matrix must have.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n, self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_sizes() {
        let dims = Dimensions::new(3, 2001, 0.01).expect("valid dimensions");
        assert_eq!(dims.shape(), (3, 2001));
        assert_eq!(dims.n(), 3);
        assert_eq!(dims.k(), 2001);
    }

    #[test]
    fn rejects_empty_problems() {
        assert_eq!(Dimensions::new(0, 5, 1.0), Err(DimensionError::ZeroDensities));
        assert_eq!(Dimensions::new(2, 0, 1.0), Err(DimensionError::ZeroPoints));
    }

    #[test]
    fn rejects_bad_spacing() {
        for mu in [0.0, -0.5, f64::INFINITY] {
            assert!(matches!(
                Dimensions::new(1, 1, mu),
                Err(DimensionError::InvalidSpacing { .. })
            ));
        }
        assert!(Dimensions::new(1, 1, f64::NAN).is_err());
    }
}
