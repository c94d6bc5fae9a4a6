use std::fmt;

use thiserror::Error;

/// Convergence thresholds consumed by a solver.
///
/// All four must be strictly positive; their relative magnitudes are not
/// constrained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Threshold on the change of the density matrix between iterations.
    pub p: f64,

    /// Threshold on the change of the clipping constants between iterations.
    pub c: f64,

    /// Threshold on the change of the objective between iterations.
    pub objective: f64,

    /// Threshold on the mass consistency of each density.
    pub densities: f64,
}

/// Identifies one of the four tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tolerance {
    P,
    C,
    Objective,
    Densities,
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::P => "eps_p",
            Self::C => "eps_c",
            Self::Objective => "eps_objective",
            Self::Densities => "eps_densities",
        })
    }
}

/// A tolerance that is not strictly positive.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("{tolerance} must be strictly positive, got {value}")]
pub struct ToleranceViolation {
    pub tolerance: Tolerance,
    pub value: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            p: 1e-4,
            c: 1e-6,
            objective: 1e-6,
            densities: 1e-4,
        }
    }
}

impl Tolerances {
    /// Creates a set of tolerances without validating them.
    #[must_use]
    pub fn new(p: f64, c: f64, objective: f64, densities: f64) -> Self {
        Self {
            p,
            c,
            objective,
            densities,
        }
    }

    /// Validates that every tolerance is strictly positive.
    ///
    /// `NaN` is not positive and is rejected.
    ///
    /// # Errors
    ///
    /// Returns the first offending tolerance in `p`, `c`, `objective`,
    /// `densities` order.
    pub fn validate(&self) -> Result<(), ToleranceViolation> {
        let all = [
            (Tolerance::P, self.p),
            (Tolerance::C, self.c),
            (Tolerance::Objective, self.objective),
            (Tolerance::Densities, self.densities),
        ];

        match all.into_iter().find(|&(_, value)| !is_positive(value)) {
            Some((tolerance, value)) => Err(ToleranceViolation { tolerance, value }),
            None => Ok(()),
        }
    }
}

fn is_positive(value: f64) -> bool {
    value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Tolerances::default().validate().is_ok());
    }

    #[test]
    fn reports_first_offender() {
        let tol = Tolerances::new(1e-4, 0.0, -1.0, 1e-4);
        let err = tol.validate().expect_err("c and objective are invalid");

        assert_eq!(err.tolerance, Tolerance::C);
        assert_eq!(err.to_string(), "eps_c must be strictly positive, got 0");
    }

    #[test]
    fn rejects_nan() {
        let tol = Tolerances {
            densities: f64::NAN,
            ..Tolerances::default()
        };
        let err = tol.validate().expect_err("nan is not positive");
        assert_eq!(err.tolerance, Tolerance::Densities);
    }
}
