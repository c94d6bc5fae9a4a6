use std::fmt;

/// Outcome code latched on a [`Problem`](crate::Problem).
///
/// `Ok` means no check performed so far has failed. Every other variant names
/// the concern of the most recent failing check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Ok,

    /// Objective evaluator, derivative, or parameter context is missing.
    InvalidF,

    /// Density bands are missing, misshaped, unordered, infeasible, or not finite.
    InvalidBands,

    /// At least one convergence tolerance is not strictly positive.
    InvalidTolerances,

    /// The density matrix is misshaped or outside the bands.
    InvalidP,
}

impl Status {
    /// Returns `true` if no failure has been recorded.
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }

    /// Returns the fixed human-readable description of this code.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::InvalidF => "objective function, derivative, or parameters not specified",
            Self::InvalidBands => {
                "density bands are missing, misshaped, unordered, infeasible, or not finite"
            }
            Self::InvalidTolerances => "tolerances must be strictly positive",
            Self::InvalidP => "density matrix is misshaped or violates the density bands",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ok() {
        assert_eq!(Status::default(), Status::Ok);
        assert!(Status::default().is_ok());
    }

    #[test]
    fn only_ok_is_ok() {
        for status in [
            Status::InvalidF,
            Status::InvalidBands,
            Status::InvalidTolerances,
            Status::InvalidP,
        ] {
            assert!(!status.is_ok());
        }
    }

    #[test]
    fn display_uses_message() {
        assert_eq!(Status::Ok.to_string(), "success");
        assert_eq!(
            Status::InvalidTolerances.to_string(),
            "tolerances must be strictly positive"
        );
    }
}
