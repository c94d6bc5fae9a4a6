use std::fmt;

use thiserror::Error;

use crate::{Status, ToleranceViolation};

/// A failed feasibility check.
///
/// Each variant maps to exactly one [`Status`] code through
/// [`CheckError::status`]; the payload says which rule failed.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CheckError {
    #[error("objective is incomplete: missing {0}")]
    Objective(ObjectivePart),

    #[error("invalid bands: {0}")]
    Bands(#[from] BandViolation),

    #[error("invalid tolerances: {0}")]
    Tolerances(#[from] ToleranceViolation),

    #[error("invalid density matrix: {0}")]
    Candidate(#[from] CandidateViolation),
}

impl CheckError {
    /// Returns the status code this failure latches.
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::Objective(_) => Status::InvalidF,
            Self::Bands(_) => Status::InvalidBands,
            Self::Tolerances(_) => Status::InvalidTolerances,
            Self::Candidate(_) => Status::InvalidP,
        }
    }
}

/// The part of an objective that was not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectivePart {
    Evaluator,
    Derivative,
    Params,
}

impl fmt::Display for ObjectivePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Evaluator => "evaluator",
            Self::Derivative => "derivative",
            Self::Params => "parameters",
        })
    }
}

/// The band rule that rejected a pair of density bands.
///
/// Variants are listed in the order the rules are evaluated.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BandViolation {
    #[error("lower or upper band not set")]
    Missing,

    #[error("expected shape {expected:?}, got {lower:?} (lower) and {upper:?} (upper)")]
    Shape {
        expected: (usize, usize),
        lower: (usize, usize),
        upper: (usize, usize),
    },

    #[error("upper band is below the lower band")]
    Unordered,

    #[error("lower band of density {row} has mass {mass}, more than 1")]
    LowerMass { row: usize, mass: f64 },

    #[error("lower band of density {row} has a negative entry")]
    NegativeLower { row: usize },

    #[error("upper band of density {row} has mass {mass}, less than 1")]
    UpperMass { row: usize, mass: f64 },

    #[error("upper band has a non-finite entry")]
    NonFiniteUpper,
}

/// The rule that rejected a candidate density matrix.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CandidateViolation {
    #[error("density matrix not set")]
    Missing,

    #[error("expected shape {expected:?}, got {found:?}")]
    Shape {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("density matrix is below the lower band")]
    BelowLower,

    #[error("density matrix is above the upper band")]
    AboveUpper,
}
