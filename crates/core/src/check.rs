//! Feasibility checks that must pass before a solver may run.
//!
//! Each check inspects one concern of a problem and returns `Ok(())` or the
//! [`CheckError`] naming the first rule it violated. The checks hold no state
//! and never touch the data they inspect; recording the outcome is left to
//! the caller (see [`Problem`](crate::Problem)).
//!
//! # Rule order
//!
//! Band and candidate checks evaluate their rules in a fixed order and stop at
//! the first failure, so when several rules are violated the earliest one is
//! reported:
//!
//! | Check           | Rules, in order                                              |
//! |-----------------|--------------------------------------------------------------|
//! | [`check_bands`] | both set, shape, `upper >= lower`, per-row mass, upper finite |
//! | [`check_p`]     | bands set, shape, `q >= lower`, `upper >= q`                 |
//!
//! Per-row mass means, for each row in turn: `sum(lower) * mu <= 1`, then
//! `min(lower) >= 0`, then `sum(upper) * mu >= 1`.
//!
//! Only the upper band is required to be finite. A non-finite lower band can
//! still fail the ordering, mass, or sign rules, but is never rejected for
//! being non-finite as such.

mod error;


pub use error::{BandViolation, CandidateViolation, CheckError, ObjectivePart};

use ndarray::ArrayView2;
use tracing::debug;

use crate::{Dimensions, Tolerances, linalg};

type BandRule =
    fn(&Dimensions, ArrayView2<'_, f64>, ArrayView2<'_, f64>) -> Result<(), BandViolation>;

type CandidateRule = fn(
    &Dimensions,
    ArrayView2<'_, f64>,
    ArrayView2<'_, f64>,
    ArrayView2<'_, f64>,
) -> Result<(), CandidateViolation>;

const BAND_RULES: [BandRule; 4] = [band_shape, band_order, band_mass, upper_finite];

const CANDIDATE_RULES: [CandidateRule; 3] = [candidate_shape, above_lower, below_upper];

/// Checks that an objective has an evaluator, a derivative, and parameters.
///
/// # Errors
///
/// Returns [`CheckError::Objective`] naming the first missing part.
pub fn check_f<F, D, P>(
    f: Option<&F>,
    df: Option<&D>,
    params: Option<&P>,
) -> Result<(), CheckError>
where
    F: ?Sized,
    D: ?Sized,
    P: ?Sized,
{
    let missing = if f.is_none() {
        Some(ObjectivePart::Evaluator)
    } else if df.is_none() {
        Some(ObjectivePart::Derivative)
    } else if params.is_none() {
        Some(ObjectivePart::Params)
    } else {
        None
    };

    match missing {
        Some(part) => {
            debug!(%part, "objective check failed");
            Err(CheckError::Objective(part))
        }
        None => Ok(()),
    }
}

/// Checks that the bands describe a non-empty, finite feasible set for every
/// density.
///
/// # Errors
///
/// Returns [`CheckError::Bands`] with the first violated rule, in the order
/// given in the [module docs](self).
pub fn check_bands(
    dims: &Dimensions,
    lower: Option<ArrayView2<'_, f64>>,
    upper: Option<ArrayView2<'_, f64>>,
) -> Result<(), CheckError> {
    let (Some(lower), Some(upper)) = (lower, upper) else {
        debug!(violation = %BandViolation::Missing, "band check failed");
        return Err(BandViolation::Missing.into());
    };

    BAND_RULES
        .iter()
        .try_for_each(|rule| rule(dims, lower, upper))
        .map_err(|violation| {
            debug!(%violation, "band check failed");
            violation.into()
        })
}

/// Checks that every convergence tolerance is strictly positive.
///
/// # Errors
///
/// Returns [`CheckError::Tolerances`] naming the first offending tolerance.
pub fn check_tolerances(tolerances: &Tolerances) -> Result<(), CheckError> {
    tolerances.validate().map_err(|violation| {
        debug!(%violation, "tolerance check failed");
        violation.into()
    })
}

/// Checks that a density matrix has the problem's shape and lies within the
/// bands, bounds included.
///
/// # Errors
///
/// Returns [`CheckError::Bands`] if either band is missing, otherwise
/// [`CheckError::Candidate`] with the first violated rule.
pub fn check_p(
    dims: &Dimensions,
    lower: Option<ArrayView2<'_, f64>>,
    upper: Option<ArrayView2<'_, f64>>,
    q: ArrayView2<'_, f64>,
) -> Result<(), CheckError> {
    let (Some(lower), Some(upper)) = (lower, upper) else {
        debug!("density matrix check failed: bands not set");
        return Err(BandViolation::Missing.into());
    };

    candidate_within(dims, lower, upper, q).map_err(CheckError::from)
}

/// Runs the candidate rules against bands that are known to be set.
pub(crate) fn candidate_within(
    dims: &Dimensions,
    lower: ArrayView2<'_, f64>,
    upper: ArrayView2<'_, f64>,
    q: ArrayView2<'_, f64>,
) -> Result<(), CandidateViolation> {
    CANDIDATE_RULES
        .iter()
        .try_for_each(|rule| rule(dims, lower, upper, q))
        .inspect_err(|violation| debug!(%violation, "density matrix check failed"))
}

fn band_shape(
    dims: &Dimensions,
    lower: ArrayView2<'_, f64>,
    upper: ArrayView2<'_, f64>,
) -> Result<(), BandViolation> {
    let expected = dims.shape();
    if lower.dim() == expected && upper.dim() == expected {
        Ok(())
    } else {
        Err(BandViolation::Shape {
            expected,
            lower: lower.dim(),
            upper: upper.dim(),
        })
    }
}

fn band_order(
    _dims: &Dimensions,
    lower: ArrayView2<'_, f64>,
    upper: ArrayView2<'_, f64>,
) -> Result<(), BandViolation> {
    if linalg::matrix_geq(upper, lower) {
        Ok(())
    } else {
        Err(BandViolation::Unordered)
    }
}

fn band_mass(
    dims: &Dimensions,
    lower: ArrayView2<'_, f64>,
    upper: ArrayView2<'_, f64>,
) -> Result<(), BandViolation> {
    let mu = dims.mu();

    for (row, (lo, hi)) in lower.rows().into_iter().zip(upper.rows()).enumerate() {
        let mass = linalg::vector_sum(lo) * mu;
        if mass > 1.0 {
            return Err(BandViolation::LowerMass { row, mass });
        }
        if linalg::vector_min(lo) < 0.0 {
            return Err(BandViolation::NegativeLower { row });
        }

        let mass = linalg::vector_sum(hi) * mu;
        if mass < 1.0 {
            return Err(BandViolation::UpperMass { row, mass });
        }
    }

    Ok(())
}

fn upper_finite(
    _dims: &Dimensions,
    _lower: ArrayView2<'_, f64>,
    upper: ArrayView2<'_, f64>,
) -> Result<(), BandViolation> {
    if linalg::matrix_finite(upper) {
        Ok(())
    } else {
        Err(BandViolation::NonFiniteUpper)
    }
}

fn candidate_shape(
    dims: &Dimensions,
    _lower: ArrayView2<'_, f64>,
    _upper: ArrayView2<'_, f64>,
    q: ArrayView2<'_, f64>,
) -> Result<(), CandidateViolation> {
    let expected = dims.shape();
    if q.dim() == expected {
        Ok(())
    } else {
        Err(CandidateViolation::Shape {
            expected,
            found: q.dim(),
        })
    }
}

fn above_lower(
    _dims: &Dimensions,
    lower: ArrayView2<'_, f64>,
    _upper: ArrayView2<'_, f64>,
    q: ArrayView2<'_, f64>,
) -> Result<(), CandidateViolation> {
    if linalg::matrix_geq(q, lower) {
        Ok(())
    } else {
        Err(CandidateViolation::BelowLower)
    }
}

fn below_upper(
    _dims: &Dimensions,
    _lower: ArrayView2<'_, f64>,
    upper: ArrayView2<'_, f64>,
    q: ArrayView2<'_, f64>,
) -> Result<(), CandidateViolation> {
    if linalg::matrix_geq(upper, q) {
        Ok(())
    } else {
        Err(CandidateViolation::AboveUpper)
    }
}
