use std::fmt;

use ndarray::{Array2, ArrayView1, ArrayView2};
use tracing::{info, warn};

use crate::{
    Bands, Dimensions, FnObjective, Objective, Status, Tolerances,
    check::{self, BandViolation, CandidateViolation, CheckError},
};

/// A least favorable densities problem under construction.
///
/// A problem starts out with only its [`Dimensions`] fixed. The caller then
/// supplies an objective, density bands, and optionally tolerances and an
/// initial density matrix. Each setter runs the matching check before storing
/// anything:
///
/// - On success the value is stored.
/// - On failure nothing is stored and the failure is latched in
///   [`Problem::status`].
///
/// A latched failure is sticky. Later successful setters do not clear it; only
/// [`Problem::reset`] does. If several setters fail, the most recent failure
/// is the one reported.
///
/// Bands and the objective's parameters are borrowed for `'a`. The density
/// matrix is owned, since a solver writes its result back into it.
pub struct Problem<'a> {
    dims: Dimensions,
    objective: Option<Box<dyn Objective + 'a>>,
    bands: Option<Bands<'a>>,
    tolerances: Tolerances,
    q: Option<Array2<f64>>,
    status: Status,
    last_error: Option<CheckError>,
}

impl<'a> Problem<'a> {
    /// Creates an empty problem with default tolerances.
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            objective: None,
            bands: None,
            tolerances: Tolerances::default(),
            q: None,
            status: Status::Ok,
            last_error: None,
        }
    }

    /// Returns the problem dimensions.
    #[must_use]
    pub fn dims(&self) -> &Dimensions {
        &self.dims
    }

    /// Returns the latched status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the failure behind the latched status, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&CheckError> {
        self.last_error.as_ref()
    }

    /// Returns the objective, if one has been accepted.
    #[must_use]
    pub fn objective(&self) -> Option<&(dyn Objective + 'a)> {
        self.objective.as_deref()
    }

    /// Returns the density bands, if they have been accepted.
    #[must_use]
    pub fn bands(&self) -> Option<&Bands<'a>> {
        self.bands.as_ref()
    }

    /// Returns the current convergence tolerances.
    #[must_use]
    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// Returns the current density matrix.
    ///
    /// This is the accepted initial guess before solving and the solver's
    /// result afterwards.
    #[must_use]
    pub fn q(&self) -> Option<ArrayView2<'_, f64>> {
        self.q.as_ref().map(Array2::view)
    }

    /// Sets the objective from an evaluator, its derivative, and their shared
    /// parameters.
    ///
    /// All three must be present. The evaluator is called as
    /// `f(x, k, params)` and the derivative as `df(n, x, k, params)`.
    pub fn set_f<F, D, P>(
        &mut self,
        f: Option<F>,
        df: Option<D>,
        params: Option<&'a P>,
    ) -> Status
    where
        P: ?Sized,
        F: Fn(ArrayView1<'_, f64>, usize, &P) -> f64 + 'a,
        D: Fn(usize, ArrayView1<'_, f64>, usize, &P) -> f64 + 'a,
    {
        let outcome = check::check_f(f.as_ref(), df.as_ref(), params);
        if let (Some(f), Some(df), Some(params)) = (f, df, params) {
            self.objective = Some(Box::new(FnObjective::new(f, df, params)));
        }
        self.record(outcome)
    }

    /// Sets a complete objective.
    ///
    /// Nothing is checked, so the latched status is returned unchanged.
    pub fn set_objective<O: Objective + 'a>(&mut self, objective: O) -> Status {
        self.objective = Some(Box::new(objective));
        self.status
    }

    /// Sets the lower and upper density bands.
    ///
    /// A density matrix already on the problem is re-checked against the new
    /// bands. If it no longer fits, it is discarded and `InvalidP` is latched.
    pub fn set_bands(
        &mut self,
        lower: ArrayView2<'a, f64>,
        upper: ArrayView2<'a, f64>,
    ) -> Status {
        let outcome = check::check_bands(&self.dims, Some(lower), Some(upper));
        if outcome.is_err() {
            return self.record(outcome);
        }
        self.bands = Some(Bands::new(lower, upper));

        let outcome = match &self.q {
            Some(q) => check::candidate_within(&self.dims, lower, upper, q.view())
                .map_err(CheckError::from),
            None => Ok(()),
        };
        if outcome.is_err() {
            self.q = None;
        }
        self.record(outcome)
    }

    /// Sets the convergence tolerances.
    pub fn set_tolerances(&mut self, tolerances: Tolerances) -> Status {
        let outcome = check::check_tolerances(&tolerances);
        if outcome.is_ok() {
            self.tolerances = tolerances;
        }
        self.record(outcome)
    }

    /// Sets the initial density matrix, copying `q`.
    ///
    /// The bands must already be set.
    pub fn set_initial_q(&mut self, q: ArrayView2<'_, f64>) -> Status {
        let outcome = check::check_p(&self.dims, self.lower(), self.upper(), q);
        if outcome.is_ok() {
            self.q = Some(q.to_owned());
        }
        self.record(outcome)
    }

    /// Re-checks that an objective is present.
    pub fn check_f(&mut self) -> Status {
        let present = self.objective.as_ref();
        let outcome = check::check_f(present, present, present);
        self.record(outcome)
    }

    /// Re-checks the stored bands.
    pub fn check_bands(&mut self) -> Status {
        let outcome = check::check_bands(&self.dims, self.lower(), self.upper());
        self.record(outcome)
    }

    /// Re-checks the stored tolerances.
    pub fn check_tolerances(&mut self) -> Status {
        let outcome = check::check_tolerances(&self.tolerances);
        self.record(outcome)
    }

    /// Re-checks the stored density matrix against the stored bands.
    pub fn check_p(&mut self) -> Status {
        let outcome = match (&self.bands, &self.q) {
            (None, _) => Err(BandViolation::Missing.into()),
            (Some(_), None) => Err(CandidateViolation::Missing.into()),
            (Some(_), Some(q)) => {
                check::check_p(&self.dims, self.lower(), self.upper(), q.view())
            }
        };
        self.record(outcome)
    }

    /// Replaces the density matrix with a solver result.
    ///
    /// `q` must pass the same rules as an initial density matrix. A rejected
    /// result is not stored, and the latched status is left untouched either
    /// way.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Bands`] if no bands are set, or
    /// [`CheckError::Candidate`] if `q` is misshaped or outside the bands.
    pub fn store_solution(&mut self, q: Array2<f64>) -> Result<(), CheckError> {
        check::check_p(&self.dims, self.lower(), self.upper(), q.view())?;
        self.q = Some(q);
        Ok(())
    }

    /// Discards everything but the dimensions and clears the latched status.
    pub fn reset(&mut self) {
        info!(status = %self.status, "resetting problem");
        *self = Self::new(self.dims);
    }

    fn lower(&self) -> Option<ArrayView2<'a, f64>> {
        self.bands.map(|bands| bands.lower())
    }

    fn upper(&self) -> Option<ArrayView2<'a, f64>> {
        self.bands.map(|bands| bands.upper())
    }

    /// Latches a failure and returns the resulting status.
    fn record(&mut self, outcome: Result<(), CheckError>) -> Status {
        if let Err(error) = outcome {
            warn!(status = %error.status(), %error, "problem check failed");
            self.status = error.status();
            self.last_error = Some(error);
        }
        self.status
    }
}

impl fmt::Debug for Problem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("dims", &self.dims)
            .field("objective", &self.objective.is_some())
            .field("bands", &self.bands)
            .field("tolerances", &self.tolerances)
            .field("q", &self.q)
            .field("status", &self.status)
            .field("last_error", &self.last_error)
            .finish()
    }
}
