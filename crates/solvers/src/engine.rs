use ndarray::{Array2, ArrayView2};

use lfd_core::{Bands, Dimensions, Objective, Problem, Tolerances};

use crate::{Config, Error, Status};

/// Which LFD method to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// The direct method: fast, but may fail to converge on hard problems.
    Direct,

    /// The proximal method: slower, but converges more reliably.
    Proximal,
}

/// An iterative procedure that computes least favorable densities.
///
/// Engines are only ever handed a [`Validated`] problem, so they can assume
/// every feasibility check has passed.
pub trait Engine {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs the given method on a validated problem.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the method cannot produce a result.
    fn run(
        &mut self,
        variant: Variant,
        problem: &Validated<'_, '_>,
        config: &Config,
    ) -> Result<Outcome, Self::Error>;
}

/// What an [`Engine`] hands back after running.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The density matrix, `n x k`.
    pub q: Array2<f64>,

    /// The objective at `q`.
    pub objective: f64,

    /// How the engine terminated.
    pub status: Status,

    /// Iterations performed.
    pub iters: usize,
}

/// Read-only view of a problem that has passed every check.
///
/// Only the solver entry points can create one, and only after confirming
/// that the problem's status is ok and its objective and bands are set.
pub struct Validated<'p, 'a> {
    problem: &'p Problem<'a>,
    objective: &'p (dyn Objective + 'a),
    bands: Bands<'a>,
}

impl<'p, 'a> Validated<'p, 'a> {
    pub(crate) fn new(problem: &'p Problem<'a>) -> Result<Self, Error> {
        let status = problem.status();
        if !status.is_ok() {
            return Err(Error::Rejected(status));
        }

        let objective = problem
            .objective()
            .ok_or(Error::Rejected(lfd_core::Status::InvalidF))?;
        let bands = *problem
            .bands()
            .ok_or(Error::Rejected(lfd_core::Status::InvalidBands))?;

        Ok(Self {
            problem,
            objective,
            bands,
        })
    }

    /// Returns the problem dimensions.
    #[must_use]
    pub fn dims(&self) -> &Dimensions {
        self.problem.dims()
    }

    /// Returns the objective to minimize.
    #[must_use]
    pub fn objective(&self) -> &'p (dyn Objective + 'a) {
        self.objective
    }

    /// Returns the density bands.
    #[must_use]
    pub fn bands(&self) -> Bands<'a> {
        self.bands
    }

    /// Returns the convergence tolerances.
    #[must_use]
    pub fn tolerances(&self) -> &Tolerances {
        self.problem.tolerances()
    }

    /// Returns the initial density matrix, if the caller supplied one.
    #[must_use]
    pub fn initial_q(&self) -> Option<ArrayView2<'p, f64>> {
        self.problem.q()
    }
}
