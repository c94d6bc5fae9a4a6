//! Solver entry points for least favorable densities (LFD) problems.
//!
//! The iterative methods themselves are supplied through the [`Engine`]
//! trait. This crate owns the contract around them:
//!
//! 1. Read the problem's latched status. If it is not ok, return
//!    [`Error::Rejected`] with that same status and do nothing else.
//! 2. Confirm the objective and bands are set, which the solve needs even
//!    when no check has failed.
//! 3. Run the engine on a read-only [`Validated`] view of the problem.
//! 4. Check the resulting density matrix against the problem's shape and
//!    bands, then write it back to the problem.
//!
//! No partial or best-effort solve is attempted on a rejected problem.
//!
//! # Methods
//!
//! - [`minimize`]: runs the direct method ([`Variant::Direct`])
//! - [`minimize_proximal`]: runs the proximal method ([`Variant::Proximal`]),
//!   slower but more robust when the direct method fails to converge

mod config;
mod engine;
mod error;
mod solution;

pub use config::Config;
pub use engine::{Engine, Outcome, Validated, Variant};
pub use error::Error;
pub use solution::{Solution, Status};

use lfd_core::Problem;
use tracing::{debug, info, warn};

/// Solves the problem with the direct method.
///
/// On success the density matrix is stored on `problem`.
///
/// # Errors
///
/// Returns [`Error::Rejected`] if the problem is not ready to solve,
/// [`Error::Engine`] if the engine fails, or [`Error::InvalidSolution`] if the
/// engine returns a misshaped or out-of-band matrix.
pub fn minimize<E: Engine>(
    problem: &mut Problem<'_>,
    engine: &mut E,
    config: &Config,
) -> Result<Solution, Error> {
    solve(problem, engine, config, Variant::Direct)
}

/// Solves the problem with the proximal method.
///
/// On success the density matrix is stored on `problem`.
///
/// # Errors
///
/// Returns [`Error::Rejected`] if the problem is not ready to solve,
/// [`Error::Engine`] if the engine fails, or [`Error::InvalidSolution`] if the
/// engine returns a misshaped or out-of-band matrix.
pub fn minimize_proximal<E: Engine>(
    problem: &mut Problem<'_>,
    engine: &mut E,
    config: &Config,
) -> Result<Solution, Error> {
    solve(problem, engine, config, Variant::Proximal)
}

fn solve<E: Engine>(
    problem: &mut Problem<'_>,
    engine: &mut E,
    config: &Config,
    variant: Variant,
) -> Result<Solution, Error> {
    let outcome = {
        let validated = Validated::new(problem).inspect_err(|error| {
            warn!(?variant, %error, "refusing to solve");
        })?;

        info!(
            ?variant,
            max_iters = config.max_iters_for(variant),
            "solving"
        );
        engine
            .run(variant, &validated, config)
            .map_err(Error::engine)?
    };

    let Outcome {
        q,
        objective,
        status,
        iters,
    } = outcome;
    problem.store_solution(q).map_err(Error::InvalidSolution)?;

    debug!(?variant, ?status, iters, objective, "solved");
    Ok(Solution {
        status,
        objective,
        iters,
    })
}
