//! Problem definition and feasibility checks for least favorable densities.
//!
//! A least favorable densities (LFD) problem asks for `n` probability
//! densities, discretized over `k` support points of mass `mu`, that minimize
//! a convex [`Objective`] while staying within elementwise density [`Bands`]
//! and carrying unit mass each.
//!
//! This crate defines the problem and decides whether it is well posed:
//!
//! - [`Problem`]: the problem under construction, with a latched [`Status`]
//! - [`check`]: the feasibility checks run by each [`Problem`] setter
//! - [`Objective`], [`FnObjective`]: the functional to minimize
//! - [`Dimensions`], [`Bands`], [`Tolerances`]: the problem data
//! - [`linalg`]: allocation-free reductions used by the checks
//!
//! Solving is left to other crates, which must refuse any problem whose
//! status is not [`Status::Ok`].

mod bands;
mod dims;
mod objective;
mod problem;
mod status;
mod tolerances;

pub mod check;
pub mod linalg;

pub use bands::Bands;
pub use check::CheckError;
pub use dims::{DimensionError, Dimensions};
pub use objective::{FnObjective, Objective};
pub use problem::Problem;
pub use status::Status;
pub use tolerances::{Tolerance, ToleranceViolation, Tolerances};
