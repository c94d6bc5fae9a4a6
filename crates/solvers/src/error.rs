use std::error::Error as StdError;

use lfd_core::CheckError;

/// Errors that can occur when solving an LFD problem.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The problem was not ready; carries its latched status unchanged.
    #[error("problem rejected: {0}")]
    Rejected(lfd_core::Status),

    /// The engine's density matrix is misshaped or outside the bands.
    #[error("engine returned an infeasible density matrix: {0}")]
    InvalidSolution(#[source] CheckError),

    #[error("engine error: {0}")]
    Engine(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn engine<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Engine(Box::new(err))
    }

    /// Returns the problem status that caused a rejection.
    #[must_use]
    pub fn rejected_status(&self) -> Option<lfd_core::Status> {
        match self {
            Self::Rejected(status) => Some(*status),
            Self::InvalidSolution(_) | Self::Engine(_) => None,
        }
    }
}
