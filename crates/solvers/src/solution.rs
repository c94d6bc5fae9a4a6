/// Indicates how an engine terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the problem's tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,
}

/// The result of solving an LFD problem.
///
/// The density matrix itself is written back to the problem and read through
/// [`Problem::q`](lfd_core::Problem::q).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final engine status.
    pub status: Status,

    /// Objective at the stored density matrix.
    pub objective: f64,

    /// Iteration count when the engine finished.
    pub iters: usize,
}
