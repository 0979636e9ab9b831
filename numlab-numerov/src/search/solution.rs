use uom::si::f64::Energy;

/// Indicates how the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The boundary value met the configured tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an energy search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// The trial energy the search settled on.
    pub energy: Energy,

    /// Boundary wavefunction value at the reported energy.
    pub psi: f64,

    /// Iteration count when the search finished.
    pub iters: usize,
}
