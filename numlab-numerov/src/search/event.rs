use uom::si::f64::Energy;

use super::StepDirection;

/// Iteration event emitted by the energy search.
///
/// Fields hold the state after the iteration's update: the direction just
/// moved, the step that was applied, and the fresh boundary value at the new
/// trial energy. A `step` smaller than the previous event's marks a
/// refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based within the search loop).
    pub iter: usize,

    /// Direction of this iteration's energy adjustment.
    pub direction: StepDirection,

    /// Step size applied this iteration.
    pub step: Energy,

    /// Trial energy after the adjustment.
    pub energy: Energy,

    /// Boundary wavefunction value at the trial energy.
    pub psi: f64,
}
