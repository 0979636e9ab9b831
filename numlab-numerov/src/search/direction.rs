/// Direction of the last energy adjustment.
///
/// The search infers overshoot from the boundary value's sign: when the sign
/// calls for a move against the previous direction, the zero crossing was
/// passed, so the step shrinks before the search turns around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// The last adjustment raised the trial energy.
    Increasing,

    /// The last adjustment lowered the trial energy.
    Decreasing,
}
