/// Actions an observer can take during the energy search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search early and return the current iterate.
    StopEarly,
}
