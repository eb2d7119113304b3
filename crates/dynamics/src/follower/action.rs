/// Control actions supported by the follower simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the simulation and return the samples so far.
    StopEarly,
}
