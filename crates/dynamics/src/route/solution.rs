use marche_core::Trajectory;

/// Indicates how the generator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the last station and completed its dwell.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,

    /// The time step became too small to move the vehicle toward `station`.
    Stalled { station: usize },
}

/// Arrival at a station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrival {
    /// Index of the station in the route.
    pub station: usize,

    /// Station position (m).
    pub position: f64,

    /// Time of arrival (s).
    pub time: f64,
}

/// The result of a route profile generation.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the generator terminated.
    pub status: Status,

    /// The sampled speed profile.
    pub trajectory: Trajectory,

    /// One entry per station reached after the origin, in route order.
    pub arrivals: Vec<Arrival>,
}
