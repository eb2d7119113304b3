use marche_core::{FollowerSample, VehicleState};

/// Indicates how the simulation terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a follower simulation.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the simulation terminated.
    pub status: Status,

    /// Follower samples, one per completed step.
    pub samples: Vec<FollowerSample>,

    /// Number of steps completed.
    pub steps: usize,

    /// Final lead state.
    pub lead: VehicleState,

    /// Final follower state.
    pub follower: VehicleState,
}

impl Solution {
    /// Returns the samples as `(position, velocity)` pairs.
    #[must_use]
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.samples.iter().copied().map(Into::into).collect()
    }
}
