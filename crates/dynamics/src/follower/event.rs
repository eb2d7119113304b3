use marche_core::VehicleState;

/// Event emitted by the follower simulator after each step.
///
/// Steps are numbered from 1; there is no event for the initial states.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// The step number (1..=N).
    pub step: usize,

    /// Elapsed time at the end of the step (s).
    pub time: f64,

    /// Lead vehicle state after the step.
    pub lead: VehicleState,

    /// Follower state after the step.
    pub follower: VehicleState,

    /// Acceleration applied to the follower during the step (m/s²).
    pub acceleration: f64,
}

impl Event {
    /// Returns the gap between the two vehicles after the step (m).
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.follower.gap_to(&self.lead)
    }
}
