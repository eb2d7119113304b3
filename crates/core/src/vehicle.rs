use crate::StepIntegrable;

/// Longitudinal state of a single vehicle.
///
/// Positions are in meters along the route and velocities in meters per
/// second. Velocity is expected to be non-negative but the type does not
/// enforce it; the integrators clamp it instead.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleState {
    /// Position (m).
    pub position: f64,

    /// Velocity (m/s).
    pub velocity: f64,
}

impl VehicleState {
    /// Creates a state from a position and velocity.
    #[must_use]
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// Creates a stationary state at `position`.
    #[must_use]
    pub fn at_rest(position: f64) -> Self {
        Self::new(position, 0.0)
    }

    /// Returns the state after driving at a prescribed `speed` for `dt`.
    ///
    /// The velocity is replaced outright, so a change of speed is
    /// instantaneous. The position then advances with explicit Euler.
    #[must_use]
    pub fn cruise(&self, speed: f64, dt: f64) -> Self {
        Self {
            position: self.position + speed * dt,
            velocity: speed,
        }
    }

    /// Returns the gap from this vehicle to `lead`, in meters.
    #[must_use]
    pub fn gap_to(&self, lead: &Self) -> f64 {
        lead.position - self.position
    }
}

/// Steps a vehicle with its acceleration (m/s²).
///
/// The velocity is updated first and clamped at zero since vehicles do not
/// reverse; the position then advances with the updated velocity.
impl StepIntegrable<f64> for VehicleState {
    type Derivative = f64;

    fn step(&self, acceleration: f64, dt: f64) -> Self {
        let velocity = (self.velocity + acceleration * dt).max(0.0);
        Self {
            position: self.position + velocity * dt,
            velocity,
        }
    }
}
