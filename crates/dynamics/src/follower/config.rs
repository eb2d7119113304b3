use thiserror::Error;

/// Step size, step count, and lead speed for a follower simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    dt: f64,
    steps: usize,
    lead_speed: f64,
}

/// Errors that can occur when validating a follower simulation config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("time step must be finite and positive")]
    TimeStep,

    #[error("lead speed must be finite")]
    LeadSpeed,
}

impl Config {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is non-positive or non-finite, or if
    /// `lead_speed` is non-finite.
    pub fn new(dt: f64, steps: usize, lead_speed: f64) -> Result<Self, ConfigError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::TimeStep);
        }
        if !lead_speed.is_finite() {
            return Err(ConfigError::LeadSpeed);
        }

        Ok(Self {
            dt,
            steps,
            lead_speed,
        })
    }

    /// Returns the time step (s).
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of steps to simulate.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the prescribed lead speed (m/s).
    #[must_use]
    pub fn lead_speed(&self) -> f64 {
        self.lead_speed
    }
}
