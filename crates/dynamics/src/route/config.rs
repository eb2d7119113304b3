use serde::Deserialize;
use thiserror::Error;

/// Largest number of dwell samples recorded at a single station.
pub const MAX_DWELL_STEPS: usize = 1_000_000;

/// Kinematic limits of the vehicle driving the route.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawLimits")]
pub struct Limits {
    accel: f64,
    decel: f64,
    v_max: f64,
}

/// Time step and dwell time for route profile generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    dt: f64,
    dwell_time: f64,
    limits: Limits,
}

/// Errors that can occur when validating a route config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("acceleration must be finite and positive")]
    Accel,

    #[error("deceleration must be finite and positive")]
    Decel,

    #[error("maximum speed must be finite and positive")]
    MaxSpeed,

    #[error("time step must be finite and positive")]
    TimeStep,

    #[error("dwell time must be finite and non-negative")]
    DwellTime,

    #[error("dwell time must span at most {} time steps", MAX_DWELL_STEPS)]
    DwellSteps,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            accel: 0.7,
            decel: 0.7,
            v_max: 20.0,
        }
    }
}

impl Limits {
    /// Creates validated limits.
    ///
    /// # Errors
    ///
    /// Returns an error if any limit is non-positive or non-finite.
    pub fn new(accel: f64, decel: f64, v_max: f64) -> Result<Self, ConfigError> {
        if !accel.is_finite() || accel <= 0.0 {
            return Err(ConfigError::Accel);
        }
        if !decel.is_finite() || decel <= 0.0 {
            return Err(ConfigError::Decel);
        }
        if !v_max.is_finite() || v_max <= 0.0 {
            return Err(ConfigError::MaxSpeed);
        }

        Ok(Self {
            accel,
            decel,
            v_max,
        })
    }

    /// Returns the acceleration rate (m/s²).
    #[must_use]
    pub fn accel(&self) -> f64 {
        self.accel
    }

    /// Returns the braking rate (m/s²).
    #[must_use]
    pub fn decel(&self) -> f64 {
        self.decel
    }

    /// Returns the speed limit (m/s).
    #[must_use]
    pub fn v_max(&self) -> f64 {
        self.v_max
    }

    /// Returns the distance needed to stop from `speed` at the braking rate.
    #[must_use]
    pub fn stopping_distance(&self, speed: f64) -> f64 {
        speed * speed / (2.0 * self.decel)
    }
}

impl Config {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is non-positive or non-finite, if
    /// `dwell_time` is negative or non-finite, or if the dwell would take
    /// more than [`MAX_DWELL_STEPS`] samples.
    pub fn new(dt: f64, dwell_time: f64, limits: Limits) -> Result<Self, ConfigError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::TimeStep);
        }
        if !dwell_time.is_finite() || dwell_time < 0.0 {
            return Err(ConfigError::DwellTime);
        }
        #[allow(clippy::cast_precision_loss)]
        let cap = MAX_DWELL_STEPS as f64;
        if (dwell_time / dt).floor() > cap {
            return Err(ConfigError::DwellSteps);
        }

        Ok(Self {
            dt,
            dwell_time,
            limits,
        })
    }

    /// Returns the time step (s).
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the kinematic limits.
    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns the number of dwell samples recorded at each station.
    ///
    /// This is `floor(dwell_time / dt)`.
    #[must_use]
    pub fn dwell_steps(&self) -> usize {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (self.dwell_time / self.dt).floor() as usize;
        steps
    }
}

/// Unvalidated mirror of [`Limits`] used for deserialization.
#[derive(Debug, Deserialize)]
struct RawLimits {
    accel: f64,
    decel: f64,
    v_max: f64,
}

impl TryFrom<RawLimits> for Limits {
    type Error = ConfigError;

    fn try_from(raw: RawLimits) -> Result<Self, Self::Error> {
        Self::new(raw.accel, raw.decel, raw.v_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_limits_are_valid() {
        let limits = Limits::default();
        assert_eq!(Limits::new(0.7, 0.7, 20.0), Ok(limits));
    }

    #[test]
    fn rejects_non_positive_limits() {
        assert_eq!(Limits::new(0.0, 0.7, 20.0), Err(ConfigError::Accel));
        assert_eq!(Limits::new(0.7, -0.7, 20.0), Err(ConfigError::Decel));
        assert_eq!(Limits::new(0.7, 0.7, f64::NAN), Err(ConfigError::MaxSpeed));
    }

    #[test]
    fn rejects_invalid_step_and_dwell() {
        let limits = Limits::default();
        assert_eq!(Config::new(0.0, 30.0, limits), Err(ConfigError::TimeStep));
        assert_eq!(Config::new(0.5, -1.0, limits), Err(ConfigError::DwellTime));
    }

    #[test]
    fn caps_dwell_samples_per_station() {
        let limits = Limits::default();

        let at_cap = Config::new(1.0, 1.0e6, limits).unwrap();
        assert_eq!(at_cap.dwell_steps(), MAX_DWELL_STEPS);

        assert_eq!(Config::new(1.0, 1.0e6 + 1.0, limits), Err(ConfigError::DwellSteps));
        assert_eq!(Config::new(0.5, 1.0e300, limits), Err(ConfigError::DwellSteps));
        assert_eq!(Config::new(1.0e-300, 1.0, limits), Err(ConfigError::DwellSteps));
    }

    #[test]
    fn dwell_steps_round_down() {
        let limits = Limits::default();
        assert_eq!(Config::new(0.5, 30.0, limits).unwrap().dwell_steps(), 60);
        assert_eq!(Config::new(0.5, 30.9, limits).unwrap().dwell_steps(), 61);
        assert_eq!(Config::new(0.5, 0.4, limits).unwrap().dwell_steps(), 0);
    }

    #[test]
    fn stopping_distance_follows_constant_deceleration() {
        let limits = Limits::new(1.0, 2.0, 20.0).unwrap();
        assert_relative_eq!(limits.stopping_distance(10.0), 25.0);
        assert_relative_eq!(limits.stopping_distance(0.0), 0.0);
    }
}
