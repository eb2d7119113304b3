//! The Intelligent Driver Model (IDM) car-following law.
//!
//! The follower's acceleration is
//!
//! ```text
//! a · (1 − (v / v0)^δ − (s* / s)²)
//! s* = s0 + max(0, v·T + v·Δv / (2·√(a·b)))
//! ```
//!
//! where `s` is the gap to the lead vehicle and `Δv` the approach rate
//! (follower speed minus lead speed). A gap of zero or less returns `−b`
//! directly.

use marche_core::VehicleState;
use serde::Deserialize;
use thiserror::Error;

/// Default acceleration exponent.
pub const DEFAULT_DELTA: i32 = 4;

/// Parameters of the IDM car-following law.
///
/// Construct with [`IdmParameters::new`], which rejects values the law
/// cannot evaluate. Parameters are immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawIdmParameters")]
pub struct IdmParameters {
    v0: f64,
    t: f64,
    a: f64,
    b: f64,
    s0: f64,
    delta: i32,
}

/// Errors that can occur when validating IDM parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    #[error("desired speed v0 must be finite and positive")]
    DesiredSpeed,

    #[error("time headway T must be finite")]
    TimeHeadway,

    #[error("maximum acceleration a must be finite and positive")]
    MaxAcceleration,

    #[error("comfortable deceleration b must be finite and positive")]
    ComfortableDeceleration,

    #[error("minimum gap s0 must be finite")]
    MinimumGap,
}

impl IdmParameters {
    /// Creates validated parameters with the default exponent of 4.
    ///
    /// # Errors
    ///
    /// Returns an error if `v0`, `a`, or `b` is non-positive or non-finite,
    /// or if `t` or `s0` is non-finite.
    pub fn new(v0: f64, t: f64, a: f64, b: f64, s0: f64) -> Result<Self, ParamsError> {
        if !v0.is_finite() || v0 <= 0.0 {
            return Err(ParamsError::DesiredSpeed);
        }
        if !t.is_finite() {
            return Err(ParamsError::TimeHeadway);
        }
        if !a.is_finite() || a <= 0.0 {
            return Err(ParamsError::MaxAcceleration);
        }
        if !b.is_finite() || b <= 0.0 {
            return Err(ParamsError::ComfortableDeceleration);
        }
        if !s0.is_finite() {
            return Err(ParamsError::MinimumGap);
        }

        Ok(Self {
            v0,
            t,
            a,
            b,
            s0,
            delta: DEFAULT_DELTA,
        })
    }

    /// Returns a copy with a different acceleration exponent.
    #[must_use]
    pub fn with_delta(mut self, delta: i32) -> Self {
        self.delta = delta;
        self
    }

    /// Desired free-flow speed (m/s).
    #[must_use]
    pub fn v0(&self) -> f64 {
        self.v0
    }

    /// Desired time headway (s).
    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Maximum acceleration (m/s²).
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Comfortable deceleration (m/s²).
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Minimum jam gap (m).
    #[must_use]
    pub fn s0(&self) -> f64 {
        self.s0
    }

    /// Acceleration exponent.
    #[must_use]
    pub fn delta(&self) -> i32 {
        self.delta
    }

    /// Returns the desired dynamic gap `s*` for `follower` behind `lead`.
    ///
    /// The dynamic term is clamped at zero so `s*` never drops below `s0`.
    #[must_use]
    pub fn desired_gap(&self, lead: &VehicleState, follower: &VehicleState) -> f64 {
        let v = follower.velocity;
        let dv = follower.velocity - lead.velocity;
        let dynamic = v * self.t + (v * dv) / (2.0 * (self.a * self.b).sqrt());
        self.s0 + dynamic.max(0.0)
    }

    /// Returns the follower's acceleration (m/s²).
    ///
    /// See [`acceleration`].
    #[must_use]
    pub fn acceleration(&self, lead: &VehicleState, follower: &VehicleState) -> f64 {
        acceleration(lead, follower, self)
    }

    /// Returns the steady-state gap at which a follower holds `speed`
    /// behind a lead travelling at the same speed.
    ///
    /// Returns `None` when `speed` is at or above `v0`, where no finite
    /// equilibrium gap exists.
    #[must_use]
    pub fn equilibrium_gap(&self, speed: f64) -> Option<f64> {
        let free_term = 1.0 - (speed / self.v0).powi(self.delta);
        if free_term <= 0.0 {
            return None;
        }
        let desired = self.s0 + (speed * self.t).max(0.0);
        Some(desired / free_term.sqrt())
    }
}

/// Computes the IDM acceleration of `follower` behind `lead` (m/s²).
///
/// When the follower has reached or passed the lead the gap is not usable,
/// so the result is `−b`.
#[must_use]
pub fn acceleration(lead: &VehicleState, follower: &VehicleState, params: &IdmParameters) -> f64 {
    let s = follower.gap_to(lead);
    if s <= 0.0 {
        return -params.b;
    }

    let s_star = params.desired_gap(lead, follower);
    params.a * (1.0 - (follower.velocity / params.v0).powi(params.delta) - (s_star / s).powi(2))
}

/// Unvalidated mirror of [`IdmParameters`] used for deserialization.
#[derive(Debug, Deserialize)]
struct RawIdmParameters {
    v0: f64,
    #[serde(alias = "T")]
    t: f64,
    a: f64,
    b: f64,
    s0: f64,
    #[serde(default = "default_delta")]
    delta: i32,
}

fn default_delta() -> i32 {
    DEFAULT_DELTA
}

impl TryFrom<RawIdmParameters> for IdmParameters {
    type Error = ParamsError;

    fn try_from(raw: RawIdmParameters) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.v0, raw.t, raw.a, raw.b, raw.s0)?.with_delta(raw.delta))
    }
}
