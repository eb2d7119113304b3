use marche_core::Observer;
use thiserror::Error;

use crate::traits::{CanStopEarly, HasElapsedTime};

/// Stops a simulation once its elapsed time reaches a horizon.
///
/// The event at or past the horizon is the last one recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeLimit {
    horizon: f64,
}

/// Error returned for a horizon that is not finite and positive.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("time horizon must be finite and positive, got {0}")]
pub struct HorizonError(pub f64);

impl TimeLimit {
    /// Creates an observer that stops at `horizon` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`HorizonError`] if `horizon` is non-positive or non-finite.
    pub fn new(horizon: f64) -> Result<Self, HorizonError> {
        if !horizon.is_finite() || horizon <= 0.0 {
            return Err(HorizonError(horizon));
        }
        Ok(Self { horizon })
    }
}

impl<E: HasElapsedTime, A: CanStopEarly> Observer<E, A> for TimeLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.elapsed_time() >= self.horizon).then(A::stop_early)
    }
}
