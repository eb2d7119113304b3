//! Capability traits for cross-simulator observers.
//!
//! These traits abstract over simulator-specific event and action types, so
//! one observer can watch both a follower run and a route profile.
//!
//! # Example
//!
//! ```rust
//! use marche_core::Observer;
//! use marche_observers::traits::{CanStopEarly, HasElapsedTime};
//!
//! struct FirstMinute;
//!
//! impl<E: HasElapsedTime, A: CanStopEarly> Observer<E, A> for FirstMinute {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.elapsed_time() >= 60.0).then(A::stop_early)
//!     }
//! }
//! ```

use marche_dynamics::{follower, route};

/// An event that carries the simulated time at which it occurred.
pub trait HasElapsedTime {
    /// Returns the elapsed simulation time (s).
    fn elapsed_time(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the simulator early.
    fn stop_early() -> Self;
}

impl HasElapsedTime for follower::Event {
    fn elapsed_time(&self) -> f64 {
        self.time
    }
}

impl HasElapsedTime for route::Event {
    fn elapsed_time(&self) -> f64 {
        self.sample.time
    }
}

impl CanStopEarly for follower::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for route::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
