//! Core types for marche type simulations.
//!
//! This crate defines the shared values that the simulators, observers, and
//! the command-line runner build on:
//!
//! - [`VehicleState`]: position and velocity of one vehicle
//! - [`StepIntegrable`]: a state that can be advanced by a derivative and a step
//! - [`FollowerSample`], [`ProfileSample`], [`Trajectory`]: simulation output
//! - [`Observer`]: receives simulator events and optionally returns control actions

mod observer;
mod step;
mod trajectory;
mod vehicle;

pub use observer::Observer;
pub use step::StepIntegrable;
pub use trajectory::{FollowerSample, ProfileSample, Trajectory};
pub use vehicle::VehicleState;
