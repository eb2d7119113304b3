//! IDM follower simulation and route speed profiles for a transit marche type.
//!
//! # Modules
//!
//! - [`idm`]: the Intelligent Driver Model acceleration law and its parameters
//! - [`follower`]: time-steps a follower behind a lead driving at a prescribed speed
//! - [`route`]: time-steps a vehicle through a sequence of stations with dwell
//!
//! [`Simulator`] bundles IDM parameters with a time step and exposes both
//! simulations behind one entry point.

pub mod follower;
pub mod idm;
pub mod route;

mod error;
mod simulator;

pub use error::Error;
pub use idm::{IdmParameters, ParamsError};
pub use simulator::{DEFAULT_DT, Simulator, simulate_marche_type};
