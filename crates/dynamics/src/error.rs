use thiserror::Error;

use crate::{follower, idm::ParamsError, route};

/// Errors returned by the [`Simulator`](crate::Simulator) entry points.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("time step must be finite and positive")]
    TimeStep,

    #[error("invalid IDM parameters: {0}")]
    Params(#[from] ParamsError),

    #[error("invalid follower config: {0}")]
    Follower(#[from] follower::ConfigError),

    #[error("invalid route config: {0}")]
    Route(#[from] route::ConfigError),

    #[error("invalid stations: {0}")]
    Stations(#[from] route::StationsError),

    #[error("route generation stalled before station {station}: the time step no longer moves the vehicle")]
    RouteStalled { station: usize },
}
