use marche_core::{Observer, Trajectory, VehicleState};

use crate::{
    Error,
    follower,
    idm::IdmParameters,
    route::{self, Limits, Stations},
};

/// Default time step (s).
pub const DEFAULT_DT: f64 = 0.5;

/// IDM parameters and a time step shared by both simulations.
///
/// # Example
///
/// ```
/// use marche_core::VehicleState;
/// use marche_dynamics::{IdmParameters, Simulator, route::Limits};
///
/// let params = IdmParameters::new(15.0, 1.5, 0.6, 1.5, 2.0)?;
/// let sim = Simulator::with_default_step(params);
///
/// let samples = sim.follow(VehicleState::new(50.0, 10.0), VehicleState::at_rest(0.0), 120, 10.0)?;
/// assert_eq!(samples.len(), 120);
///
/// let profile = sim.route(&[0.0, 300.0, 800.0, 1500.0], 30.0, Limits::default())?;
/// assert_eq!(profile.velocity().last(), Some(&0.0));
/// # Ok::<(), marche_dynamics::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulator {
    params: IdmParameters,
    dt: f64,
}

impl Simulator {
    /// Creates a simulator with an explicit time step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimeStep`] if `dt` is non-positive or non-finite.
    pub fn new(params: IdmParameters, dt: f64) -> Result<Self, Error> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(Error::TimeStep);
        }
        Ok(Self { params, dt })
    }

    /// Creates a simulator with the [`DEFAULT_DT`] time step.
    #[must_use]
    pub fn with_default_step(params: IdmParameters) -> Self {
        Self {
            params,
            dt: DEFAULT_DT,
        }
    }

    /// Simulates a follower behind a lead forced to `lead_speed`.
    ///
    /// Returns exactly `steps` `(position, velocity)` samples of the follower.
    ///
    /// # Errors
    ///
    /// Returns an error if `lead_speed` is non-finite.
    pub fn follow(
        &self,
        lead_init: VehicleState,
        follower_init: VehicleState,
        steps: usize,
        lead_speed: f64,
    ) -> Result<Vec<(f64, f64)>, Error> {
        let solution = self.follow_observed(lead_init, follower_init, steps, lead_speed, ())?;
        Ok(solution.pairs())
    }

    /// Simulates a follower and reports every step to `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error if `lead_speed` is non-finite.
    pub fn follow_observed<Obs>(
        &self,
        lead_init: VehicleState,
        follower_init: VehicleState,
        steps: usize,
        lead_speed: f64,
        observer: Obs,
    ) -> Result<follower::Solution, Error>
    where
        Obs: Observer<follower::Event, follower::Action>,
    {
        let config = follower::Config::new(self.dt, steps, lead_speed)?;
        Ok(follower::simulate(
            &self.params,
            lead_init,
            follower_init,
            &config,
            observer,
        ))
    }

    /// Generates the speed profile of a route with stops.
    ///
    /// # Errors
    ///
    /// Returns an error if the stations are empty, non-finite, or not
    /// strictly increasing, if `dwell_time` is negative or too long for the
    /// time step, or if the vehicle stalls before reaching a station.
    pub fn route(
        &self,
        stations: &[f64],
        dwell_time: f64,
        limits: Limits,
    ) -> Result<Trajectory, Error> {
        let solution = self.route_observed(stations, dwell_time, limits, ())?;
        match solution.status {
            route::Status::Stalled { station } => Err(Error::RouteStalled { station }),
            route::Status::Complete | route::Status::StoppedByObserver => {
                Ok(solution.trajectory)
            }
        }
    }

    /// Generates a route speed profile and reports every sample to `observer`.
    ///
    /// A stall is reported through [`route::Status::Stalled`] rather than
    /// as an error, so the partial profile stays available.
    ///
    /// # Errors
    ///
    /// Returns an error if the stations are empty, non-finite, or not
    /// strictly increasing, or if `dwell_time` is negative or too long for
    /// the time step.
    pub fn route_observed<Obs>(
        &self,
        stations: &[f64],
        dwell_time: f64,
        limits: Limits,
        observer: Obs,
    ) -> Result<route::Solution, Error>
    where
        Obs: Observer<route::Event, route::Action>,
    {
        let stations = Stations::try_from(stations)?;
        let config = route::Config::new(self.dt, dwell_time, limits)?;
        Ok(route::generate(&stations, &config, observer))
    }
}

/// Simulates a follower behind a lead forced to `lead_speed`.
///
/// Equivalent to [`Simulator::new`] followed by [`Simulator::follow`].
///
/// # Errors
///
/// Returns an error if `dt` is non-positive or either `dt` or `lead_speed`
/// is non-finite.
pub fn simulate_marche_type(
    lead_init: VehicleState,
    follower_init: VehicleState,
    params: &IdmParameters,
    dt: f64,
    steps: usize,
    lead_speed: f64,
) -> Result<Vec<(f64, f64)>, Error> {
    Simulator::new(*params, dt)?.follow(lead_init, follower_init, steps, lead_speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> IdmParameters {
        IdmParameters::new(15.0, 1.5, 0.6, 1.5, 2.0).expect("valid parameters")
    }

    #[test]
    fn rejects_invalid_time_step() {
        assert_eq!(Simulator::new(params(), 0.0), Err(Error::TimeStep));
        assert_eq!(Simulator::new(params(), f64::NAN), Err(Error::TimeStep));
    }

    #[test]
    fn free_function_matches_method() {
        let lead = VehicleState::new(50.0, 10.0);
        let follower = VehicleState::at_rest(0.0);

        let from_method = Simulator::new(params(), 0.5)
            .unwrap()
            .follow(lead, follower, 40, 10.0)
            .unwrap();
        let from_function = simulate_marche_type(lead, follower, &params(), 0.5, 40, 10.0).unwrap();

        assert_eq!(from_method, from_function);
    }

    #[test]
    fn route_rejects_non_increasing_stations() {
        let sim = Simulator::with_default_step(params());

        let err = sim
            .route(&[0.0, 300.0, 100.0], 30.0, Limits::default())
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Stations(route::StationsError::NotIncreasing { index: 2, .. })
        ));
    }

    #[test]
    fn route_rejects_negative_dwell() {
        let sim = Simulator::with_default_step(params());

        assert_eq!(
            sim.route(&[0.0, 300.0], -1.0, Limits::default()),
            Err(Error::Route(route::ConfigError::DwellTime))
        );
    }

    #[test]
    fn route_reports_stall_at_large_positions() {
        let sim = Simulator::with_default_step(params());

        assert_eq!(
            sim.route(&[1.0e17, 1.0e17 + 16.0], 0.0, Limits::default()),
            Err(Error::RouteStalled { station: 1 })
        );
    }

    #[test]
    fn route_rejects_excessive_dwell() {
        let sim = Simulator::with_default_step(params());

        assert_eq!(
            sim.route(&[0.0, 300.0], 1.0e12, Limits::default()),
            Err(Error::Route(route::ConfigError::DwellSteps))
        );
    }

    #[test]
    fn follow_rejects_non_finite_lead_speed() {
        let sim = Simulator::with_default_step(params());

        assert_eq!(
            sim.follow(VehicleState::at_rest(10.0), VehicleState::at_rest(0.0), 5, f64::NAN),
            Err(Error::Follower(follower::ConfigError::LeadSpeed))
        );
    }
}
