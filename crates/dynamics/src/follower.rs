//! Lead/follower simulation under the IDM law.
//!
//! The lead vehicle is not simulated dynamically: its speed is forced to a
//! prescribed value every step. The follower reacts to it through
//! [`idm::acceleration`]. Each step runs, in order:
//!
//! ```text
//! lead.v      = lead_speed
//! lead.x     += lead.v · dt
//! a           = idm(lead, follower)
//! follower.v  = max(0, follower.v + a · dt)
//! follower.x += follower.v · dt
//! ```
//!
//! # Example
//!
//! ```
//! use marche_core::VehicleState;
//! use marche_dynamics::{IdmParameters, follower};
//!
//! let params = IdmParameters::new(15.0, 1.5, 0.6, 1.5, 2.0)?;
//! let config = follower::Config::new(0.5, 120, 10.0)?;
//!
//! let solution = follower::simulate_unobserved(
//!     &params,
//!     VehicleState::new(50.0, 10.0),
//!     VehicleState::at_rest(0.0),
//!     &config,
//! );
//!
//! assert_eq!(solution.samples.len(), 120);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod config;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;
pub use solution::{Solution, Status};

use marche_core::{FollowerSample, Observer, StepIntegrable, VehicleState};
use tracing::debug;

use crate::idm::{self, IdmParameters};

/// Simulates `follower_init` tracking `lead_init` for `config.steps()` steps.
///
/// The initial states are copied; the caller's values are never modified.
///
/// # Observer
///
/// The observer receives an [`Event`] after each step and may return
/// [`Action::StopEarly`] to end the run. The step that triggered the stop is
/// included in the solution.
pub fn simulate<Obs>(
    params: &IdmParameters,
    lead_init: VehicleState,
    follower_init: VehicleState,
    config: &Config,
    mut observer: Obs,
) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let dt = config.dt();
    let mut lead = lead_init;
    let mut follower = follower_init;
    let mut samples = Vec::with_capacity(config.steps());
    let mut status = Status::Complete;

    for step in 1..=config.steps() {
        lead = lead.cruise(config.lead_speed(), dt);

        let acceleration = idm::acceleration(&lead, &follower, params);
        follower = follower.step(acceleration, dt);

        samples.push(FollowerSample {
            position: follower.position,
            velocity: follower.velocity,
        });

        #[allow(clippy::cast_precision_loss)]
        let event = Event {
            step,
            time: step as f64 * dt,
            lead,
            follower,
            acceleration,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            status = Status::StoppedByObserver;
            break;
        }
    }

    let steps = samples.len();
    debug!(
        steps,
        ?status,
        final_gap = follower.gap_to(&lead),
        final_speed = follower.velocity,
        "follower simulation finished"
    );

    Solution {
        status,
        samples,
        steps,
        lead,
        follower,
    }
}

/// Simulates a lead/follower pair without observation.
///
/// This is a convenience wrapper around [`simulate`] that discards events,
/// so the solution always holds exactly `config.steps()` samples.
pub fn simulate_unobserved(
    params: &IdmParameters,
    lead_init: VehicleState,
    follower_init: VehicleState,
    config: &Config,
) -> Solution {
    simulate(params, lead_init, follower_init, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn params() -> IdmParameters {
        IdmParameters::new(15.0, 1.5, 0.6, 1.5, 2.0).expect("valid parameters")
    }

    #[test]
    fn returns_one_sample_per_step() {
        for steps in [0, 1, 7, 120] {
            let config = Config::new(0.5, steps, 10.0).unwrap();
            let solution = simulate_unobserved(
                &params(),
                VehicleState::new(50.0, 10.0),
                VehicleState::at_rest(0.0),
                &config,
            );

            assert_eq!(solution.status, Status::Complete);
            assert_eq!(solution.samples.len(), steps);
            assert_eq!(solution.steps, steps);
        }
    }

    #[test]
    fn follower_ahead_of_lead_brakes_at_comfortable_deceleration() {
        let config = Config::new(0.5, 3, 0.0).unwrap();
        let solution = simulate_unobserved(
            &params(),
            VehicleState::at_rest(0.0),
            VehicleState::new(10.0, 5.0),
            &config,
        );

        let expected = [(12.125, 4.25), (13.875, 3.5), (15.25, 2.75)];
        for ((x, v), (ex, ev)) in solution.pairs().into_iter().zip(expected) {
            assert_relative_eq!(x, ex);
            assert_relative_eq!(v, ev);
        }
    }

    #[test]
    fn velocity_is_never_negative() {
        // Starting ahead of a stopped lead forces sustained braking.
        let config = Config::new(0.5, 200, 0.0).unwrap();
        let solution = simulate_unobserved(
            &params(),
            VehicleState::at_rest(0.0),
            VehicleState::new(5.0, 12.0),
            &config,
        );

        assert!(solution.samples.iter().all(|s| s.velocity >= 0.0));
        assert_eq!(solution.follower.velocity, 0.0);
    }

    #[test]
    fn lead_speed_replaces_initial_lead_velocity() {
        let config = Config::new(0.5, 4, 6.0).unwrap();
        let solution = simulate_unobserved(
            &params(),
            VehicleState::new(100.0, 20.0),
            VehicleState::at_rest(0.0),
            &config,
        );

        assert_relative_eq!(solution.lead.velocity, 6.0);
        assert_relative_eq!(solution.lead.position, 112.0);
    }

    #[test]
    fn follower_stops_behind_stationary_lead() {
        let config = Config::new(0.5, 2000, 0.0).unwrap();
        let lead = VehicleState::at_rest(100.0);
        let solution =
            simulate_unobserved(&params(), lead, VehicleState::at_rest(0.0), &config);

        assert!(solution.samples.iter().all(|s| s.position < 100.0));
        assert_relative_eq!(solution.follower.velocity, 0.0);
        assert!(solution.follower.gap_to(&solution.lead) > 0.0);
    }

    #[test]
    fn observer_can_stop_early() {
        let config = Config::new(0.5, 120, 10.0).unwrap();
        let solution = simulate(
            &params(),
            VehicleState::new(50.0, 10.0),
            VehicleState::at_rest(0.0),
            &config,
            |event: &Event| (event.step >= 5).then_some(Action::StopEarly),
        );

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.samples.len(), 5);
    }

    #[test]
    fn events_report_time_and_gap() {
        let config = Config::new(0.25, 4, 10.0).unwrap();
        let mut times = Vec::new();
        let mut gaps = Vec::new();

        let solution = simulate(
            &params(),
            VehicleState::new(50.0, 10.0),
            VehicleState::at_rest(0.0),
            &config,
            |event: &Event| {
                times.push(event.time);
                gaps.push(event.gap());
                None
            },
        );

        assert_eq!(times, vec![0.25, 0.5, 0.75, 1.0]);
        assert_relative_eq!(
            *gaps.last().unwrap(),
            solution.follower.gap_to(&solution.lead)
        );
    }
}
