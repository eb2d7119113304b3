//! Speed profile generation for a route with fixed stops.
//!
//! A single vehicle drives from the first station to the last, stopping at
//! every station in between. On each leg it accelerates at `accel` up to
//! `v_max`, cruises, and starts braking at `decel` once the remaining
//! distance is within the stopping distance `v² / (2·decel)`. Arriving at a
//! station records a zero-velocity sample at the station position, followed
//! by `floor(dwell_time / dt)` dwell samples. The vehicle always departs
//! from rest.
//!
//! Positions are integrated with a fixed step, so the last moving sample of
//! a leg may lie slightly past the station. The arrival sample snaps back to
//! the station position.
//!
//! A step that cannot move the vehicle, because `v·dt` is lost to rounding
//! at the current position, ends generation with [`Status::Stalled`].

mod action;
mod config;
mod event;
mod phase;
mod solution;
mod stations;

pub use action::Action;
pub use config::{Config, ConfigError, Limits, MAX_DWELL_STEPS};
pub use event::Event;
pub use phase::Phase;
pub use solution::{Arrival, Solution, Status};
pub use stations::{Stations, StationsError};

use std::ops::ControlFlow;

use marche_core::{Observer, ProfileSample, Trajectory};
use tracing::{debug, warn};

/// Generates the speed profile for `stations`.
///
/// # Observer
///
/// The observer receives an [`Event`] for every recorded sample, starting
/// with the origin, and may return [`Action::StopEarly`] to end generation.
/// The sample that triggered the stop is included in the solution.
///
/// # Stalling
///
/// If a moving step leaves the position unchanged, generation stops with
/// [`Status::Stalled`] and the stalled step is not recorded.
pub fn generate<Obs>(stations: &Stations, config: &Config, observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let mut recorder = Recorder {
        observer,
        // Room for the origin and one arrival per station.
        trajectory: Trajectory::with_capacity(stations.len()),
        arrivals: Vec::with_capacity(stations.len().saturating_sub(1)),
    };

    let status = match drive(stations, config, &mut recorder) {
        ControlFlow::Continue(()) => Status::Complete,
        ControlFlow::Break(status) => status,
    };

    debug!(
        samples = recorder.trajectory.len(),
        duration = recorder.trajectory.duration(),
        ?status,
        "route profile generated"
    );

    Solution {
        status,
        trajectory: recorder.trajectory,
        arrivals: recorder.arrivals,
    }
}

/// Generates the speed profile for `stations` without observation.
///
/// This is a convenience wrapper around [`generate`] that discards events.
pub fn generate_unobserved(stations: &Stations, config: &Config) -> Solution {
    generate(stations, config, ())
}

/// Runs every leg, breaking out with the final status as soon as the
/// observer asks to stop or the vehicle stops making progress.
fn drive<Obs>(
    stations: &Stations,
    config: &Config,
    recorder: &mut Recorder<Obs>,
) -> ControlFlow<Status>
where
    Obs: Observer<Event, Action>,
{
    let dt = config.dt();
    let limits = config.limits();

    let mut t = 0.0;
    let mut x = stations.origin();
    let mut v = 0.0;

    recorder.record(0, Phase::Origin, ProfileSample::new(t, x, v))?;

    for (leg, target) in stations.targets() {
        while x < target {
            let dist_left = target - x;
            let phase = if dist_left <= limits.stopping_distance(v) {
                v = (v - limits.decel() * dt).max(0.0);
                Phase::Braking
            } else if v < limits.v_max() {
                v = (v + limits.accel() * dt).min(limits.v_max());
                Phase::Accelerating
            } else {
                Phase::Cruising
            };

            let next = x + v * dt;
            // Only a braking step that just reached rest may hold position.
            if next == x && (v > 0.0 || phase != Phase::Braking) {
                warn!(station = leg, position = x, dt, "route generation stalled");
                return ControlFlow::Break(Status::Stalled { station: leg });
            }

            x = next;
            t += dt;
            recorder.record(leg, phase, ProfileSample::new(t, x, v))?;
        }

        x = target;
        recorder.arrivals.push(Arrival {
            station: leg,
            position: target,
            time: t,
        });
        recorder.record(leg, Phase::Arrived, ProfileSample::new(t, x, 0.0))?;

        for _ in 0..config.dwell_steps() {
            t += dt;
            recorder.record(leg, Phase::Dwelling, ProfileSample::new(t, x, 0.0))?;
        }

        debug!(station = leg, position = target, arrival = t, "leg complete");
        v = 0.0;
    }

    ControlFlow::Continue(())
}

/// Accumulates samples and forwards each one to the observer.
struct Recorder<Obs> {
    observer: Obs,
    trajectory: Trajectory,
    arrivals: Vec<Arrival>,
}

impl<Obs> Recorder<Obs>
where
    Obs: Observer<Event, Action>,
{
    fn record(&mut self, leg: usize, phase: Phase, sample: ProfileSample) -> ControlFlow<Status> {
        self.trajectory.push(sample);

        let event = Event { leg, phase, sample };
        match self.observer.observe(&event) {
            Some(Action::StopEarly) => ControlFlow::Break(Status::StoppedByObserver),
            None => ControlFlow::Continue(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn route(positions: &[f64]) -> Stations {
        Stations::try_from(positions).expect("valid stations")
    }

    fn config(dwell_time: f64) -> Config {
        Config::new(0.5, dwell_time, Limits::default()).expect("valid config")
    }

    #[test]
    fn single_station_produces_only_the_origin_sample() {
        let solution = generate_unobserved(&route(&[100.0]), &config(30.0));

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.trajectory.len(), 1);
        assert_eq!(
            solution.trajectory.last(),
            Some(ProfileSample::new(0.0, 100.0, 0.0))
        );
        assert!(solution.arrivals.is_empty());
    }

    #[test]
    fn first_leg_accelerates_then_brakes() {
        let mut phases = Vec::new();
        generate(&route(&[0.0, 300.0]), &config(0.0), |event: &Event| {
            phases.push(event.phase);
            None
        });

        assert_eq!(phases.first(), Some(&Phase::Origin));
        assert_eq!(phases[1], Phase::Accelerating);
        assert_eq!(phases.last(), Some(&Phase::Arrived));

        // Once braking starts on a short leg the vehicle never speeds up again.
        let first_brake = phases.iter().position(|p| *p == Phase::Braking).unwrap();
        assert!(phases[first_brake..phases.len() - 1]
            .iter()
            .all(|p| *p == Phase::Braking));
    }

    #[test]
    fn arrival_snaps_to_station_with_zero_velocity() {
        let solution = generate_unobserved(&route(&[0.0, 300.0]), &config(0.0));
        let last = solution.trajectory.last().unwrap();

        assert_eq!(last.position, 300.0);
        assert_eq!(last.velocity, 0.0);
        assert_eq!(solution.trajectory.len(), 76);
        assert_relative_eq!(solution.trajectory.duration(), 37.0);

        // The sample before the arrival overshoots the station slightly.
        let before = solution.trajectory.get(74).unwrap();
        assert!(before.position > 300.0);
        assert_relative_eq!(before.time, last.time);
    }

    #[test]
    fn dwell_holds_position_at_rest() {
        let mut dwell = Vec::new();
        let solution = generate(&route(&[0.0, 300.0]), &config(5.0), |event: &Event| {
            if event.phase == Phase::Dwelling {
                dwell.push(event.sample);
            }
            None
        });

        assert_eq!(dwell.len(), 10);
        assert!(dwell.iter().all(|s| s.position == 300.0 && s.velocity == 0.0));
        assert_relative_eq!(solution.trajectory.duration(), 42.0);
    }

    #[test]
    fn observer_can_stop_early() {
        let solution = generate(
            &route(&[0.0, 300.0, 800.0]),
            &config(30.0),
            |event: &Event| (event.phase == Phase::Arrived).then_some(Action::StopEarly),
        );

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.arrivals.len(), 1);
        assert_eq!(solution.trajectory.last().unwrap().position, 300.0);
    }

    #[test]
    fn stalls_when_steps_vanish_at_large_positions() {
        // One ulp at 1e17 m is 16 m, far more than any single step here.
        let solution = generate_unobserved(&route(&[1.0e17, 1.0e17 + 16.0]), &config(0.0));

        assert_eq!(solution.status, Status::Stalled { station: 1 });
        assert_eq!(solution.trajectory.len(), 1);
        assert!(solution.arrivals.is_empty());
    }

    #[test]
    fn stalls_when_time_step_underflows() {
        let config = Config::new(1.0e-320, 0.0, Limits::default()).expect("valid config");
        let solution = generate_unobserved(&route(&[0.0, 300.0]), &config);

        assert_eq!(solution.status, Status::Stalled { station: 1 });
        assert_eq!(solution.trajectory.len(), 1);
    }

    #[test]
    fn braking_to_rest_short_of_station_is_not_a_stall() {
        // Hard braking from speed can halt the vehicle before the station;
        // the next step accelerates again.
        let limits = Limits::new(10.0, 10.0, 20.0).expect("valid limits");
        let config = Config::new(1.0, 0.0, limits).expect("valid config");
        let solution = generate_unobserved(&route(&[0.0, 15.0]), &config);

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.arrivals.len(), 1);
        assert_eq!(solution.trajectory.position(), &[0.0, 10.0, 10.0, 20.0, 15.0]);
    }

    #[test]
    fn stationary_phases_have_zero_velocity() {
        let mut checked = 0;
        generate(&route(&[0.0, 300.0, 800.0]), &config(2.0), |event: &Event| {
            if event.phase.is_stationary() {
                assert_eq!(event.sample.velocity, 0.0);
                checked += 1;
            }
            None
        });

        // Origin, two arrivals, and four dwell samples at each station.
        assert_eq!(checked, 1 + 2 + 8);
    }
}
