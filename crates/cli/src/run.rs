//! The two runner modes.

use std::io::Write;

use anyhow::{Context, Result};
use marche_core::Observer;
use marche_dynamics::{Error, Simulator, follower, route};
use marche_observers::{
    TimeLimit, TracingObserver,
    render::{RenderError, Renderer},
};
use tracing::{info, warn};

use crate::scenario::Scenario;

/// Runs the follower simulation and writes one `distance, speed` line per step.
///
/// # Errors
///
/// Returns an error if the scenario is invalid or writing fails.
pub fn follower(scenario: &Scenario, max_time: Option<f64>, out: &mut impl Write) -> Result<()> {
    let sim = Simulator::new(scenario.idm, scenario.dt)?;
    let setup = &scenario.follower;

    let solution = sim.follow_observed(
        setup.lead,
        setup.follower,
        setup.steps,
        setup.lead_speed,
        watch::<follower::Event, follower::Action>(max_time)?,
    )?;

    for (distance, speed) in solution.pairs() {
        writeln!(out, "{distance:.2}, {speed:.2}")?;
    }

    info!(
        steps = solution.steps,
        final_speed = solution.follower.velocity,
        final_gap = solution.follower.gap_to(&solution.lead),
        "follower simulation complete"
    );
    Ok(())
}

/// Generates the route profile and hands it to `renderer`.
///
/// When no renderer is available the profile is still generated and a
/// diagnostic is written to `out` instead of a plot.
///
/// # Errors
///
/// Returns an error if the scenario is invalid, the renderer fails for a
/// reason other than being unavailable, or writing fails.
pub fn route(
    scenario: &Scenario,
    max_time: Option<f64>,
    renderer: Result<&dyn Renderer, RenderError>,
    out: &mut impl Write,
) -> Result<()> {
    let sim = Simulator::new(scenario.idm, scenario.dt)?;
    let setup = &scenario.route;

    let solution = sim.route_observed(
        &setup.stations,
        setup.dwell_time,
        setup.limits,
        watch::<route::Event, route::Action>(max_time)?,
    )?;

    if let route::Status::Stalled { station } = solution.status {
        return Err(Error::RouteStalled { station }.into());
    }

    for arrival in &solution.arrivals {
        info!(
            station = arrival.station,
            position = arrival.position,
            time = arrival.time,
            "arrival"
        );
    }
    info!(
        samples = solution.trajectory.len(),
        duration = solution.trajectory.duration(),
        "route profile complete"
    );

    match renderer {
        Ok(renderer) => renderer
            .render(&solution.trajectory)
            .context("failed to render speed profile")?,
        Err(err) => {
            warn!(%err, "skipping plot");
            writeln!(out, "Plotting unavailable: {err}")?;
        }
    }
    Ok(())
}

/// Builds the observer used by both modes: trace logging plus an optional
/// time horizon.
fn watch<E, A>(max_time: Option<f64>) -> Result<impl FnMut(&E) -> Option<A>>
where
    TracingObserver: Observer<E, A>,
    TimeLimit: Observer<E, A>,
{
    let mut tracer = TracingObserver;
    let mut limit = max_time
        .map(TimeLimit::new)
        .transpose()
        .context("invalid --max-time")?;

    Ok(move |event: &E| {
        let _: Option<A> = tracer.observe(event);
        limit.as_mut().and_then(|limit| limit.observe(event))
    })
}
