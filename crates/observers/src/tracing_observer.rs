use marche_core::Observer;
use marche_dynamics::{follower, route};
use tracing::trace;

/// Logs every simulator event at `trace` level and never intervenes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<A> Observer<follower::Event, A> for TracingObserver {
    fn observe(&mut self, event: &follower::Event) -> Option<A> {
        trace!(
            step = event.step,
            time = event.time,
            lead_position = event.lead.position,
            position = event.follower.position,
            velocity = event.follower.velocity,
            acceleration = event.acceleration,
            gap = event.gap(),
            "follower step"
        );
        None
    }
}

impl<A> Observer<route::Event, A> for TracingObserver {
    fn observe(&mut self, event: &route::Event) -> Option<A> {
        trace!(
            leg = event.leg,
            phase = %event.phase,
            time = event.sample.time,
            position = event.sample.position,
            velocity = event.sample.velocity,
            "route sample"
        );
        None
    }
}
