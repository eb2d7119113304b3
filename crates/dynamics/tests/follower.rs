use approx::assert_relative_eq;
use marche_core::VehicleState;
use marche_dynamics::{
    IdmParameters, Simulator,
    follower::{self, Event, Status},
};

const DT: f64 = 0.5;
const LEAD_SPEED: f64 = 10.0;

fn params() -> IdmParameters {
    IdmParameters::new(15.0, 1.5, 0.6, 1.5, 2.0).expect("valid parameters")
}

fn run(steps: usize) -> (follower::Solution, Vec<Event>) {
    let config = follower::Config::new(DT, steps, LEAD_SPEED).expect("valid config");
    let mut events = Vec::new();
    let solution = follower::simulate(
        &params(),
        VehicleState::new(50.0, 10.0),
        VehicleState::at_rest(0.0),
        &config,
        |event: &Event| {
            events.push(*event);
            None
        },
    );
    (solution, events)
}

#[test]
fn demo_scenario_returns_one_sample_per_step() {
    let sim = Simulator::new(params(), DT).unwrap();

    let samples = sim
        .follow(
            VehicleState::new(50.0, 10.0),
            VehicleState::at_rest(0.0),
            120,
            LEAD_SPEED,
        )
        .unwrap();

    assert_eq!(samples.len(), 120);
    assert!(samples.iter().all(|&(_, v)| v >= 0.0));
    assert!(samples.windows(2).all(|w| w[1].0 >= w[0].0));
}

#[test]
fn follower_never_collides_with_lead() {
    let (solution, events) = run(1200);

    assert_eq!(solution.status, Status::Complete);
    assert!(events.iter().all(|e| e.gap() > 0.0));
}

#[test]
fn follower_overshoots_lead_speed_but_stays_below_desired_speed() {
    let (solution, _) = run(120);

    let peak = solution
        .samples
        .iter()
        .map(|s| s.velocity)
        .fold(f64::MIN, f64::max);

    assert!(peak > LEAD_SPEED);
    assert!(peak < params().v0());
}

#[test]
fn follower_settles_at_equilibrium_behind_lead() {
    let (solution, _) = run(1200);
    let p = params();

    assert_relative_eq!(solution.follower.velocity, LEAD_SPEED, epsilon = 1e-9);

    // The law sees the lead after it has moved but before the follower has,
    // so the perceived gap is one step of travel larger than the final gap.
    let perceived_gap = solution.follower.gap_to(&solution.lead) + LEAD_SPEED * DT;
    let expected = p.equilibrium_gap(LEAD_SPEED).unwrap();

    assert_relative_eq!(perceived_gap, expected, epsilon = 1e-6);
    assert!(expected > p.s0() + LEAD_SPEED * p.t());
}
