//! Interactive speed profile of a route with stops.
//!
//! # Usage
//!
//! ```text
//! cargo run --example profile --features plot
//! cargo run --example profile --features plot -- 12
//! ```
//!
//! The optional argument is the speed limit in m/s (default 20). Lower
//! limits stretch the cruise phase between stations; with the default the
//! short first leg never reaches cruise.

use std::error::Error;

use marche_dynamics::{IdmParameters, Simulator, route::Limits};
use marche_observers::{ProfilePlot, render::Renderer};

fn main() -> Result<(), Box<dyn Error>> {
    let v_max = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()?
        .unwrap_or(20.0);

    let params = IdmParameters::new(15.0, 1.5, 0.6, 1.5, 2.0)?;
    let sim = Simulator::with_default_step(params);
    let limits = Limits::new(0.7, 0.7, v_max)?;

    let profile = sim.route(&[0.0, 300.0, 800.0, 1500.0], 30.0, limits)?;

    ProfilePlot::new(format!("Route profile (v_max = {v_max} m/s)")).render(&profile)?;

    Ok(())
}
