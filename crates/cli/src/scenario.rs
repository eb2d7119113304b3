//! Scenario configuration for the runner.
//!
//! The built-in demo scenario is returned by [`Scenario::default`]. A TOML
//! file may override any part of it; missing tables and keys keep the demo
//! values.
//!
//! ```toml
//! dt = 0.5
//!
//! [idm]
//! v0 = 15.0
//! T = 1.5
//! a = 0.6
//! b = 1.5
//! s0 = 2.0
//!
//! [follower]
//! lead = { position = 50.0, velocity = 10.0 }
//! steps = 120
//! lead_speed = 10.0
//!
//! [route]
//! stations = [0.0, 300.0, 800.0, 1500.0]
//! dwell_time = 30.0
//! limits = { accel = 0.7, decel = 0.7, v_max = 20.0 }
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result};
use marche_core::VehicleState;
use marche_dynamics::{DEFAULT_DT, IdmParameters, route::Limits};
use serde::Deserialize;

/// Everything the runner needs for both modes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    /// Time step shared by both simulations (s).
    pub dt: f64,

    /// Car-following parameters.
    pub idm: IdmParameters,

    /// Follower mode settings.
    pub follower: FollowerScenario,

    /// Route mode settings.
    pub route: RouteScenario,
}

/// Initial states and run length for the follower simulation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FollowerScenario {
    pub lead: VehicleState,
    pub follower: VehicleState,
    pub steps: usize,
    pub lead_speed: f64,
}

/// Stations, dwell, and kinematic limits for the route profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouteScenario {
    pub stations: Vec<f64>,
    pub dwell_time: f64,
    pub limits: Limits,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            // Known-good values, unwrap is safe
            idm: IdmParameters::new(15.0, 1.5, 0.6, 1.5, 2.0).unwrap(),
            follower: FollowerScenario::default(),
            route: RouteScenario::default(),
        }
    }
}

impl Default for FollowerScenario {
    fn default() -> Self {
        Self {
            lead: VehicleState::new(50.0, 10.0),
            follower: VehicleState::at_rest(0.0),
            steps: 120,
            lead_speed: 10.0,
        }
    }
}

impl Default for RouteScenario {
    fn default() -> Self {
        Self {
            stations: vec![0.0, 300.0, 800.0, 1500.0],
            dwell_time: 30.0,
            limits: Limits::default(),
        }
    }
}

impl Scenario {
    /// Reads a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds values that fail validation.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid scenario {}", path.display()))
    }

    /// Parses a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or holds values that
    /// fail validation.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
