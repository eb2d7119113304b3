//! egui speed profile window.
//!
//! See [`ProfilePlot`].

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use marche_core::Trajectory;

use crate::render::{RenderError, Renderer};

const DISTANCE_LABEL: &str = "Distance (m)";
const SPEED_LABEL: &str = "Speed (m/s)";
const TIME_LABEL: &str = "Time (s)";

/// Renders a speed profile as two stacked line charts in a native window.
///
/// The upper chart shows speed vs. distance and the lower one speed vs.
/// time. [`Renderer::render`] blocks until the window is closed.
///
/// # Example
///
/// ```ignore
/// let profile = sim.route(&[0.0, 300.0, 800.0, 1500.0], 30.0, Limits::default())?;
/// ProfilePlot::new("Route 1").render(&profile)?;
/// ```
#[derive(Debug, Clone)]
pub struct ProfilePlot {
    title: String,
}

impl ProfilePlot {
    /// Creates a renderer whose window carries `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for ProfilePlot {
    fn default() -> Self {
        Self::new("Marche type")
    }
}

impl Renderer for ProfilePlot {
    fn render(&self, trajectory: &Trajectory) -> Result<(), RenderError> {
        if trajectory.is_empty() {
            return Err(RenderError::EmptyTrajectory);
        }

        let [by_distance, by_time] = series(trajectory);
        eframe::run_native(
            &self.title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| {
                Ok(Box::new(ProfileApp {
                    by_distance,
                    by_time,
                }))
            }),
        )
        .map_err(|err| RenderError::Window(err.to_string()))
    }
}

/// Builds the `[speed vs. distance, speed vs. time]` point series.
fn series(trajectory: &Trajectory) -> [Vec<[f64; 2]>; 2] {
    let by_distance = trajectory
        .iter()
        .map(|s| [s.position, s.velocity])
        .collect();
    let by_time = trajectory.iter().map(|s| [s.time, s.velocity]).collect();
    [by_distance, by_time]
}

/// The egui [`eframe::App`] that draws both charts.
struct ProfileApp {
    by_distance: Vec<[f64; 2]>,
    by_time: Vec<[f64; 2]>,
}

impl eframe::App for ProfileApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let height = (ui.available_height() - 2.0 * ui.spacing().item_spacing.y) / 2.0;

            chart(ui, "speed_vs_distance", DISTANCE_LABEL, height, &self.by_distance);
            chart(ui, "speed_vs_time", TIME_LABEL, height, &self.by_time);
        });
    }
}

/// Draws one speed chart against `x_label`.
fn chart(ui: &mut egui::Ui, id: &str, x_label: &str, height: f32, points: &[[f64; 2]]) {
    Plot::new(id)
        .height(height)
        .x_axis_label(x_label)
        .y_axis_label(SPEED_LABEL)
        .show(ui, |plot_ui| {
            let plot_points: PlotPoints = points.iter().copied().collect();
            plot_ui.line(Line::new(plot_points).name(SPEED_LABEL));
        });
}
