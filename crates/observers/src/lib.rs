//! Reusable observers for marche type simulations.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the follower simulator and the route profile generator, plus
//! the renderer that draws a route speed profile.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-simulator observers
//!   ([`HasElapsedTime`], [`CanStopEarly`])
//! - [`render`]: the [`Renderer`] interface and the startup capability check
//!
//! # Features
//!
//! - `plot`: enables [`ProfilePlot`], an egui window with speed vs. distance
//!   and speed vs. time charts. This feature adds dependencies on `eframe`
//!   and `egui_plot`. Without it [`render::detect`] reports
//!   [`RenderError::Unavailable`].
//!
//! [`Observer`]: marche_core::Observer
//! [`HasElapsedTime`]: traits::HasElapsedTime
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`Renderer`]: render::Renderer
//! [`RenderError::Unavailable`]: render::RenderError::Unavailable

pub mod render;
pub mod traits;

mod time_limit;
mod tracing_observer;

#[cfg(feature = "plot")]
mod plot;

pub use time_limit::{HorizonError, TimeLimit};
pub use tracing_observer::TracingObserver;

#[cfg(feature = "plot")]
pub use plot::ProfilePlot;
