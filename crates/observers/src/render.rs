//! Rendering of route speed profiles.
//!
//! Rendering is an optional capability: whether it exists is fixed at build
//! time by the `plot` feature. Call [`detect`] once at startup and fall back
//! to text output when it reports [`RenderError::Unavailable`]. Rendering
//! only reads a finished [`Trajectory`] and has no effect on simulation
//! results.

use marche_core::Trajectory;
use thiserror::Error;

/// Draws a speed profile.
pub trait Renderer {
    /// Renders speed vs. distance and speed vs. time for `trajectory`.
    ///
    /// Blocks until the rendering is finished (for a window, until it is
    /// closed).
    ///
    /// # Errors
    ///
    /// Returns an error if the trajectory is empty or the output cannot be
    /// produced.
    fn render(&self, trajectory: &Trajectory) -> Result<(), RenderError>;
}

/// Errors that can occur when rendering a speed profile.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("plot support is not compiled in (enable the `plot` feature)")]
    Unavailable,

    #[error("nothing to plot: the trajectory is empty")]
    EmptyTrajectory,

    #[error("plot window failed: {0}")]
    Window(String),
}

/// Returns `true` if this build can render speed profiles.
#[must_use]
pub fn is_available() -> bool {
    cfg!(feature = "plot")
}

/// Returns the renderer available in this build.
///
/// # Errors
///
/// Returns [`RenderError::Unavailable`] when the crate was built without the
/// `plot` feature.
pub fn detect() -> Result<Box<dyn Renderer>, RenderError> {
    #[cfg(feature = "plot")]
    {
        Ok(Box::new(crate::ProfilePlot::default()))
    }

    #[cfg(not(feature = "plot"))]
    {
        Err(RenderError::Unavailable)
    }
}
