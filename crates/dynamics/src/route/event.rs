use marche_core::ProfileSample;

use super::Phase;

/// Event emitted by the route profile generator for each sample.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Index of the station being driven to, or 0 for the origin sample.
    pub leg: usize,

    /// The phase that produced the sample.
    pub phase: Phase,

    /// The recorded sample.
    pub sample: ProfileSample,
}
