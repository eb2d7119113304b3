use std::fmt;

/// The driving phase that produced a profile sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The initial sample, stationary at the first station.
    Origin,

    /// Speeding up toward the speed limit.
    Accelerating,

    /// Holding the speed limit.
    Cruising,

    /// Braking into the next station.
    Braking,

    /// The zero-velocity sample recorded on reaching a station.
    Arrived,

    /// Standing at a station during the dwell time.
    Dwelling,
}

impl Phase {
    /// Returns `true` for phases whose samples always have zero velocity.
    #[must_use]
    pub fn is_stationary(self) -> bool {
        matches!(self, Self::Origin | Self::Arrived | Self::Dwelling)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Origin => "origin",
            Self::Accelerating => "accelerating",
            Self::Cruising => "cruising",
            Self::Braking => "braking",
            Self::Arrived => "arrived",
            Self::Dwelling => "dwelling",
        };
        f.write_str(name)
    }
}
