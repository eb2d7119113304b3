use thiserror::Error;

/// Ordered station positions along a route (m).
///
/// Positions are finite and strictly increasing, and there is at least one
/// station. The generator relies on this to make progress on every leg.
#[derive(Debug, Clone, PartialEq)]
pub struct Stations(Vec<f64>);

/// Errors that can occur when validating station positions.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StationsError {
    #[error("a route needs at least one station")]
    Empty,

    #[error("station {index} position is not finite")]
    NonFinite { index: usize },

    #[error("station {index} at {current} m is not past the previous station at {previous} m")]
    NotIncreasing {
        index: usize,
        previous: f64,
        current: f64,
    },
}

impl Stations {
    /// Creates a validated station list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, contains a non-finite position,
    /// or is not strictly increasing.
    pub fn new(positions: Vec<f64>) -> Result<Self, StationsError> {
        if positions.is_empty() {
            return Err(StationsError::Empty);
        }
        if let Some(index) = positions.iter().position(|x| !x.is_finite()) {
            return Err(StationsError::NonFinite { index });
        }
        if let Some(index) = positions.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(StationsError::NotIncreasing {
                index: index + 1,
                previous: positions[index],
                current: positions[index + 1],
            });
        }

        Ok(Self(positions))
    }

    /// Returns the position of the first station.
    #[must_use]
    pub fn origin(&self) -> f64 {
        self.0[0]
    }

    /// Returns the number of stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a validated route has at least one station.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the stations after the origin as `(index, position)`.
    pub fn targets(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().copied().enumerate().skip(1)
    }
}

impl TryFrom<Vec<f64>> for Stations {
    type Error = StationsError;

    fn try_from(positions: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(positions)
    }
}

impl TryFrom<&[f64]> for Stations {
    type Error = StationsError;

    fn try_from(positions: &[f64]) -> Result<Self, Self::Error> {
        Self::new(positions.to_vec())
    }
}
