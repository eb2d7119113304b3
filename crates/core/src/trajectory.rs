/// A single follower sample: position and velocity after one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerSample {
    /// Position (m).
    pub position: f64,

    /// Velocity (m/s).
    pub velocity: f64,
}

impl From<FollowerSample> for (f64, f64) {
    fn from(sample: FollowerSample) -> Self {
        (sample.position, sample.velocity)
    }
}

/// A single speed profile sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    /// Elapsed time (s).
    pub time: f64,

    /// Position (m).
    pub position: f64,

    /// Velocity (m/s).
    pub velocity: f64,
}

impl ProfileSample {
    /// Creates a sample.
    #[must_use]
    pub fn new(time: f64, position: f64, velocity: f64) -> Self {
        Self {
            time,
            position,
            velocity,
        }
    }
}

/// Time, position, and velocity series sampled at a fixed step.
///
/// The three series always have the same length and are stored in the order
/// they were produced, so time is non-decreasing. Consumers such as plotting
/// read them through slices; the only way to grow a trajectory is
/// [`Trajectory::push`], which keeps the series aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    time: Vec<f64>,
    position: Vec<f64>,
    velocity: Vec<f64>,
}

impl Trajectory {
    /// Creates an empty trajectory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trajectory with room for `capacity` samples.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            time: Vec::with_capacity(capacity),
            position: Vec::with_capacity(capacity),
            velocity: Vec::with_capacity(capacity),
        }
    }

    /// Appends a sample to all three series.
    pub fn push(&mut self, sample: ProfileSample) {
        self.time.push(sample.time);
        self.position.push(sample.position);
        self.velocity.push(sample.velocity);
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Returns `true` if the trajectory holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Elapsed times (s).
    #[must_use]
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Positions (m).
    #[must_use]
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// Velocities (m/s).
    #[must_use]
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// Returns the sample at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ProfileSample> {
        Some(ProfileSample::new(
            *self.time.get(index)?,
            self.position[index],
            self.velocity[index],
        ))
    }

    /// Returns the last sample, if any.
    #[must_use]
    pub fn last(&self) -> Option<ProfileSample> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Returns the time of the last sample, or zero when empty.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.time.last().copied().unwrap_or(0.0)
    }

    /// Iterates over the samples in order.
    pub fn iter(&self) -> impl Iterator<Item = ProfileSample> + '_ {
        self.time
            .iter()
            .zip(&self.position)
            .zip(&self.velocity)
            .map(|((&time, &position), &velocity)| ProfileSample::new(time, position, velocity))
    }

    /// Consumes the trajectory and returns the time, position, and velocity series.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.time, self.position, self.velocity)
    }
}

impl FromIterator<ProfileSample> for Trajectory {
    fn from_iter<T: IntoIterator<Item = ProfileSample>>(iter: T) -> Self {
        let mut trajectory = Self::new();
        for sample in iter {
            trajectory.push(sample);
        }
        trajectory
    }
}
