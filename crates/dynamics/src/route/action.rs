/// Control actions supported by the route profile generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop generating and return the profile so far.
    StopEarly,
}
