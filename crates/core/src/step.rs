/// A state that can be advanced by its derivative over a step.
///
/// Simulators use this to keep the integration rule with the state type
/// instead of spreading it through each loop. `Delta` is the independent
/// variable, a plain `f64` step in seconds for every state in this workspace.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}
