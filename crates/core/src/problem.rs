use crate::{DerivativeOf, StepIntegrable};

/// Defines an ODE (ordinary differential equation) problem to be integrated.
///
/// An ODE problem pulls a steppable state out of a model input, computes the
/// state's derivative from the model input and output, and rebuilds a model
/// input once the state has been stepped. Fixed-step solvers use it to drive
/// any [`Model`](crate::Model) whose state implements [`StepIntegrable`].
pub trait OdeProblem {
    type Input;
    type Output;
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the state from model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be extracted from the input.
    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error>;

    /// Computes the derivative of the state from model input and output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;

    /// Builds the next model input from the previous input, the stepped state
    /// and the step size.
    ///
    /// This is where the independent variable (usually time) is advanced.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from the state.
    fn build_input(
        &self,
        base: &Self::Input,
        state: &Self::State,
        delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error>;
}
