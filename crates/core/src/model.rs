/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic. Calling a model twice with the same input
/// yields the same output, bit for bit, which is what lets a fixed-step run be
/// reproduced exactly.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type for domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Consumes the snapshot, keeping only the input.
    pub fn into_input(self) -> I {
        self.input
    }
}
