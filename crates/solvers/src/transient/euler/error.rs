use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Failure raised while stepping, tagged with which collaborator failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The model could not be evaluated at a step's input.
    #[error("model error: {0}")]
    Model(#[source] BoxError),

    /// The problem could not extract a state or derivative, or rebuild an input.
    #[error("problem error: {0}")]
    Problem(#[source] BoxError),
}

impl Error {
    pub(crate) fn model(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Model(Box::new(err))
    }

    pub(crate) fn problem(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Problem(Box::new(err))
    }
}
