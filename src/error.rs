//! Error type shared by the whole crate.

/// Errors raised while configuring or running the genetic algorithm.
///
/// None of these are transient: they signal a broken contract between the
/// caller and the engine and abort the run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    /// Invalid parameters (population too small, rates out of range, ...).
    #[error("ConfigurationError: {0}")]
    Configuration(String),

    /// Gene sequence length does not match the item catalog (or another parent).
    #[error("LengthMismatch: expected={expected}, actual={actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A population was empty when its average fitness was requested.
    #[error("DegenerateStateError: population is empty")]
    EmptyPopulation,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GaError>;
