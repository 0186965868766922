/// Errors returned by the greedy tuner.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a qualified hyperparameter name is empty or has an empty segment.
    #[error("invalid hyperparameter name '{0}': names must be non-empty '/'-separated segments")]
    InvalidName(String),

    /// Returned when the collision budget is zero.
    #[error("invalid max_collisions: must be positive")]
    InvalidMaxCollisions,

    /// Returned when the lower bound is greater than the upper bound.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when log scale is used with non-positive bounds.
    #[error("invalid log bounds: low must be positive for log scale")]
    InvalidLogBounds,

    /// Returned when step size is not positive.
    #[error("invalid step: step must be positive")]
    InvalidStep,

    /// Returned when categorical choices are empty.
    #[error("categorical choices cannot be empty")]
    EmptyChoices,

    /// Returned when a default value lies outside its hyperparameter's domain.
    #[error("default value for '{0}' is outside its domain")]
    InvalidDefault(String),

    /// Returned when looking up a hyperparameter that is not present.
    #[error("unknown hyperparameter '{0}'")]
    UnknownName(String),

    /// Returned when a value is read back as the wrong type.
    #[error("type mismatch for '{name}': expected {expected}")]
    TypeMismatch {
        /// The hyperparameter name.
        name: String,
        /// The expected value kind.
        expected: &'static str,
    },

    /// Returned when requesting the best trial but no trials have completed.
    #[error("no completed trials available")]
    NoCompletedTrials,

    /// Returned when an internal invariant is violated.
    #[error("internal error: {0}")]
    Internal(&'static str),

    /// Returned when imported oracle state is inconsistent.
    #[error("invalid oracle state: {0}")]
    InvalidState(&'static str),

    /// Returned when an external collaborator (ranking, sampler) fails.
    #[error("collaborator failure: {0}")]
    Collaborator(String),

    /// Returned when saving or loading state fails.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = core::result::Result<T, Error>;
