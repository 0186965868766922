//! Oracles decide which configuration the next trial evaluates.
//!
//! An [`Oracle`] is driven one decision at a time by a trial controller such
//! as [`Tuner`](crate::Tuner). Each decision receives the current
//! [`SearchSpace`] and a [`TrialRanking`] explicitly, so the oracle owns
//! nothing but its own search state.
//!
//! [`GreedyOracle`] is the provided implementation.

mod builder;
mod greedy;
mod state;

pub use builder::OracleBuilder;
pub use greedy::GreedyOracle;
#[cfg(feature = "serde")]
pub use state::OracleSnapshot;
pub use state::OracleState;

use crate::error::Result;
use crate::space::{SearchSpace, Values};
use crate::storage::TrialRanking;
use crate::types::TrialStatus;

/// The outcome of one oracle decision.
#[derive(Clone, Debug, PartialEq)]
pub enum Decision {
    /// Run a trial with this full configuration.
    Running(Values),
    /// No fresh configuration was found; the search should end.
    Stopped,
}

impl Decision {
    /// Returns the status tag of this decision.
    #[must_use]
    pub fn status(&self) -> TrialStatus {
        match self {
            Decision::Running(_) => TrialStatus::Running,
            Decision::Stopped => TrialStatus::Stopped,
        }
    }

    /// Returns the proposed configuration, if any.
    #[must_use]
    pub fn values(&self) -> Option<&Values> {
        match self {
            Decision::Running(values) => Some(values),
            Decision::Stopped => None,
        }
    }

    /// Consumes the decision, returning the proposed configuration, if any.
    #[must_use]
    pub fn into_values(self) -> Option<Values> {
        match self {
            Decision::Running(values) => Some(values),
            Decision::Stopped => None,
        }
    }
}

/// Trait for pluggable search strategies.
///
/// Requires `Send + Sync`; implementations serialize their own state
/// mutation so concurrent callers see one decision at a time.
pub trait Oracle: Send + Sync {
    /// Decides the configuration for trial `trial_id`.
    ///
    /// `trial_id` is passed through for logging only.
    ///
    /// # Errors
    ///
    /// Propagates failures of the space's samplers or of `ranking`.
    /// Running out of fresh configurations is [`Decision::Stopped`], not an error.
    fn populate_space(
        &self,
        trial_id: u64,
        space: &SearchSpace,
        ranking: &dyn TrialRanking,
    ) -> Result<Decision>;
}
