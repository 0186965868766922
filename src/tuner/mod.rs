//! Tuner: the trial controller driving an oracle.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::oracle::{Decision, GreedyOracle, Oracle};
use crate::space::SearchSpace;
use crate::storage::{Storage, TrialRanking, rank_trials};
use crate::trial::{CompletedTrial, Trial};
use crate::types::{Direction, TrialState};

mod builder;
#[cfg(feature = "serde")]
mod persistence;
mod search;

pub use builder::TunerBuilder;
#[cfg(feature = "serde")]
pub use persistence::TunerSnapshot;
pub use search::SearchOutcome;

/// A tuner asks its oracle for configurations, evaluates them, and keeps
/// the results.
///
/// It is the ranking the oracle reads: the best trial is the completed trial
/// with the lowest (or, when maximizing, highest) objective value, earliest
/// first on ties.
///
/// # Examples
///
/// ```
/// use greedy_tuner::prelude::*;
///
/// let space = SearchSpace::new()
///     .with(Hyperparameter::int("model/units", 1, 64))
///     .unwrap();
/// let tuner = Tuner::builder().maximize().space(space).build();
///
/// let trial = tuner.ask().unwrap().expect("fresh configuration");
/// let units = trial.int("model/units").unwrap();
/// tuner.tell(trial, Ok::<_, &str>(units as f64));
/// assert_eq!(tuner.n_trials(), 1);
/// ```
pub struct Tuner<O: Oracle = GreedyOracle> {
    pub(crate) direction: Direction,
    pub(crate) space: SearchSpace,
    pub(crate) oracle: O,
    pub(crate) storage: Arc<dyn Storage>,
}

impl Tuner<GreedyOracle> {
    /// Create a tuner over `space` with a randomly seeded [`GreedyOracle`].
    #[must_use]
    pub fn new(direction: Direction, space: SearchSpace) -> Self {
        Self::with_oracle(direction, space, GreedyOracle::new())
    }

    /// Return a builder for configuring a tuner.
    #[must_use]
    pub fn builder() -> TunerBuilder<GreedyOracle> {
        TunerBuilder::new()
    }
}

impl<O: Oracle> Tuner<O> {
    /// Create a tuner with a custom oracle and in-memory storage.
    #[must_use]
    pub fn with_oracle(direction: Direction, space: SearchSpace, oracle: O) -> Self {
        Self {
            direction,
            space,
            oracle,
            storage: Arc::new(crate::storage::MemoryStorage::new()),
        }
    }

    /// Return the optimization direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Return the search space.
    #[must_use]
    pub fn space(&self) -> &SearchSpace {
        &self.space
    }

    /// Return the oracle.
    #[must_use]
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Request the next trial from the oracle.
    ///
    /// Returns `Ok(None)` once the oracle reports it cannot find a fresh
    /// configuration.
    ///
    /// # Errors
    ///
    /// Propagates oracle failures.
    pub fn ask(&self) -> Result<Option<Trial>> {
        let id = self.storage.next_trial_id();
        let decision = self.oracle.populate_space(id, &self.space, self)?;
        Ok(match decision {
            Decision::Running(values) => Some(Trial::new(id, values)),
            Decision::Stopped => {
                trace_info!(trial_id = id, "oracle stopped the search");
                None
            }
        })
    }

    /// Report the result of a trial obtained from [`ask()`](Self::ask).
    ///
    /// Pass `Ok(value)` for a successful evaluation or `Err(reason)` for a
    /// failure. Failed trials are not stored.
    pub fn tell(&self, trial: Trial, value: core::result::Result<f64, impl ToString>) {
        match value {
            Ok(v) => self.complete_trial(trial, v),
            Err(e) => self.fail_trial(trial, e),
        }
    }

    /// Record a successful trial.
    pub fn complete_trial(&self, trial: Trial, value: f64) {
        self.push_completed(trial.into_completed(value));
    }

    /// Mark a trial as failed. Failed trials are not stored.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn fail_trial(&self, mut trial: Trial, error: impl ToString) {
        trial.set_failed();
        trace_debug!(trial_id = trial.id(), error = %error.to_string(), "trial failed");
    }

    pub(crate) fn push_completed(&self, completed: CompletedTrial) {
        #[cfg(feature = "tracing")]
        let trial_id = completed.id;

        self.storage.push(completed);
        trace_info!(trial_id, "trial completed");

        #[cfg(feature = "tracing")]
        if self.best_trial().is_ok_and(|best| best.id == trial_id) {
            tracing::info!(trial_id, "new best value found");
        }
    }

    /// Return all completed trials.
    #[must_use]
    pub fn trials(&self) -> Vec<CompletedTrial> {
        self.storage.trials_arc().read().clone()
    }

    /// Return the number of completed trials.
    #[must_use]
    pub fn n_trials(&self) -> usize {
        self.storage
            .trials_arc()
            .read()
            .iter()
            .filter(|t| t.state == TrialState::Complete)
            .count()
    }

    /// Return the best completed trial.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCompletedTrials`] if no trial has completed.
    pub fn best_trial(&self) -> Result<CompletedTrial> {
        rank_trials(&self.storage.trials_arc().read(), self.direction)
            .into_iter()
            .next()
            .ok_or(Error::NoCompletedTrials)
    }

    /// Return the objective value of the best completed trial.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCompletedTrials`] if no trial has completed.
    pub fn best_value(&self) -> Result<f64> {
        self.best_trial().map(|t| t.value)
    }
}

impl<O: Oracle> TrialRanking for Tuner<O> {
    fn best_trials(&self) -> Result<Vec<CompletedTrial>> {
        Ok(rank_trials(
            &self.storage.trials_arc().read(),
            self.direction,
        ))
    }
}
