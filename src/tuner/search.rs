use core::ops::ControlFlow;

use crate::error::{Error, Result};
use crate::objective::Objective;
use crate::oracle::Oracle;

use super::Tuner;

/// Why [`Tuner::search`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The requested number of trials ran.
    BudgetReached,
    /// The oracle found no fresh configuration.
    Exhausted,
    /// An objective hook asked to stop.
    Interrupted,
}

impl<O: Oracle> Tuner<O> {
    /// Run up to `n_trials` trials of `objective`, one at a time.
    ///
    /// Each iteration asks the oracle for a configuration, evaluates it, and
    /// records the result. Failed evaluations count toward `n_trials` but
    /// are not stored. The loop ends early when the oracle stops or a hook
    /// returns `ControlFlow::Break`.
    ///
    /// # Errors
    ///
    /// Returns oracle errors as they occur, and
    /// [`Error::NoCompletedTrials`] if no trial has completed by the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use greedy_tuner::prelude::*;
    ///
    /// let space = SearchSpace::new()
    ///     .with(Hyperparameter::boolean("flag"))
    ///     .unwrap();
    /// let tuner = Tuner::builder().space(space).oracle(GreedyOracle::with_seed(3)).build();
    ///
    /// // Only two configurations exist, so the oracle runs dry early.
    /// let outcome = tuner
    ///     .search(10, |trial: &Trial| Ok::<_, Error>(f64::from(u8::from(trial.boolean("flag")?))))
    ///     .unwrap();
    /// assert_eq!(outcome, SearchOutcome::Exhausted);
    /// assert_eq!(tuner.n_trials(), 2);
    /// ```
    pub fn search(&self, n_trials: usize, objective: impl Objective<O>) -> Result<SearchOutcome> {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::info_span!("search", n_trials, direction = ?self.direction).entered();

        let mut outcome = SearchOutcome::BudgetReached;
        for _ in 0..n_trials {
            if let ControlFlow::Break(()) = objective.before_trial(self) {
                outcome = SearchOutcome::Interrupted;
                break;
            }

            let Some(trial) = self.ask()? else {
                outcome = SearchOutcome::Exhausted;
                break;
            };

            match objective.evaluate(&trial) {
                Ok(value) => {
                    let completed = trial.into_completed(value);
                    let flow = objective.after_trial(self, &completed);
                    self.push_completed(completed);
                    if let ControlFlow::Break(()) = flow {
                        outcome = SearchOutcome::Interrupted;
                        break;
                    }
                }
                Err(e) => self.fail_trial(trial, e.to_string()),
            }
        }

        if self.n_trials() == 0 {
            return Err(Error::NoCompletedTrials);
        }
        trace_info!(?outcome, "search finished");
        Ok(outcome)
    }
}
