//! The [`Objective`] trait defines what gets tuned.
//!
//! For simple closures, pass them directly to
//! [`Tuner::search`](crate::Tuner::search):
//!
//! ```
//! use greedy_tuner::prelude::*;
//!
//! let space = SearchSpace::new()
//!     .with(Hyperparameter::float("x", -10.0, 10.0))
//!     .unwrap();
//! let tuner = Tuner::builder().space(space).oracle(GreedyOracle::with_seed(1)).build();
//!
//! tuner
//!     .search(30, |trial: &Trial| {
//!         let x = trial.float("x")?;
//!         Ok::<_, Error>((x - 3.0).powi(2))
//!     })
//!     .unwrap();
//! assert!(tuner.best_value().unwrap() < 100.0);
//! ```
//!
//! For early stopping, implement [`Objective`] on a struct:
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! use greedy_tuner::prelude::*;
//!
//! struct UntilBelow(f64);
//!
//! impl Objective for UntilBelow {
//!     type Error = Error;
//!
//!     fn evaluate(&self, trial: &Trial) -> Result<f64> {
//!         Ok(trial.float("x")?.abs())
//!     }
//!
//!     fn after_trial(&self, _tuner: &Tuner, trial: &CompletedTrial) -> ControlFlow<()> {
//!         if trial.value < self.0 {
//!             ControlFlow::Break(())
//!         } else {
//!             ControlFlow::Continue(())
//!         }
//!     }
//! }
//!
//! let space = SearchSpace::new()
//!     .with(Hyperparameter::float("x", -1.0, 1.0))
//!     .unwrap();
//! let tuner = Tuner::builder().space(space).build();
//! let outcome = tuner.search(500, UntilBelow(0.5)).unwrap();
//! assert_eq!(outcome, SearchOutcome::Interrupted);
//! ```

use core::ops::ControlFlow;

use crate::oracle::{GreedyOracle, Oracle};
use crate::trial::{CompletedTrial, Trial};
use crate::tuner::Tuner;

/// Defines an objective function with lifecycle hooks.
///
/// The only required method is [`evaluate`](Objective::evaluate), which
/// trains and scores one configuration. Lower is better unless the tuner
/// maximizes.
pub trait Objective<O: Oracle = GreedyOracle> {
    /// The error type returned by [`evaluate`](Objective::evaluate).
    type Error: ToString + 'static;

    /// Evaluate the objective for a single trial.
    ///
    /// # Errors
    ///
    /// Any error whose type implements `ToString`. The trial is recorded as
    /// failed and the search continues.
    fn evaluate(&self, trial: &Trial) -> Result<f64, Self::Error>;

    /// Called before each trial is requested from the oracle.
    ///
    /// Return `ControlFlow::Break(())` to stop the search.
    ///
    /// Default: always continues.
    fn before_trial(&self, _tuner: &Tuner<O>) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called after each **completed** trial (not failed ones).
    ///
    /// Return `ControlFlow::Break(())` to stop the search.
    ///
    /// Default: always continues.
    fn after_trial(&self, _tuner: &Tuner<O>, _trial: &CompletedTrial) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl<O, F, E> Objective<O> for F
where
    O: Oracle,
    F: Fn(&Trial) -> Result<f64, E>,
    E: ToString + 'static,
{
    type Error = E;

    fn evaluate(&self, trial: &Trial) -> Result<f64, E> {
        self(trial)
    }
}
