#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Greedy hyperparameter search over hierarchically named search spaces.
//!
//! Hyperparameter names are `/`-separated paths such as
//! `model/block_0/units`. The [`GreedyOracle`](oracle::GreedyOracle) groups
//! them by name prefix with a [`Trie`](trie::Trie), picks one group per
//! trial, and resamples only that group of the best configuration found so
//! far. Configurations are never proposed twice; when the oracle cannot find
//! a fresh one it stops the search.
//!
//! # Getting Started
//!
//! ```
//! use greedy_tuner::prelude::*;
//!
//! let space = SearchSpace::new()
//!     .with(Hyperparameter::int("model/units", 8, 256).step(8))
//!     .and_then(|s| s.with(Hyperparameter::float("optimizer/lr", 1e-4, 1e-1).log_scale()))
//!     .unwrap();
//!
//! let tuner = Tuner::builder()
//!     .minimize()
//!     .space(space)
//!     .oracle(GreedyOracle::with_seed(42))
//!     .build();
//!
//! tuner
//!     .search(40, |trial: &Trial| {
//!         let units = trial.int("model/units")? as f64;
//!         let lr = trial.float("optimizer/lr")?;
//!         Ok::<_, Error>((units - 64.0).abs() / 64.0 + (lr.log10() + 2.0).abs())
//!     })
//!     .unwrap();
//!
//! let best = tuner.best_trial().unwrap();
//! println!("best = {:.4} at {:?}", best.value, best.values);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Hyperparameter`] | One named, typed, bounded tunable value. |
//! | [`SearchSpace`] | The ordered set of hyperparameters being tuned. |
//! | [`Trie`](trie::Trie) | Groups names by shared path prefix. |
//! | [`GreedyOracle`](oracle::GreedyOracle) | Decides the configuration of each trial. |
//! | [`Tuner`] | Drives the oracle: asks, evaluates, records, tracks the best. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on public types, oracle and tuner `save`/`load` | on |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at each decision | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod distribution;
mod error;
mod hyperparameter;
pub mod objective;
pub mod oracle;
mod param;
#[cfg(feature = "serde")]
mod persistence;
mod rng_util;
pub mod space;
pub mod storage;
mod trial;
pub mod trie;
mod tuner;
mod types;

pub use distribution::{
    CategoricalDistribution, Distribution, FloatDistribution, IntDistribution,
};
pub use error::{Error, Result};
pub use hyperparameter::{Condition, Hyperparameter, NAME_DELIMITER, validate_name};
pub use objective::Objective;
pub use param::ParamValue;
pub use space::{SearchSpace, Values, hash_values};
pub use trial::{CompletedTrial, Trial};
#[cfg(feature = "serde")]
pub use tuner::TunerSnapshot;
pub use tuner::{SearchOutcome, Tuner, TunerBuilder};
pub use types::{Direction, TrialState, TrialStatus};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use greedy_tuner::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::hyperparameter::{Condition, Hyperparameter};
    pub use crate::objective::Objective;
    pub use crate::oracle::{Decision, GreedyOracle, Oracle, OracleState};
    pub use crate::param::ParamValue;
    pub use crate::space::{SearchSpace, Values};
    pub use crate::storage::{MemoryStorage, Storage, TrialRanking};
    pub use crate::trial::{CompletedTrial, Trial};
    pub use crate::tuner::{SearchOutcome, Tuner, TunerBuilder};
    pub use crate::types::{Direction, TrialState, TrialStatus};
}
