//! Trial storage and ranking.
//!
//! The [`Storage`] trait defines how completed trials are kept. Every
//! [`Tuner`](crate::Tuner) owns an `Arc<dyn Storage>` so storage is
//! transparently shared across threads. [`MemoryStorage`] is the default.
//!
//! The [`TrialRanking`] trait is what the oracle reads: it answers "which
//! trials are best so far", best first. The tuner implements it over its
//! storage and optimization direction.
//!
//! # Implementing a custom backend
//!
//! ```
//! use greedy_tuner::Tuner;
//! use greedy_tuner::storage::MemoryStorage;
//!
//! let tuner = Tuner::builder()
//!     .minimize()
//!     .storage(MemoryStorage::new())
//!     .build();
//! assert_eq!(tuner.n_trials(), 0);
//! ```

use core::cmp::Ordering;
use std::sync::Arc;

use parking_lot::RwLock;

mod memory;
pub use memory::MemoryStorage;

use crate::error::Result;
use crate::trial::CompletedTrial;
use crate::types::{Direction, TrialState};

/// Trait for storing and retrieving completed trials.
///
/// Implementations must be `Send + Sync` because a tuner may be shared
/// across threads.
pub trait Storage: Send + Sync {
    /// Append a completed trial to the store.
    fn push(&self, trial: CompletedTrial);

    /// Return a reference to the in-memory trial buffer.
    fn trials_arc(&self) -> &Arc<RwLock<Vec<CompletedTrial>>>;

    /// Atomically return the next unique trial ID.
    fn next_trial_id(&self) -> u64;

    /// Return the current value of the next-trial-ID counter without incrementing.
    ///
    /// Used when saving a tuner, so IDs handed to failed trials are not reused.
    fn peek_next_trial_id(&self) -> u64;
}

/// Source of the best trials so far, consumed by the oracle.
pub trait TrialRanking {
    /// Returns completed trials ordered best first; empty if none exist.
    ///
    /// # Errors
    ///
    /// Implementations backed by fallible sources return
    /// [`Error::Collaborator`](crate::Error::Collaborator); the oracle
    /// propagates it unchanged.
    fn best_trials(&self) -> Result<Vec<CompletedTrial>>;
}

/// A plain list of trials ranks its completed trials by minimization.
impl TrialRanking for Vec<CompletedTrial> {
    fn best_trials(&self) -> Result<Vec<CompletedTrial>> {
        Ok(rank_trials(self, Direction::Minimize))
    }
}

/// Orders `a` before `b` if it is the better trial under `direction`.
///
/// NaN objective values rank after every number.
pub(crate) fn compare_trials(
    a: &CompletedTrial,
    b: &CompletedTrial,
    direction: Direction,
) -> Ordering {
    match (a.value.is_nan(), b.value.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = a.value.total_cmp(&b.value);
            match direction {
                Direction::Minimize => ord,
                Direction::Maximize => ord.reverse(),
            }
        }
    }
}

/// Returns the completed trials of `trials`, best first.
///
/// The sort is stable, so ties keep their insertion order and the earliest
/// trial wins.
pub(crate) fn rank_trials(
    trials: &[CompletedTrial],
    direction: Direction,
) -> Vec<CompletedTrial> {
    let mut ranked: Vec<CompletedTrial> = trials
        .iter()
        .filter(|t| t.state == TrialState::Complete)
        .cloned()
        .collect();
    ranked.sort_by(|a, b| compare_trials(a, b, direction));
    ranked
}
