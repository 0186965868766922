use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::oracle::{GreedyOracle, OracleState};
use crate::persistence;
use crate::space::SearchSpace;
use crate::storage::MemoryStorage;
use crate::trial::CompletedTrial;
use crate::types::Direction;

use super::Tuner;

/// A serializable snapshot of a tuner and its greedy oracle.
///
/// The search space is not included: it is code, not data. Pass it again to
/// [`Tuner::load`].
///
/// # Schema versioning
///
/// The `version` field enables future schema evolution without breaking
/// existing files. The current version is `1`.
#[derive(Serialize, Deserialize)]
pub struct TunerSnapshot {
    /// Schema version for forward compatibility.
    pub version: u32,
    /// The optimization direction.
    pub direction: Direction,
    /// All completed trials.
    pub trials: Vec<CompletedTrial>,
    /// The next trial ID to assign.
    pub next_trial_id: u64,
    /// The oracle's collision budget per decision.
    pub max_collisions: usize,
    /// The oracle's search state.
    pub oracle: OracleState,
}

impl Tuner<GreedyOracle> {
    /// Save the trial history and oracle state to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`](crate::Error::Storage) if the file cannot
    /// be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let snapshot = TunerSnapshot {
            version: persistence::SCHEMA_VERSION,
            direction: self.direction,
            trials: self.trials(),
            next_trial_id: self.storage.peek_next_trial_id(),
            max_collisions: self.oracle.max_collisions(),
            oracle: self.oracle.export_state(),
        };
        persistence::write_json(path.as_ref(), &snapshot)
    }

    /// Load a tuner saved with [`save`](Self::save), over `space`.
    ///
    /// The loaded tuner continues exactly where the saved one stopped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`](crate::Error::Storage) if the file cannot
    /// be read or parsed, or an oracle error if its state is inconsistent.
    pub fn load(path: impl AsRef<Path>, space: SearchSpace) -> Result<Self> {
        let snapshot: TunerSnapshot =
            persistence::read_json(path.as_ref(), |s: &TunerSnapshot| s.version)?;
        let oracle = GreedyOracle::from_snapshot(snapshot.max_collisions, snapshot.oracle)?;
        let storage = MemoryStorage::with_trials(snapshot.trials);
        storage.bump_next_id(snapshot.next_trial_id);
        trace_info!(next_trial_id = snapshot.next_trial_id, "tuner loaded");
        Ok(Self::builder()
            .direction(snapshot.direction)
            .space(space)
            .oracle(oracle)
            .storage(storage)
            .build())
    }
}
