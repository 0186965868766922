use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::space::{Values, hash_values};

/// Everything a [`GreedyOracle`](super::GreedyOracle) needs to resume a search.
///
/// Obtained from [`export_state`](super::GreedyOracle::export_state) and
/// restored with [`import_state`](super::GreedyOracle::import_state). A
/// restored oracle makes exactly the decisions the original would have made.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OracleState {
    pub(crate) seed: u64,
    pub(crate) seed_state: u64,
    pub(crate) rng_state: u64,
    pub(crate) initial_hps: Vec<Values>,
    pub(crate) tried_initial_hps: Vec<bool>,
    pub(crate) tried_so_far: BTreeSet<String>,
}

impl OracleState {
    pub(crate) fn new(seed: u64, initial_hps: Vec<Values>) -> Self {
        let tried_initial_hps = vec![false; initial_hps.len()];
        Self {
            seed,
            seed_state: seed,
            // Group selection must not replay the value seeds `seed, seed + 1, ...`.
            rng_state: fastrand::Rng::with_seed(seed).u64(..),
            initial_hps,
            tried_initial_hps,
            tried_so_far: BTreeSet::new(),
        }
    }

    /// The seed the search started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed for the next sampled value; advances by one per value.
    #[must_use]
    pub fn seed_state(&self) -> u64 {
        self.seed_state
    }

    /// The initial configurations, in replay order.
    #[must_use]
    pub fn initial_hps(&self) -> &[Values] {
        &self.initial_hps
    }

    /// Which initial configurations have been returned.
    #[must_use]
    pub fn tried_initial_hps(&self) -> &[bool] {
        &self.tried_initial_hps
    }

    /// Hashes of every configuration returned so far.
    ///
    /// Replayed initial configurations are included, so the greedy phase
    /// never proposes one of them again.
    #[must_use]
    pub fn tried_so_far(&self) -> &BTreeSet<String> {
        &self.tried_so_far
    }

    /// Marks `values` as tried. Returns `false` if it already was.
    pub(crate) fn record(&mut self, values: &Values) -> bool {
        self.tried_so_far.insert(hash_values(values))
    }

    /// Returns the first untried initial configuration and marks it tried.
    pub(crate) fn next_initial_hps(&mut self) -> Option<Values> {
        let index = self.tried_initial_hps.iter().position(|tried| !tried)?;
        self.tried_initial_hps[index] = true;
        let values = self.initial_hps[index].clone();
        self.record(&values);
        Some(values)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.initial_hps.len() != self.tried_initial_hps.len() {
            return Err(Error::InvalidState(
                "initial_hps and tried_initial_hps differ in length",
            ));
        }
        Ok(())
    }
}

/// On-disk form of a greedy oracle: configuration plus [`OracleState`].
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
pub struct OracleSnapshot {
    /// Schema version for forward compatibility.
    pub version: u32,
    /// The collision budget per decision.
    pub max_collisions: usize,
    /// The search state.
    pub state: OracleState,
}
