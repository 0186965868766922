//! Greedy oracle: mutate one name-prefix group of the best configuration.
//!
//! Hyperparameter names are paths (`model/block_0/units`), so every name
//! prefix is a natural group: one architectural decision and everything it
//! expands into. Each decision:
//!
//! 1. replays the next untried initial configuration, if any; otherwise
//! 2. builds a [`Trie`] over the current space and draws one node with
//!    probability proportional to `1 / leaves(node)`, so a coarse group and a
//!    single scalar are about equally likely however many names they cover;
//! 3. copies the best trial's configuration and resamples only that group;
//! 4. rejects configurations already returned, retrying up to
//!    `max_collisions` times before reporting [`Decision::Stopped`].
//!
//! Seeds for value sampling come from a counter that advances once per
//! sampled value, and the group-selection generator is part of the exported
//! state, so a fixed seed gives a reproducible search that can be paused and
//! resumed without changing its course.

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::hyperparameter::Hyperparameter;
#[cfg(feature = "serde")]
use crate::persistence;
use crate::rng_util;
use crate::space::{SearchSpace, Values};
use crate::storage::TrialRanking;
use crate::trie::Trie;

use super::builder::OracleBuilder;
#[cfg(feature = "serde")]
use super::state::OracleSnapshot;
use super::state::OracleState;
use super::{Decision, Oracle};

pub(crate) const DEFAULT_MAX_COLLISIONS: usize = 20;

/// An oracle combining random search with a greedy choice of what to mutate.
///
/// # Examples
///
/// ```
/// use greedy_tuner::oracle::{Decision, GreedyOracle, Oracle};
/// use greedy_tuner::{CompletedTrial, Hyperparameter, SearchSpace};
///
/// let space = SearchSpace::new()
///     .with(Hyperparameter::int("model/units", 8, 64))
///     .and_then(|s| s.with(Hyperparameter::float("optimizer/lr", 1e-4, 1e-1)))
///     .unwrap();
/// let oracle = GreedyOracle::with_seed(42);
/// let history: Vec<CompletedTrial> = Vec::new();
///
/// let decision = oracle.populate_space(0, &space, &history).unwrap();
/// assert!(matches!(decision, Decision::Running(_)));
/// ```
pub struct GreedyOracle {
    max_collisions: usize,
    state: Mutex<OracleState>,
}

impl GreedyOracle {
    /// Creates an oracle with a random seed and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(
            DEFAULT_MAX_COLLISIONS,
            OracleState::new(fastrand::u64(1..=10_000), Vec::new()),
        )
    }

    /// Creates an oracle with a fixed seed and default settings.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_state(DEFAULT_MAX_COLLISIONS, OracleState::new(seed, Vec::new()))
    }

    /// Returns a builder for custom initial configurations, seed, and collision budget.
    #[must_use]
    pub fn builder() -> OracleBuilder {
        OracleBuilder::new()
    }

    pub(crate) fn from_state(max_collisions: usize, state: OracleState) -> Self {
        Self {
            max_collisions,
            state: Mutex::new(state),
        }
    }

    /// Returns the collision budget per decision.
    #[must_use]
    pub fn max_collisions(&self) -> usize {
        self.max_collisions
    }

    /// Returns the seed the search started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.state.lock().seed
    }

    /// Returns a copy of the search state.
    #[must_use]
    pub fn export_state(&self) -> OracleState {
        self.state.lock().clone()
    }

    /// Replaces the search state with `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if the initial configurations and
    /// their tried flags differ in length; the current state is kept.
    pub fn import_state(&self, state: OracleState) -> Result<()> {
        state.validate()?;
        *self.state.lock() = state;
        Ok(())
    }

    /// Save the collision budget and search state to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the file cannot be written.
    #[cfg(feature = "serde")]
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let snapshot = OracleSnapshot {
            version: persistence::SCHEMA_VERSION,
            max_collisions: self.max_collisions,
            state: self.export_state(),
        };
        persistence::write_json(path.as_ref(), &snapshot)
    }

    /// Load an oracle saved with [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the file cannot be read or parsed or has
    /// an unknown schema version, [`Error::InvalidMaxCollisions`] or
    /// [`Error::InvalidState`] if its contents are inconsistent.
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let snapshot: OracleSnapshot =
            persistence::read_json(path.as_ref(), |s: &OracleSnapshot| s.version)?;
        Self::from_snapshot(snapshot.max_collisions, snapshot.state)
    }

    /// Rebuilds an oracle from saved parts, checking them first.
    #[cfg(feature = "serde")]
    pub(crate) fn from_snapshot(max_collisions: usize, state: OracleState) -> Result<Self> {
        if max_collisions == 0 {
            return Err(Error::InvalidMaxCollisions);
        }
        state.validate()?;
        Ok(Self::from_state(max_collisions, state))
    }

    /// The best trial's configuration, completed with defaults for names it
    /// lacks, or the space defaults if no trial has completed.
    fn baseline(space: &SearchSpace, ranking: &dyn TrialRanking) -> Result<Values> {
        let mut values = space.values();
        if let Some(best) = ranking.best_trials()?.into_iter().next() {
            values.extend(best.values);
        }
        Ok(values)
    }
}

impl Default for GreedyOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for GreedyOracle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GreedyOracle")
            .field("max_collisions", &self.max_collisions)
            .field("state", &*self.state.lock())
            .finish()
    }
}

/// Draws one group of hyperparameters to mutate.
///
/// Empty when the space is empty.
#[allow(clippy::cast_precision_loss)]
fn select_hps<'s>(
    space: &'s SearchSpace,
    rng: &mut fastrand::Rng,
) -> Result<Vec<&'s Hyperparameter>> {
    let trie = Trie::build(space)?;
    let nodes = trie.nodes();
    if nodes.len() <= 1 {
        return Ok(Vec::new());
    }

    let weights: Vec<f64> = nodes
        .iter()
        .map(|&node| 1.0 / trie.num_leaves(node) as f64)
        .collect();
    let index = rng_util::weighted_index(rng, &weights)
        .ok_or(Error::Internal("group weights must have a positive sum"))?;
    Ok(trie.leaves_under(nodes[index]))
}

/// Copies `baseline` and resamples every member of `group`, one seed each.
fn generate_values(
    state: &mut OracleState,
    baseline: &Values,
    group: &[&Hyperparameter],
) -> Result<Values> {
    let mut values = baseline.clone();
    for hp in group {
        let value = hp.random_sample(state.seed_state)?;
        state.seed_state = state.seed_state.wrapping_add(1);
        values.insert(hp.name().to_owned(), value);
    }
    Ok(values)
}

impl Oracle for GreedyOracle {
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn populate_space(
        &self,
        trial_id: u64,
        space: &SearchSpace,
        ranking: &dyn TrialRanking,
    ) -> Result<Decision> {
        let mut state = self.state.lock();

        if let Some(values) = state.next_initial_hps() {
            trace_info!(trial_id, "replaying initial configuration");
            return Ok(Decision::Running(values));
        }

        let baseline = Self::baseline(space, ranking)?;
        for attempt in 1..=self.max_collisions {
            let mut rng = fastrand::Rng::with_seed(state.rng_state);
            let group = select_hps(space, &mut rng)?;
            state.rng_state = rng.get_seed();

            let values = generate_values(&mut state, &baseline, &group)?;
            if state.record(&values) {
                trace_debug!(trial_id, group_size = group.len(), attempt, "configuration proposed");
                return Ok(Decision::Running(values));
            }
            trace_debug!(trial_id, attempt, "configuration collision");
        }

        trace_info!(
            trial_id,
            max_collisions = self.max_collisions,
            "no fresh configuration found, stopping"
        );
        Ok(Decision::Stopped)
    }
}
