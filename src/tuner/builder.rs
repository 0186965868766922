use std::sync::Arc;

use crate::oracle::{GreedyOracle, Oracle};
use crate::space::SearchSpace;
use crate::storage::{MemoryStorage, Storage};
use crate::types::Direction;

use super::Tuner;

/// A builder for constructing [`Tuner`] instances with a fluent API.
///
/// Created via [`Tuner::builder()`].
///
/// # Defaults
///
/// - Direction: [`Minimize`](Direction::Minimize)
/// - Space: empty
/// - Oracle: [`GreedyOracle::new()`] (random seed)
/// - Storage: [`MemoryStorage`]
///
/// # Examples
///
/// ```
/// use greedy_tuner::prelude::*;
///
/// let oracle = GreedyOracle::builder().seed(7).max_collisions(5).build().unwrap();
/// let tuner = Tuner::builder()
///     .maximize()
///     .space(SearchSpace::new().with(Hyperparameter::boolean("use_bias")).unwrap())
///     .oracle(oracle)
///     .build();
///
/// assert_eq!(tuner.direction(), Direction::Maximize);
/// assert_eq!(tuner.oracle().max_collisions(), 5);
/// ```
pub struct TunerBuilder<O: Oracle = GreedyOracle> {
    direction: Direction,
    space: SearchSpace,
    oracle: O,
    storage: Option<Box<dyn Storage>>,
}

impl TunerBuilder<GreedyOracle> {
    /// Create a new builder with default settings.
    pub(super) fn new() -> Self {
        Self {
            direction: Direction::Minimize,
            space: SearchSpace::new(),
            oracle: GreedyOracle::new(),
            storage: None,
        }
    }
}

impl<O: Oracle> TunerBuilder<O> {
    /// Set the optimization direction to minimize (the default).
    #[must_use]
    pub fn minimize(mut self) -> Self {
        self.direction = Direction::Minimize;
        self
    }

    /// Set the optimization direction to maximize.
    #[must_use]
    pub fn maximize(mut self) -> Self {
        self.direction = Direction::Maximize;
        self
    }

    /// Set the optimization direction explicitly.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the search space.
    #[must_use]
    pub fn space(mut self, space: SearchSpace) -> Self {
        self.space = space;
        self
    }

    /// Set the oracle that proposes configurations.
    #[must_use]
    pub fn oracle<P: Oracle>(self, oracle: P) -> TunerBuilder<P> {
        TunerBuilder {
            direction: self.direction,
            space: self.space,
            oracle,
            storage: self.storage,
        }
    }

    /// Set a custom storage backend.
    #[must_use]
    pub fn storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Build the [`Tuner`] with the configured options.
    #[must_use]
    pub fn build(self) -> Tuner<O> {
        let storage = self
            .storage
            .unwrap_or_else(|| Box::new(MemoryStorage::new()));

        Tuner {
            direction: self.direction,
            space: self.space,
            oracle: self.oracle,
            storage: Arc::from(storage),
        }
    }
}
