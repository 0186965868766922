use crate::error::{Error, Result};
use crate::space::Values;

use super::GreedyOracle;
use super::greedy::DEFAULT_MAX_COLLISIONS;
use super::state::OracleState;

/// A builder for [`GreedyOracle`] with a fluent API.
///
/// Created via [`GreedyOracle::builder()`].
///
/// # Defaults
///
/// - Initial configurations: none
/// - Seed: random in `1..=10_000`
/// - Max collisions: 20
///
/// # Examples
///
/// ```
/// use greedy_tuner::oracle::GreedyOracle;
/// use greedy_tuner::{ParamValue, Values};
///
/// let mut first = Values::new();
/// first.insert("model/units".into(), ParamValue::Int(32));
///
/// let oracle = GreedyOracle::builder()
///     .initial_hps(vec![first])
///     .seed(42)
///     .max_collisions(10)
///     .build()
///     .unwrap();
/// assert_eq!(oracle.seed(), 42);
/// ```
#[derive(Clone, Debug, Default)]
pub struct OracleBuilder {
    initial_hps: Vec<Values>,
    seed: Option<u64>,
    max_collisions: Option<usize>,
}

impl OracleBuilder {
    /// Create a new builder with default settings.
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Configurations to evaluate, in order, before the greedy search starts.
    #[must_use]
    pub fn initial_hps(mut self, initial_hps: Vec<Values>) -> Self {
        self.initial_hps = initial_hps;
        self
    }

    /// Seed for group selection and value sampling.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of attempts per decision before giving up with
    /// [`Decision::Stopped`](super::Decision::Stopped).
    #[must_use]
    pub fn max_collisions(mut self, max_collisions: usize) -> Self {
        self.max_collisions = Some(max_collisions);
        self
    }

    /// Build the [`GreedyOracle`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxCollisions`] if `max_collisions` is zero.
    pub fn build(self) -> Result<GreedyOracle> {
        let max_collisions = self.max_collisions.unwrap_or(DEFAULT_MAX_COLLISIONS);
        if max_collisions == 0 {
            return Err(Error::InvalidMaxCollisions);
        }
        let seed = self.seed.unwrap_or_else(|| fastrand::u64(1..=10_000));
        Ok(GreedyOracle::from_state(
            max_collisions,
            OracleState::new(seed, self.initial_hps),
        ))
    }
}
