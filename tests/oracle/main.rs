#![allow(
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

mod concurrency;
mod exhaustion;
mod grouping;
mod initial;
mod state;

use greedy_tuner::prelude::*;

/// Runs decisions until the oracle stops or `limit` is reached.
pub(crate) fn drain(
    oracle: &GreedyOracle,
    space: &SearchSpace,
    history: &Vec<CompletedTrial>,
    limit: u64,
) -> Vec<Values> {
    let mut proposed = Vec::new();
    for trial_id in 0..limit {
        match oracle.populate_space(trial_id, space, history).unwrap() {
            Decision::Running(values) => proposed.push(values),
            Decision::Stopped => break,
        }
    }
    proposed
}

pub(crate) fn discrete_space() -> SearchSpace {
    SearchSpace::new()
        .with(Hyperparameter::boolean("model/use_bias"))
        .and_then(|s| s.with(Hyperparameter::choice("model/block/kind", 3)))
        .and_then(|s| s.with(Hyperparameter::int("optimizer/epochs", 1, 4)))
        .unwrap()
}

pub(crate) fn continuous_space() -> SearchSpace {
    SearchSpace::new()
        .with(Hyperparameter::int("model/dense_0/units", 1, 1_000_000))
        .and_then(|s| s.with(Hyperparameter::int("model/dense_1/units", 1, 1_000_000)))
        .and_then(|s| s.with(Hyperparameter::float("optimizer/lr", 1e-5, 1e-1).log_scale()))
        .unwrap()
}
