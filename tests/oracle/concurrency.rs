use std::collections::HashSet;
use std::thread;

use greedy_tuner::hash_values;
use greedy_tuner::prelude::*;

use crate::continuous_space;

#[test]
fn concurrent_decisions_are_serialized() {
    let tuner = Tuner::builder()
        .space(continuous_space())
        .oracle(GreedyOracle::with_seed(31))
        .build();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..25 {
                    let trial = tuner.ask().unwrap().expect("fresh configuration");
                    let units = trial.int("model/dense_0/units").unwrap();
                    tuner.complete_trial(trial, units as f64);
                }
            });
        }
    });

    let trials = tuner.trials();
    assert_eq!(trials.len(), 100);

    let ids: HashSet<u64> = trials.iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), 100);
    let hashes: HashSet<String> = trials.iter().map(|t| hash_values(&t.values)).collect();
    assert_eq!(hashes.len(), 100);
    assert_eq!(tuner.oracle().export_state().tried_so_far().len(), 100);
}
