use std::collections::HashSet;

use greedy_tuner::hash_values;
use greedy_tuner::prelude::*;

use crate::{discrete_space, drain};

fn flag(index: usize) -> Values {
    let mut values = Values::new();
    values.insert("flag".into(), ParamValue::Categorical(index));
    values
}

#[test]
fn stops_within_collision_budget_once_space_is_exhausted() {
    let space = SearchSpace::new()
        .with(Hyperparameter::boolean("flag"))
        .unwrap();
    let oracle = GreedyOracle::builder()
        .initial_hps(vec![flag(0), flag(1)])
        .seed(100)
        .max_collisions(3)
        .build()
        .unwrap();
    let history = Vec::new();

    assert_eq!(drain(&oracle, &space, &history, 2).len(), 2);

    let before = oracle.export_state();
    let decision = oracle.populate_space(2, &space, &history).unwrap();
    assert_eq!(decision, Decision::Stopped);
    assert_eq!(decision.status(), TrialStatus::Stopped);
    assert!(decision.values().is_none());

    // One sampled value per attempt.
    let after = oracle.export_state();
    assert_eq!(after.seed_state(), before.seed_state() + 3);
    assert_eq!(after.tried_so_far(), before.tried_so_far());
}

#[test]
fn never_proposes_a_configuration_twice() {
    let space = discrete_space();
    let oracle = GreedyOracle::builder()
        .seed(8)
        .max_collisions(200)
        .build()
        .unwrap();
    let history = Vec::new();

    let proposed = drain(&oracle, &space, &history, 100);
    let hashes: HashSet<String> = proposed.iter().map(hash_values).collect();
    assert_eq!(hashes.len(), proposed.len());
    // 2 * 3 * 4 configurations exist.
    assert!(proposed.len() <= 24);
    assert!(proposed.len() > 6, "found only {}", proposed.len());
}

#[test]
fn every_proposal_lies_in_the_space() {
    let space = discrete_space();
    let oracle = GreedyOracle::with_seed(21);
    let history = Vec::new();

    for values in drain(&oracle, &space, &history, 10) {
        assert_eq!(values.len(), space.len());
        for hp in &space {
            assert!(hp.distribution().contains(&values[hp.name()]));
        }
    }
}
