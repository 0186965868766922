use greedy_tuner::prelude::*;

use crate::{continuous_space, drain};

#[test]
fn imported_state_continues_the_same_search() {
    let space = continuous_space();
    let history = Vec::new();

    let original = GreedyOracle::with_seed(5);
    drain(&original, &space, &history, 4);

    let resumed = GreedyOracle::with_seed(999);
    resumed.import_state(original.export_state()).unwrap();
    assert_eq!(resumed.seed(), 5);

    let expected = drain(&original, &space, &history, 10);
    let actual = drain(&resumed, &space, &history, 10);
    assert_eq!(expected.len(), 10);
    assert_eq!(actual, expected);
}

#[test]
fn same_seed_gives_same_search() {
    let space = continuous_space();
    let history = vec![CompletedTrial::new(0, space.values(), 1.0)];

    let first = drain(&GreedyOracle::with_seed(77), &space, &history, 8);
    let second = drain(&GreedyOracle::with_seed(77), &space, &history, 8);
    assert_eq!(first, second);
}

#[test]
fn exported_state_tracks_progress() {
    let space = continuous_space();
    let oracle = GreedyOracle::with_seed(12);
    let history = Vec::new();
    let start = oracle.export_state();
    assert_eq!(start.seed_state(), 12);
    assert!(start.tried_so_far().is_empty());

    drain(&oracle, &space, &history, 6);
    let state = oracle.export_state();
    assert_eq!(state.tried_so_far().len(), 6);
    // Every decision samples at least one value.
    assert!(state.seed_state() >= 12 + 6);
}
