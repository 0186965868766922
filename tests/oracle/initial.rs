use greedy_tuner::prelude::*;

use crate::{continuous_space, drain};

fn config(units: i64, lr: f64) -> Values {
    let mut values = Values::new();
    values.insert("model/dense_0/units".into(), ParamValue::Int(units));
    values.insert("model/dense_1/units".into(), ParamValue::Int(units));
    values.insert("optimizer/lr".into(), ParamValue::Float(lr));
    values
}

#[test]
fn initial_sets_come_first_in_order() {
    let initial = vec![config(16, 1e-3), config(32, 1e-2), config(64, 1e-4)];
    let oracle = GreedyOracle::builder()
        .initial_hps(initial.clone())
        .seed(11)
        .build()
        .unwrap();

    // A strong prior trial must not pre-empt the replay.
    let history = vec![CompletedTrial::new(0, config(512, 5e-2), -100.0)];
    let proposed = drain(&oracle, &continuous_space(), &history, 5);

    assert_eq!(proposed.len(), 5);
    assert_eq!(&proposed[..3], &initial[..]);
    assert!(oracle.export_state().tried_initial_hps().iter().all(|&t| t));
}

#[test]
fn initial_sets_are_not_proposed_again() {
    let initial = vec![config(16, 1e-3)];
    let oracle = GreedyOracle::builder()
        .initial_hps(initial.clone())
        .seed(3)
        .build()
        .unwrap();
    let history = vec![CompletedTrial::new(0, initial[0].clone(), 0.0)];

    let proposed = drain(&oracle, &continuous_space(), &history, 30);
    assert_eq!(proposed[0], initial[0]);
    assert!(proposed[1..].iter().all(|values| *values != initial[0]));
}

#[test]
fn zero_max_collisions_is_rejected() {
    let result = GreedyOracle::builder().max_collisions(0).build();
    assert!(matches!(result, Err(Error::InvalidMaxCollisions)));
}
