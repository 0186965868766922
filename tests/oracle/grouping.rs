use greedy_tuner::prelude::*;
use greedy_tuner::trie::Trie;

fn bit(values: &Values, name: &str) -> usize {
    match values[name] {
        ParamValue::Categorical(i) => i,
        ref other => panic!("unexpected value {other:?} for {name}"),
    }
}

fn zeros() -> Values {
    ["a/x", "a/y", "b/z"]
        .into_iter()
        .map(|name| (name.to_owned(), ParamValue::Categorical(0)))
        .collect()
}

#[test]
fn mutations_rarely_cross_group_boundaries() {
    let space = SearchSpace::new()
        .with(Hyperparameter::boolean("a/x"))
        .and_then(|s| s.with(Hyperparameter::boolean("a/y")))
        .and_then(|s| s.with(Hyperparameter::boolean("b/z")))
        .unwrap();
    let history = vec![CompletedTrial::new(0, zeros(), 0.0)];

    let runs = 2_000;
    let mut crossing = 0;
    let mut a_only = 0;
    let mut b_only = 0;
    for seed in 1..=runs {
        let oracle = GreedyOracle::with_seed(seed);
        let Decision::Running(values) = oracle.populate_space(1, &space, &history).unwrap() else {
            panic!("fresh oracle stopped");
        };
        let a_changed = bit(&values, "a/x") == 1 || bit(&values, "a/y") == 1;
        let b_changed = bit(&values, "b/z") == 1;
        match (a_changed, b_changed) {
            (true, true) => crossing += 1,
            (true, false) => a_only += 1,
            (false, true) => b_only += 1,
            (false, false) => {}
        }
    }

    // Only the root group spans both prefixes. It is drawn with probability
    // 2/29, and then changes both sides 3/8 of the time.
    let crossing_rate = f64::from(crossing) / runs as f64;
    assert!(crossing_rate < 0.06, "crossing rate {crossing_rate}");
    assert!(a_only > 0 && b_only > 0);
}

#[test]
fn shared_prefixes_form_groups() {
    let space = SearchSpace::new()
        .with(Hyperparameter::boolean("a/x"))
        .and_then(|s| s.with(Hyperparameter::boolean("a/y")))
        .and_then(|s| s.with(Hyperparameter::boolean("b/z")))
        .unwrap();
    let trie = Trie::build(&space).unwrap();

    let a = trie.child(Trie::ROOT, "a").unwrap();
    let b = trie.child(Trie::ROOT, "b").unwrap();
    let names = |node| {
        let mut names: Vec<&str> = trie.leaves_under(node).iter().map(|hp| hp.name()).collect();
        names.sort_unstable();
        names
    };
    assert_eq!(names(a), ["a/x", "a/y"]);
    assert_eq!(names(b), ["b/z"]);
    assert_eq!(names(Trie::ROOT), ["a/x", "a/y", "b/z"]);
    assert_eq!(trie.len(), 6);
}
