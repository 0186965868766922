#![cfg(feature = "serde")]

use greedy_tuner::prelude::*;
use greedy_tuner::{TunerSnapshot, hash_values};

fn space() -> SearchSpace {
    SearchSpace::new()
        .with(Hyperparameter::int("model/block_0/units", 8, 512))
        .and_then(|s| s.with(Hyperparameter::choice("model/block_0/activation", 3)))
        .and_then(|s| s.with(Hyperparameter::float("optimizer/lr", 1e-5, 1e-1).log_scale()))
        .unwrap()
}

fn objective(trial: &Trial) -> Result<f64> {
    let units = trial.int("model/block_0/units")?;
    let lr = trial.float("optimizer/lr")?;
    Ok((units as f64 - 128.0).abs() + lr.ln().abs())
}

#[test]
fn oracle_round_trip_save_load() {
    let space = space();
    let history = Vec::new();
    let oracle = GreedyOracle::builder()
        .seed(4)
        .max_collisions(7)
        .build()
        .unwrap();
    for trial_id in 0..5 {
        oracle.populate_space(trial_id, &space, &history).unwrap();
    }

    let dir = tempdir();
    let path = dir.join("oracle.json");
    oracle.save(&path).unwrap();
    let loaded = GreedyOracle::load(&path).unwrap();

    assert_eq!(loaded.max_collisions(), 7);
    assert_eq!(loaded.export_state(), oracle.export_state());
    for trial_id in 5..10 {
        assert_eq!(
            loaded.populate_space(trial_id, &space, &history).unwrap(),
            oracle.populate_space(trial_id, &space, &history).unwrap()
        );
    }
}

#[test]
fn tuner_resumes_where_it_stopped() {
    let uninterrupted = Tuner::builder()
        .space(space())
        .oracle(GreedyOracle::with_seed(10))
        .build();
    uninterrupted.search(12, objective).unwrap();

    let first_half = Tuner::builder()
        .space(space())
        .oracle(GreedyOracle::with_seed(10))
        .build();
    first_half.search(6, objective).unwrap();

    let dir = tempdir();
    let path = dir.join("tuner.json");
    first_half.save(&path).unwrap();
    let resumed = Tuner::load(&path, space()).unwrap();
    assert_eq!(resumed.n_trials(), 6);
    resumed.search(6, objective).unwrap();

    let hashes = |tuner: &Tuner| -> Vec<String> {
        tuner.trials().iter().map(|t| hash_values(&t.values)).collect()
    };
    assert_eq!(hashes(&resumed), hashes(&uninterrupted));
    let ids: Vec<u64> = resumed.trials().iter().map(|t| t.id).collect();
    assert_eq!(ids, (0..12).collect::<Vec<_>>());
    assert_eq!(
        resumed.best_value().unwrap(),
        uninterrupted.best_value().unwrap()
    );
}

#[test]
fn snapshot_is_readable_json() {
    let tuner = Tuner::builder()
        .maximize()
        .space(space())
        .oracle(GreedyOracle::with_seed(3))
        .build();
    tuner.search(3, objective).unwrap();

    let dir = tempdir();
    let path = dir.join("tuner.json");
    tuner.save(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"version\""));
    assert!(contents.contains("\"tried_so_far\""));

    let snapshot: TunerSnapshot = serde_json::from_str(&contents).unwrap();
    assert_eq!(snapshot.version, 1);
    assert_eq!(snapshot.direction, Direction::Maximize);
    assert_eq!(snapshot.trials.len(), 3);
    assert_eq!(snapshot.next_trial_id, 3);
    assert_eq!(snapshot.oracle.tried_so_far().len(), 3);
}

#[test]
fn unknown_version_is_rejected() {
    let tuner = Tuner::builder().space(space()).build();
    let dir = tempdir();
    let path = dir.join("tuner.json");
    tuner.save(&path).unwrap();

    let contents = std::fs::read_to_string(&path)
        .unwrap()
        .replacen("\"version\": 1", "\"version\": 99", 1);
    std::fs::write(&path, contents).unwrap();

    assert!(matches!(Tuner::load(&path, space()), Err(Error::Storage(_))));
}

#[test]
fn inconsistent_oracle_state_is_rejected() {
    let oracle = GreedyOracle::builder().seed(1).build().unwrap();
    let dir = tempdir();
    let path = dir.join("oracle.json");
    oracle.save(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    json["state"]["tried_initial_hps"] = serde_json::json!([true]);
    std::fs::write(&path, json.to_string()).unwrap();

    assert!(matches!(
        GreedyOracle::load(&path),
        Err(Error::InvalidState(_))
    ));
}

#[test]
fn missing_file_is_a_storage_error() {
    let dir = tempdir();
    assert!(matches!(
        GreedyOracle::load(dir.join("absent.json")),
        Err(Error::Storage(_))
    ));
}

fn tempdir() -> std::path::PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir =
        std::env::temp_dir().join(format!("greedy_tuner_serde_test_{}_{id}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
