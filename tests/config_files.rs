use filter_bench::{AppConfig, BenchError};

/// Every shipped config must parse.
#[test]
fn qa_shipped_configs_parse() {
    for env in ["dev", "ci", "entropy"] {
        let cfg = AppConfig::load(env).unwrap_or_else(|e| panic!("config/{env}.yaml: {e}"));
        assert!(!cfg.log_level.is_empty(), "{env}: log_level");
        assert!(cfg.bench.sample_size >= 10, "{env}: criterion needs >= 10 samples");
    }
}

#[test]
fn qa_dev_config_is_seeded() {
    let cfg = AppConfig::load("dev").unwrap();
    assert_eq!(cfg.bench.seed, Some(42));
    assert!(cfg.bench.track_allocations);
}

#[test]
fn qa_entropy_config_is_unseeded() {
    let cfg = AppConfig::load("entropy").unwrap();
    assert_eq!(cfg.bench.seed, None);
}

#[test]
fn qa_unknown_env_is_read_error() {
    let err = AppConfig::load("no_such_env").unwrap_err();
    assert!(matches!(err, BenchError::ConfigRead { .. }));
    assert!(err.to_string().contains("no_such_env.yaml"));
}
