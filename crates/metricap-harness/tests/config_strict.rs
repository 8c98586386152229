#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use metricap_core::MetricKind;
use metricap_harness::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
runner:
  workerz: 3 # typo should fail
metrics:
  - kind: counter
    label: "requests"
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
metrics:
  - kind: timer
    label: "db.query"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.runner.workers, 4);
    assert_eq!(cfg.runner.iterations, 100);
    assert!(!cfg.runner.release_after);
    assert_eq!(cfg.metrics[0].kind, MetricKind::Timer);
    assert_eq!(cfg.metrics[0].value, 1);
    assert!(cfg.metrics[0].dimensions.is_empty());
}

#[test]
fn full_config_parses_dimensions_and_aggregate() {
    let ok = r#"
version: 1
runner:
  workers: 2
  iterations: 10
  release_after: true
metrics:
  - kind: recorder
    label: "queue.depth"
    dimensions: [["shard", "1"], ["region", "eu"]]
    aggregate: false
    value: 7
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let m = &cfg.metrics[0];
    assert!(!m.aggregate());
    assert_eq!(m.value, 7);
    assert_eq!(m.dimension_refs(), vec![("shard", "1"), ("region", "eu")]);
    assert_eq!(m.qualified_label(), "recorders.queue.depth");
}

#[test]
fn unsupported_version_is_rejected() {
    let bad = r#"
version: 2
metrics:
  - kind: counter
    label: "x"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn validation_failures() {
    let cases = [
        ("empty metrics", "version: 1\nmetrics: []\n"),
        (
            "zero workers",
            "version: 1\nrunner: { workers: 0 }\nmetrics: [{ kind: counter, label: x }]\n",
        ),
        (
            "prefixed label",
            "version: 1\nmetrics: [{ kind: counter, label: counters.x }]\n",
        ),
        ("empty label", "version: 1\nmetrics: [{ kind: timer, label: \"\" }]\n"),
        (
            "aggregate on counter",
            "version: 1\nmetrics: [{ kind: counter, label: x, aggregate: true }]\n",
        ),
        (
            "unknown kind",
            "version: 1\nmetrics: [{ kind: gauge, label: x }]\n",
        ),
    ];

    for (name, yaml) in cases {
        let err = config::load_from_str(yaml).expect_err(name);
        assert_eq!(err.code().as_str(), "BAD_CONFIG", "case={name}");
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "IO");
}
