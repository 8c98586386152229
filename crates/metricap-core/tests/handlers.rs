//! Handler ingestion, identity, and buffer behavior.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use metricap_core::{Counter, MetricKind, ObservationBuffer, Recorder, Samples, Timer};

#[test]
fn counter_appends_in_call_order() {
    let c = Counter::new("requests", &[]);
    c.increment(1);
    c.increment(2);
    c.increment(3);
    assert_eq!(c.values(), vec![1, 2, 3]);
    assert_eq!(c.last_value(), Some(3));
}

#[test]
fn counter_accepts_zero_and_negative() {
    let c = Counter::new("balance", &[]);
    c.increment(0);
    c.increment(-7);
    c.increment(i64::MIN);
    assert_eq!(c.values(), vec![0, -7, i64::MIN]);
}

#[test]
fn counter_reset_clears_then_resumes() {
    let c = Counter::new("requests", &[]);
    c.increment(10);
    c.increment(20);
    c.reset();
    assert!(c.values().is_empty());

    c.increment(5);
    assert_eq!(c.values(), vec![5]);
}

#[test]
fn handlers_equal_only_by_identity() {
    let a = Counter::new("same", &[("k", "v")]);
    let b = Counter::new("same", &[("k", "v")]);
    assert_ne!(a, b);
    assert_ne!(a.id(), b.id());
    assert_eq!(a, a);

    let r1 = Recorder::new("r", &[], true);
    let r2 = Recorder::new("r", &[], true);
    assert_ne!(r1, r2);

    let t1 = Timer::new("t", &[]);
    let t2 = Timer::new("t", &[]);
    assert_ne!(t1, t2);
}

#[test]
fn handler_metadata_is_kept_as_given() {
    let r = Recorder::new("queue.depth", &[("shard", "3"), ("region", "eu")], false);
    assert_eq!(r.label(), "queue.depth");
    assert_eq!(r.qualified_label(), "recorders.queue.depth");
    assert!(!r.aggregate());
    assert_eq!(
        r.dimensions(),
        &[
            ("shard".to_string(), "3".to_string()),
            ("region".to_string(), "eu".to_string()),
        ]
    );

    let t = Timer::new("db", &[]);
    assert_eq!(t.qualified_label(), "timers.db");
    assert_eq!(Counter::new("hits", &[]).qualified_label(), "counters.hits");
}

#[test]
fn recorder_normalizes_to_f64() {
    let r = Recorder::new("temp", &[], true);
    r.record_int(42);
    r.record_float(1.5);
    r.record_int(-3);
    assert_eq!(r.values(), vec![42.0, 1.5, -3.0]);
}

#[test]
fn recorder_large_integers_round_within_f64_precision() {
    let r = Recorder::new("big", &[], true);
    let v: i64 = 9_007_199_254_740_993; // 2^53 + 1
    r.record_int(v);
    r.record_float(9_007_199_254_740_993.0);

    let values = r.values();
    assert_eq!(values.len(), 2);
    let expected = 2f64.powi(53);
    for got in values {
        // one ulp at this magnitude is 2.0
        assert!((got - expected).abs() <= 2.0, "got {got}");
    }
}

#[test]
fn timer_keeps_nanoseconds_unconverted() {
    let t = Timer::new("latency", &[]);
    t.record_nanoseconds(1_500);
    t.record_nanoseconds(-1);
    t.record_duration(Duration::from_micros(2));
    assert_eq!(t.values(), vec![1_500, -1, 2_000]);
}

#[test]
fn timer_duration_saturates() {
    let t = Timer::new("forever", &[]);
    t.record_duration(Duration::MAX);
    assert_eq!(t.values(), vec![i64::MAX]);
}

#[test]
fn samples_are_timestamped_in_order() {
    let c = Counter::new("ticks", &[]);
    let before = SystemTime::now();
    c.increment(1);
    c.increment(2);
    let samples = c.samples();
    assert_eq!(samples.len(), 2);
    assert!(samples[0].at >= before);
    assert!(samples[1].at >= samples[0].at);
}

#[test]
fn buffer_snapshot_is_a_detached_copy() {
    let buf = ObservationBuffer::new();
    buf.append(UNIX_EPOCH, 1i64);
    let snap = buf.snapshot();
    buf.append(UNIX_EPOCH, 2);
    assert_eq!(snap.len(), 1);
    assert_eq!(buf.len(), 2);
    buf.reset();
    assert!(buf.is_empty());
    assert_eq!(snap[0].value, 1);
}

#[test]
fn concurrent_appends_are_not_lost() {
    let c = Arc::new(Counter::new("parallel", &[]));
    let threads = 8;
    let per_thread = 500;

    thread::scope(|s| {
        for _ in 0..threads {
            let c = Arc::clone(&c);
            s.spawn(move || {
                for _ in 0..per_thread {
                    c.increment(1);
                }
            });
        }
    });

    let values = c.values();
    assert_eq!(values.len(), threads * per_thread);
    assert!(values.iter().all(|v| *v == 1));
}

#[test]
fn handler_snapshot_carries_kind_specific_fields() {
    let r = Recorder::new("cpu", &[("host", "a")], true);
    r.record_float(0.25);
    let snap = r.snapshot();
    assert_eq!(snap.kind, MetricKind::Recorder);
    assert_eq!(snap.aggregate, Some(true));
    match &snap.samples {
        Samples::Float(v) => assert_eq!(v[0].value, 0.25),
        other => panic!("unexpected samples: {other:?}"),
    }

    let c = Counter::new("hits", &[]);
    c.increment(4);
    let snap = c.snapshot();
    assert_eq!(snap.aggregate, None);
    assert_eq!(snap.samples, Samples::Int(c.samples()));
}

#[test]
fn kind_prefixes_round_trip() {
    for kind in MetricKind::ALL {
        let q = kind.qualify("x.y");
        assert_eq!(MetricKind::split_qualified(&q), Some((kind, "x.y")));
    }
    assert_eq!(MetricKind::split_qualified("gauges.x"), None);
    assert_eq!(MetricKind::split_qualified("counters"), None);
    assert_eq!(
        MetricKind::split_qualified("counters."),
        Some((MetricKind::Counter, ""))
    );
}
