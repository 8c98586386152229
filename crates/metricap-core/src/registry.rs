//! Handler registry: create-or-fetch one handler per (kind, label).
//!
//! Each kind owns its own `DashMap` keyed by the bare label, so creations of
//! different kinds never contend. Create-or-fetch goes through
//! `DashMap::entry`, which holds the key's shard lock across the
//! check-then-insert; concurrent callers asking for the same label therefore
//! all receive the one handler that was constructed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::handler::{
    same_dimensions, Counter, CounterHandler, MetricsFactory, Recorder, RecorderHandler, Timer,
    TimerHandler,
};
use crate::kind::MetricKind;
use crate::snapshot::RegistrySnapshot;

#[derive(Debug, Default)]
pub struct Registry {
    counters: DashMap<String, Arc<Counter>>,
    recorders: DashMap<String, Arc<Recorder>>,
    timers: DashMap<String, Arc<Timer>>,
    created: AtomicU64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the counter for `label`, creating it on first request.
    ///
    /// When the counter already exists, `dimensions` is ignored and the
    /// original dimensions stay in place.
    pub fn make_counter(&self, label: &str, dimensions: &[(&str, &str)]) -> Arc<Counter> {
        let (counter, created) = self.make(&self.counters, MetricKind::Counter, label, || {
            Counter::new(label, dimensions)
        });
        if !created && !same_dimensions(counter.dimensions(), dimensions) {
            tracing::warn!(
                kind = "counter",
                label = %label,
                "dimensions differ from the registered handler; keeping the original"
            );
        }
        counter
    }

    /// Return the recorder for `label`, creating it on first request.
    /// An existing recorder keeps its original dimensions and aggregate flag.
    pub fn make_recorder(
        &self,
        label: &str,
        dimensions: &[(&str, &str)],
        aggregate: bool,
    ) -> Arc<Recorder> {
        let (recorder, created) = self.make(&self.recorders, MetricKind::Recorder, label, || {
            Recorder::new(label, dimensions, aggregate)
        });
        if !created
            && (!same_dimensions(recorder.dimensions(), dimensions)
                || recorder.aggregate() != aggregate)
        {
            tracing::warn!(
                kind = "recorder",
                label = %label,
                aggregate,
                registered_aggregate = recorder.aggregate(),
                "configuration differs from the registered handler; keeping the original"
            );
        }
        recorder
    }

    /// Return the timer for `label`, creating it on first request.
    pub fn make_timer(&self, label: &str, dimensions: &[(&str, &str)]) -> Arc<Timer> {
        let (timer, created) =
            self.make(&self.timers, MetricKind::Timer, label, || Timer::new(label, dimensions));
        if !created && !same_dimensions(timer.dimensions(), dimensions) {
            tracing::warn!(
                kind = "timer",
                label = %label,
                "dimensions differ from the registered handler; keeping the original"
            );
        }
        timer
    }

    fn make<H>(
        &self,
        map: &DashMap<String, Arc<H>>,
        kind: MetricKind,
        label: &str,
        build: impl FnOnce() -> H,
    ) -> (Arc<H>, bool) {
        let (handler, created) = match map.entry(label.to_owned()) {
            Entry::Occupied(e) => (Arc::clone(e.get()), false),
            Entry::Vacant(e) => {
                let handler = Arc::new(build());
                e.insert(Arc::clone(&handler));
                self.created.fetch_add(1, Ordering::Relaxed);
                (handler, true)
            }
        };
        if created {
            tracing::debug!(kind = kind.as_str(), label = %label, "handler created");
        } else {
            tracing::trace!(kind = kind.as_str(), label = %label, "handler reused");
        }
        (handler, created)
    }

    /// Registered counter for `label`, without creating one.
    pub fn counter(&self, label: &str) -> Option<Arc<Counter>> {
        self.counters.get(label).map(|r| Arc::clone(r.value()))
    }

    pub fn recorder(&self, label: &str) -> Option<Arc<Recorder>> {
        self.recorders.get(label).map(|r| Arc::clone(r.value()))
    }

    pub fn timer(&self, label: &str) -> Option<Arc<Timer>> {
        self.timers.get(label).map(|r| Arc::clone(r.value()))
    }

    /// Forget the handler behind a kind-qualified label such as
    /// `"timers.latency"`. Labels without a known prefix are ignored.
    ///
    /// Callers still holding the handler keep a working reference, but it is
    /// no longer reachable through the registry; the next `make_*` for the
    /// label builds a fresh one.
    pub fn release(&self, label: &str) {
        match MetricKind::split_qualified(label) {
            Some((kind, bare)) => self.release_kind(kind, bare),
            None => tracing::trace!(label = %label, "release ignored: no kind prefix"),
        }
    }

    /// Forget the handler of `kind` registered under the bare `label`.
    pub fn release_kind(&self, kind: MetricKind, label: &str) {
        let removed = match kind {
            MetricKind::Counter => self.counters.remove(label).is_some(),
            MetricKind::Recorder => self.recorders.remove(label).is_some(),
            MetricKind::Timer => self.timers.remove(label).is_some(),
        };
        if removed {
            tracing::debug!(kind = kind.as_str(), label = %label, "handler released");
        } else {
            tracing::trace!(kind = kind.as_str(), label = %label, "release ignored: not registered");
        }
    }

    /// Drop every registered handler.
    pub fn clear(&self) {
        self.counters.clear();
        self.recorders.clear();
        self.timers.clear();
    }

    /// Number of live handlers across all kinds.
    pub fn len(&self) -> usize {
        self.counters.len() + self.recorders.len() + self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handler constructions over the registry's lifetime (released ones included).
    pub fn handlers_created(&self) -> u64 {
        self.created.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        let mut handlers = Vec::with_capacity(self.len());
        handlers.extend(self.counters.iter().map(|r| r.value().snapshot()));
        handlers.extend(self.recorders.iter().map(|r| r.value().snapshot()));
        handlers.extend(self.timers.iter().map(|r| r.value().snapshot()));
        RegistrySnapshot::from_unsorted(handlers)
    }
}

impl MetricsFactory for Registry {
    fn make_counter(&self, label: &str, dimensions: &[(&str, &str)]) -> Arc<dyn CounterHandler> {
        Registry::make_counter(self, label, dimensions)
    }

    fn make_recorder(
        &self,
        label: &str,
        dimensions: &[(&str, &str)],
        aggregate: bool,
    ) -> Arc<dyn RecorderHandler> {
        Registry::make_recorder(self, label, dimensions, aggregate)
    }

    fn make_timer(&self, label: &str, dimensions: &[(&str, &str)]) -> Arc<dyn TimerHandler> {
        Registry::make_timer(self, label, dimensions)
    }

    fn release(&self, label: &str) {
        Registry::release(self, label);
    }
}
