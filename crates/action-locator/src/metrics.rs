use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use lazy_static::lazy_static;
use objrepo_core_types::StrategyKind;
use prometheus::{
    core::Collector, histogram_opts, HistogramVec, IntCounter, IntCounterVec, Registry,
};
use tracing::error;

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocatorMetricsSnapshot {
    pub resolutions: u64,
    pub resolved: u64,
    pub not_found: u64,
    pub ambiguous: u64,
    pub timeouts: u64,
    pub poll_ticks: u64,
    pub strategy_failures: u64,
    pub cache_hits: u64,
    pub stale_recovered: u64,
    pub stale_exhausted: u64,
}

static RESOLUTIONS: AtomicU64 = AtomicU64::new(0);
static RESOLVED: AtomicU64 = AtomicU64::new(0);
static NOT_FOUND: AtomicU64 = AtomicU64::new(0);
static AMBIGUOUS: AtomicU64 = AtomicU64::new(0);
static TIMEOUTS: AtomicU64 = AtomicU64::new(0);
static POLL_TICKS: AtomicU64 = AtomicU64::new(0);
static STRATEGY_FAILURES: AtomicU64 = AtomicU64::new(0);
static CACHE_HITS: AtomicU64 = AtomicU64::new(0);
static STALE_RECOVERED: AtomicU64 = AtomicU64::new(0);
static STALE_EXHAUSTED: AtomicU64 = AtomicU64::new(0);

lazy_static! {
    static ref RESOLUTIONS_TOTAL: IntCounterVec = IntCounterVec::new(
        prometheus::Opts::new(
            "objrepo_locator_resolutions_total",
            "Total descriptor resolutions by outcome"
        ),
        &["outcome"]
    )
    .unwrap();
    static ref RESOLVE_DURATION: HistogramVec = HistogramVec::new(
        histogram_opts!(
            "objrepo_locator_resolve_duration_seconds",
            "Cold resolution latency",
            vec![0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0]
        ),
        &["outcome"]
    )
    .unwrap();
    static ref POLL_TICKS_TOTAL: IntCounter = IntCounter::new(
        "objrepo_locator_poll_ticks_total",
        "Total poll ticks executed"
    )
    .unwrap();
    static ref STRATEGY_FAILURES_TOTAL: IntCounterVec = IntCounterVec::new(
        prometheus::Opts::new(
            "objrepo_locator_strategy_failures_total",
            "Selector evaluations that failed"
        ),
        &["strategy"]
    )
    .unwrap();
    static ref CACHE_HITS_TOTAL: IntCounter = IntCounter::new(
        "objrepo_locator_cache_hits_total",
        "Resolutions served from the session cache"
    )
    .unwrap();
    static ref STALE_RECOVERIES_TOTAL: IntCounterVec = IntCounterVec::new(
        prometheus::Opts::new(
            "objrepo_locator_stale_recoveries_total",
            "Stale-at-use recoveries by result"
        ),
        &["result"]
    )
    .unwrap();
}

fn register<C>(registry: &Registry, collector: C)
where
    C: Collector + Clone + Send + Sync + 'static,
{
    if let Err(err) = registry.register(Box::new(collector.clone())) {
        if !matches!(err, prometheus::Error::AlreadyReg) {
            error!(?err, "failed to register locator metric");
        }
    }
}

pub fn register_metrics(registry: &Registry) {
    register(registry, RESOLUTIONS_TOTAL.clone());
    register(registry, RESOLVE_DURATION.clone());
    register(registry, POLL_TICKS_TOTAL.clone());
    register(registry, STRATEGY_FAILURES_TOTAL.clone());
    register(registry, CACHE_HITS_TOTAL.clone());
    register(registry, STALE_RECOVERIES_TOTAL.clone());
}

/// Record a terminal outcome. `outcome` is a [`ResolutionOutcome::label`](crate::ResolutionOutcome::label).
pub fn record_resolution(outcome: &str, duration: Duration) {
    RESOLUTIONS.fetch_add(1, Ordering::Relaxed);
    let counter = match outcome {
        "resolved" => &RESOLVED,
        "not_found" => &NOT_FOUND,
        "ambiguous" => &AMBIGUOUS,
        _ => &TIMEOUTS,
    };
    counter.fetch_add(1, Ordering::Relaxed);
    RESOLUTIONS_TOTAL.with_label_values(&[outcome]).inc();
    RESOLVE_DURATION
        .with_label_values(&[outcome])
        .observe(duration.as_secs_f64());
}

pub fn record_poll_tick() {
    POLL_TICKS.fetch_add(1, Ordering::Relaxed);
    POLL_TICKS_TOTAL.inc();
}

pub fn record_strategy_failure(strategy: StrategyKind) {
    STRATEGY_FAILURES.fetch_add(1, Ordering::Relaxed);
    STRATEGY_FAILURES_TOTAL
        .with_label_values(&[strategy.name()])
        .inc();
}

pub fn record_cache_hit() {
    CACHE_HITS.fetch_add(1, Ordering::Relaxed);
    CACHE_HITS_TOTAL.inc();
}

pub fn record_stale_recovery(recovered: bool) {
    let (counter, label) = if recovered {
        (&STALE_RECOVERED, "recovered")
    } else {
        (&STALE_EXHAUSTED, "exhausted")
    };
    counter.fetch_add(1, Ordering::Relaxed);
    STALE_RECOVERIES_TOTAL.with_label_values(&[label]).inc();
}

pub fn snapshot() -> LocatorMetricsSnapshot {
    LocatorMetricsSnapshot {
        resolutions: RESOLUTIONS.load(Ordering::Relaxed),
        resolved: RESOLVED.load(Ordering::Relaxed),
        not_found: NOT_FOUND.load(Ordering::Relaxed),
        ambiguous: AMBIGUOUS.load(Ordering::Relaxed),
        timeouts: TIMEOUTS.load(Ordering::Relaxed),
        poll_ticks: POLL_TICKS.load(Ordering::Relaxed),
        strategy_failures: STRATEGY_FAILURES.load(Ordering::Relaxed),
        cache_hits: CACHE_HITS.load(Ordering::Relaxed),
        stale_recovered: STALE_RECOVERED.load(Ordering::Relaxed),
        stale_exhausted: STALE_EXHAUSTED.load(Ordering::Relaxed),
    }
}
