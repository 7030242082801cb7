//! Descriptor resolution with candidate fallback and polling
//!
//! One [`LocatorSession`] per browser session. It owns the resolution cache
//! and the document lock; nothing is shared between sessions except the
//! read-only descriptor repository.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dom_adapter::{DocumentPort, QueryScope};
use object_repository::{DescriptorRepository, ElementDescriptor};
use objrepo_core_types::{DescriptorId, SessionId, StrategyKind};
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::cache::ResolutionCache;
use crate::document::SharedDocument;
use crate::errors::LocatorError;
use crate::metrics;
use crate::staleness::{DocumentStalenessController, StalenessController};
use crate::strategies::StrategyEvaluator;
use crate::types::{
    CandidatePlan, EngineOptions, ResolutionOutcome, ResolvedHandle, StrategyFailure,
    TimeoutPolicy,
};

/// Resolution engine bound to one live document.
pub struct LocatorSession {
    session_id: SessionId,
    pub(crate) document: Arc<SharedDocument>,
    repository: Arc<DescriptorRepository>,
    evaluator: StrategyEvaluator,
    staleness: Box<dyn StalenessController>,
    pub(crate) cache: ResolutionCache,
    options: EngineOptions,
    closed: AtomicBool,
}

/// Result of one pass over the candidate plan.
enum Tick {
    Resolved(ResolvedHandle),
    Unresolved,
    /// The deadline passed while candidates were still pending.
    Expired,
}

/// Accumulated state of a poll loop.
#[derive(Default)]
struct PollState {
    ticks: u32,
    evaluations: u32,
    max_ambiguous: usize,
    failures: Vec<StrategyFailure>,
}

impl PollState {
    fn record_failure(&mut self, descriptor_id: &DescriptorId, err: &LocatorError) {
        let Some(failure) = StrategyFailure::from_error(err) else {
            return;
        };
        metrics::record_strategy_failure(failure.strategy);
        if !self.failures.contains(&failure) {
            warn!(
                descriptor_id = %descriptor_id,
                strategy = failure.strategy.name(),
                expression = %failure.expression,
                "Strategy failed: {}",
                failure.reason
            );
            self.failures.push(failure);
        }
    }

    fn finish(self, descriptor_id: DescriptorId, elapsed: Duration) -> ResolutionOutcome {
        if self.evaluations == 0 {
            ResolutionOutcome::Timeout {
                descriptor_id,
                elapsed,
            }
        } else if self.max_ambiguous > 1 {
            ResolutionOutcome::Ambiguous {
                descriptor_id,
                count: self.max_ambiguous,
                ticks: self.ticks,
            }
        } else {
            ResolutionOutcome::NotFound {
                descriptor_id,
                ticks: self.ticks,
                strategy_errors: self.failures,
            }
        }
    }
}

impl LocatorSession {
    pub fn new(
        session_id: SessionId,
        port: Arc<dyn DocumentPort>,
        repository: Arc<DescriptorRepository>,
        options: EngineOptions,
    ) -> Self {
        let document = Arc::new(SharedDocument::new(port));
        let staleness =
            DocumentStalenessController::new(document.clone(), options.invalidate_on_navigation);
        Self {
            session_id,
            document,
            repository,
            evaluator: StrategyEvaluator::new(),
            staleness: Box::new(staleness),
            cache: ResolutionCache::new(),
            options,
            closed: AtomicBool::new(false),
        }
    }

    /// Replace the staleness controller.
    pub fn with_staleness_controller(mut self, controller: Box<dyn StalenessController>) -> Self {
        self.staleness = controller;
        self
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn repository(&self) -> &Arc<DescriptorRepository> {
        &self.repository
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Tear the session down. Cached handles are discarded and further calls
    /// fail with [`LocatorError::SessionClosed`].
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.cache.clear();
            info!(session = %self.session_id, "Locator session closed");
        }
    }

    pub(crate) fn descriptor(
        &self,
        id: &DescriptorId,
    ) -> Result<Arc<ElementDescriptor>, LocatorError> {
        self.repository
            .get(id)
            .ok_or_else(|| LocatorError::UnknownDescriptor(id.clone()))
    }

    fn ensure_open(&self) -> Result<(), LocatorError> {
        if self.is_closed() {
            return Err(LocatorError::SessionClosed(self.session_id.clone()));
        }
        Ok(())
    }

    /// Resolve a descriptor of the session's repository by id.
    pub async fn resolve(
        &self,
        id: &DescriptorId,
        policy: &TimeoutPolicy,
    ) -> Result<ResolutionOutcome, LocatorError> {
        let descriptor = self.descriptor(id)?;
        self.resolve_descriptor(&descriptor, policy).await
    }

    /// Resolve with the engine's default policy.
    pub async fn resolve_default(
        &self,
        id: &DescriptorId,
    ) -> Result<ResolutionOutcome, LocatorError> {
        let policy = self.options.default_policy;
        self.resolve(id, &policy).await
    }

    /// Resolve any descriptor, cached under its id.
    pub async fn resolve_descriptor(
        &self,
        descriptor: &ElementDescriptor,
        policy: &TimeoutPolicy,
    ) -> Result<ResolutionOutcome, LocatorError> {
        self.ensure_open()?;
        let id = descriptor.id();

        let slot = self.cache.slot(id);
        let mut current = slot.acquire().await;

        if let Some(handle) = current.handle().cloned() {
            match self.staleness.is_stale(&handle).await {
                Ok(false) => {
                    debug!(descriptor_id = %id, node = %handle.node, "Cache hit");
                    metrics::record_cache_hit();
                    return Ok(ResolutionOutcome::Resolved(handle));
                }
                Ok(true) => {
                    info!(
                        descriptor_id = %id,
                        node = %handle.node,
                        "Cached handle is stale, re-resolving"
                    );
                }
                Err(err) => {
                    warn!(descriptor_id = %id, "Staleness check failed, re-resolving: {}", err);
                }
            }
            current.clear();
        }

        let started = Instant::now();
        let outcome = self.poll(descriptor, policy).await;
        metrics::record_resolution(outcome.label(), started.elapsed());

        match &outcome {
            ResolutionOutcome::Resolved(handle) => {
                info!(
                    descriptor_id = %id,
                    strategy = handle.resolved_via.name(),
                    node = %handle.node,
                    generation = %handle.resolved_at,
                    "Resolved element"
                );
                if !current.store(handle.clone()) {
                    debug!(descriptor_id = %id, "Invalidated during resolution, not caching");
                }
            }
            other => info!(descriptor_id = %id, outcome = other.label(), "{}", other),
        }

        Ok(outcome)
    }

    /// Drop the cached handle for `id`, if any.
    pub fn invalidate(&self, id: &DescriptorId) -> bool {
        let removed = self.cache.invalidate(id);
        if removed {
            debug!(descriptor_id = %id, "Invalidated cached handle");
        }
        removed
    }

    pub async fn is_stale(&self, handle: &ResolvedHandle) -> Result<bool, LocatorError> {
        self.staleness.is_stale(handle).await
    }

    /// Current cached handle without validating it.
    pub fn cached(&self, id: &DescriptorId) -> Option<ResolvedHandle> {
        self.cache.peek(id)
    }

    /// Tick until a candidate resolves or the deadline passes.
    async fn poll(&self, descriptor: &ElementDescriptor, policy: &TimeoutPolicy) -> ResolutionOutcome {
        let id = descriptor.id().clone();
        let started = Instant::now();

        if policy.max_duration.is_zero() {
            return ResolutionOutcome::Timeout {
                descriptor_id: id,
                elapsed: Duration::ZERO,
            };
        }

        let plan = CandidatePlan::for_descriptor(descriptor);
        let deadline = started + policy.max_duration;
        let interval = policy.effective_poll_interval();
        let mut state = PollState::default();

        debug!(
            descriptor_id = %id,
            candidates = ?plan.strategies(),
            timeout_ms = policy.max_duration.as_millis() as u64,
            "Resolving element"
        );

        loop {
            state.ticks += 1;
            metrics::record_poll_tick();

            match self.tick(&id, &plan, deadline, &mut state).await {
                Tick::Resolved(handle) => return ResolutionOutcome::Resolved(handle),
                Tick::Expired => break,
                Tick::Unresolved => {}
            }

            let now = Instant::now();
            if now >= deadline {
                break;
            }
            sleep(interval.min(deadline - now)).await;
        }

        state.finish(id, started.elapsed())
    }

    async fn tick(
        &self,
        id: &DescriptorId,
        plan: &CandidatePlan,
        deadline: Instant,
        state: &mut PollState,
    ) -> Tick {
        // The final tick at the deadline always runs to completion.
        let may_expire = Instant::now() < deadline;
        let tick = state.ticks;

        for (position, (kind, expression)) in plan.iter().enumerate() {
            let access = self.document.lock().await;
            let port = access.port();
            let result = self
                .evaluator
                .evaluate(port, kind, expression, &QueryScope::Document)
                .await;
            state.evaluations += 1;

            match result {
                Ok(mut nodes) if nodes.len() == 1 => match port.generation().await {
                    Ok(resolved_at) => {
                        return Tick::Resolved(ResolvedHandle {
                            descriptor_id: id.clone(),
                            node: nodes.remove(0),
                            resolved_via: kind,
                            resolved_at,
                        });
                    }
                    Err(err) => {
                        let err = generation_failure(kind, expression, err.to_string());
                        state.record_failure(id, &err);
                    }
                },
                Ok(nodes) if nodes.is_empty() => {
                    debug!(descriptor_id = %id, strategy = kind.name(), tick, "No match");
                }
                Ok(nodes) => {
                    debug!(
                        descriptor_id = %id,
                        strategy = kind.name(),
                        tick,
                        matches = nodes.len(),
                        "Ambiguous candidate"
                    );
                    state.max_ambiguous = state.max_ambiguous.max(nodes.len());
                }
                Err(err) => state.record_failure(id, &err),
            }
            drop(access);

            let pending = position + 1 < plan.len();
            if may_expire && pending && Instant::now() >= deadline {
                debug!(descriptor_id = %id, tick, "Deadline passed mid-tick");
                return Tick::Expired;
            }
        }

        Tick::Unresolved
    }
}

fn generation_failure(kind: StrategyKind, expression: &str, reason: String) -> LocatorError {
    LocatorError::StrategyFailed {
        strategy: kind,
        expression: expression.to_string(),
        reason: format!("generation unavailable: {}", reason),
    }
}
