//! Core types for the locator engine

use std::fmt;
use std::time::Duration;

use object_repository::ElementDescriptor;
use objrepo_core_types::{DescriptorId, DocumentGeneration, NodeRef, StrategyKind};
use serde::Serialize;

use crate::errors::LocatorError;

/// Floor applied to the poll interval so a zero interval cannot spin.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Wait policy for one resolution: how long to keep polling and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeoutPolicy {
    pub max_duration: Duration,
    pub poll_interval: Duration,
}

impl TimeoutPolicy {
    pub fn new(max_duration: Duration, poll_interval: Duration) -> Self {
        Self {
            max_duration,
            poll_interval,
        }
    }

    /// Policy that never attempts a tick.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, MIN_POLL_INTERVAL)
    }

    pub fn from_millis(max_duration_ms: u64, poll_interval_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(max_duration_ms),
            Duration::from_millis(poll_interval_ms),
        )
    }

    /// Poll interval actually used by the engine.
    pub fn effective_poll_interval(&self) -> Duration {
        self.poll_interval.max(MIN_POLL_INTERVAL)
    }
}

impl Default for TimeoutPolicy {
    fn default() -> Self {
        Self::from_millis(30_000, 500)
    }
}

/// Engine-level settings shared by every session of a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub default_policy: TimeoutPolicy,
    /// Treat a full navigation since resolution as invalidating, even when the
    /// node still reports as attached.
    pub invalidate_on_navigation: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            default_policy: TimeoutPolicy::default(),
            invalidate_on_navigation: true,
        }
    }
}

/// Runtime result of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedHandle {
    pub descriptor_id: DescriptorId,
    pub node: NodeRef,
    pub resolved_via: StrategyKind,
    /// Document generation observed when the winning candidate was evaluated.
    pub resolved_at: DocumentGeneration,
}

/// Per-candidate evaluation failure collected during polling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyFailure {
    pub strategy: StrategyKind,
    pub expression: String,
    pub reason: String,
}

impl StrategyFailure {
    pub fn from_error(err: &LocatorError) -> Option<Self> {
        match err {
            LocatorError::StrategyFailed {
                strategy,
                expression,
                reason,
            } => Some(Self {
                strategy: *strategy,
                expression: expression.clone(),
                reason: reason.clone(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for StrategyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}': {}", self.strategy, self.expression, self.reason)
    }
}

/// Terminal result of `resolve`. Every variant names the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ResolutionOutcome {
    Resolved(ResolvedHandle),
    NotFound {
        descriptor_id: DescriptorId,
        ticks: u32,
        strategy_errors: Vec<StrategyFailure>,
    },
    /// Some candidate matched several nodes and none matched exactly one.
    /// `count` is the largest match count seen.
    Ambiguous {
        descriptor_id: DescriptorId,
        count: usize,
        ticks: u32,
    },
    /// The policy expired before any candidate was evaluated.
    Timeout {
        descriptor_id: DescriptorId,
        elapsed: Duration,
    },
}

impl ResolutionOutcome {
    pub fn descriptor_id(&self) -> &DescriptorId {
        match self {
            ResolutionOutcome::Resolved(handle) => &handle.descriptor_id,
            ResolutionOutcome::NotFound { descriptor_id, .. }
            | ResolutionOutcome::Ambiguous { descriptor_id, .. }
            | ResolutionOutcome::Timeout { descriptor_id, .. } => descriptor_id,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionOutcome::Resolved(_))
    }

    pub fn handle(&self) -> Option<&ResolvedHandle> {
        match self {
            ResolutionOutcome::Resolved(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn into_handle(self) -> Result<ResolvedHandle, LocatorError> {
        match self {
            ResolutionOutcome::Resolved(handle) => Ok(handle),
            other => Err(LocatorError::Unresolved(Box::new(other))),
        }
    }

    /// Short label used for metrics and logs.
    pub fn label(&self) -> &'static str {
        match self {
            ResolutionOutcome::Resolved(_) => "resolved",
            ResolutionOutcome::NotFound { .. } => "not_found",
            ResolutionOutcome::Ambiguous { .. } => "ambiguous",
            ResolutionOutcome::Timeout { .. } => "timeout",
        }
    }
}

impl fmt::Display for ResolutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionOutcome::Resolved(handle) => write!(
                f,
                "'{}' resolved via {} to {} at {}",
                handle.descriptor_id, handle.resolved_via, handle.node, handle.resolved_at
            ),
            ResolutionOutcome::NotFound {
                descriptor_id,
                ticks,
                strategy_errors,
            } => {
                write!(f, "'{}' not found after {} poll ticks", descriptor_id, ticks)?;
                if !strategy_errors.is_empty() {
                    let errors: Vec<String> =
                        strategy_errors.iter().map(ToString::to_string).collect();
                    write!(f, " (strategy errors: {})", errors.join("; "))?;
                }
                Ok(())
            }
            ResolutionOutcome::Ambiguous {
                descriptor_id,
                count,
                ticks,
            } => write!(
                f,
                "'{}' is ambiguous: {} matching nodes after {} poll ticks",
                descriptor_id, count, ticks
            ),
            ResolutionOutcome::Timeout {
                descriptor_id,
                elapsed,
            } => write!(
                f,
                "'{}' timed out after {:?} without evaluating a candidate",
                descriptor_id, elapsed
            ),
        }
    }
}

/// Deterministic candidate order for one descriptor: preferred strategy first,
/// then the rest in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePlan {
    candidates: Vec<(StrategyKind, String)>,
}

impl CandidatePlan {
    pub fn for_descriptor(descriptor: &ElementDescriptor) -> Self {
        Self {
            candidates: descriptor
                .resolution_order()
                .into_iter()
                .map(|(kind, expression)| (kind, expression.to_string()))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (StrategyKind, &str)> + '_ {
        self.candidates
            .iter()
            .map(|(kind, expression)| (*kind, expression.as_str()))
    }

    pub fn strategies(&self) -> Vec<StrategyKind> {
        self.candidates.iter().map(|(kind, _)| *kind).collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_interval_has_a_floor() {
        let policy = TimeoutPolicy::from_millis(1_000, 0);
        assert_eq!(policy.effective_poll_interval(), MIN_POLL_INTERVAL);
        assert_eq!(
            TimeoutPolicy::default().effective_poll_interval(),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn plan_puts_preferred_first() {
        let descriptor = ElementDescriptor::builder("review-search-input")
            .selector(StrategyKind::XPath, "//input[@type='search']")
            .selector(StrategyKind::Css, "input[type='search']")
            .preferred(StrategyKind::Css)
            .build()
            .unwrap();
        let plan = CandidatePlan::for_descriptor(&descriptor);
        assert_eq!(plan.strategies(), vec![StrategyKind::Css, StrategyKind::XPath]);
        assert_eq!(plan.iter().next(), Some((StrategyKind::Css, "input[type='search']")));
    }

    #[test]
    fn outcome_display_reports_descriptor_and_count() {
        let outcome = ResolutionOutcome::Ambiguous {
            descriptor_id: DescriptorId::from("login-email-input"),
            count: 2,
            ticks: 3,
        };
        assert_eq!(outcome.label(), "ambiguous");
        assert_eq!(
            outcome.to_string(),
            "'login-email-input' is ambiguous: 2 matching nodes after 3 poll ticks"
        );
        let err = outcome.into_handle().unwrap_err();
        assert!(matches!(err, LocatorError::Unresolved(_)));
    }
}
