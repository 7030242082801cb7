mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use action_locator::{
    metrics, EngineOptions, LocatorError, LocatorSession, ResolutionOutcome, ResolvedHandle,
    StalenessController, TimeoutPolicy,
};
use async_trait::async_trait;
use common::{fixture_repository, session, EMAIL_BASIC, EMAIL_CSS, EMAIL_XPATH};
use dom_adapter::{
    AdapterError, AdapterErrorKind, DocumentGeneration, DocumentPort, MemoryDocument, NodeRef,
    QueryDialect, QuerySpec,
};
use objrepo_core_types::{DescriptorId, SessionId};

fn email_id() -> DescriptorId {
    DescriptorId::from("login-email-input")
}

fn email_input(doc: &MemoryDocument) -> NodeRef {
    doc.add_element(&[
        (QueryDialect::XPath, EMAIL_XPATH),
        (QueryDialect::Css, EMAIL_CSS),
        (QueryDialect::XPath, EMAIL_BASIC),
    ])
}

fn policy() -> TimeoutPolicy {
    TimeoutPolicy::from_millis(1_000, 250)
}

#[tokio::test(start_paused = true)]
async fn detached_node_is_re_resolved_with_a_newer_generation() {
    let doc = Arc::new(MemoryDocument::new());
    let original = email_input(&doc);
    let session = session(&doc, fixture_repository());

    let first = session.resolve(&email_id(), &policy()).await.unwrap();
    let first = first.handle().unwrap().clone();
    assert!(!session.is_stale(&first).await.unwrap());

    doc.detach(&original);
    assert!(session.is_stale(&first).await.unwrap());
    let replacement = email_input(&doc);

    let second = session.resolve(&email_id(), &policy()).await.unwrap();
    let second = second.handle().unwrap();
    assert_eq!(second.node, replacement);
    assert_ne!(second.node, first.node);
    assert!(second.resolved_at > first.resolved_at);
    assert_eq!(session.cached(&email_id()).as_ref(), Some(second));
}

#[tokio::test(start_paused = true)]
async fn stale_handle_without_replacement_is_not_returned() {
    let doc = Arc::new(MemoryDocument::new());
    let original = email_input(&doc);
    let session = session(&doc, fixture_repository());

    session.resolve(&email_id(), &policy()).await.unwrap();
    doc.detach(&original);

    let outcome = session.resolve(&email_id(), &policy()).await.unwrap();
    assert!(matches!(outcome, ResolutionOutcome::NotFound { .. }));
    assert!(session.cached(&email_id()).is_none());
}

#[tokio::test(start_paused = true)]
async fn navigation_invalidates_cached_handles() {
    let doc = Arc::new(MemoryDocument::new());
    email_input(&doc);
    let session = session(&doc, fixture_repository());

    let before = session.resolve(&email_id(), &policy()).await.unwrap();
    doc.navigate();
    let fresh = email_input(&doc);

    let after = session.resolve(&email_id(), &policy()).await.unwrap();
    let after = after.handle().unwrap();
    assert_eq!(after.node, fresh);
    assert!(after.resolved_at.navigated_since(&before.handle().unwrap().resolved_at));
}

#[tokio::test(start_paused = true)]
async fn invalidate_forces_a_live_query() {
    let doc = Arc::new(MemoryDocument::new());
    let input = email_input(&doc);
    let session = session(&doc, fixture_repository());

    session.resolve(&email_id(), &policy()).await.unwrap();
    let queries = doc.query_count();

    assert!(session.invalidate(&email_id()));
    assert!(!session.invalidate(&email_id()));
    let outcome = session.resolve(&email_id(), &policy()).await.unwrap();

    assert_eq!(outcome.handle().map(|h| &h.node), Some(&input));
    assert_eq!(doc.query_count(), queries + 1);
}

#[tokio::test(start_paused = true)]
async fn stale_at_use_is_retried_once() {
    let doc = Arc::new(MemoryDocument::new());
    let input = email_input(&doc);
    let session = session(&doc, fixture_repository());
    let before = metrics::snapshot();

    session.resolve(&email_id(), &policy()).await.unwrap();
    doc.fail_actions_as_stale(&input, 1);

    session.click(&email_id(), &policy()).await.unwrap();
    assert_eq!(doc.clicks(&input), 1);
    assert!(metrics::snapshot().stale_recovered > before.stale_recovered);
}

#[tokio::test(start_paused = true)]
async fn persistent_staleness_surfaces_after_one_retry() {
    let doc = Arc::new(MemoryDocument::new());
    let input = email_input(&doc);
    let session = session(&doc, fixture_repository());
    doc.fail_actions_as_stale(&input, 5);

    let err = session.click(&email_id(), &policy()).await.unwrap_err();
    match err {
        LocatorError::StaleReference {
            descriptor_id,
            attempts,
        } => {
            assert_eq!(descriptor_id, email_id());
            assert_eq!(attempts, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(doc.clicks(&input), 0);
    assert!(session.cached(&email_id()).is_none());
}

#[tokio::test(start_paused = true)]
async fn type_then_read_back() {
    let doc = Arc::new(MemoryDocument::new());
    let input = email_input(&doc);
    doc.set_attribute(&input, "placeholder", "Email");
    let session = session(&doc, fixture_repository());

    session
        .type_text(&email_id(), "qa@rapidphotoflow.test", &policy())
        .await
        .unwrap();
    let value = session
        .read_attribute(&email_id(), "value", &policy())
        .await
        .unwrap();
    assert_eq!(value.as_deref(), Some("qa@rapidphotoflow.test"));

    let placeholder = session
        .read_attribute(&email_id(), "placeholder", &policy())
        .await
        .unwrap();
    assert_eq!(placeholder.as_deref(), Some("Email"));
}

#[tokio::test(start_paused = true)]
async fn interaction_on_missing_element_reports_outcome() {
    let doc = Arc::new(MemoryDocument::new());
    let session = session(&doc, fixture_repository());

    let err = session.click(&email_id(), &policy()).await.unwrap_err();
    match err {
        LocatorError::Unresolved(outcome) => {
            assert_eq!(outcome.descriptor_id(), &email_id());
            assert_eq!(outcome.label(), "not_found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test(start_paused = true)]
async fn other_adapter_errors_are_not_retried() {
    let doc = Arc::new(MemoryDocument::new());
    email_input(&doc);
    let session = session(&doc, fixture_repository());

    let err = session
        .read_attribute(&email_id(), "", &policy())
        .await
        .unwrap_err();
    match err {
        LocatorError::Adapter(err) => assert_eq!(err.kind, AdapterErrorKind::Internal),
        other => panic!("unexpected error: {other}"),
    }
    assert!(session.cached(&email_id()).is_some());
}

/// Answers one query, then the element is gone for good; every action on it
/// fails as stale.
struct VanishingDocument {
    inner: MemoryDocument,
    answered: AtomicBool,
}

impl VanishingDocument {
    fn new() -> Self {
        let inner = MemoryDocument::new();
        email_input(&inner);
        Self {
            inner,
            answered: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl DocumentPort for VanishingDocument {
    async fn query(&self, spec: &QuerySpec) -> Result<Vec<NodeRef>, AdapterError> {
        if self.answered.load(Ordering::SeqCst) {
            return Ok(Vec::new());
        }
        let found = self.inner.query(spec).await?;
        if !found.is_empty() {
            self.answered.store(true, Ordering::SeqCst);
        }
        Ok(found)
    }

    async fn is_attached(&self, node: &NodeRef) -> Result<bool, AdapterError> {
        self.inner.is_attached(node).await
    }

    async fn generation(&self) -> Result<DocumentGeneration, AdapterError> {
        self.inner.generation().await
    }

    async fn click(&self, node: &NodeRef) -> Result<(), AdapterError> {
        Err(AdapterError::stale(node))
    }

    async fn type_text(&self, node: &NodeRef, _text: &str) -> Result<(), AdapterError> {
        Err(AdapterError::stale(node))
    }

    async fn read_attribute(
        &self,
        node: &NodeRef,
        _name: &str,
    ) -> Result<Option<String>, AdapterError> {
        Err(AdapterError::stale(node))
    }
}

#[tokio::test(start_paused = true)]
async fn element_gone_after_stale_use_surfaces_stale_reference() {
    let session = LocatorSession::new(
        SessionId::new(),
        Arc::new(VanishingDocument::new()),
        fixture_repository(),
        EngineOptions::default(),
    );
    let before = metrics::snapshot();

    let err = session
        .click(&email_id(), &TimeoutPolicy::from_millis(1_000, 500))
        .await
        .unwrap_err();
    match err {
        LocatorError::StaleReference {
            descriptor_id,
            attempts,
        } => {
            assert_eq!(descriptor_id, email_id());
            assert_eq!(attempts, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(metrics::snapshot().stale_exhausted > before.stale_exhausted);
    assert!(session.cached(&email_id()).is_none());
}

struct AlwaysStale;

#[async_trait]
impl StalenessController for AlwaysStale {
    async fn is_stale(&self, _handle: &ResolvedHandle) -> Result<bool, LocatorError> {
        Ok(true)
    }
}

#[tokio::test(start_paused = true)]
async fn custom_staleness_controller_decides_cache_reuse() {
    let doc = Arc::new(MemoryDocument::new());
    let input = email_input(&doc);
    let session =
        session(&doc, fixture_repository()).with_staleness_controller(Box::new(AlwaysStale));

    for _ in 0..3 {
        let outcome = session.resolve(&email_id(), &policy()).await.unwrap();
        assert_eq!(outcome.handle().map(|h| &h.node), Some(&input));
    }
    // Every call re-queries instead of trusting the cached handle.
    assert_eq!(doc.query_count(), 3);
}
