mod common;

use std::sync::Arc;
use std::time::Duration;

use action_locator::{EngineOptions, LocatorError, SessionRegistry, TimeoutPolicy};
use common::{fixture_repository, session, EMAIL_XPATH};
use dom_adapter::{MemoryDocument, QueryDialect};
use objrepo_core_types::{DescriptorId, SessionId};
use tokio::time::sleep;

const TOAST_XPATH: &str =
    "//div[@role='alert' or contains(@class, 'toast') or contains(@class, 'notification')]";

#[tokio::test(start_paused = true)]
async fn concurrent_cold_resolutions_share_one_poll_loop() {
    let doc = Arc::new(MemoryDocument::new());
    let session = Arc::new(session(&doc, fixture_repository()));
    let id = DescriptorId::from("login-email-input");
    let policy = TimeoutPolicy::from_millis(5_000, 500);

    let first = tokio::spawn({
        let session = session.clone();
        let id = id.clone();
        async move { session.resolve(&id, &policy).await }
    });
    let second = tokio::spawn({
        let session = session.clone();
        let id = id.clone();
        async move { session.resolve(&id, &policy).await }
    });

    sleep(Duration::from_millis(1_200)).await;
    let input = doc.add_element(&[(QueryDialect::XPath, EMAIL_XPATH)]);

    let first = first.await.unwrap().unwrap();
    let second = second.await.unwrap().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.handle().map(|h| &h.node), Some(&input));

    // Three empty ticks of three candidates, then the preferred candidate hits
    // at 1500 ms. The second caller never queries.
    assert_eq!(doc.query_count(), 10);
}

#[tokio::test(start_paused = true)]
async fn invalidate_during_cold_resolution_keeps_one_poll_loop() {
    let doc = Arc::new(MemoryDocument::new());
    let session = Arc::new(session(&doc, fixture_repository()));
    let id = DescriptorId::from("login-email-input");
    let policy = TimeoutPolicy::from_millis(5_000, 500);

    let first = tokio::spawn({
        let session = session.clone();
        let id = id.clone();
        async move { session.resolve(&id, &policy).await }
    });

    sleep(Duration::from_millis(100)).await;
    assert!(session.invalidate(&id));

    let second = tokio::spawn({
        let session = session.clone();
        let id = id.clone();
        async move { session.resolve(&id, &policy).await }
    });

    sleep(Duration::from_millis(1_100)).await;
    let input = doc.add_element(&[(QueryDialect::XPath, EMAIL_XPATH)]);

    let first = first.await.unwrap().unwrap();
    let second = second.await.unwrap().unwrap();
    assert_eq!(first.handle().map(|h| &h.node), Some(&input));
    assert_eq!(second.handle().map(|h| &h.node), Some(&input));

    // The first loop runs alone (10 queries). Its result is discarded by the
    // invalidation, so the second caller resolves afterwards with one query.
    assert_eq!(doc.query_count(), 11);
    assert_eq!(session.cached(&id), second.handle().cloned());
}

#[tokio::test(start_paused = true)]
async fn different_descriptors_interleave_on_one_document() {
    let doc = Arc::new(MemoryDocument::new());
    let session = session(&doc, fixture_repository());
    let policy = TimeoutPolicy::from_millis(3_000, 200);

    let email_id = DescriptorId::from("login-email-input");
    let toast_id = DescriptorId::from("common-toast");
    let (email, toast, _) = tokio::join!(
        session.resolve(&email_id, &policy),
        session.resolve(&toast_id, &policy),
        async {
            sleep(Duration::from_millis(300)).await;
            doc.add_element(&[(QueryDialect::XPath, TOAST_XPATH)]);
            sleep(Duration::from_millis(300)).await;
            doc.add_element(&[(QueryDialect::XPath, EMAIL_XPATH)]);
        }
    );

    assert!(email.unwrap().is_resolved());
    assert!(toast.unwrap().is_resolved());
}

#[tokio::test(start_paused = true)]
async fn sessions_are_isolated() {
    let registry = SessionRegistry::new(fixture_repository(), EngineOptions::default());
    let policy = TimeoutPolicy::from_millis(1_000, 500);
    let id = DescriptorId::from("login-email-input");

    let left_doc = Arc::new(MemoryDocument::new());
    let right_doc = Arc::new(MemoryDocument::new());
    let left_node = left_doc.add_element(&[(QueryDialect::XPath, EMAIL_XPATH)]);
    right_doc.add_element(&[(QueryDialect::XPath, EMAIL_XPATH)]);
    right_doc.add_element(&[(QueryDialect::XPath, EMAIL_XPATH)]);

    let left_id = SessionId::new();
    let right_id = SessionId::new();
    let left = registry.open(left_id.clone(), left_doc.clone());
    let right = registry.open(right_id.clone(), right_doc.clone());
    assert_eq!(registry.len(), 2);

    let left_outcome = left.resolve(&id, &policy).await.unwrap();
    assert_eq!(left_outcome.handle().map(|h| &h.node), Some(&left_node));

    let right_outcome = right.resolve(&id, &policy).await.unwrap();
    assert_eq!(right_outcome.label(), "ambiguous");
    assert!(right.cached(&id).is_none());

    assert!(registry.close(&left_id));
    let err = left.resolve(&id, &policy).await.unwrap_err();
    assert!(matches!(err, LocatorError::SessionClosed(_)));
    assert!(registry.get(&right_id).is_some());

    registry.close_all();
    assert!(registry.is_empty());
    assert!(right.is_closed());
}
