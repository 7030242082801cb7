//! Node interactions through resolved descriptors.
//!
//! A node can go stale between resolution and use. A stale failure at the
//! moment of use invalidates the cached handle and triggers exactly one
//! re-resolution and retry before the error reaches the caller.

use dom_adapter::AdapterError;
use objrepo_core_types::{DescriptorId, NodeRef};
use tracing::{debug, warn};

use crate::errors::LocatorError;
use crate::metrics;
use crate::resolver::LocatorSession;
use crate::types::TimeoutPolicy;

/// Automatic re-resolutions allowed per interaction.
pub const MAX_STALE_RETRIES: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeAction<'a> {
    Click,
    TypeText(&'a str),
    ReadAttribute(&'a str),
}

impl NodeAction<'_> {
    fn name(&self) -> &'static str {
        match self {
            NodeAction::Click => "click",
            NodeAction::TypeText(_) => "type_text",
            NodeAction::ReadAttribute(_) => "read_attribute",
        }
    }
}

impl LocatorSession {
    pub async fn click(&self, id: &DescriptorId, policy: &TimeoutPolicy) -> Result<(), LocatorError> {
        self.perform(id, NodeAction::Click, policy).await.map(|_| ())
    }

    pub async fn type_text(
        &self,
        id: &DescriptorId,
        text: &str,
        policy: &TimeoutPolicy,
    ) -> Result<(), LocatorError> {
        self.perform(id, NodeAction::TypeText(text), policy)
            .await
            .map(|_| ())
    }

    pub async fn read_attribute(
        &self,
        id: &DescriptorId,
        name: &str,
        policy: &TimeoutPolicy,
    ) -> Result<Option<String>, LocatorError> {
        self.perform(id, NodeAction::ReadAttribute(name), policy)
            .await
    }

    async fn perform(
        &self,
        id: &DescriptorId,
        action: NodeAction<'_>,
        policy: &TimeoutPolicy,
    ) -> Result<Option<String>, LocatorError> {
        let descriptor = self.descriptor(id)?;
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            let outcome = self.resolve_descriptor(&descriptor, policy).await?;
            let handle = match outcome.into_handle() {
                Ok(handle) => handle,
                // The element went stale at use and never came back.
                Err(LocatorError::Unresolved(outcome)) if attempts > 1 => {
                    metrics::record_stale_recovery(false);
                    warn!(
                        descriptor_id = %id,
                        action = action.name(),
                        attempts,
                        outcome = outcome.label(),
                        "Re-resolution after stale reference failed"
                    );
                    return Err(LocatorError::StaleReference {
                        descriptor_id: id.clone(),
                        attempts,
                    });
                }
                Err(err) => return Err(err),
            };

            match self.apply(&handle.node, action).await {
                Ok(value) => {
                    if attempts > 1 {
                        metrics::record_stale_recovery(true);
                        debug!(descriptor_id = %id, action = action.name(), "Recovered from stale reference");
                    }
                    return Ok(value);
                }
                Err(err) if err.is_stale() => {
                    self.invalidate(id);
                    if attempts > MAX_STALE_RETRIES {
                        metrics::record_stale_recovery(false);
                        warn!(
                            descriptor_id = %id,
                            action = action.name(),
                            attempts,
                            "Element still stale after re-resolution"
                        );
                        return Err(LocatorError::StaleReference {
                            descriptor_id: id.clone(),
                            attempts,
                        });
                    }
                    warn!(
                        descriptor_id = %id,
                        action = action.name(),
                        node = %handle.node,
                        "Stale element at use, re-resolving once"
                    );
                }
                Err(err) => return Err(LocatorError::Adapter(err)),
            }
        }
    }

    async fn apply(&self, node: &NodeRef, action: NodeAction<'_>) -> Result<Option<String>, AdapterError> {
        let access = self.document.lock().await;
        let port = access.port();
        match action {
            NodeAction::Click => port.click(node).await.map(|_| None),
            NodeAction::TypeText(text) => port.type_text(node, text).await.map(|_| None),
            NodeAction::ReadAttribute(name) => port.read_attribute(node, name).await,
        }
    }
}
