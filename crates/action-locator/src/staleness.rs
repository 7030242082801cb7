//! Staleness detection for cached handles.
//!
//! Detection is lazy: a handle is only checked when it is about to be reused.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::document::SharedDocument;
use crate::errors::LocatorError;
use crate::types::ResolvedHandle;

/// Staleness controller trait
#[async_trait]
pub trait StalenessController: Send + Sync {
    /// A handle is stale once its node is detached, or (when enabled) once the
    /// document navigated after the handle was resolved.
    async fn is_stale(&self, handle: &ResolvedHandle) -> Result<bool, LocatorError>;
}

/// Default controller backed by the session's document.
pub struct DocumentStalenessController {
    document: Arc<SharedDocument>,
    invalidate_on_navigation: bool,
}

impl DocumentStalenessController {
    pub fn new(document: Arc<SharedDocument>, invalidate_on_navigation: bool) -> Self {
        Self {
            document,
            invalidate_on_navigation,
        }
    }
}

#[async_trait]
impl StalenessController for DocumentStalenessController {
    async fn is_stale(&self, handle: &ResolvedHandle) -> Result<bool, LocatorError> {
        let access = self.document.lock().await;
        let port = access.port();

        if !port.is_attached(&handle.node).await? {
            debug!(
                descriptor_id = %handle.descriptor_id,
                node = %handle.node,
                "Cached node detached"
            );
            return Ok(true);
        }

        if self.invalidate_on_navigation {
            let current = port.generation().await?;
            if current.navigated_since(&handle.resolved_at) {
                debug!(
                    descriptor_id = %handle.descriptor_id,
                    resolved_at = %handle.resolved_at,
                    current = %current,
                    "Document navigated since resolution"
                );
                return Ok(true);
            }
        }

        Ok(false)
    }
}
