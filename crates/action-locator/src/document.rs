//! Per-session document guard.
//!
//! The query primitive of a live page is not assumed to be reentrant. Every
//! access goes through one lock per session, held for a single evaluator call
//! or interaction and never across a poll sleep.

use std::sync::Arc;

use dom_adapter::DocumentPort;
use tokio::sync::{Mutex, MutexGuard};

pub struct SharedDocument {
    port: Arc<dyn DocumentPort>,
    lock: Mutex<()>,
}

/// Exclusive access to the document for the lifetime of the guard.
pub struct DocumentAccess<'a> {
    port: &'a dyn DocumentPort,
    _guard: MutexGuard<'a, ()>,
}

impl<'a> DocumentAccess<'a> {
    pub fn port(&self) -> &'a dyn DocumentPort {
        self.port
    }
}

impl SharedDocument {
    pub fn new(port: Arc<dyn DocumentPort>) -> Self {
        Self {
            port,
            lock: Mutex::new(()),
        }
    }

    pub async fn lock(&self) -> DocumentAccess<'_> {
        let guard = self.lock.lock().await;
        DocumentAccess {
            port: self.port.as_ref(),
            _guard: guard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_adapter::{DocumentGeneration, MemoryDocument};
    use std::time::Duration;

    #[tokio::test]
    async fn access_is_exclusive() {
        let document = Arc::new(SharedDocument::new(Arc::new(MemoryDocument::new())));
        let held = document.lock().await;

        let other = document.clone();
        let waiter = tokio::spawn(async move {
            let access = other.lock().await;
            access.port().generation().await.unwrap()
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());
        drop(held);
        assert_eq!(waiter.await.unwrap(), DocumentGeneration::default());
    }
}
