//! Registry of live locator sessions over one descriptor repository.

use std::sync::Arc;

use dashmap::DashMap;
use dom_adapter::DocumentPort;
use object_repository::DescriptorRepository;
use objrepo_core_types::SessionId;
use tracing::info;

use crate::resolver::LocatorSession;
use crate::types::EngineOptions;

/// Concurrent registry of sessions. Each session owns its own cache and
/// document lock.
pub struct SessionRegistry {
    repository: Arc<DescriptorRepository>,
    options: EngineOptions,
    sessions: DashMap<SessionId, Arc<LocatorSession>>,
}

impl SessionRegistry {
    pub fn new(repository: Arc<DescriptorRepository>, options: EngineOptions) -> Self {
        Self {
            repository,
            options,
            sessions: DashMap::new(),
        }
    }

    /// Open a session for a browser document. Reopening an id closes the
    /// previous session first.
    pub fn open(&self, session_id: SessionId, port: Arc<dyn DocumentPort>) -> Arc<LocatorSession> {
        let session = Arc::new(LocatorSession::new(
            session_id.clone(),
            port,
            self.repository.clone(),
            self.options,
        ));
        if let Some(previous) = self.sessions.insert(session_id.clone(), session.clone()) {
            previous.close();
        }
        info!(session = %session_id, descriptors = self.repository.len(), "Locator session opened");
        session
    }

    pub fn get(&self, session_id: &SessionId) -> Option<Arc<LocatorSession>> {
        self.sessions.get(session_id).map(|entry| entry.value().clone())
    }

    pub fn close(&self, session_id: &SessionId) -> bool {
        match self.sessions.remove(session_id) {
            Some((_, session)) => {
                session.close();
                true
            }
            None => false,
        }
    }

    pub fn close_all(&self) {
        let ids: Vec<SessionId> = self.ids();
        for id in ids {
            self.close(&id);
        }
    }

    pub fn ids(&self) -> Vec<SessionId> {
        self.sessions.iter().map(|kv| kv.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn repository(&self) -> &Arc<DescriptorRepository> {
        &self.repository
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_adapter::MemoryDocument;

    #[test]
    fn open_get_close() {
        let registry = SessionRegistry::new(
            Arc::new(DescriptorRepository::new()),
            EngineOptions::default(),
        );
        let id = SessionId::new();
        let session = registry.open(id.clone(), Arc::new(MemoryDocument::new()));
        assert_eq!(registry.len(), 1);
        assert!(Arc::ptr_eq(&registry.get(&id).unwrap(), &session));

        let replacement = registry.open(id.clone(), Arc::new(MemoryDocument::new()));
        assert!(session.is_closed());
        assert!(!replacement.is_closed());

        assert!(registry.close(&id));
        assert!(replacement.is_closed());
        assert!(registry.get(&id).is_none());
        assert!(!registry.close(&id));
    }
}
