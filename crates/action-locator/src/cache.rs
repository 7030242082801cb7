//! Resolution cache: at most one current handle per descriptor.
//!
//! Each descriptor owns an async slot for the lifetime of the session. Holding
//! the slot lock across a cold resolution makes concurrent callers for the same
//! id wait and then observe the freshly cached handle instead of resolving
//! again. Invalidation never replaces the slot: it bumps an epoch, so a
//! resolution in flight at that moment finishes without caching its result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use objrepo_core_types::DescriptorId;
use tokio::sync::{Mutex, MutexGuard};

use crate::types::ResolvedHandle;

pub type CacheSlot = Arc<CacheEntry>;

#[derive(Debug, Default)]
struct SlotState {
    handle: Option<ResolvedHandle>,
    /// Invalidation epoch the contents belong to.
    epoch: u64,
}

#[derive(Debug, Default)]
pub struct CacheEntry {
    state: Mutex<SlotState>,
    invalidations: AtomicU64,
}

impl CacheEntry {
    /// Wait for exclusive use of the slot. Invalidations issued while the slot
    /// was busy are applied first.
    pub async fn acquire(&self) -> SlotGuard<'_> {
        let mut state = self.state.lock().await;
        let epoch = self.invalidations.load(Ordering::SeqCst);
        if state.epoch != epoch {
            state.handle = None;
            state.epoch = epoch;
        }
        SlotGuard { entry: self, state }
    }

    fn invalidate(&self) -> bool {
        let epoch = self.invalidations.fetch_add(1, Ordering::SeqCst) + 1;
        match self.state.try_lock() {
            Ok(mut state) => {
                state.epoch = epoch;
                state.handle.take().is_some()
            }
            // The holder discards its result on store.
            Err(_) => true,
        }
    }

    fn peek(&self) -> Option<ResolvedHandle> {
        let state = self.state.try_lock().ok()?;
        if state.epoch != self.invalidations.load(Ordering::SeqCst) {
            return None;
        }
        state.handle.clone()
    }
}

/// Exclusive access to one descriptor's slot.
pub struct SlotGuard<'a> {
    entry: &'a CacheEntry,
    state: MutexGuard<'a, SlotState>,
}

impl SlotGuard<'_> {
    pub fn handle(&self) -> Option<&ResolvedHandle> {
        self.state.handle.as_ref()
    }

    pub fn clear(&mut self) {
        self.state.handle = None;
    }

    /// Cache `handle` unless the slot was invalidated since it was acquired.
    pub fn store(&mut self, handle: ResolvedHandle) -> bool {
        if self.entry.invalidations.load(Ordering::SeqCst) != self.state.epoch {
            self.state.handle = None;
            return false;
        }
        self.state.handle = Some(handle);
        true
    }
}

#[derive(Default)]
pub struct ResolutionCache {
    entries: DashMap<DescriptorId, CacheSlot>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot for `id`, created empty on first use.
    pub fn slot(&self, id: &DescriptorId) -> CacheSlot {
        self.entries.entry(id.clone()).or_default().clone()
    }

    /// Current handle without waiting. A slot busy with an in-flight
    /// resolution reads as empty.
    pub fn peek(&self, id: &DescriptorId) -> Option<ResolvedHandle> {
        let slot = self.entries.get(id)?.clone();
        slot.peek()
    }

    /// Drop the cached handle for `id`. Returns true when a handle was
    /// dropped or an in-flight resolution was told to discard its result.
    pub fn invalidate(&self, id: &DescriptorId) -> bool {
        let Some(slot) = self.entries.get(id).map(|entry| entry.value().clone()) else {
            return false;
        };
        slot.invalidate()
    }

    pub fn clear(&self) {
        for entry in self.entries.iter() {
            entry.value().invalidate();
        }
        self.entries.clear();
    }

    /// Number of descriptors with a slot, cached or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objrepo_core_types::{DocumentGeneration, NodeRef, StrategyKind};

    fn handle(id: &str) -> ResolvedHandle {
        ResolvedHandle {
            descriptor_id: DescriptorId::from(id),
            node: NodeRef::new("mem-1"),
            resolved_via: StrategyKind::XPath,
            resolved_at: DocumentGeneration::new(0, 1),
        }
    }

    #[tokio::test]
    async fn invalidate_empties_the_same_slot() {
        let cache = ResolutionCache::new();
        let id = DescriptorId::from("login-email-input");
        let slot = cache.slot(&id);

        assert!(slot.acquire().await.store(handle("login-email-input")));
        assert_eq!(cache.peek(&id), Some(handle("login-email-input")));

        assert!(cache.invalidate(&id));
        assert!(!cache.invalidate(&id));
        assert!(cache.peek(&id).is_none());
        assert!(Arc::ptr_eq(&slot, &cache.slot(&id)));
        assert!(slot.acquire().await.handle().is_none());
    }

    #[tokio::test]
    async fn invalidate_while_busy_discards_the_pending_result() {
        let cache = ResolutionCache::new();
        let id = DescriptorId::from("common-toast");
        let slot = cache.slot(&id);

        let mut guard = slot.acquire().await;
        assert!(cache.peek(&id).is_none());
        assert!(cache.invalidate(&id));
        assert!(!guard.store(handle("common-toast")));
        drop(guard);

        assert!(cache.peek(&id).is_none());
        let mut guard = slot.acquire().await;
        assert!(guard.store(handle("common-toast")));
        drop(guard);
        assert!(cache.peek(&id).is_some());

        cache.clear();
        assert!(cache.is_empty());
    }
}
