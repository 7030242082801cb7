//! In-process document used as a deterministic stand-in for a browser page.
//!
//! Nodes do not carry markup. Each node is registered with the exact
//! `(dialect, expression)` pairs it answers to, which keeps tests independent of
//! any selector engine while still exercising attachment, navigation and
//! stale-reference behaviour.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::commands::{QueryDialect, QueryScope, QuerySpec};
use crate::error::{AdapterError, AdapterErrorKind};
use crate::port::DocumentPort;
use objrepo_core_types::{DocumentGeneration, NodeRef};

#[derive(Debug)]
struct MemoryNode {
    node: NodeRef,
    parent: Option<usize>,
    attached: bool,
    matches: Vec<(QueryDialect, String)>,
    attributes: BTreeMap<String, String>,
    clicks: usize,
    stale_failures: usize,
}

#[derive(Debug, Default)]
struct MemoryState {
    nodes: Vec<MemoryNode>,
    index: HashMap<NodeRef, usize>,
    rejected: HashMap<(QueryDialect, String), String>,
    generation: DocumentGeneration,
}

impl MemoryState {
    fn bump_revision(&mut self) {
        self.generation.revision += 1;
    }

    fn lookup(&self, node: &NodeRef) -> Option<usize> {
        self.index.get(node).copied()
    }

    fn is_descendant(&self, mut idx: usize, ancestor: usize) -> bool {
        while let Some(parent) = self.nodes[idx].parent {
            if parent == ancestor {
                return true;
            }
            idx = parent;
        }
        false
    }

    /// Resolve a node for interaction, honouring pending stale failures.
    fn interactable(&mut self, node: &NodeRef) -> Result<usize, AdapterError> {
        let idx = self
            .lookup(node)
            .ok_or_else(|| AdapterError::stale(node))?;
        let entry = &mut self.nodes[idx];
        if !entry.attached {
            return Err(AdapterError::stale(node));
        }
        if entry.stale_failures > 0 {
            entry.stale_failures -= 1;
            return Err(AdapterError::stale(node));
        }
        Ok(idx)
    }
}

/// Deterministic in-memory [`DocumentPort`].
#[derive(Debug, Default)]
pub struct MemoryDocument {
    state: Mutex<MemoryState>,
    queries: AtomicUsize,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a top-level element answering to the given selector expressions.
    pub fn add_element(&self, matches: &[(QueryDialect, &str)]) -> NodeRef {
        self.insert(None, matches)
    }

    /// Attach an element below `parent`. Scoped queries rooted at `parent` see it.
    pub fn add_child(&self, parent: &NodeRef, matches: &[(QueryDialect, &str)]) -> NodeRef {
        self.insert(Some(parent), matches)
    }

    fn insert(&self, parent: Option<&NodeRef>, matches: &[(QueryDialect, &str)]) -> NodeRef {
        let mut state = self.state.lock();
        let idx = state.nodes.len();
        let node = NodeRef::new(format!("mem-{}", idx + 1));
        let parent = parent.and_then(|p| state.lookup(p));
        state.nodes.push(MemoryNode {
            node: node.clone(),
            parent,
            attached: true,
            matches: matches
                .iter()
                .map(|(dialect, expr)| (*dialect, expr.to_string()))
                .collect(),
            attributes: BTreeMap::new(),
            clicks: 0,
            stale_failures: 0,
        });
        state.index.insert(node.clone(), idx);
        state.bump_revision();
        debug!(node = %node, "memory document: element attached");
        node
    }

    pub fn set_attribute(&self, node: &NodeRef, name: &str, value: &str) {
        let mut state = self.state.lock();
        if let Some(idx) = state.lookup(node) {
            state.nodes[idx]
                .attributes
                .insert(name.to_string(), value.to_string());
            state.bump_revision();
        }
    }

    /// Remove a node and its descendants from the document.
    pub fn detach(&self, node: &NodeRef) {
        let mut state = self.state.lock();
        let Some(root) = state.lookup(node) else {
            return;
        };
        for idx in 0..state.nodes.len() {
            if idx == root || state.is_descendant(idx, root) {
                state.nodes[idx].attached = false;
            }
        }
        state.bump_revision();
        debug!(node = %node, "memory document: element detached");
    }

    /// Simulate a full navigation: every existing node is discarded.
    pub fn navigate(&self) {
        let mut state = self.state.lock();
        for entry in state.nodes.iter_mut() {
            entry.attached = false;
        }
        state.generation.navigation += 1;
        state.bump_revision();
        debug!(generation = %state.generation, "memory document: navigated");
    }

    /// Make the query primitive reject an expression as malformed.
    pub fn reject_expression(&self, dialect: QueryDialect, expression: &str, reason: &str) {
        self.state
            .lock()
            .rejected
            .insert((dialect, expression.to_string()), reason.to_string());
    }

    /// Make the next `times` interactions with `node` fail as stale even though
    /// the node is still attached (a detach racing the action).
    pub fn fail_actions_as_stale(&self, node: &NodeRef, times: usize) {
        let mut state = self.state.lock();
        if let Some(idx) = state.lookup(node) {
            state.nodes[idx].stale_failures = times;
        }
    }

    /// Number of selector queries executed so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn clicks(&self, node: &NodeRef) -> usize {
        let state = self.state.lock();
        state
            .lookup(node)
            .map(|idx| state.nodes[idx].clicks)
            .unwrap_or(0)
    }

    pub fn current_generation(&self) -> DocumentGeneration {
        self.state.lock().generation
    }
}

#[async_trait]
impl DocumentPort for MemoryDocument {
    async fn query(&self, spec: &QuerySpec) -> Result<Vec<NodeRef>, AdapterError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock();

        if spec.expression.trim().is_empty() {
            return Err(AdapterError::invalid_selector(
                &spec.expression,
                "empty expression",
            ));
        }
        if let Some(reason) = state
            .rejected
            .get(&(spec.dialect, spec.expression.clone()))
        {
            return Err(AdapterError::invalid_selector(&spec.expression, reason));
        }

        let root = match &spec.scope {
            QueryScope::Document => None,
            QueryScope::Node(node) => match state.lookup(node) {
                Some(idx) if state.nodes[idx].attached => Some(idx),
                _ => return Err(AdapterError::stale(node)),
            },
        };

        let found = state
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.attached)
            .filter(|(idx, _)| root.map_or(true, |r| state.is_descendant(*idx, r)))
            .filter(|(_, entry)| {
                entry
                    .matches
                    .iter()
                    .any(|(dialect, expr)| *dialect == spec.dialect && *expr == spec.expression)
            })
            .map(|(_, entry)| entry.node.clone())
            .collect::<Vec<_>>();
        Ok(found)
    }

    async fn is_attached(&self, node: &NodeRef) -> Result<bool, AdapterError> {
        let state = self.state.lock();
        Ok(state
            .lookup(node)
            .map(|idx| state.nodes[idx].attached)
            .unwrap_or(false))
    }

    async fn generation(&self) -> Result<DocumentGeneration, AdapterError> {
        Ok(self.state.lock().generation)
    }

    async fn click(&self, node: &NodeRef) -> Result<(), AdapterError> {
        let mut state = self.state.lock();
        let idx = state.interactable(node)?;
        state.nodes[idx].clicks += 1;
        Ok(())
    }

    async fn type_text(&self, node: &NodeRef, text: &str) -> Result<(), AdapterError> {
        let mut state = self.state.lock();
        let idx = state.interactable(node)?;
        state.nodes[idx]
            .attributes
            .entry("value".to_string())
            .or_default()
            .push_str(text);
        state.bump_revision();
        Ok(())
    }

    async fn read_attribute(
        &self,
        node: &NodeRef,
        name: &str,
    ) -> Result<Option<String>, AdapterError> {
        let mut state = self.state.lock();
        let idx = state.interactable(node)?;
        if name.is_empty() {
            return Err(AdapterError::new(AdapterErrorKind::Internal)
                .with_hint("attribute name must not be empty"));
        }
        Ok(state.nodes[idx].attributes.get(name).cloned())
    }
}
