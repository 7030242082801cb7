//! Boundary between the locator engine and a live browser document.
//!
//! The engine never talks to a browser directly. It issues read-only queries and
//! node interactions through [`DocumentPort`]; concrete transports (CDP, WebDriver)
//! implement the trait. [`memory::MemoryDocument`] is a deterministic in-process
//! implementation used by tests and dry runs.

pub mod commands;
pub mod memory;

pub use commands::{QueryDialect, QueryScope, QuerySpec};
pub use error::{AdapterError, AdapterErrorKind};
pub use memory::MemoryDocument;
pub use port::DocumentPort;

pub use objrepo_core_types::{DocumentGeneration, NodeRef};

pub mod error {
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use thiserror::Error;

    /// High-level error categories surfaced by a document transport.
    #[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
    pub enum AdapterErrorKind {
        #[error("invalid selector")]
        InvalidSelector,
        #[error("stale element reference")]
        StaleElement,
        #[error("element not interactable")]
        NotInteractable,
        #[error("transport i/o failure")]
        TransportIo,
        #[error("internal error")]
        Internal,
    }

    /// Enriched error metadata passed back to the engine.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct AdapterError {
        pub kind: AdapterErrorKind,
        pub hint: Option<String>,
        pub retriable: bool,
    }

    impl fmt::Display for AdapterError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.kind)?;
            if let Some(hint) = &self.hint {
                write!(f, ": {}", hint)?;
            }
            Ok(())
        }
    }

    impl std::error::Error for AdapterError {}

    impl AdapterError {
        pub fn new(kind: AdapterErrorKind) -> Self {
            Self {
                kind,
                hint: None,
                retriable: false,
            }
        }

        pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
            self.hint = Some(hint.into());
            self
        }

        pub fn retriable(mut self, flag: bool) -> Self {
            self.retriable = flag;
            self
        }

        pub fn invalid_selector(expression: &str, reason: impl fmt::Display) -> Self {
            Self::new(AdapterErrorKind::InvalidSelector)
                .with_hint(format!("{} ({})", expression, reason))
        }

        pub fn stale(node: &super::NodeRef) -> Self {
            Self::new(AdapterErrorKind::StaleElement)
                .with_hint(format!("node {} is no longer attached", node))
                .retriable(true)
        }

        pub fn is_stale(&self) -> bool {
            self.kind == AdapterErrorKind::StaleElement
        }

        pub fn is_invalid_selector(&self) -> bool {
            self.kind == AdapterErrorKind::InvalidSelector
        }
    }
}

pub mod port {
    use super::commands::QuerySpec;
    use super::error::AdapterError;
    use async_trait::async_trait;
    use objrepo_core_types::{DocumentGeneration, NodeRef};

    /// Minimal document capability surface the locator engine relies on.
    ///
    /// `query` must be idempotent and side-effect free. Interaction methods may
    /// fail with [`AdapterErrorKind::StaleElement`](super::AdapterErrorKind) when
    /// the node was detached between resolution and use.
    #[async_trait]
    pub trait DocumentPort: Send + Sync {
        async fn query(&self, spec: &QuerySpec) -> Result<Vec<NodeRef>, AdapterError>;

        async fn is_attached(&self, node: &NodeRef) -> Result<bool, AdapterError>;

        async fn generation(&self) -> Result<DocumentGeneration, AdapterError>;

        async fn click(&self, node: &NodeRef) -> Result<(), AdapterError>;

        async fn type_text(&self, node: &NodeRef, text: &str) -> Result<(), AdapterError>;

        async fn read_attribute(
            &self,
            node: &NodeRef,
            name: &str,
        ) -> Result<Option<String>, AdapterError>;
    }
}
