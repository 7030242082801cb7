//! Error types for the locator engine

use dom_adapter::AdapterError;
use objrepo_core_types::{DescriptorId, SessionId, StrategyKind};
use thiserror::Error;

use crate::types::ResolutionOutcome;

/// Locator error enumeration
///
/// Terminal resolution outcomes (`NotFound`, `Ambiguous`, `Timeout`) are
/// values, not errors. They only become a [`LocatorError::Unresolved`] when an
/// interaction needed a node and could not get one.
#[derive(Debug, Error, Clone)]
pub enum LocatorError {
    /// A selector candidate could not be evaluated (malformed expression,
    /// transport failure while querying).
    #[error("{strategy} strategy failed on '{expression}': {reason}")]
    StrategyFailed {
        strategy: StrategyKind,
        expression: String,
        reason: String,
    },

    #[error("unknown descriptor '{0}'")]
    UnknownDescriptor(DescriptorId),

    /// The node went stale at the moment of use and the one re-resolution did
    /// not help.
    #[error("stale element reference for '{descriptor_id}' after {attempts} attempts")]
    StaleReference {
        descriptor_id: DescriptorId,
        attempts: u32,
    },

    #[error("element not available: {0}")]
    Unresolved(Box<ResolutionOutcome>),

    #[error("locator session {0} is closed")]
    SessionClosed(SessionId),

    #[error("document error: {0}")]
    Adapter(#[from] AdapterError),
}

impl LocatorError {
    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            LocatorError::Adapter(err) => err.retriable,
            LocatorError::StaleReference { .. } => true,
            LocatorError::Unresolved(outcome) => {
                matches!(outcome.as_ref(), ResolutionOutcome::Timeout { .. })
            }
            _ => false,
        }
    }

    /// Get error severity (0=low, 1=medium, 2=high)
    pub fn severity(&self) -> u8 {
        match self {
            LocatorError::Adapter(_) | LocatorError::SessionClosed(_) => 2,
            LocatorError::Unresolved(_)
            | LocatorError::StaleReference { .. }
            | LocatorError::UnknownDescriptor(_) => 1,
            LocatorError::StrategyFailed { .. } => 0,
        }
    }

    /// Descriptor the failure is attributed to, when there is one.
    pub fn descriptor_id(&self) -> Option<&DescriptorId> {
        match self {
            LocatorError::UnknownDescriptor(id) => Some(id),
            LocatorError::StaleReference { descriptor_id, .. } => Some(descriptor_id),
            LocatorError::Unresolved(outcome) => Some(outcome.descriptor_id()),
            _ => None,
        }
    }
}
