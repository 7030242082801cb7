//! Error types for descriptor loading and validation

use std::path::PathBuf;

use objrepo_core_types::StrategyKind;
use thiserror::Error;

/// Why a descriptor was rejected at load time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    #[error("missing element id")]
    MissingId,

    #[error("no selector candidates")]
    NoCandidates,

    #[error("selector strategy {0} declared more than once")]
    DuplicateStrategy(StrategyKind),

    #[error("unknown selector strategy '{0}'")]
    UnknownStrategy(String),

    #[error("preferred strategy {0} has no selector candidate")]
    PreferredMissing(StrategyKind),

    #[error("id already used by {0}")]
    DuplicateId(String),

    #[error("repository path {path} already used by {owner}")]
    DuplicatePath { path: String, owner: String },
}

/// Fatal load-time error naming the offending descriptor.
///
/// `descriptor` is the element id, or the repository path when the id itself
/// is missing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid descriptor '{descriptor}': {reason}")]
pub struct DescriptorValidationError {
    pub descriptor: String,
    pub reason: ValidationReason,
}

impl DescriptorValidationError {
    pub fn new(descriptor: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            descriptor: descriptor.into(),
            reason,
        }
    }
}

/// Repository level failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository root {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("malformed descriptor {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error(transparent)]
    Validation(#[from] DescriptorValidationError),

    #[error("descriptor '{0}' not found")]
    NotFound(String),
}

impl RepositoryError {
    /// The descriptor a validation failure is attributed to, if any.
    pub fn descriptor(&self) -> Option<&str> {
        match self {
            RepositoryError::Validation(err) => Some(&err.descriptor),
            RepositoryError::NotFound(id) => Some(id),
            _ => None,
        }
    }
}
