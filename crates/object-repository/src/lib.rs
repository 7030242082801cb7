//! Element descriptor model and object repository loader
//!
//! An object repository is a directory tree of declarative element descriptors:
//! a name, a description, a stable id and a small table of alternative
//! selectors. This crate turns that tree into immutable, validated
//! [`ElementDescriptor`]s for the locator engine.

pub mod errors;
pub mod lint;
pub mod loader;
pub mod model;

pub use errors::{DescriptorValidationError, RepositoryError, ValidationReason};
pub use lint::{lint_descriptor, LintKind, LintWarning};
pub use loader::{
    load, load_all, parse_descriptor, DescriptorRepository, LoaderOptions, RepositoryLoader,
    TEST_OBJECT_EXTENSION,
};
pub use model::{
    composite_parts, DescriptorBuilder, ElementDescriptor, PreferredStrategy, ResolutionOptions,
    SelectorCandidate, SelectorCollection,
};
pub use objrepo_core_types::{DescriptorId, StrategyKind};
