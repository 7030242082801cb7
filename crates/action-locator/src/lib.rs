//! Locator resolution engine
//!
//! Maps element descriptors from an object repository to live, attached nodes:
//! - XPath, CSS and composite "basic" selector evaluation
//! - Deterministic candidate order (preferred strategy first)
//! - Poll/timeout state machine with ambiguity tracking
//! - Per-session resolution cache with lazy staleness checks
//! - One automatic re-resolution when a node goes stale at the moment of use

pub mod cache;
pub mod document;
pub mod errors;
pub mod interact;
pub mod metrics;
pub mod resolver;
pub mod sessions;
pub mod staleness;
pub mod strategies;
pub mod types;

pub use errors::*;
pub use interact::MAX_STALE_RETRIES;
pub use metrics::{register_metrics, LocatorMetricsSnapshot};
pub use resolver::*;
pub use sessions::*;
pub use staleness::*;
pub use strategies::*;
pub use types::*;
