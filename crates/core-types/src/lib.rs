use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

/// Raised when a selector key does not name one of the supported strategies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown selector strategy '{0}'")]
pub struct UnknownStrategyKind(pub String);

#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identifier of an element descriptor (`elementGuidId` in the store).
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct DescriptorId(pub String);

impl DescriptorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DescriptorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DescriptorId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DescriptorId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Opaque reference to a live node, owned by the automation transport.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeRef(pub String);

impl NodeRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Logical clock of a live document.
///
/// `navigation` advances on every full navigation; `revision` advances on every
/// observed DOM mutation, navigations included.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct DocumentGeneration {
    pub navigation: u64,
    pub revision: u64,
}

impl DocumentGeneration {
    pub const fn new(navigation: u64, revision: u64) -> Self {
        Self {
            navigation,
            revision,
        }
    }

    /// True when `self` was observed after a navigation that happened since `earlier`.
    pub fn navigated_since(&self, earlier: &DocumentGeneration) -> bool {
        self.navigation > earlier.navigation
    }
}

impl fmt::Display for DocumentGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nav{}/rev{}", self.navigation, self.revision)
    }
}

/// Closed set of selector dialects a descriptor may carry.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum StrategyKind {
    /// Path query (XPath).
    XPath,
    /// Style query (CSS selector).
    Css,
    /// Simplified composite expression with an optional alternate.
    Basic,
}

impl StrategyKind {
    pub const COUNT: usize = 3;

    pub const ALL: [StrategyKind; StrategyKind::COUNT] =
        [StrategyKind::XPath, StrategyKind::Css, StrategyKind::Basic];

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::XPath => "xpath",
            StrategyKind::Css => "css",
            StrategyKind::Basic => "basic",
        }
    }

    /// Key used by the descriptor store (`<key>XPATH</key>`).
    pub fn store_key(&self) -> &'static str {
        match self {
            StrategyKind::XPath => "XPATH",
            StrategyKind::Css => "CSS",
            StrategyKind::Basic => "BASIC",
        }
    }

    /// Dense index, used for fixed-size per-strategy tables.
    pub const fn index(&self) -> usize {
        match self {
            StrategyKind::XPath => 0,
            StrategyKind::Css => 1,
            StrategyKind::Basic => 2,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategyKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XPATH" => Ok(StrategyKind::XPath),
            "CSS" => Ok(StrategyKind::Css),
            "BASIC" => Ok(StrategyKind::Basic),
            _ => Err(UnknownStrategyKind(s.to_string())),
        }
    }
}
