//! Command parameter types exposed by the document port.

use objrepo_core_types::NodeRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Query primitive a selector expression is handed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryDialect {
    /// `document.evaluate` style path query.
    XPath,
    /// `querySelectorAll` style query.
    Css,
}

impl QueryDialect {
    pub fn name(&self) -> &'static str {
        match self {
            QueryDialect::XPath => "xpath",
            QueryDialect::Css => "css",
        }
    }

    /// Guess the dialect of a bare expression: path expressions start with `/`,
    /// `(` or `./`, everything else is treated as a style query.
    pub fn infer(expression: &str) -> Self {
        let trimmed = expression.trim_start();
        if trimmed.starts_with('/') || trimmed.starts_with('(') || trimmed.starts_with("./") {
            QueryDialect::XPath
        } else {
            QueryDialect::Css
        }
    }
}

impl fmt::Display for QueryDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Query scope determines which portion of the document the port should inspect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryScope {
    #[default]
    Document,
    /// Descendants of a previously resolved node.
    Node(NodeRef),
}

/// A single DOM query: dialect, expression and scope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub dialect: QueryDialect,
    pub expression: String,
    pub scope: QueryScope,
}

impl QuerySpec {
    pub fn new(dialect: QueryDialect, expression: impl Into<String>, scope: QueryScope) -> Self {
        Self {
            dialect,
            expression: expression.into(),
            scope,
        }
    }

    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::new(QueryDialect::XPath, expression, QueryScope::Document)
    }

    pub fn css(expression: impl Into<String>) -> Self {
        Self::new(QueryDialect::Css, expression, QueryScope::Document)
    }
}
