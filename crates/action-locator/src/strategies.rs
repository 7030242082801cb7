//! Selector strategy evaluation
//!
//! One strategy per selector dialect a descriptor may carry:
//! 1. XPath - handed to the document's path-query primitive
//! 2. CSS - handed to the style-query primitive
//! 3. Basic - composite `primary || alternate`, each part in its inferred dialect
//!
//! A strategy performs exactly one read-only query attempt per call. Matching
//! is left entirely to the document; expressions are passed through unmodified.

use crate::errors::LocatorError;
use async_trait::async_trait;
use dom_adapter::{AdapterError, DocumentPort, QueryDialect, QueryScope, QuerySpec};
use object_repository::composite_parts;
use objrepo_core_types::{NodeRef, StrategyKind};
use std::sync::Arc;
use tracing::debug;

/// Strategy trait for selector evaluation
#[async_trait]
pub trait Strategy: Send + Sync {
    /// Run one query attempt for `expression` below `scope`.
    async fn evaluate(
        &self,
        port: &dyn DocumentPort,
        expression: &str,
        scope: &QueryScope,
    ) -> Result<Vec<NodeRef>, LocatorError>;

    /// Get strategy type
    fn strategy_type(&self) -> StrategyKind;

    /// Get strategy name
    fn name(&self) -> &'static str {
        self.strategy_type().name()
    }
}

/// Path-query strategy
#[derive(Debug, Default)]
pub struct XPathStrategy;

#[async_trait]
impl Strategy for XPathStrategy {
    async fn evaluate(
        &self,
        port: &dyn DocumentPort,
        expression: &str,
        scope: &QueryScope,
    ) -> Result<Vec<NodeRef>, LocatorError> {
        run_query(port, StrategyKind::XPath, QueryDialect::XPath, expression, scope).await
    }

    fn strategy_type(&self) -> StrategyKind {
        StrategyKind::XPath
    }
}

/// Style-query strategy
#[derive(Debug, Default)]
pub struct CssStrategy;

#[async_trait]
impl Strategy for CssStrategy {
    async fn evaluate(
        &self,
        port: &dyn DocumentPort,
        expression: &str,
        scope: &QueryScope,
    ) -> Result<Vec<NodeRef>, LocatorError> {
        run_query(port, StrategyKind::Css, QueryDialect::Css, expression, scope).await
    }

    fn strategy_type(&self) -> StrategyKind {
        StrategyKind::Css
    }
}

/// Composite strategy: the primary sub-expression first, the alternate only
/// when the primary matched nothing.
#[derive(Debug, Default)]
pub struct BasicStrategy;

#[async_trait]
impl Strategy for BasicStrategy {
    async fn evaluate(
        &self,
        port: &dyn DocumentPort,
        expression: &str,
        scope: &QueryScope,
    ) -> Result<Vec<NodeRef>, LocatorError> {
        let (primary, alternate) = composite_parts(expression);

        let nodes = run_query(
            port,
            StrategyKind::Basic,
            QueryDialect::infer(primary),
            primary,
            scope,
        )
        .await?;
        if !nodes.is_empty() {
            return Ok(nodes);
        }

        match alternate {
            Some(alternate) => {
                debug!(primary, alternate, "Basic primary matched nothing, trying alternate");
                run_query(
                    port,
                    StrategyKind::Basic,
                    QueryDialect::infer(alternate),
                    alternate,
                    scope,
                )
                .await
            }
            None => Ok(nodes),
        }
    }

    fn strategy_type(&self) -> StrategyKind {
        StrategyKind::Basic
    }
}

/// Dispatches a `(strategy kind, expression)` pair to its strategy.
pub struct StrategyEvaluator {
    xpath: Arc<XPathStrategy>,
    css: Arc<CssStrategy>,
    basic: Arc<BasicStrategy>,
}

impl Default for StrategyEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyEvaluator {
    pub fn new() -> Self {
        Self {
            xpath: Arc::new(XPathStrategy),
            css: Arc::new(CssStrategy),
            basic: Arc::new(BasicStrategy),
        }
    }

    /// Get strategy by type
    pub fn strategy(&self, kind: StrategyKind) -> Arc<dyn Strategy> {
        match kind {
            StrategyKind::XPath => self.xpath.clone(),
            StrategyKind::Css => self.css.clone(),
            StrategyKind::Basic => self.basic.clone(),
        }
    }

    pub async fn evaluate(
        &self,
        port: &dyn DocumentPort,
        kind: StrategyKind,
        expression: &str,
        scope: &QueryScope,
    ) -> Result<Vec<NodeRef>, LocatorError> {
        self.strategy(kind).evaluate(port, expression, scope).await
    }
}

async fn run_query(
    port: &dyn DocumentPort,
    strategy: StrategyKind,
    dialect: QueryDialect,
    expression: &str,
    scope: &QueryScope,
) -> Result<Vec<NodeRef>, LocatorError> {
    let spec = QuerySpec::new(dialect, expression, scope.clone());
    port.query(&spec)
        .await
        .map_err(|err| map_adapter_error(strategy, expression, err))
}

fn map_adapter_error(strategy: StrategyKind, expression: &str, err: AdapterError) -> LocatorError {
    LocatorError::StrategyFailed {
        strategy,
        expression: expression.to_string(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_adapter::MemoryDocument;

    const EMAIL_XPATH: &str = "//input[@type='email']";
    const EMAIL_CSS: &str = "input[type=email]";

    #[tokio::test]
    async fn xpath_and_css_use_their_own_dialect() {
        let doc = MemoryDocument::new();
        let node = doc.add_element(&[(QueryDialect::XPath, EMAIL_XPATH)]);
        let evaluator = StrategyEvaluator::new();

        let found = evaluator
            .evaluate(&doc, StrategyKind::XPath, EMAIL_XPATH, &QueryScope::Document)
            .await
            .unwrap();
        assert_eq!(found, vec![node]);

        let found = evaluator
            .evaluate(&doc, StrategyKind::Css, EMAIL_XPATH, &QueryScope::Document)
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn basic_falls_through_to_alternate() {
        let doc = MemoryDocument::new();
        let node = doc.add_element(&[(QueryDialect::Css, EMAIL_CSS)]);
        let expression = format!("{} || {}", EMAIL_XPATH, EMAIL_CSS);

        let found = BasicStrategy
            .evaluate(&doc, &expression, &QueryScope::Document)
            .await
            .unwrap();
        assert_eq!(found, vec![node]);
        assert_eq!(doc.query_count(), 2);
    }

    #[tokio::test]
    async fn basic_stops_at_primary_matches() {
        let doc = MemoryDocument::new();
        let first = doc.add_element(&[(QueryDialect::XPath, EMAIL_XPATH)]);
        let second = doc.add_element(&[(QueryDialect::XPath, EMAIL_XPATH)]);
        doc.add_element(&[(QueryDialect::Css, EMAIL_CSS)]);
        let expression = format!("{} || {}", EMAIL_XPATH, EMAIL_CSS);

        let found = BasicStrategy
            .evaluate(&doc, &expression, &QueryScope::Document)
            .await
            .unwrap();
        assert_eq!(found, vec![first, second]);
        assert_eq!(doc.query_count(), 1);
    }

    #[tokio::test]
    async fn malformed_expression_reports_strategy_and_expression() {
        let doc = MemoryDocument::new();
        doc.reject_expression(QueryDialect::Css, "a:contains('Review')", "unsupported pseudo-class");

        let err = StrategyEvaluator::new()
            .evaluate(&doc, StrategyKind::Css, "a:contains('Review')", &QueryScope::Document)
            .await
            .unwrap_err();
        match err {
            LocatorError::StrategyFailed {
                strategy,
                expression,
                reason,
            } => {
                assert_eq!(strategy, StrategyKind::Css);
                assert_eq!(expression, "a:contains('Review')");
                assert!(reason.contains("unsupported pseudo-class"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn basic_alternate_error_is_not_swallowed() {
        let doc = MemoryDocument::new();
        doc.reject_expression(QueryDialect::Css, "a:contains('Upload')", "unsupported pseudo-class");

        let err = BasicStrategy
            .evaluate(&doc, "//a[@href='/upload'] || a:contains('Upload')", &QueryScope::Document)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LocatorError::StrategyFailed { strategy: StrategyKind::Basic, .. }
        ));
    }

    #[test]
    fn strategy_names() {
        let evaluator = StrategyEvaluator::new();
        for kind in StrategyKind::ALL {
            assert_eq!(evaluator.strategy(kind).strategy_type(), kind);
            assert_eq!(evaluator.strategy(kind).name(), kind.name());
        }
    }
}
