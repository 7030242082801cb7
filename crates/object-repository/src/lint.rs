//! Load-time selector lint. Warnings never alter the model.

use std::fmt;

use objrepo_core_types::{DescriptorId, StrategyKind};
use serde::Serialize;

use crate::model::{composite_parts, ElementDescriptor};

/// jQuery/Playwright extensions that `querySelectorAll` rejects.
const NON_STANDARD_PSEUDO: &[&str] = &[
    ":contains(",
    ":has-text(",
    ":eq(",
    ":gt(",
    ":lt(",
    ":visible",
    ":hidden",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LintKind {
    BlankExpression,
    NonStandardPseudoClass(String),
    NotAPathExpression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintWarning {
    pub descriptor: DescriptorId,
    pub strategy: StrategyKind,
    pub kind: LintKind,
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LintKind::BlankExpression => {
                write!(f, "{} [{}]: blank selector", self.descriptor, self.strategy)
            }
            LintKind::NonStandardPseudoClass(pseudo) => write!(
                f,
                "{} [{}]: non-standard pseudo-class '{}' will be rejected by the browser",
                self.descriptor,
                self.strategy,
                pseudo.trim_end_matches('(')
            ),
            LintKind::NotAPathExpression => write!(
                f,
                "{} [{}]: expression does not look like a path query",
                self.descriptor, self.strategy
            ),
        }
    }
}

pub fn lint_descriptor(descriptor: &ElementDescriptor) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    for (strategy, expression) in descriptor.selectors().iter() {
        let mut push = |kind| {
            warnings.push(LintWarning {
                descriptor: descriptor.id().clone(),
                strategy,
                kind,
            })
        };

        if expression.trim().is_empty() {
            push(LintKind::BlankExpression);
            continue;
        }

        match strategy {
            StrategyKind::Css => {
                if let Some(pseudo) = non_standard_pseudo(expression) {
                    push(LintKind::NonStandardPseudoClass(pseudo.to_string()));
                }
            }
            StrategyKind::XPath => {
                if !looks_like_path(expression) {
                    push(LintKind::NotAPathExpression);
                }
            }
            StrategyKind::Basic => {
                let (primary, alternate) = composite_parts(expression);
                for part in std::iter::once(primary).chain(alternate) {
                    if !looks_like_path(part) {
                        if let Some(pseudo) = non_standard_pseudo(part) {
                            push(LintKind::NonStandardPseudoClass(pseudo.to_string()));
                        }
                    }
                }
            }
        }
    }
    warnings
}

fn looks_like_path(expression: &str) -> bool {
    let trimmed = expression.trim_start();
    trimmed.starts_with('/') || trimmed.starts_with('(') || trimmed.starts_with("./")
}

fn non_standard_pseudo(expression: &str) -> Option<&'static str> {
    NON_STANDARD_PSEUDO
        .iter()
        .copied()
        .find(|pseudo| expression.contains(pseudo))
}
