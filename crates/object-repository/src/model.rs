//! In-memory element descriptor model

use objrepo_core_types::{DescriptorId, StrategyKind};
use serde::{Serialize, Serializer};

use crate::errors::{DescriptorValidationError, ValidationReason};

/// One `(strategy, expression)` pair of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorCandidate {
    pub strategy: StrategyKind,
    pub expression: String,
}

/// Ordered selector table keyed by the closed [`StrategyKind`] enumeration.
///
/// At most one expression per strategy; `order` keeps source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorCollection {
    slots: [Option<String>; StrategyKind::COUNT],
    order: Vec<StrategyKind>,
}

impl SelectorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, kind: StrategyKind, expression: String) -> Result<(), ValidationReason> {
        let slot = &mut self.slots[kind.index()];
        if slot.is_some() {
            return Err(ValidationReason::DuplicateStrategy(kind));
        }
        *slot = Some(expression);
        self.order.push(kind);
        Ok(())
    }

    pub fn get(&self, kind: StrategyKind) -> Option<&str> {
        self.slots[kind.index()].as_deref()
    }

    pub fn contains(&self, kind: StrategyKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Candidates in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (StrategyKind, &str)> + '_ {
        self.order
            .iter()
            .filter_map(|kind| self.get(*kind).map(|expr| (*kind, expr)))
    }
}

impl Serialize for SelectorCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|(strategy, expression)| SelectorCandidate {
            strategy,
            expression: expression.to_string(),
        }))
    }
}

/// Which candidate to try first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PreferredStrategy {
    /// No preference: candidates are tried in declared order.
    #[default]
    DeclaredOrder,
    Strategy(StrategyKind),
}

/// Options carried through unchanged; they do not affect DOM matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionOptions {
    pub use_relative_image_path: bool,
}

/// Immutable, validated description of one UI element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementDescriptor {
    id: DescriptorId,
    display_name: String,
    description: String,
    tag: Option<String>,
    repository_path: Option<String>,
    selectors: SelectorCollection,
    preferred: PreferredStrategy,
    options: ResolutionOptions,
}

impl ElementDescriptor {
    pub fn builder(id: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder::new(id)
    }

    pub fn id(&self) -> &DescriptorId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Location inside the repository, e.g. `Pages/Login/txt_Email`.
    pub fn repository_path(&self) -> Option<&str> {
        self.repository_path.as_deref()
    }

    pub fn selectors(&self) -> &SelectorCollection {
        &self.selectors
    }

    pub fn preferred(&self) -> PreferredStrategy {
        self.preferred
    }

    pub fn options(&self) -> ResolutionOptions {
        self.options
    }

    /// Deterministic candidate order: the preferred strategy first, then the
    /// remaining candidates in declared order.
    pub fn resolution_order(&self) -> Vec<(StrategyKind, &str)> {
        let mut order = Vec::with_capacity(self.selectors.len());
        if let PreferredStrategy::Strategy(kind) = self.preferred {
            if let Some(expr) = self.selectors.get(kind) {
                order.push((kind, expr));
            }
        }
        order.extend(
            self.selectors
                .iter()
                .filter(|(kind, _)| self.preferred != PreferredStrategy::Strategy(*kind)),
        );
        order
    }

    /// Label used in diagnostics: `name (id)`.
    pub fn label(&self) -> String {
        if self.display_name.is_empty() {
            self.id.to_string()
        } else {
            format!("{} ({})", self.display_name, self.id)
        }
    }
}

/// Builder validating descriptor invariants on [`DescriptorBuilder::build`].
///
/// Keys are kept raw until `build` so that unknown strategy names from the
/// store are reported as validation errors instead of being dropped.
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    id: String,
    display_name: String,
    description: String,
    tag: Option<String>,
    repository_path: Option<String>,
    selectors: Vec<(String, String)>,
    preferred: Option<String>,
    options: ResolutionOptions,
}

impl DescriptorBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn repository_path(mut self, path: impl Into<String>) -> Self {
        self.repository_path = Some(path.into());
        self
    }

    pub fn selector(self, kind: StrategyKind, expression: impl Into<String>) -> Self {
        self.raw_selector(kind.store_key(), expression)
    }

    /// Add a selector using the store's key spelling (`XPATH`, `CSS`, `BASIC`).
    pub fn raw_selector(mut self, key: impl Into<String>, expression: impl Into<String>) -> Self {
        self.selectors.push((key.into(), expression.into()));
        self
    }

    pub fn preferred(self, kind: StrategyKind) -> Self {
        self.raw_preferred(Some(kind.store_key().to_string()))
    }

    /// Blank or missing means "declared order".
    pub fn raw_preferred(mut self, method: Option<String>) -> Self {
        self.preferred = method.filter(|m| !m.trim().is_empty());
        self
    }

    pub fn use_relative_image_path(mut self, flag: bool) -> Self {
        self.options.use_relative_image_path = flag;
        self
    }

    pub fn build(self) -> Result<ElementDescriptor, DescriptorValidationError> {
        let id = self.id.trim().to_string();
        let label = if id.is_empty() {
            self.repository_path
                .clone()
                .unwrap_or_else(|| self.display_name.clone())
        } else {
            id.clone()
        };
        let fail = |reason| DescriptorValidationError::new(label.clone(), reason);

        if id.is_empty() {
            return Err(fail(ValidationReason::MissingId));
        }

        let mut selectors = SelectorCollection::new();
        for (key, expression) in self.selectors {
            let kind = key
                .parse::<StrategyKind>()
                .map_err(|_| fail(ValidationReason::UnknownStrategy(key.clone())))?;
            selectors.insert(kind, expression).map_err(fail)?;
        }
        if selectors.is_empty() {
            return Err(fail(ValidationReason::NoCandidates));
        }

        let preferred = match self.preferred {
            None => PreferredStrategy::DeclaredOrder,
            Some(method) => {
                let kind = method
                    .parse::<StrategyKind>()
                    .map_err(|_| fail(ValidationReason::UnknownStrategy(method.clone())))?;
                if !selectors.contains(kind) {
                    return Err(fail(ValidationReason::PreferredMissing(kind)));
                }
                PreferredStrategy::Strategy(kind)
            }
        };

        Ok(ElementDescriptor {
            id: DescriptorId::new(id),
            display_name: self.display_name,
            description: self.description,
            tag: self.tag,
            repository_path: self.repository_path,
            selectors,
            preferred,
            options: self.options,
        })
    }
}

/// Split a BASIC expression on its first top-level `||` into a primary and an
/// optional alternate sub-expression. Separators inside quotes, brackets or
/// parentheses are ignored.
pub fn composite_parts(expression: &str) -> (&str, Option<&str>) {
    let bytes = expression.as_bytes();
    let mut quote: Option<u8> = None;
    let mut depth = 0usize;
    let mut idx = 0;
    while idx < bytes.len() {
        let byte = bytes[idx];
        match quote {
            Some(q) if byte == q => quote = None,
            Some(_) => {}
            None => match byte {
                b'\'' | b'"' => quote = Some(byte),
                b'[' | b'(' => depth += 1,
                b']' | b')' => depth = depth.saturating_sub(1),
                b'|' if depth == 0 && bytes.get(idx + 1) == Some(&b'|') => {
                    let primary = expression[..idx].trim();
                    let alternate = expression[idx + 2..].trim();
                    let alternate = (!alternate.is_empty()).then_some(alternate);
                    return (primary, alternate);
                }
                _ => {}
            },
        }
        idx += 1;
    }
    (expression.trim(), None)
}
