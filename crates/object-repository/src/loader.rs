//! Object repository loader
//!
//! Reads a directory tree of test-object files (one XML `WebElementEntity` per
//! file) into validated [`ElementDescriptor`]s. Loading is pure: it never
//! touches a live document.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use objrepo_core_types::DescriptorId;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::errors::{DescriptorValidationError, RepositoryError, ValidationReason};
use crate::lint::{lint_descriptor, LintWarning};
use crate::model::ElementDescriptor;

/// File extension the store uses for test objects.
pub const TEST_OBJECT_EXTENSION: &str = "rs";

const ELEMENT_ROOT: &str = "WebElementEntity";

#[derive(Debug, Deserialize)]
struct RawElementEntity {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tag: Option<String>,
    #[serde(rename = "elementGuidId", default)]
    element_guid_id: Option<String>,
    #[serde(rename = "selectorCollection", default)]
    selector_collection: RawSelectorCollection,
    #[serde(rename = "selectorMethod", default)]
    selector_method: Option<String>,
    // Spelling matches the store format.
    #[serde(rename = "useRalativeImagePath", default)]
    use_relative_image_path: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSelectorCollection {
    #[serde(rename = "entry", default)]
    entries: Vec<RawSelectorEntry>,
}

#[derive(Debug, Deserialize)]
struct RawSelectorEntry {
    key: String,
    #[serde(default)]
    value: String,
}

/// Loader settings.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    pub extension: String,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            extension: TEST_OBJECT_EXTENSION.to_string(),
        }
    }
}

/// Validated descriptors keyed by id, with a secondary index by repository path.
#[derive(Debug, Clone, Default)]
pub struct DescriptorRepository {
    root: Option<PathBuf>,
    descriptors: BTreeMap<DescriptorId, Arc<ElementDescriptor>>,
    paths: HashMap<String, DescriptorId>,
}

impl DescriptorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from already constructed descriptors.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = ElementDescriptor>,
    ) -> Result<Self, DescriptorValidationError> {
        let mut repository = Self::new();
        for descriptor in descriptors {
            repository.insert(descriptor)?;
        }
        Ok(repository)
    }

    fn insert(&mut self, descriptor: ElementDescriptor) -> Result<(), DescriptorValidationError> {
        if let Some(existing) = self.descriptors.get(descriptor.id()) {
            let previous = existing
                .repository_path()
                .unwrap_or_else(|| existing.display_name())
                .to_string();
            return Err(DescriptorValidationError::new(
                descriptor.id().to_string(),
                ValidationReason::DuplicateId(previous),
            ));
        }
        if let Some(path) = descriptor.repository_path() {
            if let Some(owner) = self.paths.get(path) {
                return Err(DescriptorValidationError::new(
                    descriptor.id().to_string(),
                    ValidationReason::DuplicatePath {
                        path: path.to_string(),
                        owner: owner.to_string(),
                    },
                ));
            }
            self.paths.insert(path.to_string(), descriptor.id().clone());
        }
        self.descriptors
            .insert(descriptor.id().clone(), Arc::new(descriptor));
        Ok(())
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn get(&self, id: &DescriptorId) -> Option<Arc<ElementDescriptor>> {
        self.descriptors.get(id).cloned()
    }

    /// Look a descriptor up by its repository path (`Pages/Login/txt_Email`).
    pub fn by_path(&self, path: &str) -> Option<Arc<ElementDescriptor>> {
        let normalized = path.trim_matches('/').replace('\\', "/");
        self.paths
            .get(&normalized)
            .and_then(|id| self.descriptors.get(id))
            .cloned()
    }

    /// Resolve either an id or a repository path.
    pub fn find(&self, key: &str) -> Option<Arc<ElementDescriptor>> {
        self.get(&DescriptorId::from(key))
            .or_else(|| self.by_path(key))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &DescriptorId> {
        self.descriptors.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ElementDescriptor>> {
        self.descriptors.values()
    }

    pub fn lint(&self) -> Vec<LintWarning> {
        self.iter().flat_map(|d| lint_descriptor(d)).collect()
    }
}

/// Loads descriptor trees from disk.
#[derive(Debug, Clone, Default)]
pub struct RepositoryLoader {
    options: LoaderOptions,
}

impl RepositoryLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Parse and validate every test object under `root`.
    pub fn load_all(&self, root: &Path) -> Result<DescriptorRepository, RepositoryError> {
        if !root.is_dir() {
            return Err(RepositoryError::NotADirectory(root.to_path_buf()));
        }

        let mut repository = DescriptorRepository {
            root: Some(root.to_path_buf()),
            ..DescriptorRepository::default()
        };
        let mut skipped = 0usize;

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|source| RepositoryError::Walk {
                root: root.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() || !self.is_test_object(path) {
                continue;
            }

            let contents = fs::read_to_string(path).map_err(|source| RepositoryError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let repository_path = repository_path(root, path);
            match parse_descriptor(&contents, &repository_path)? {
                Some(descriptor) => {
                    debug!(
                        descriptor_id = %descriptor.id(),
                        path = %repository_path,
                        "Loaded element descriptor"
                    );
                    repository.insert(descriptor)?;
                }
                None => skipped += 1,
            }
        }

        info!(
            root = %root.display(),
            descriptors = repository.len(),
            skipped,
            "Object repository loaded"
        );
        Ok(repository)
    }

    /// Load a single descriptor by id (or repository path).
    pub fn load(&self, root: &Path, id: &str) -> Result<ElementDescriptor, RepositoryError> {
        let repository = self.load_all(root)?;
        repository
            .find(id)
            .map(|descriptor| descriptor.as_ref().clone())
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    fn is_test_object(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(&self.options.extension))
            .unwrap_or(false)
    }
}

/// Load every descriptor under `root` with default options.
pub fn load_all(root: impl AsRef<Path>) -> Result<DescriptorRepository, RepositoryError> {
    RepositoryLoader::default().load_all(root.as_ref())
}

/// Load one descriptor by id with default options.
pub fn load(root: impl AsRef<Path>, id: &str) -> Result<ElementDescriptor, RepositoryError> {
    RepositoryLoader::default().load(root.as_ref(), id)
}

/// Parse one test-object document.
///
/// Returns `Ok(None)` for documents whose root is not a `WebElementEntity`
/// (the store keeps other entity kinds, such as web service requests, under
/// the same extension).
pub fn parse_descriptor(
    xml: &str,
    repository_path: &str,
) -> Result<Option<ElementDescriptor>, RepositoryError> {
    let parse_error = |reason: String| RepositoryError::Parse {
        path: repository_path.to_string(),
        reason,
    };

    match root_element(xml).map_err(|err| parse_error(err.to_string()))? {
        Some(root) if root == ELEMENT_ROOT => {}
        Some(root) => {
            debug!(path = %repository_path, root = %root, "Skipping non-element entity");
            return Ok(None);
        }
        None => return Err(parse_error("document has no root element".to_string())),
    }

    let raw: RawElementEntity =
        quick_xml::de::from_str(xml).map_err(|err| parse_error(err.to_string()))?;

    let mut builder = ElementDescriptor::builder(raw.element_guid_id.unwrap_or_default())
        .name(raw.name.unwrap_or_default().trim())
        .description(raw.description.unwrap_or_default().trim())
        .tag(raw.tag)
        .repository_path(repository_path)
        .raw_preferred(raw.selector_method)
        .use_relative_image_path(raw.use_relative_image_path.unwrap_or(false));
    for entry in raw.selector_collection.entries {
        builder = builder.raw_selector(entry.key.trim(), entry.value);
    }

    Ok(Some(builder.build()?))
}

fn root_element(xml: &str) -> Result<Option<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(start) | Event::Empty(start) => {
                return Ok(Some(
                    String::from_utf8_lossy(start.name().as_ref()).into_owned(),
                ));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// `root/Pages/Login/txt_Email.rs` -> `Pages/Login/txt_Email`.
fn repository_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path).with_extension("");
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PreferredStrategy;
    use objrepo_core_types::StrategyKind;

    const TXT_EMAIL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Email input field on login page</description>
   <name>txt_Email</name>
   <tag></tag>
   <elementGuidId>login-email-input</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//input[@type='email' and @placeholder='Email']</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>input[type='email'][placeholder='Email']</value>
      </entry>
      <entry>
         <key>BASIC</key>
         <value>//input[@type='email']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>"#;

    #[test]
    fn parses_element_entity() {
        let descriptor = parse_descriptor(TXT_EMAIL, "Pages/Login/txt_Email")
            .unwrap()
            .unwrap();
        assert_eq!(descriptor.id().as_str(), "login-email-input");
        assert_eq!(descriptor.display_name(), "txt_Email");
        assert_eq!(descriptor.description(), "Email input field on login page");
        assert_eq!(descriptor.tag(), None);
        assert_eq!(descriptor.repository_path(), Some("Pages/Login/txt_Email"));
        assert_eq!(
            descriptor.preferred(),
            PreferredStrategy::Strategy(StrategyKind::XPath)
        );
        assert!(!descriptor.options().use_relative_image_path);
        let kinds: Vec<_> = descriptor.selectors().iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![StrategyKind::XPath, StrategyKind::Css, StrategyKind::Basic]
        );
        assert_eq!(
            descriptor.selectors().get(StrategyKind::Basic),
            Some("//input[@type='email']")
        );
    }

    #[test]
    fn skips_other_entities() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<WebServiceRequestEntity><name>health</name></WebServiceRequestEntity>"#;
        assert!(parse_descriptor(xml, "API/health").unwrap().is_none());
    }

    #[test]
    fn reports_missing_id_by_path() {
        let xml = TXT_EMAIL.replace("<elementGuidId>login-email-input</elementGuidId>", "");
        let err = parse_descriptor(&xml, "Pages/Login/txt_Email").unwrap_err();
        assert_eq!(err.descriptor(), Some("Pages/Login/txt_Email"));
    }

    #[test]
    fn reports_unknown_selector_method() {
        let xml = TXT_EMAIL.replace(
            "<selectorMethod>XPATH</selectorMethod>",
            "<selectorMethod>IMAGE</selectorMethod>",
        );
        let err = parse_descriptor(&xml, "Pages/Login/txt_Email").unwrap_err();
        match err {
            RepositoryError::Validation(err) => {
                assert_eq!(err.descriptor, "login-email-input");
                assert_eq!(err.reason, ValidationReason::UnknownStrategy("IMAGE".into()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_malformed_xml() {
        let err = parse_descriptor("<WebElementEntity><name>x</name>", "bad")
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Parse { .. }));
    }

    #[test]
    fn repository_path_strips_root_and_extension() {
        let root = Path::new("/repo/Object Repository");
        let path = root.join("Pages").join("Login").join("txt_Email.rs");
        assert_eq!(repository_path(root, &path), "Pages/Login/txt_Email");
    }
}
