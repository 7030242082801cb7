#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use action_locator::{EngineOptions, LocatorSession};
use dom_adapter::MemoryDocument;
use object_repository::{load_all, DescriptorRepository, ElementDescriptor};
use objrepo_core_types::SessionId;

pub const EMAIL_XPATH: &str = "//input[@type='email' and @placeholder='Email']";
pub const EMAIL_CSS: &str = "input[type='email'][placeholder='Email']";
pub const EMAIL_BASIC: &str = "//input[@type='email']";

pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("object-repository")
        .join("fixtures")
        .join("RapidPhotoFlow")
        .join("Object Repository")
}

pub fn fixture_repository() -> Arc<DescriptorRepository> {
    Arc::new(load_all(fixture_root()).expect("fixture repository loads"))
}

pub fn repository_of(descriptors: Vec<ElementDescriptor>) -> Arc<DescriptorRepository> {
    Arc::new(DescriptorRepository::from_descriptors(descriptors).expect("valid descriptors"))
}

pub fn session(doc: &Arc<MemoryDocument>, repository: Arc<DescriptorRepository>) -> LocatorSession {
    LocatorSession::new(SessionId::new(), doc.clone(), repository, EngineOptions::default())
}
