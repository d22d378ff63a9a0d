use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::errors::ContentError;
use crate::models::site_models::{default_services, ContactButtons, Service, SiteText};

pub const SITE_FILE: &str = "site.json";
pub const SERVICES_FILE: &str = "services.json";
pub const CONTACT_BUTTONS_FILE: &str = "contact_buttons.json";

/// Where raw content documents come from.
#[cfg_attr(test, mockall::automock)]
pub trait ContentSource: Send + Sync {
    fn read(&self, name: &str) -> std::io::Result<String>;
}

pub struct FsContentSource {
    dir: PathBuf,
}

impl FsContentSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ContentSource for FsContentSource {
    fn read(&self, name: &str) -> std::io::Result<String> {
        std::fs::read_to_string(self.dir.join(name))
    }
}

/// Site configuration, loaded once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub site: SiteText,
    pub services: Vec<Service>, // kept in display order
    pub contact_buttons: ContactButtons,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            site: SiteText::default(),
            services: default_services(),
            contact_buttons: ContactButtons::default(),
        }
    }
}

fn read_json<T: DeserializeOwned>(source: &dyn ContentSource, name: &str) -> Result<T, ContentError> {
    let raw = source.read(name).map_err(|source| ContentError::Read {
        name: name.to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
        name: name.to_string(),
        source,
    })
}

fn or_default<T>(result: Result<T, ContentError>, default: impl FnOnce() -> T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("{}, using built-in default", e);
            default()
        }
    }
}

pub fn sort_services(services: &mut [Service]) {
    services.sort_by_key(|s| s.sort_order);
}

pub struct ContentRepository;

impl ContentRepository {
    /// Never fails: every missing or broken document falls back on its own.
    pub fn load(source: &dyn ContentSource) -> SiteContent {
        let site = or_default(read_json(source, SITE_FILE), SiteText::default);
        let mut services = or_default(read_json(source, SERVICES_FILE), default_services);
        let contact_buttons = or_default(read_json(source, CONTACT_BUTTONS_FILE), ContactButtons::default);
        sort_services(&mut services);
        tracing::info!("loaded site content with {} services", services.len());
        SiteContent {
            site,
            services,
            contact_buttons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use std::io;

    fn not_found() -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    #[test]
    fn missing_documents_fall_back_to_defaults() {
        let mut source = MockContentSource::new();
        source.expect_read().returning(|_| not_found());
        assert_eq!(ContentRepository::load(&source), SiteContent::default());
    }

    #[test]
    fn each_document_falls_back_independently() {
        let mut source = MockContentSource::new();
        source
            .expect_read()
            .with(eq(SITE_FILE))
            .returning(|_| Ok(r#"{"title":"T","subtitle":"S","description":"D","phone":"+966500000001","whatsapp":"966500000001"}"#.to_string()));
        source
            .expect_read()
            .with(eq(SERVICES_FILE))
            .returning(|_| Ok("[{broken".to_string()));
        source
            .expect_read()
            .with(eq(CONTACT_BUTTONS_FILE))
            .returning(|_| not_found());

        let content = ContentRepository::load(&source);
        assert_eq!(content.site.title, "T");
        assert_eq!(content.services, default_services());
        assert_eq!(content.contact_buttons, ContactButtons::default());
    }

    #[test]
    fn services_are_sorted_on_load() {
        let mut source = MockContentSource::new();
        source.expect_read().with(eq(SITE_FILE)).returning(|_| not_found());
        source.expect_read().with(eq(CONTACT_BUTTONS_FILE)).returning(|_| not_found());
        source.expect_read().with(eq(SERVICES_FILE)).returning(|_| {
            Ok(r#"[
                {"id":"b","title":"B","description":"","icon":"","sort_order":2},
                {"id":"a","title":"A","description":"","icon":"","sort_order":1}
            ]"#
            .to_string())
        });

        let content = ContentRepository::load(&source);
        let orders: Vec<i32> = content.services.iter().map(|s| s.sort_order).collect();
        assert_eq!(orders, vec![1, 2]);
        assert!(content.services.iter().all(|s| s.available));
    }

    #[test]
    fn reads_shipped_content_directory() {
        let source = FsContentSource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/content"));
        let content = ContentRepository::load(&source);
        assert_eq!(content.services.len(), 6);
        assert!(content.services.iter().any(|s| !s.available));
        assert_eq!(content.contact_buttons.whatsapp.number, "966501234567");
    }
}
