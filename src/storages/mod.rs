use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

pub mod file;
pub mod models;

pub use models::{SerializableShareLink, ShareLink};

use crate::config::AppConfig;

/// Share-link store: issues ids, counts clicks, owns the backing file.
///
/// All reads and writes of the persisted mapping go through this trait;
/// no other component touches the file.
#[async_trait]
pub trait ShareLinkStore: Send + Sync {
    /// Issue a new share link recording `referrer`, persist, and return
    /// the new record. Persistence failures do not roll the record back.
    async fn create(&self, referrer: &str) -> ShareLink;

    /// Resolve an id. A known id gets its click counted, `last_accessed`
    /// stamped, and the updated record returned. An unknown id returns
    /// `None` and mutates nothing; it is an expected outcome, not a fault.
    async fn resolve(&self, id: &str) -> Option<ShareLink>;

    async fn load_all(&self) -> HashMap<String, ShareLink>;

    async fn get_backend_name(&self) -> String;
}

pub struct StorageFactory;

impl StorageFactory {
    pub fn create(config: &AppConfig) -> Arc<dyn ShareLinkStore> {
        Arc::new(file::FileStorage::new(&config.links_file))
    }
}
