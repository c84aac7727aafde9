use std::collections::HashMap;
use std::fs;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::{info, warn};

use super::{SerializableShareLink, ShareLink, ShareLinkStore};
use crate::errors::Result;
use crate::utils::generate_random_code;

/// Length of generated share ids.
const SHARE_ID_LENGTH: usize = 10;

/// File-backed share-link store.
///
/// The whole mapping lives in memory and is the authority; the backing
/// file is rewritten in full after every mutation. Single-instance
/// deployments only: concurrent processes sharing one file would race on
/// the full-file rewrite and the last writer would win.
pub struct FileStorage {
    file_path: String,
    cache: Arc<RwLock<HashMap<String, ShareLink>>>,
}

impl FileStorage {
    /// Build a store backed by `file_path` and load whatever it holds.
    /// A missing or unparseable file is not an error: the store starts
    /// empty and the next successful write recreates it.
    pub fn new(file_path: &str) -> Self {
        let storage = FileStorage {
            file_path: file_path.to_string(),
            cache: Arc::new(RwLock::new(HashMap::new())),
        };

        let links = storage.load_from_file();
        {
            let mut cache_guard = storage.cache.write().unwrap();
            info!("FileStorage ready, {} share links loaded", links.len());
            *cache_guard = links;
        }

        storage
    }

    fn load_from_file(&self) -> HashMap<String, ShareLink> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(_) => {
                info!("Share link file not found, starting with an empty store");
                return HashMap::new();
            }
        };

        match serde_json::from_str::<HashMap<String, SerializableShareLink>>(&content) {
            Ok(entries) => entries
                .into_iter()
                .map(|(id, entry)| {
                    let link = entry.into_link(id.clone());
                    (id, link)
                })
                .collect(),
            Err(e) => {
                warn!(
                    "Failed to parse share link file, starting with an empty store: {}",
                    e
                );
                HashMap::new()
            }
        }
    }

    fn save_to_file(&self, links: &HashMap<String, ShareLink>) -> Result<()> {
        let entries: HashMap<&String, SerializableShareLink> = links
            .iter()
            .map(|(id, link)| (id, SerializableShareLink::from_link(link)))
            .collect();

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.file_path, json)?;
        Ok(())
    }

    /// Write-through after a mutation. A failed write is logged and
    /// swallowed: the in-memory mapping stays authoritative and the next
    /// successful write re-persists everything. No retry.
    fn persist(&self) {
        let cache_guard = self.cache.read().unwrap();
        if let Err(e) = self.save_to_file(&cache_guard) {
            warn!(
                "Failed to persist share links to {}: {}",
                self.file_path, e
            );
        }
    }
}

#[async_trait]
impl ShareLinkStore for FileStorage {
    async fn create(&self, referrer: &str) -> ShareLink {
        let link = ShareLink {
            id: generate_random_code(SHARE_ID_LENGTH),
            created_at: chrono::Utc::now(),
            clicks: 0,
            referrer: referrer.to_string(),
            last_accessed: None,
        };

        {
            let mut cache_guard = self.cache.write().unwrap();
            cache_guard.insert(link.id.clone(), link.clone());
        }

        self.persist();
        link
    }

    async fn resolve(&self, id: &str) -> Option<ShareLink> {
        let updated = {
            let mut cache_guard = self.cache.write().unwrap();
            let link = cache_guard.get_mut(id)?;
            link.clicks += 1;
            link.last_accessed = Some(chrono::Utc::now());
            link.clone()
        };

        self.persist();
        Some(updated)
    }

    async fn load_all(&self) -> HashMap<String, ShareLink> {
        let cache_guard = self.cache.read().unwrap();
        cache_guard.clone()
    }

    async fn get_backend_name(&self) -> String {
        "file".to_string()
    }
}
