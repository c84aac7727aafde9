use serde::{Deserialize, Serialize};

/// One issued share link for the resume document.
///
/// `clicks` only ever grows, and a record is never deleted once issued.
#[derive(Debug, Clone)]
pub struct ShareLink {
    pub id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub clicks: u64,
    pub referrer: String,
    pub last_accessed: Option<chrono::DateTime<chrono::Utc>>,
}

/// On-disk twin of [`ShareLink`]. The backing document is a single JSON
/// object keyed by id, so the id itself lives in the key, not here.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SerializableShareLink {
    pub created_at: String,
    pub clicks: u64,
    pub referrer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed: Option<String>,
}

impl SerializableShareLink {
    pub fn from_link(link: &ShareLink) -> Self {
        SerializableShareLink {
            created_at: link.created_at.to_rfc3339(),
            clicks: link.clicks,
            referrer: link.referrer.clone(),
            last_accessed: link.last_accessed.map(|dt| dt.to_rfc3339()),
        }
    }

    /// Rebuild the domain record under `id`. An unparseable creation
    /// timestamp falls back to now; an unparseable access timestamp is
    /// dropped.
    pub fn into_link(self, id: String) -> ShareLink {
        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .unwrap_or_else(|_| chrono::Utc::now().into())
            .with_timezone(&chrono::Utc);

        let last_accessed = self.last_accessed.and_then(|s| {
            chrono::DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .ok()
        });

        ShareLink {
            id,
            created_at,
            clicks: self.clicks,
            referrer: self.referrer,
            last_accessed,
        }
    }
}
