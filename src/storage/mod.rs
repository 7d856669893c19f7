use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod memory;

pub use memory::MemoryScanStore;

/// One completed prediction. Created once per successful request,
/// never mutated, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub id: Uuid,
    pub image_url: String,
    pub disease: String,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

impl ScanRecord {
    pub fn new(image_url: String, disease: String, confidence: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_url,
            disease,
            confidence,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Append-only scan log. Implementations are chosen at startup; the
/// listing order (newest first) is part of the contract, and `add`
/// must be safe under concurrent in-flight requests.
#[async_trait]
pub trait ScanStore: Send + Sync {
    async fn add(&self, record: ScanRecord) -> Result<(), StoreError>;

    /// All records ordered by timestamp descending.
    async fn list(&self) -> Result<Vec<ScanRecord>, StoreError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<ScanRecord>, StoreError>;
}
