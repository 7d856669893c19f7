use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{ScanRecord, ScanStore, StoreError};

/// In-process scan log guarded by a mutex; the deployment choice
/// shipped here. A durable backend would be a second implementor of
/// [`ScanStore`].
#[derive(Clone, Default)]
pub struct MemoryScanStore {
    records: Arc<Mutex<Vec<ScanRecord>>>,
}

impl MemoryScanStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScanStore for MemoryScanStore {
    async fn add(&self, record: ScanRecord) -> Result<(), StoreError> {
        self.records.lock().await.push(record);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ScanRecord>, StoreError> {
        let mut records = self.records.lock().await.clone();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<ScanRecord>, StoreError> {
        let records = self.records.lock().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }
}
