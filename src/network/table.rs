//! Remote table abstraction and the sync routine built on it

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ServiceConfig;
use crate::frame::{FrameConfig, SyncRequest};
use crate::models::Dish;
use crate::network::client::HttpTable;
use crate::network::error::SyncError;

/// A hosted table the frame can be synced against
#[async_trait]
pub trait RemoteTable: Send + Sync {
    /// Pull one page of rows as described by `config`
    async fn fetch(&self, config: &FrameConfig) -> Result<Vec<Dish>, SyncError>;

    /// Append one row to `table`
    async fn insert(&self, table: &str, dish: &Dish) -> Result<(), SyncError>;
}

/// Push every record in order, then pull. Stops at the first error.
pub async fn sync_frame(table: &dyn RemoteTable, request: &SyncRequest) -> Result<Vec<Dish>, SyncError> {
    for dish in &request.push {
        table.insert(&request.config.table_name, dish).await?;
    }
    table.fetch(&request.config).await
}

/// Connection context, built once at startup and handed to the network actor
#[derive(Clone)]
pub struct Connection {
    table: Arc<dyn RemoteTable>,
}

impl Connection {
    pub fn new(table: Arc<dyn RemoteTable>) -> Self {
        Connection { table }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(Arc::new(HttpTable::new(config.clone())))
    }

    pub async fn sync(&self, request: &SyncRequest) -> Result<Vec<Dish>, SyncError> {
        sync_frame(self.table.as_ref(), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::testing::MemoryTable;

    fn soup() -> Dish {
        Dish::new(Some("Soup".into()), Some("Water, Salt".into()))
    }

    #[tokio::test]
    async fn test_sync_pushes_then_pulls() {
        let table = MemoryTable::default();
        let request = SyncRequest {
            config: FrameConfig::new("DISHES", 10),
            push: vec![soup()],
        };

        let rows = sync_frame(&table, &request).await.unwrap();
        assert_eq!(rows, vec![soup()]);
        assert_eq!(table.inserted_into(), vec!["DISHES".to_string()]);
    }

    #[tokio::test]
    async fn test_pull_respects_limit() {
        let table = MemoryTable::with_rows((0..25).map(|i| Dish::new(Some(format!("Dish {i}")), None)).collect());
        let request = SyncRequest {
            config: FrameConfig::new("DISHES", 10),
            push: vec![],
        };

        let rows = sync_frame(&table, &request).await.unwrap();
        assert_eq!(rows.len(), 10);
        assert_eq!(table.requested_limits(), vec![10]);
    }

    #[tokio::test]
    async fn test_push_failure_skips_pull() {
        let table = MemoryTable::failing();
        let request = SyncRequest {
            config: FrameConfig::new("DISHES", 10),
            push: vec![soup()],
        };

        assert!(sync_frame(&table, &request).await.is_err());
        assert!(table.requested_limits().is_empty());
    }
}
