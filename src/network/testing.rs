//! In-memory table used by unit tests

use std::sync::Mutex;

use async_trait::async_trait;

use crate::frame::FrameConfig;
use crate::models::Dish;
use crate::network::error::SyncError;
use crate::network::table::RemoteTable;

#[derive(Default)]
pub struct MemoryTable {
    rows: Mutex<Vec<Dish>>,
    fail: bool,
    limits: Mutex<Vec<usize>>,
    inserts: Mutex<Vec<String>>,
}

impl MemoryTable {
    pub fn with_rows(rows: Vec<Dish>) -> Self {
        MemoryTable {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        MemoryTable {
            fail: true,
            ..Default::default()
        }
    }

    pub fn requested_limits(&self) -> Vec<usize> {
        self.limits.lock().unwrap().clone()
    }

    pub fn inserted_into(&self) -> Vec<String> {
        self.inserts.lock().unwrap().clone()
    }

    fn unavailable() -> SyncError {
        SyncError::Status {
            status: 503,
            body: "unavailable".into(),
        }
    }
}

#[async_trait]
impl RemoteTable for MemoryTable {
    async fn fetch(&self, config: &FrameConfig) -> Result<Vec<Dish>, SyncError> {
        if self.fail {
            return Err(Self::unavailable());
        }
        self.limits.lock().unwrap().push(config.limit);
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().skip(config.offset).take(config.limit).cloned().collect())
    }

    async fn insert(&self, table: &str, dish: &Dish) -> Result<(), SyncError> {
        if self.fail {
            return Err(Self::unavailable());
        }
        self.inserts.lock().unwrap().push(table.to_string());
        self.rows.lock().unwrap().push(dish.clone());
        Ok(())
    }
}
