//! Network messages - communication between App and Network layers

use crate::frame::SyncRequest;
use crate::models::Dish;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Push the request's records, then pull a page of the table
    Sync {
        id: u64,
        request: SyncRequest,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Push and pull both succeeded
    Synced {
        id: u64,
        rows: Vec<Dish>,
        time_ms: u64,
    },
    /// Push or pull failed
    SyncFailed {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the sync ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Synced { id, .. } => *id,
            NetworkResponse::SyncFailed { id, .. } => *id,
        }
    }
}
