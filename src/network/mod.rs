//! Network layer - the connection context and sync execution
//!
//! The Network actor receives sync commands and sends back the pulled rows.

pub mod actor;
pub mod client;
pub mod error;
pub mod table;

pub use actor::NetworkActor;
pub use client::HttpTable;
pub use error::SyncError;
pub use table::{sync_frame, Connection, RemoteTable};

#[cfg(test)]
pub(crate) mod testing;
