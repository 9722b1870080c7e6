//! # Dishes TUI
//!
//! A terminal list of dishes mirrored from a hosted table service.
//!
//! ## Features
//! - List view of the first page (10 rows) of the `DISHES` table
//! - Add Dish control: title and ingredients, pushed as entered
//! - Local-first frame: new rows show before the service confirms them
//! - REST binding with bearer or basic credentials from a YAML config file
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod models;
pub mod config;
pub mod constants;
pub mod frame;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{AuthType, Dish};
pub use config::ServiceConfig;
pub use frame::{Frame, FrameConfig, SyncRequest};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor};
pub use network::{sync_frame, Connection, HttpTable, NetworkActor, RemoteTable, SyncError};
