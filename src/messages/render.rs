//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::InputMode;
use crate::models::Dish;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // List view
    pub rows: Vec<Dish>,
    pub list_scroll: usize,

    // Create control
    pub input_mode: InputMode,
    pub prompt_question: Option<&'static str>,
    pub prompt_buffer: String,

    // Sync status
    pub is_syncing: bool,
    pub last_synced: Option<chrono::DateTime<chrono::Utc>>,
    pub last_sync_ms: u64,

    // Popups
    pub show_help: bool,
}
