//! App state - pure data structure with no I/O logic

use std::collections::HashSet;

use crate::constants::{INGREDIENTS_PROMPT, TITLE_PROMPT};
use crate::frame::Frame;
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;

/// Which question the create control is asking
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PromptStep {
    Title,
    Ingredients,
}

impl PromptStep {
    pub fn question(&self) -> &'static str {
        match self {
            PromptStep::Title => TITLE_PROMPT,
            PromptStep::Ingredients => INGREDIENTS_PROMPT,
        }
    }
}

/// A new dish being entered, one prompt at a time
#[derive(Clone, Debug)]
pub struct NewDishPrompt {
    pub step: PromptStep,
    pub buffer: String,
    /// Answer to the title prompt, `None` if it was dismissed
    pub title: Option<String>,
}

impl NewDishPrompt {
    pub fn new() -> Self {
        NewDishPrompt {
            step: PromptStep::Title,
            buffer: String::new(),
            title: None,
        }
    }
}

impl Default for NewDishPrompt {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // List view
    pub frame: Frame,
    pub list_scroll: usize,
    pub mounted: bool,

    // Create control
    pub input_mode: InputMode,
    pub prompt: Option<NewDishPrompt>,

    // Sync bookkeeping
    pub next_sync_id: u64,
    pub outstanding_syncs: HashSet<u64>,
    pub applied_sync_id: Option<u64>,
    pub last_synced: Option<chrono::DateTime<chrono::Utc>>,
    pub last_sync_ms: u64,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            frame: Frame::new(),
            list_scroll: 0,
            mounted: false,
            input_mode: InputMode::Normal,
            prompt: None,
            next_sync_id: 1,
            outstanding_syncs: HashSet::new(),
            applied_sync_id: None,
            last_synced: None,
            last_sync_ms: 0,
            show_help: false,
        }
    }

    /// Generate a unique sync ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_sync_id;
        self.next_sync_id += 1;
        id
    }

    pub fn is_syncing(&self) -> bool {
        !self.outstanding_syncs.is_empty()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            rows: self.frame.rows().cloned().collect(),
            list_scroll: self.list_scroll,
            input_mode: self.input_mode,
            prompt_question: self.prompt.as_ref().map(|p| p.step.question()),
            prompt_buffer: self.prompt.as_ref().map(|p| p.buffer.clone()).unwrap_or_default(),
            is_syncing: self.is_syncing(),
            last_synced: self.last_synced,
            last_sync_ms: self.last_sync_ms,
            show_help: self.show_help,
        }
    }
}
