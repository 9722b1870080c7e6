//! Command handlers - business logic for processing UI events

use crate::app::state::{NewDishPrompt, PromptStep};
use crate::app::AppState;
use crate::constants::{DISHES_LIMIT, DISHES_TABLE};
use crate::frame::FrameConfig;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Dish;

impl AppState {
    // ========================
    // List view
    // ========================

    /// Mount step of the list view. Configures the frame and asks for the
    /// first pull; only the first call does anything.
    pub fn mount(&mut self) -> Option<NetworkCommand> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        self.frame.configure(FrameConfig::new(DISHES_TABLE, DISHES_LIMIT));
        self.request_sync()
    }

    pub fn refresh(&mut self) -> Option<NetworkCommand> {
        self.request_sync()
    }

    pub fn scroll_up(&mut self) {
        self.list_scroll = self.list_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.list_scroll + 1 < self.frame.len() {
            self.list_scroll += 1;
        }
    }

    fn request_sync(&mut self) -> Option<NetworkCommand> {
        let request = self.frame.begin_sync(self.next_sync_id)?;
        let id = self.next_id();
        self.outstanding_syncs.insert(id);
        tracing::debug!(id, push = request.push.len(), "Requesting sync");
        Some(NetworkCommand::Sync { id, request })
    }

    // ========================
    // Create control
    // ========================

    pub fn open_new_dish(&mut self) {
        self.prompt = Some(NewDishPrompt::new());
        self.input_mode = InputMode::Prompting;
    }

    pub fn prompt_char(&mut self, c: char) {
        if let Some(prompt) = &mut self.prompt {
            prompt.buffer.push(c);
        }
    }

    pub fn prompt_backspace(&mut self) {
        if let Some(prompt) = &mut self.prompt {
            prompt.buffer.pop();
        }
    }

    /// Enter: keep what was typed, even if empty
    pub fn prompt_accept(&mut self) -> Option<NetworkCommand> {
        let answer = self.prompt.as_mut().map(|p| std::mem::take(&mut p.buffer));
        self.advance_prompt(answer)
    }

    /// Esc: the field is left as `None`, the dish is still created
    pub fn prompt_cancel(&mut self) -> Option<NetworkCommand> {
        if let Some(prompt) = &mut self.prompt {
            prompt.buffer.clear();
        }
        self.advance_prompt(None)
    }

    fn advance_prompt(&mut self, answer: Option<String>) -> Option<NetworkCommand> {
        let prompt = self.prompt.as_mut()?;
        match prompt.step {
            PromptStep::Title => {
                prompt.title = answer;
                prompt.step = PromptStep::Ingredients;
                None
            }
            PromptStep::Ingredients => {
                let title = prompt.title.take();
                self.prompt = None;
                self.input_mode = InputMode::Normal;

                let dish = Dish::new(title, answer);
                tracing::info!(title = ?dish.title, ingredients = ?dish.ingredients, "Adding dish");
                self.frame.push(dish);
                self.request_sync()
            }
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        let id = response.id();
        self.outstanding_syncs.remove(&id);

        match response {
            NetworkResponse::Synced { rows, time_ms, .. } => {
                // an older pull must not overwrite a newer one
                if self.applied_sync_id.is_some_and(|applied| applied > id) {
                    tracing::debug!(id, "Ignoring stale pull");
                    self.frame.settle_stale(id);
                    return;
                }
                self.applied_sync_id = Some(id);
                self.frame.apply_pull(id, rows);
                self.last_synced = Some(chrono::Utc::now());
                self.last_sync_ms = time_ms;
                if self.list_scroll >= self.frame.len() {
                    self.list_scroll = self.frame.len().saturating_sub(1);
                }
            }
            NetworkResponse::SyncFailed { message, .. } => {
                // Logged only; the list keeps showing the local rows
                tracing::warn!(id, %message, "Sync failed, keeping local rows");
                self.frame.abandon_sync(id);
            }
        }
    }
}
