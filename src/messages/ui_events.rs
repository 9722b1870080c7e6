//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // List view
    ScrollUp,
    ScrollDown,
    Refresh,

    // Create control
    NewDish,
    PromptChar(char),
    PromptBackspace,
    PromptAccept,
    PromptCancel,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Prompting,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, input_mode: InputMode, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('a') | KeyCode::Char('n') => Some(UiEvent::NewDish),
            KeyCode::Char('r') => Some(UiEvent::Refresh),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::ScrollDown),
            _ => None,
        },
        InputMode::Prompting => match key.code {
            KeyCode::Esc => Some(UiEvent::PromptCancel),
            KeyCode::Enter => Some(UiEvent::PromptAccept),
            KeyCode::Backspace => Some(UiEvent::PromptBackspace),
            KeyCode::Char(c) => Some(UiEvent::PromptChar(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('a')), InputMode::Normal, false), Some(UiEvent::NewDish));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), InputMode::Normal, false), Some(UiEvent::Quit));
        assert_eq!(key_to_ui_event(press(KeyCode::Down), InputMode::Normal, false), Some(UiEvent::ScrollDown));
    }

    #[test]
    fn test_prompt_captures_letters() {
        // 'q' is text while a prompt is open
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('q')), InputMode::Prompting, false),
            Some(UiEvent::PromptChar('q'))
        );
        assert_eq!(key_to_ui_event(press(KeyCode::Esc), InputMode::Prompting, false), Some(UiEvent::PromptCancel));
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), InputMode::Prompting, false), Some(UiEvent::PromptAccept));
    }

    #[test]
    fn test_help_swallows_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('a')), InputMode::Normal, true), Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, InputMode::Prompting, false), Some(UiEvent::Quit));
    }
}
