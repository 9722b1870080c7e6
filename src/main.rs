//! Dishes TUI - Actor-based dish list synced with a hosted table
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - list view and create control state
//! - Network Layer (Tokio) - async sync against the table service

mod models;
mod config;
mod frame;
mod ui;
mod messages;
mod app;
mod network;
mod constants;

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
use messages::ui_events::{key_to_ui_event, InputMode};
use app::AppActor;
use config::ServiceConfig;
use network::{Connection, NetworkActor};
use constants::{CARD_WIDTH, LOG_FILE_NAME};
use ui::{centered_column, centered_rect, prompt_cursor, render_dish_card, render_prompt, CARD_HEIGHT};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Load the service config before touching the terminal
    let config_path = ServiceConfig::locate(std::env::args().nth(1).map(PathBuf::from))?;
    let config = ServiceConfig::load(&config_path)
        .with_context(|| format!("loading service config from {}", config_path.display()))?;
    tracing::info!(path = %config_path.display(), endpoint = %config.endpoint, "Starting");
    let connection = Connection::from_config(&config);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(connection, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.input_mode, current_state.show_help) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Header
            Constraint::Min(0),     // Dishes
            Constraint::Length(3),  // Add Dish button
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_header(f, main_chunks[0]);
    draw_dishes(f, state, main_chunks[1]);
    draw_add_button(f, state, main_chunks[2]);
    draw_status_bar(f, state, main_chunks[3]);

    if let Some(question) = state.prompt_question {
        draw_prompt_popup(f, question, &state.prompt_buffer, area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let title = Line::from(Span::styled(" Dishes ", Style::default().fg(Color::Black).bg(Color::Cyan).bold()));
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), area);
}

fn draw_dishes(f: &mut Frame, state: &RenderState, area: Rect) {
    let column = centered_column(CARD_WIDTH, area);
    let mut y = column.y;
    let bottom = column.y + column.height;

    // One blank line between cards, like the card margin
    for (i, dish) in state.rows.iter().enumerate().skip(state.list_scroll) {
        if y + CARD_HEIGHT > bottom {
            break;
        }
        let card_area = Rect::new(column.x, y, column.width, CARD_HEIGHT);
        f.render_widget(render_dish_card(dish, i == state.list_scroll), card_area);
        y += CARD_HEIGHT + 1;
    }
}

fn draw_add_button(f: &mut Frame, state: &RenderState, area: Rect) {
    let column = centered_column(CARD_WIDTH, area);
    let border_style = if state.input_mode == InputMode::Prompting {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let button = Paragraph::new(" Add Dish ")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style).title(" a "));
    f.render_widget(button, column);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = if state.input_mode == InputMode::Prompting {
        " Enter:ok | Esc:cancel "
    } else {
        " a:add dish | r:refresh | ↑/↓:scroll | ?:help | q:quit "
    };

    let sync = if state.is_syncing {
        String::from("syncing…")
    } else {
        match state.last_synced {
            Some(at) => format!("synced {} ({}ms)", at.with_timezone(&chrono::Local).format("%H:%M:%S"), state.last_sync_ms),
            None => String::new(),
        }
    };

    let line = Line::from(vec![
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {} dishes ", state.rows.len()), Style::default().fg(Color::Gray)),
        Span::styled(sync, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_prompt_popup(f: &mut Frame, question: &str, buffer: &str, area: Rect) {
    let popup_area = centered_rect(60, 20, area);

    f.render_widget(Clear, popup_area);
    f.render_widget(render_prompt(question, buffer), popup_area);

    f.set_cursor_position(prompt_cursor(popup_area, buffer));
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 DISHES - Keyboard Shortcuts

 LIST
   ↑ / ↓  (k / j)     Scroll dishes
   r                  Sync now

 ADD DISH
   a / n              Add a dish
   Enter              Accept the answer
   Esc                Skip the answer

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
