use ratatui::{prelude::*, widgets::*};

use crate::models::Dish;

/// Rows a card takes: borders, title, blank line, ingredients
pub const CARD_HEIGHT: u16 = 5;

/// Renders one dish as a bordered card: title as heading, ingredients below
pub fn render_dish_card(dish: &Dish, is_selected: bool) -> Paragraph<'_> {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(Color::Rgb(0xef, 0xef, 0xef)).fg(Color::Black))
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::from(Span::styled(dish.title_text(), Style::default().bold())),
        Line::from(""),
        Line::from(dish.ingredients_text()),
    ];

    Paragraph::new(lines).block(block).wrap(Wrap { trim: true })
}

/// Renders the prompt popup body
pub fn render_prompt<'a>(question: &'a str, buffer: &'a str) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Add Dish (Enter:ok Esc:cancel) ")
        .style(Style::default().bg(Color::Black));

    let lines = vec![
        Line::from(Span::styled(question, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(buffer, Style::default().fg(Color::White))),
    ];

    Paragraph::new(lines).block(block).wrap(Wrap { trim: false })
}

/// Cursor cell after the typed text in a prompt popup, kept inside the border
pub fn prompt_cursor(popup: Rect, buffer: &str) -> Position {
    let typed = u16::try_from(buffer.chars().count()).unwrap_or(u16::MAX);
    let max_x = popup.x + popup.width.saturating_sub(2);
    let x = popup.x.saturating_add(typed).saturating_add(1).min(max_x);
    Position::new(x, popup.y + 3)
}

/// Rect of `width` cells centered horizontally in `r`
pub fn centered_column(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y,
        width,
        height: r.height,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_centered_column_fits_narrow_area() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_column(50, area), area);
        assert_eq!(centered_column(10, area), Rect::new(10, 0, 10, 10));
    }

    #[test]
    fn test_prompt_cursor_follows_text() {
        let popup = Rect::new(10, 5, 40, 6);
        assert_eq!(prompt_cursor(popup, ""), Position::new(11, 8));
        assert_eq!(prompt_cursor(popup, "Soup"), Position::new(15, 8));
    }

    #[test]
    fn test_prompt_cursor_clamps_long_input() {
        let popup = Rect::new(10, 5, 40, 6);
        assert_eq!(prompt_cursor(popup, &"x".repeat(100)), Position::new(48, 8));
        // Longer than u16::MAX chars must not wrap back to the left
        assert_eq!(prompt_cursor(popup, &"x".repeat(70_000)), Position::new(48, 8));
    }

    #[test]
    fn test_card_shows_both_fields() {
        let dish = Dish::new(Some("Soup".into()), Some("Water, Salt".into()));
        let mut terminal = Terminal::new(TestBackend::new(30, CARD_HEIGHT)).unwrap();
        terminal
            .draw(|f| f.render_widget(render_dish_card(&dish, false), f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Soup"));
        assert!(text.contains("Water, Salt"));
    }
}
