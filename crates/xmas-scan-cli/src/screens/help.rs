//! Help screen showing keyboard shortcuts

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let accent = theme::accent();
    let subtle = theme::subtle();

    // Calculate modal size and position (centered)
    let width = 46;
    let height = 21;
    let modal_area = centered_rect(width, height, area);

    // Clear the background
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(Span::styled(
            " Keyboard Shortcuts ",
            Style::default().fg(accent).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let lines = vec![
        Line::from(Span::styled("Search", Style::default().fg(accent).bold())),
        shortcut_line("Enter / s", "Start search"),
        shortcut_line("+ / -", "Delay \u{00B1}10ms"),
        shortcut_line("] / [", "Delay \u{00B1}1ms"),
        Line::from(""),
        Line::from(Span::styled("Grid", Style::default().fg(accent).bold())),
        shortcut_line("\u{2190}\u{2191}\u{2193}\u{2192} / hjkl", "Move cursor"),
        shortcut_line("PgUp / PgDn", "Jump 10 rows"),
        shortcut_line("f", "Follow the search"),
        Line::from(""),
        Line::from(Span::styled("General", Style::default().fg(accent).bold())),
        shortcut_line("t", "Cycle theme"),
        shortcut_line("?", "This help screen"),
        shortcut_line("q", "Quit application"),
    ];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Help content
            Constraint::Length(2), // Footer
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(subtle).italic(),
    )))
    .alignment(Alignment::Center);

    let separator = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(accent));
    frame.render_widget(separator, chunks[1]);

    let footer_inner = Rect::new(chunks[1].x, chunks[1].y + 1, chunks[1].width, 1);
    frame.render_widget(footer, footer_inner);
}

/// Create a formatted shortcut line with key and description
fn shortcut_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<16}", key), Style::default().fg(theme::text())),
        Span::styled(description.to_string(), Style::default().fg(theme::subtle())),
    ])
}

fn centered_rect(width: u16, height: u16, parent: Rect) -> Rect {
    let x = parent.x + (parent.width.saturating_sub(width)) / 2;
    let y = parent.y + (parent.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(parent.width), height.min(parent.height))
}
