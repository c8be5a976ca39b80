//! Header widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::theme;

/// Render the application header
pub fn render_header(frame: &mut Frame, area: Rect) {
    let palette = theme::current();

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled("\u{2605}", Style::default().fg(palette.celebrate_bg)), // Star
        Span::styled(" X", Style::default().fg(palette.letter_x).bold()),
        Span::styled("M", Style::default().fg(palette.letter_m).bold()),
        Span::styled("A", Style::default().fg(palette.letter_a).bold()),
        Span::styled("S", Style::default().fg(palette.letter_s).bold()),
        Span::styled("-scan ", Style::default().fg(palette.text).bold()),
        Span::styled(
            format!("v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(palette.subtle),
        ),
        Span::styled("\u{2502} ", Style::default().fg(palette.subtle)), // Separator
        Span::styled(
            "Word Search Visualizer",
            Style::default().fg(palette.subtle).italic(),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .border_type(BorderType::Rounded),
    );

    frame.render_widget(title, area);
}
