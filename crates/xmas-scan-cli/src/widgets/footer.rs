//! Footer widget with keyboard hints

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme::{self, Theme};

/// Key hints as one line: `[key] action │ [key] action`
pub fn hint_line(hints: &[(&str, &str)], palette: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2502} ", Style::default().fg(palette.subtle)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(palette.accent).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(palette.text),
        ));
    }
    Line::from(spans)
}

/// Render the footer with keyboard hints
pub fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let palette = theme::current();

    let footer = Paragraph::new(hint_line(hints, &palette))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.subtle)),
        );

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_hints_are_separated() {
        let palette = Theme::default_theme();
        let line = hint_line(&[("Enter", "Start"), ("q", "Quit")], &palette);
        assert_eq!(text(&line), "[Enter] Start \u{2502} [q] Quit");
        assert_eq!(line.spans[0].style.fg, Some(palette.accent));
    }

    #[test]
    fn test_no_hints_is_empty() {
        let line = hint_line(&[], &Theme::default_theme());
        assert!(line.spans.is_empty());
    }
}
