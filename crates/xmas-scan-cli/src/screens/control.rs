//! Control panel: match count, pacing slider, start button and inspector

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use xmas_scan_core::pacing::MAX_DELAY_MS;
use xmas_scan_core::ScanOutcome;

use crate::app::App;
use crate::theme;
use crate::widgets::get_spinner_frame;

/// Cells in the slider track
const SLIDER_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let accent = theme::accent();
    let text = theme::text();
    let subtle = theme::subtle();

    let block = Block::default()
        .title(Span::styled(" Controls ", Style::default().fg(accent).bold()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(subtle));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("XMAS Pattern Count: {}", app.match_count()),
            Style::default().fg(accent).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled("Animation Speed", Style::default().fg(subtle))),
        slider_line(app.delay_ms()),
        Line::from(""),
        button_line(app.is_running()),
        Line::from(""),
    ];

    if let Some(candidate) = app.snapshot.session.current {
        lines.push(Line::from(vec![
            Span::styled("Checking: ", Style::default().fg(subtle)),
            Span::styled(
                format!(
                    "[{}, {}] {} {}",
                    candidate.row,
                    candidate.col,
                    candidate.direction.arrow(),
                    candidate.direction
                ),
                Style::default().fg(text),
            ),
        ]));
    }

    if let Some(tooltip) = app.tooltip() {
        lines.push(Line::from(Span::styled(tooltip, Style::default().fg(text))));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Theme: ", Style::default().fg(subtle)),
        Span::styled(theme::current_theme_name().label(), Style::default().fg(text)),
        Span::styled("  Follow: ", Style::default().fg(subtle)),
        Span::styled(if app.follow { "on" } else { "off" }, Style::default().fg(text)),
    ]));

    if let Some(ScanOutcome::Completed { matches }) = app.last_outcome {
        if !app.is_running() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("\u{2714} Search complete: {} matches", matches),
                Style::default().fg(theme::success()).bold(),
            )));
        }
    } else if let Some(status) = &app.status_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(subtle).italic(),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Slider track with the current delay
fn slider_line(delay_ms: u64) -> Line<'static> {
    let filled = (delay_ms as usize * SLIDER_WIDTH) / MAX_DELAY_MS as usize;
    let filled = filled.min(SLIDER_WIDTH);

    Line::from(vec![
        Span::styled("\u{2588}".repeat(filled), Style::default().fg(theme::accent())),
        Span::styled(
            "\u{2591}".repeat(SLIDER_WIDTH - filled),
            Style::default().fg(theme::subtle()),
        ),
        Span::styled(format!(" {}ms", delay_ms), Style::default().fg(theme::text())),
    ])
}

fn button_line(running: bool) -> Line<'static> {
    if running {
        Line::from(vec![
            Span::styled(get_spinner_frame(), Style::default().fg(theme::accent())),
            Span::styled(" Searching...", Style::default().fg(theme::subtle())),
        ])
    } else {
        Line::from(Span::styled(
            "[ Start Search ]",
            Style::default().fg(Color::Black).bg(theme::accent()).bold(),
        ))
    }
}
