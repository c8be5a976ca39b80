//! Screen rendering and routing

mod control;
pub mod grid;
mod help;

use ratatui::prelude::*;

use crate::app::{App, AppState};
use crate::widgets;

/// Width of the control panel to the right of the grid
const CONTROL_PANEL_WIDTH: u16 = 36;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    widgets::render_header(frame, chunks[0]);
    widgets::render_footer(frame, chunks[2], &get_hints(app));

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(CONTROL_PANEL_WIDTH)])
        .split(chunks[1]);

    grid::render(frame, body[0], app);
    control::render(frame, body[1], app);

    if app.state == AppState::Help {
        help::render(frame, area);
    }
}

/// Get keyboard hints for the current state
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.state {
        AppState::Help => vec![("Any key", "Close")],
        AppState::Board if app.is_running() => vec![
            ("+/-", "Speed"),
            ("\u{2190}\u{2191}\u{2193}\u{2192}", "Inspect"),
            ("f", "Follow"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        AppState::Board => vec![
            ("Enter", "Start"),
            ("+/-", "Speed"),
            ("\u{2190}\u{2191}\u{2193}\u{2192}", "Inspect"),
            ("t", "Theme"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
    }
}
