//! Letter grid view
//!
//! Each cell is drawn two columns wide (letter plus a gap). Its style is a
//! pure function of the letter and its [`CellState`], so it can be tested
//! without a terminal.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use xmas_scan_core::CellState;

use crate::app::App;
use crate::theme::{self, Theme};

/// Terminal columns per grid cell
pub const CELL_WIDTH: u16 = 2;

/// Opacity ramp for a cell with `visit_count` matches through it
pub fn opacity(visit_count: u32) -> f32 {
    (0.5 + 0.15 * visit_count as f32).min(1.0)
}

/// Style for one grid cell
pub fn cell_style(ch: char, cell: &CellState, is_cursor: bool, theme: &Theme) -> Style {
    let mut style = Style::default().fg(theme.letter(ch));

    // A terminal has no alpha channel, so the ramp maps onto dim/normal/bold.
    let alpha = opacity(cell.visit_count);
    if alpha < 0.75 {
        style = style.add_modifier(Modifier::DIM);
    } else if alpha >= 1.0 {
        style = style.add_modifier(Modifier::BOLD);
    }

    if cell.is_matched {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    if cell.is_animating_match {
        style = style
            .fg(Color::Black)
            .bg(theme.celebrate_bg)
            .add_modifier(Modifier::BOLD)
            .remove_modifier(Modifier::DIM);
    } else if cell.is_checking {
        style = style
            .fg(Color::Black)
            .bg(theme.checking_bg)
            .add_modifier(Modifier::BOLD)
            .remove_modifier(Modifier::DIM);
    } else if is_cursor {
        style = style.bg(theme.selection_bg);
    }

    style
}

/// First visible index so that `focus` stays inside a window of `view_len`
/// items out of `total`, centred where possible.
pub fn viewport_offset(focus: usize, view_len: usize, total: usize) -> usize {
    if view_len == 0 || total <= view_len {
        return 0;
    }
    let max_offset = total - view_len;
    focus.saturating_sub(view_len / 2).min(max_offset)
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = theme::current();
    let grid = app.grid();

    let title = format!(" Grid {}x{} ", grid.row_count(), grid.max_row_len());
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(palette.accent).bold()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.subtle));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if grid.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No grid loaded",
            Style::default().fg(palette.error),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let visible_rows = inner.height as usize;
    let visible_cols = (inner.width / CELL_WIDTH) as usize;
    let (focus_row, focus_col) = app.focus();
    let row_offset = viewport_offset(focus_row, visible_rows, grid.row_count());
    let col_offset = viewport_offset(focus_col, visible_cols, grid.max_row_len());

    let lines: Vec<Line> = grid
        .rows()
        .iter()
        .enumerate()
        .skip(row_offset)
        .take(visible_rows)
        .map(|(r, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .skip(col_offset)
                .take(visible_cols)
                .map(|(c, &ch)| {
                    let cell = app.snapshot.cells.get(r, c).copied().unwrap_or_default();
                    let style = cell_style(ch, &cell, app.cursor == (r, c), &palette);
                    Span::styled(format!("{} ", ch), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_ramp() {
        assert_eq!(opacity(0), 0.5);
        assert!((opacity(1) - 0.65).abs() < 1e-6);
        assert!((opacity(3) - 0.95).abs() < 1e-6);
        assert_eq!(opacity(4), 1.0);
        assert_eq!(opacity(40), 1.0);
    }

    #[test]
    fn test_unvisited_cell_is_dim_letter() {
        let theme = Theme::default_theme();
        let style = cell_style('M', &CellState::default(), false, &theme);
        assert_eq!(style.fg, Some(theme.letter_m));
        assert!(style.add_modifier.contains(Modifier::DIM));
        assert_eq!(style.bg, None);
    }

    #[test]
    fn test_checking_highlight() {
        let theme = Theme::default_theme();
        let cell = CellState {
            is_checking: true,
            ..Default::default()
        };
        let style = cell_style('X', &cell, false, &theme);
        assert_eq!(style.bg, Some(theme.checking_bg));
        assert!(!style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_celebration_beats_checking_and_cursor() {
        let theme = Theme::default_theme();
        let cell = CellState {
            visit_count: 1,
            is_matched: true,
            is_checking: true,
            is_animating_match: true,
        };
        let style = cell_style('A', &cell, true, &theme);
        assert_eq!(style.bg, Some(theme.celebrate_bg));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_often_visited_cell_is_bold() {
        let theme = Theme::default_theme();
        let cell = CellState {
            visit_count: 4,
            is_matched: true,
            ..Default::default()
        };
        let style = cell_style('S', &cell, false, &theme);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_cursor_background() {
        let theme = Theme::default_theme();
        let style = cell_style('X', &CellState::default(), true, &theme);
        assert_eq!(style.bg, Some(theme.selection_bg));
    }

    #[test]
    fn test_viewport_offset() {
        // Fits entirely
        assert_eq!(viewport_offset(5, 20, 10), 0);
        // Centred
        assert_eq!(viewport_offset(50, 10, 140), 45);
        // Clamped at both ends
        assert_eq!(viewport_offset(2, 10, 140), 0);
        assert_eq!(viewport_offset(139, 10, 140), 130);
        assert_eq!(viewport_offset(3, 0, 140), 0);
    }
}
