//! Theme system for UI customization
//!
//! Provides different color schemes for the TUI interface, including the
//! per-letter colors of the grid.

use std::cell::RefCell;

use ratatui::prelude::Color;

// Re-export ThemeName from core
pub use xmas_scan_core::config::ThemeName;

/// Theme color palette
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary accent color (headers, borders of focused panels)
    pub accent: Color,
    /// Main text color
    pub text: Color,
    /// Subtle/dimmed text color
    pub subtle: Color,
    /// Success indicator color
    pub success: Color,
    /// Error indicator color
    pub error: Color,
    /// Background of the grid cursor
    pub selection_bg: Color,
    /// Letter colors for X, M, A, S; anything else uses `text`
    pub letter_x: Color,
    pub letter_m: Color,
    pub letter_a: Color,
    pub letter_s: Color,
    /// Background of cells in the candidate under test
    pub checking_bg: Color,
    /// Background of cells whose match is being celebrated
    pub celebrate_bg: Color,
}

impl Theme {
    /// Create the default festive theme
    pub fn default_theme() -> Self {
        Self {
            accent: Color::Rgb(76, 175, 80),     // start-button green
            text: Color::Rgb(205, 214, 244),     // light text
            subtle: Color::Rgb(147, 153, 178),   // dimmed text
            success: Color::Green,
            error: Color::Red,
            selection_bg: Color::Rgb(69, 71, 90),
            letter_x: Color::Rgb(255, 153, 153), // red
            letter_m: Color::Rgb(153, 204, 255), // blue
            letter_a: Color::Rgb(153, 255, 153), // green
            letter_s: Color::Rgb(255, 204, 153), // orange
            checking_bg: Color::Rgb(255, 0, 0),
            celebrate_bg: Color::Rgb(255, 215, 0),
        }
    }

    /// Create the ocean blue theme
    pub fn ocean_theme() -> Self {
        Self {
            accent: Color::Rgb(100, 180, 255),   // ocean blue
            text: Color::Rgb(200, 220, 240),     // light blue-white
            subtle: Color::Rgb(120, 150, 180),   // dimmed blue-gray
            success: Color::Rgb(100, 220, 150),  // teal green
            error: Color::Rgb(255, 100, 100),    // coral red
            selection_bg: Color::Rgb(40, 60, 90),
            letter_x: Color::Rgb(255, 140, 120),
            letter_m: Color::Rgb(120, 200, 255),
            letter_a: Color::Rgb(120, 230, 200),
            letter_s: Color::Rgb(240, 220, 140),
            checking_bg: Color::Rgb(230, 80, 80),
            celebrate_bg: Color::Rgb(100, 220, 150),
        }
    }

    /// Create the monochrome theme
    pub fn monochrome_theme() -> Self {
        Self {
            accent: Color::White,
            text: Color::Rgb(220, 220, 220),     // bright gray
            subtle: Color::Rgb(128, 128, 128),   // mid gray
            success: Color::Rgb(180, 220, 180),  // light green-gray
            error: Color::Rgb(220, 140, 140),    // light red-gray
            selection_bg: Color::Rgb(60, 60, 60),
            letter_x: Color::Rgb(255, 255, 255),
            letter_m: Color::Rgb(200, 200, 200),
            letter_a: Color::Rgb(170, 170, 170),
            letter_s: Color::Rgb(140, 140, 140),
            checking_bg: Color::Rgb(110, 110, 110),
            celebrate_bg: Color::Rgb(230, 230, 230),
        }
    }

    /// Get theme by name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::default_theme(),
            ThemeName::Ocean => Self::ocean_theme(),
            ThemeName::Monochrome => Self::monochrome_theme(),
        }
    }

    /// Color for a grid letter
    pub fn letter(&self, ch: char) -> Color {
        match ch.to_ascii_uppercase() {
            'X' => self.letter_x,
            'M' => self.letter_m,
            'A' => self.letter_a,
            'S' => self.letter_s,
            _ => self.text,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

// Global theme instance, thread-local since only the UI thread renders.
thread_local! {
    static CURRENT_THEME: RefCell<Theme> = RefCell::new(Theme::default());
    static CURRENT_THEME_NAME: RefCell<ThemeName> = const { RefCell::new(ThemeName::Default) };
}

/// Set the current global theme
pub fn set_theme(name: ThemeName) {
    CURRENT_THEME.with(|t| {
        *t.borrow_mut() = Theme::from_name(name);
    });
    CURRENT_THEME_NAME.with(|n| {
        *n.borrow_mut() = name;
    });
}

/// Get the current theme name
pub fn current_theme_name() -> ThemeName {
    CURRENT_THEME_NAME.with(|n| *n.borrow())
}

/// Get a copy of the whole current palette
pub fn current() -> Theme {
    CURRENT_THEME.with(|t| t.borrow().clone())
}

/// Get the current accent color
pub fn accent() -> Color {
    CURRENT_THEME.with(|t| t.borrow().accent)
}

/// Get the current text color
pub fn text() -> Color {
    CURRENT_THEME.with(|t| t.borrow().text)
}

/// Get the current subtle text color
pub fn subtle() -> Color {
    CURRENT_THEME.with(|t| t.borrow().subtle)
}

/// Get the current success color
pub fn success() -> Color {
    CURRENT_THEME.with(|t| t.borrow().success)
}
