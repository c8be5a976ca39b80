//! Reusable TUI widgets

mod footer;
mod header;
mod spinner;

pub use footer::render_footer;
pub use header::render_header;
pub use spinner::get_spinner_frame;
