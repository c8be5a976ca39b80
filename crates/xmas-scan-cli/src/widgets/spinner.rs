//! Animated spinner shown while a search runs

/// Spinner animation frames
const SPINNER_FRAMES: &[&str] = &[
    "\u{280B}", // Braille dots
    "\u{2819}",
    "\u{2839}",
    "\u{2838}",
    "\u{283C}",
    "\u{2834}",
    "\u{2826}",
    "\u{2827}",
    "\u{2807}",
    "\u{280F}",
];

/// Milliseconds each spinner frame stays on screen
const FRAME_MS: u128 = 80;

/// Get the current spinner frame based on time
pub fn get_spinner_frame() -> &'static str {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    frame_at(millis)
}

fn frame_at(millis: u128) -> &'static str {
    SPINNER_FRAMES[(millis / FRAME_MS) as usize % SPINNER_FRAMES.len()]
}
