//! Live-adjustable pacing delay
//!
//! The delay travels over a `tokio::sync::watch` channel. The UI holds the
//! [`PacingControl`] and writes to it whenever the slider moves; the scanner
//! holds a [`Pacing`] and samples the latest value each time it is about to
//! sleep. A change therefore applies to the next suspension, never to one that
//! is already under way.

use std::time::Duration;

use tokio::sync::watch;

/// Lowest selectable delay in milliseconds
pub const MIN_DELAY_MS: u64 = 0;
/// Highest selectable delay in milliseconds
pub const MAX_DELAY_MS: u64 = 200;
/// Delay used when nothing else is configured
pub const DEFAULT_DELAY_MS: u64 = 50;
/// Pause after a confirmed match so its animation can play
pub const DEFAULT_CELEBRATION_MS: u64 = 600;

/// Clamp a delay into the slider range
pub fn clamp_delay(ms: u64) -> u64 {
    ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS)
}

/// Create a connected control/reader pair starting at `initial_ms`.
pub fn channel(initial_ms: u64) -> (PacingControl, Pacing) {
    let (tx, rx) = watch::channel(clamp_delay(initial_ms));
    (PacingControl { tx }, Pacing { rx })
}

/// Writer side of the pacing channel
#[derive(Debug, Clone)]
pub struct PacingControl {
    tx: watch::Sender<u64>,
}

impl PacingControl {
    /// Current delay in milliseconds
    pub fn get(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Set the delay, clamped to `MIN_DELAY_MS..=MAX_DELAY_MS`. Returns the
    /// stored value.
    pub fn set(&self, ms: u64) -> u64 {
        let ms = clamp_delay(ms);
        self.tx.send_replace(ms);
        ms
    }

    pub fn increase(&self, step: u64) -> u64 {
        self.set(self.get().saturating_add(step))
    }

    pub fn decrease(&self, step: u64) -> u64 {
        self.set(self.get().saturating_sub(step))
    }

    /// A new reader attached to this control
    pub fn subscribe(&self) -> Pacing {
        Pacing {
            rx: self.tx.subscribe(),
        }
    }
}

/// Reader side of the pacing channel
#[derive(Debug, Clone)]
pub struct Pacing {
    rx: watch::Receiver<u64>,
}

impl Pacing {
    /// A reader whose value never changes
    pub fn fixed(ms: u64) -> Self {
        let (control, pacing) = channel(ms);
        // The receiver keeps the last value after the sender is dropped.
        drop(control);
        pacing
    }

    /// Latest delay in milliseconds
    pub fn delay_ms(&self) -> u64 {
        *self.rx.borrow()
    }

    /// Latest delay as a `Duration`
    pub fn sample(&self) -> Duration {
        Duration::from_millis(self.delay_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clamps_to_slider_range() {
        let (control, pacing) = channel(50);
        assert_eq!(control.set(500), MAX_DELAY_MS);
        assert_eq!(pacing.delay_ms(), MAX_DELAY_MS);
        assert_eq!(control.decrease(1_000), MIN_DELAY_MS);
        assert_eq!(pacing.delay_ms(), 0);
    }

    #[test]
    fn test_initial_value_is_clamped() {
        let (control, _pacing) = channel(9_999);
        assert_eq!(control.get(), MAX_DELAY_MS);
    }

    #[test]
    fn test_reader_sees_latest_write() {
        let (control, pacing) = channel(10);
        let second = control.subscribe();
        control.increase(15);
        assert_eq!(pacing.sample(), Duration::from_millis(25));
        assert_eq!(second.delay_ms(), 25);
    }

    #[test]
    fn test_fixed_survives_dropped_sender() {
        let pacing = Pacing::fixed(120);
        assert_eq!(pacing.delay_ms(), 120);
    }
}
