//! The eight compass directions a word can be read in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit step across the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    /// All directions, clockwise starting from `Up`.
    ///
    /// The scanner walks candidates in this order, so the visual replay of a
    /// scan is deterministic.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// Row/column delta of one step in this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::Right => (0, 1),
            Direction::DownRight => (1, 1),
            Direction::Down => (1, 0),
            Direction::DownLeft => (1, -1),
            Direction::Left => (0, -1),
            Direction::UpLeft => (-1, -1),
        }
    }

    /// Position reached after `steps` steps from `(row, col)`.
    ///
    /// Coordinates are signed so that positions off the top or left edge can
    /// be represented and rejected by bounds checks.
    pub fn step(self, row: usize, col: usize, steps: usize) -> (isize, isize) {
        let (dr, dc) = self.delta();
        let steps = steps as isize;
        (row as isize + dr * steps, col as isize + dc * steps)
    }

    /// Short arrow glyph used by the UI.
    pub const fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "\u{2191}",
            Direction::UpRight => "\u{2197}",
            Direction::Right => "\u{2192}",
            Direction::DownRight => "\u{2198}",
            Direction::Down => "\u{2193}",
            Direction::DownLeft => "\u{2199}",
            Direction::Left => "\u{2190}",
            Direction::UpLeft => "\u{2196}",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::UpRight => "up-right",
            Direction::Right => "right",
            Direction::DownRight => "down-right",
            Direction::Down => "down",
            Direction::DownLeft => "down-left",
            Direction::Left => "left",
            Direction::UpLeft => "up-left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_covers_every_unit_vector_once() {
        let deltas: HashSet<_> = Direction::ALL.iter().map(|d| d.delta()).collect();
        assert_eq!(deltas.len(), 8);
        assert!(!deltas.contains(&(0, 0)));
        for (dr, dc) in deltas {
            assert!((-1..=1).contains(&dr));
            assert!((-1..=1).contains(&dc));
        }
    }

    #[test]
    fn test_clockwise_order_from_up() {
        assert_eq!(Direction::ALL[0], Direction::Up);
        assert_eq!(Direction::ALL[2], Direction::Right);
        assert_eq!(Direction::ALL[4], Direction::Down);
        assert_eq!(Direction::ALL[6], Direction::Left);
        assert_eq!(Direction::ALL[7], Direction::UpLeft);
    }

    #[test]
    fn test_step_goes_negative() {
        assert_eq!(Direction::UpLeft.step(1, 1, 3), (-2, -2));
        assert_eq!(Direction::Right.step(0, 0, 3), (0, 3));
        assert_eq!(Direction::DownLeft.step(2, 5, 2), (4, 3));
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&Direction::DownRight).unwrap();
        assert_eq!(json, "\"down-right\"");
    }
}
