//! Character grid loading and bounds checks

use std::path::Path;

use crate::error::{Error, Result};

/// Immutable grid of characters, one `Vec<char>` per input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from text.
    ///
    /// The whole text is trimmed, then split on newlines and each line is
    /// trimmed. Blank input yields an empty grid. Ragged rows are accepted;
    /// bounds checks work per row.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        let rows: Vec<Vec<char>> = trimmed
            .lines()
            .map(|line| line.trim().chars().collect())
            .collect();

        let grid = Self { rows };
        if !grid.is_rectangular() {
            tracing::warn!(
                rows = grid.row_count(),
                "grid rows have differing lengths, bounds are checked per row"
            );
        }
        grid
    }

    /// Build a grid from pre-split rows
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.as_ref().chars().collect()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `row`, 0 if the row does not exist
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Length of the longest row
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// True when every row has the same length.
    pub fn is_rectangular(&self) -> bool {
        match self.rows.first() {
            Some(first) => self.rows.iter().all(|r| r.len() == first.len()),
            None => true,
        }
    }

    /// True iff `(row, col)` addresses a character of the grid.
    ///
    /// The column bound is the length of `row` itself, so ragged input never
    /// indexes past the end of a short row.
    pub fn is_valid(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        row < self.rows.len() && col < self.rows[row].len()
    }

    /// Character at `(row, col)`, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Iterate over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| (0..row.len()).map(move |c| (r, c)))
    }
}

/// Read and parse a grid file.
pub fn load_grid(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::GridLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Grid::parse(&text))
}

/// Read a grid file, logging and returning an empty grid on failure.
///
/// An empty grid turns every later scan into a no-op.
pub fn load_grid_or_empty(path: &Path) -> Grid {
    match load_grid(path) {
        Ok(grid) => {
            tracing::debug!(
                path = %path.display(),
                rows = grid.row_count(),
                cols = grid.max_row_len(),
                "loaded grid"
            );
            grid
        }
        Err(e) => {
            tracing::error!("Error loading matrix: {}", e);
            Grid::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_trims_text_and_lines() {
        let grid = Grid::parse("\n  XMAS  \r\nSAMX\n\n");
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.row_len(0), 4);
        assert_eq!(grid.get(0, 0), Some('X'));
        assert_eq!(grid.get(1, 3), Some('X'));
    }

    #[test]
    fn test_parse_blank_is_empty() {
        assert!(Grid::parse("").is_empty());
        assert!(Grid::parse("  \n \n").is_empty());
    }

    #[test]
    fn test_is_valid_rectangular() {
        let grid = Grid::from_rows(&["XMAS", "SAMX"]);
        assert!(grid.is_valid(0, 0));
        assert!(grid.is_valid(1, 3));
        assert!(!grid.is_valid(-1, 0));
        assert!(!grid.is_valid(0, -1));
        assert!(!grid.is_valid(2, 0));
        assert!(!grid.is_valid(0, 4));
    }

    #[test]
    fn test_is_valid_uses_row_length() {
        let grid = Grid::from_rows(&["XMASXMAS", "XM"]);
        assert!(!grid.is_rectangular());
        assert!(grid.is_valid(0, 7));
        assert!(grid.is_valid(1, 1));
        assert!(!grid.is_valid(1, 2));
        assert_eq!(grid.max_row_len(), 8);
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::from_rows(&["AB", "C"]);
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_load_grid_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "XMAS").unwrap();
        writeln!(file, "SAMX").unwrap();

        let grid = load_grid(file.path()).unwrap();
        assert_eq!(grid, Grid::from_rows(&["XMAS", "SAMX"]));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("input.txt");
        let err = load_grid(&missing).unwrap_err();
        assert!(matches!(err, Error::GridLoad { .. }));
        assert!(load_grid_or_empty(&missing).is_empty());
    }
}
