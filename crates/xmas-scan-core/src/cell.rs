//! Per-cell visualization state

use serde::Serialize;

use crate::grid::Grid;

/// Highlight state of a single grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CellState {
    /// Number of confirmed matches that covered this cell
    pub visit_count: u32,
    /// Covered by at least one confirmed match
    pub is_matched: bool,
    /// Part of the candidate currently under test
    pub is_checking: bool,
    /// Part of a match whose celebration is still playing
    pub is_animating_match: bool,
}

/// Cell states laid out with exactly the shape of a [`Grid`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellGrid {
    rows: Vec<Vec<CellState>>,
}

impl CellGrid {
    /// Fresh state for every position of `grid`
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            rows: grid
                .rows()
                .iter()
                .map(|row| vec![CellState::default(); row.len()])
                .collect(),
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&CellState> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut CellState> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Apply `f` to each of `cells`; positions outside the grid are skipped.
    pub(crate) fn update<F>(&mut self, cells: &[(usize, usize)], mut f: F)
    where
        F: FnMut(&mut CellState),
    {
        for &(row, col) in cells {
            if let Some(cell) = self.get_mut(row, col) {
                f(cell);
            }
        }
    }

    pub fn rows(&self) -> &[Vec<CellState>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when this grid has one cell per character of `grid`
    pub fn matches_shape(&self, grid: &Grid) -> bool {
        self.rows.len() == grid.row_count()
            && self
                .rows
                .iter()
                .enumerate()
                .all(|(r, row)| row.len() == grid.row_len(r))
    }

    /// Sum of visit counts over all cells
    pub fn total_visits(&self) -> u64 {
        self.rows
            .iter()
            .flatten()
            .map(|c| u64::from(c.visit_count))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_follows_grid() {
        let grid = Grid::from_rows(&["XMAS", "XM", ""]);
        let cells = CellGrid::for_grid(&grid);
        assert!(cells.matches_shape(&grid));
        assert_eq!(cells.rows()[1].len(), 2);
        assert!(cells.get(1, 2).is_none());
    }

    #[test]
    fn test_update_skips_out_of_bounds() {
        let grid = Grid::from_rows(&["XM"]);
        let mut cells = CellGrid::for_grid(&grid);
        cells.update(&[(0, 1), (0, 5), (3, 0)], |c| c.visit_count += 1);
        assert_eq!(cells.get(0, 1).unwrap().visit_count, 1);
        assert_eq!(cells.total_visits(), 1);
    }
}
