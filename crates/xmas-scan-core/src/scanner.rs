//! Animated pattern scanner
//!
//! [`PatternScanner`] walks every (position, direction) candidate of a grid
//! and tests whether `XMAS` starts there. Each candidate is turned into a
//! short sequence of visual states (checking, matched, celebrating, cleared),
//! and every state is published through a [`RenderSync`] before the scan
//! moves on. Pacing between steps is read live from a [`Pacing`] channel.
//!
//! All methods take `&self`. Cell state and session data sit behind
//! `std::sync::Mutex`es whose guards never live across an `.await`, so the
//! scanner can be shared in an `Arc` between the task that runs the scan and
//! a UI that only ever reads [`ScanSnapshot`]s.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;

use crate::cell::{CellGrid, CellState};
use crate::direction::Direction;
use crate::grid::Grid;
use crate::pacing::{Pacing, DEFAULT_CELEBRATION_MS};
use crate::render::RenderSync;

/// The word being searched for
pub const TARGET: [char; 4] = ['X', 'M', 'A', 'S'];
/// Number of characters in [`TARGET`]
pub const TARGET_LEN: usize = TARGET.len();

/// A start position plus a reading direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Candidate {
    pub fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self {
            row,
            col,
            direction,
        }
    }

    /// Positions covered by this candidate, or `None` if any of them falls
    /// outside `grid`.
    ///
    /// For rectangular grids checking the last position is enough. Ragged
    /// grids can have a valid last position behind a short middle row, so
    /// every step is checked.
    pub fn cells_in(&self, grid: &Grid) -> Option<[(usize, usize); TARGET_LEN]> {
        let (end_row, end_col) = self.direction.step(self.row, self.col, TARGET_LEN - 1);
        if !grid.is_valid(end_row, end_col) {
            return None;
        }

        let mut cells = [(0, 0); TARGET_LEN];
        for (i, cell) in cells.iter_mut().enumerate() {
            let (r, c) = self.direction.step(self.row, self.col, i);
            if !grid.is_valid(r, c) {
                return None;
            }
            *cell = (r as usize, c as usize);
        }
        Some(cells)
    }

    /// True if the in-bounds cells spell [`TARGET`] in order.
    pub fn spells_target(grid: &Grid, cells: &[(usize, usize); TARGET_LEN]) -> bool {
        cells
            .iter()
            .zip(TARGET.iter())
            .all(|(&(r, c), &expected)| grid.get(r, c) == Some(expected))
    }
}

/// Run-scoped scan state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSession {
    /// Matches confirmed so far in this session
    pub match_count: usize,
    /// A scan is in progress
    pub running: bool,
    /// Delay most recently sampled from the pacing channel
    pub delay_ms: u64,
    /// Candidate currently being tested
    pub current: Option<Candidate>,
    /// Confirmed matches in discovery order
    pub matches: Vec<Candidate>,
}

/// Read-only copy of the scanner's visual state
#[derive(Debug, Clone, Default)]
pub struct ScanSnapshot {
    pub cells: CellGrid,
    pub session: ScanSession,
}

/// Why a call to [`PatternScanner::scan_all`] did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The grid is empty, e.g. because loading it failed
    EmptyGrid,
    /// Another scan on this scanner has not finished yet
    AlreadyRunning,
}

/// Result of [`PatternScanner::scan_all`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Completed { matches: usize },
    Skipped(SkipReason),
}

impl ScanOutcome {
    /// Matches found; 0 for a skipped scan
    pub fn count(&self) -> usize {
        match self {
            ScanOutcome::Completed { matches } => *matches,
            ScanOutcome::Skipped(_) => 0,
        }
    }
}

/// Scanner that animates the search for [`TARGET`] over a grid.
pub struct PatternScanner<R> {
    grid: Grid,
    cells: Mutex<CellGrid>,
    session: Mutex<ScanSession>,
    pacing: Pacing,
    celebration: Duration,
    render: R,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<R: RenderSync> PatternScanner<R> {
    /// Create a scanner for `grid`.
    pub fn new(grid: Grid, pacing: Pacing, render: R) -> Self {
        let cells = CellGrid::for_grid(&grid);
        let session = ScanSession {
            delay_ms: pacing.delay_ms(),
            ..Default::default()
        };
        Self {
            grid,
            cells: Mutex::new(cells),
            session: Mutex::new(session),
            pacing,
            celebration: Duration::from_millis(DEFAULT_CELEBRATION_MS),
            render,
        }
    }

    /// Override the post-match celebration pause
    pub fn with_celebration(mut self, celebration: Duration) -> Self {
        self.celebration = celebration;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_valid(&self, row: isize, col: isize) -> bool {
        self.grid.is_valid(row, col)
    }

    pub fn is_running(&self) -> bool {
        lock(&self.session).running
    }

    pub fn match_count(&self) -> usize {
        lock(&self.session).match_count
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<CellState> {
        lock(&self.cells).get(row, col).copied()
    }

    pub fn session(&self) -> ScanSession {
        lock(&self.session).clone()
    }

    /// Copy of the current cell and session state
    pub fn snapshot(&self) -> ScanSnapshot {
        // Cells first, then session; every writer takes them one at a time.
        let cells = lock(&self.cells).clone();
        let session = lock(&self.session).clone();
        ScanSnapshot { cells, session }
    }

    fn update_cells<F>(&self, cells: &[(usize, usize)], f: F)
    where
        F: FnMut(&mut CellState),
    {
        lock(&self.cells).update(cells, f);
    }

    fn update_session<F>(&self, f: F)
    where
        F: FnOnce(&mut ScanSession),
    {
        f(&mut lock(&self.session));
    }

    /// Test one candidate, animating each step.
    ///
    /// Out-of-bounds candidates return `false` immediately without touching
    /// any state or waiting for a frame.
    pub async fn check_candidate(&self, row: usize, col: usize, direction: Direction) -> bool {
        let candidate = Candidate::new(row, col, direction);
        let Some(cells) = candidate.cells_in(&self.grid) else {
            return false;
        };

        self.update_session(|s| s.current = Some(candidate));
        self.update_cells(&cells, |c| c.is_checking = true);
        self.render.next_frame().await;

        // Sampled here so slider moves during earlier steps take effect.
        let delay = self.pacing.sample();
        self.update_session(|s| s.delay_ms = delay.as_millis() as u64);
        pause(delay).await;

        if !Candidate::spells_target(&self.grid, &cells) {
            self.update_cells(&cells, |c| c.is_checking = false);
            self.render.next_frame().await;
            return false;
        }

        self.update_cells(&cells, |c| {
            c.visit_count += 1;
            c.is_matched = true;
            c.is_checking = false;
            c.is_animating_match = true;
        });
        self.render.next_frame().await;

        pause(self.celebration).await;

        self.update_cells(&cells, |c| c.is_animating_match = false);
        self.render.next_frame().await;
        true
    }

    /// Scan every candidate of the grid.
    ///
    /// Skipped when the grid is empty or a scan is already running; a skipped
    /// call leaves the running scan's state untouched. Cell visit counts carry
    /// over between scans, the session is reset.
    pub async fn scan_all(&self) -> ScanOutcome {
        if self.grid.is_empty() {
            tracing::debug!("scan requested on empty grid, ignoring");
            return ScanOutcome::Skipped(SkipReason::EmptyGrid);
        }

        {
            let mut session = lock(&self.session);
            if session.running {
                tracing::debug!("scan already running, ignoring request");
                return ScanOutcome::Skipped(SkipReason::AlreadyRunning);
            }
            *session = ScanSession {
                running: true,
                delay_ms: self.pacing.delay_ms(),
                ..Default::default()
            };
        }

        tracing::debug!(
            rows = self.grid.row_count(),
            cols = self.grid.max_row_len(),
            "scan started"
        );

        let mut count = 0;
        for (row, col) in self.grid.positions() {
            for direction in Direction::ALL {
                if self.check_candidate(row, col, direction).await {
                    count += 1;
                    self.update_session(|s| {
                        s.match_count = count;
                        s.matches.push(Candidate::new(row, col, direction));
                    });
                }
            }
        }

        self.update_session(|s| {
            s.running = false;
            s.current = None;
        });
        tracing::info!(matches = count, "scan complete");

        ScanOutcome::Completed { matches: count }
    }
}

/// Sleep for `duration`. Zero never touches the timer, which would round it
/// up to the next millisecond tick.
async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

/// Every match of [`TARGET`] in `grid`, without animation.
///
/// Candidates are reported in the same order the animated scan finds them.
pub fn find_matches(grid: &Grid) -> Vec<Candidate> {
    find_matches_in(grid, &Direction::ALL)
}

/// Like [`find_matches`] but trying only `directions`, in the given order.
pub fn find_matches_in(grid: &Grid, directions: &[Direction]) -> Vec<Candidate> {
    grid.positions()
        .flat_map(|(row, col)| {
            directions
                .iter()
                .map(move |&direction| Candidate::new(row, col, direction))
        })
        .filter(|candidate| {
            candidate
                .cells_in(grid)
                .is_some_and(|cells| Candidate::spells_target(grid, &cells))
        })
        .collect()
}

/// Number of matches of [`TARGET`] in `grid`
pub fn count_matches(grid: &Grid) -> usize {
    find_matches(grid).len()
}
