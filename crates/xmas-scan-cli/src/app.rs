//! Application state and logic

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use xmas_scan_core::{
    pacing, Config, FrameChannel, FrameRequest, Grid, PacingControl, PatternScanner,
    ScanOutcome, ScanSnapshot, SkipReason,
};

use crate::event;
use crate::screens;
use crate::theme;

/// Scanner as driven by the TUI: frames are acknowledged by the draw loop
pub type Scanner = PatternScanner<FrameChannel>;

/// Messages from the UI to the background worker
#[derive(Debug)]
pub enum WorkerMessage {
    StartScan,
    Shutdown,
}

/// Messages from the background worker to the UI
#[derive(Debug)]
pub enum AppMessage {
    ScanFinished(ScanOutcome),
    Error(String),
}

/// Which view has keyboard focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppState {
    #[default]
    Board,
    Help,
}

/// Main application state
pub struct App {
    pub state: AppState,
    pub should_quit: bool,

    /// Latest copy of the scanner's visual state
    pub snapshot: ScanSnapshot,
    /// Selected cell as (row, col)
    pub cursor: (usize, usize),
    /// Viewport follows the candidate under test instead of the cursor
    pub follow: bool,
    pub status_message: Option<String>,
    pub last_outcome: Option<ScanOutcome>,

    pub config: Config,
    /// Where theme changes are saved; `None` keeps them in memory only
    config_path: Option<PathBuf>,

    scanner: Arc<Scanner>,
    pacing: PacingControl,
    frames: UnboundedReceiver<FrameRequest>,
    pending_frames: Vec<FrameRequest>,
    /// StartScan sent but the worker has not flipped `running` yet
    scan_requested: bool,

    // Worker communication
    worker_tx: UnboundedSender<WorkerMessage>,
    worker_rx: Receiver<AppMessage>,
}

impl App {
    /// Create the application for `grid`, paced and themed from `config`
    pub fn new(grid: Grid, config: Config) -> Self {
        let (pacing_control, pacing) = pacing::channel(config.delay_ms);
        let (render, frames) = FrameChannel::new();
        let scanner = PatternScanner::new(grid, pacing, render)
            .with_celebration(Duration::from_millis(config.celebration_ms));
        let scanner = Arc::new(scanner);

        let (worker_tx, _worker_rx) = tokio::sync::mpsc::unbounded_channel::<WorkerMessage>();
        let (_app_tx, worker_rx) = mpsc::channel::<AppMessage>();

        theme::set_theme(config.theme);

        Self {
            state: AppState::default(),
            should_quit: false,
            snapshot: scanner.snapshot(),
            cursor: (0, 0),
            follow: false,
            status_message: None,
            last_outcome: None,
            config,
            config_path: None,
            scanner,
            pacing: pacing_control,
            frames,
            pending_frames: Vec::new(),
            scan_requested: false,
            worker_tx,
            worker_rx,
        }
    }

    /// Persist config changes (theme) to `path`
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Set up worker communication channels
    pub fn with_channels(
        mut self,
        worker_tx: UnboundedSender<WorkerMessage>,
        worker_rx: Receiver<AppMessage>,
    ) -> Self {
        self.worker_tx = worker_tx;
        self.worker_rx = worker_rx;
        self
    }

    /// Shared handle to the scanner, for the worker
    pub fn scanner(&self) -> Arc<Scanner> {
        Arc::clone(&self.scanner)
    }

    pub fn grid(&self) -> &Grid {
        self.scanner.grid()
    }

    /// Current pacing delay in milliseconds
    pub fn delay_ms(&self) -> u64 {
        self.pacing.get()
    }

    pub fn match_count(&self) -> usize {
        self.snapshot.session.match_count
    }

    /// A scan is running or about to start
    pub fn is_running(&self) -> bool {
        self.snapshot.session.running || self.scan_requested
    }

    /// Ask the worker to scan. Ignored while a scan is active or the grid is
    /// empty.
    pub fn start_scan(&mut self) {
        if self.is_running() {
            return;
        }
        if self.grid().is_empty() {
            self.status_message = Some("No grid loaded".to_string());
            return;
        }

        self.scan_requested = true;
        self.last_outcome = None;
        self.status_message = Some("Searching...".to_string());
        if self.worker_tx.send(WorkerMessage::StartScan).is_err() {
            self.scan_requested = false;
            self.status_message = Some("Scan worker is not running".to_string());
        }
    }

    /// Acknowledge every frame the scanner is waiting on. Called right after
    /// the terminal has been drawn.
    pub fn frame_drawn(&mut self) {
        for request in self.pending_frames.drain(..) {
            request.ack();
        }
    }

    /// Process messages from the worker thread and refresh the snapshot
    pub fn process_worker_messages(&mut self) {
        while let Ok(request) = self.frames.try_recv() {
            self.pending_frames.push(request);
        }

        while let Ok(msg) = self.worker_rx.try_recv() {
            match msg {
                AppMessage::ScanFinished(outcome) => self.finish_scan(outcome),
                AppMessage::Error(message) => {
                    self.scan_requested = false;
                    self.status_message = Some(message);
                }
            }
        }

        self.snapshot = self.scanner.snapshot();
        if self.snapshot.session.running {
            self.scan_requested = false;
        }
    }

    fn finish_scan(&mut self, outcome: ScanOutcome) {
        match outcome {
            // Overlapping request; the running scan reports its own result.
            ScanOutcome::Skipped(SkipReason::AlreadyRunning) => return,
            ScanOutcome::Skipped(SkipReason::EmptyGrid) => {
                self.status_message = Some("No grid loaded".to_string());
            }
            ScanOutcome::Completed { matches } => {
                self.status_message = Some(format!("Search complete: {} matches", matches));
            }
        }
        self.scan_requested = false;
        self.last_outcome = Some(outcome);
    }

    /// Handle a keyboard event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if event::is_quit(&key) {
            self.should_quit = true;
            return;
        }

        // Help overlay - any key closes it
        if self.state == AppState::Help {
            self.state = AppState::Board;
            return;
        }

        if event::is_help(&key) {
            self.state = AppState::Help;
            return;
        }

        if event::is_start(&key) {
            self.start_scan();
            return;
        }

        if let Some(step) = event::delay_step(&key) {
            if step > 0 {
                self.pacing.increase(step.unsigned_abs());
            } else {
                self.pacing.decrease(step.unsigned_abs());
            }
            return;
        }

        if event::is_up(&key) {
            self.move_cursor(-1, 0);
        } else if event::is_down(&key) {
            self.move_cursor(1, 0);
        } else if event::is_left(&key) {
            self.move_cursor(0, -1);
        } else if event::is_right(&key) {
            self.move_cursor(0, 1);
        } else if event::is_page_up(&key) {
            self.move_cursor(-10, 0);
        } else if event::is_page_down(&key) {
            self.move_cursor(10, 0);
        } else if event::is_key(&key, 'f') {
            self.follow = !self.follow;
        } else if event::is_key(&key, 't') {
            self.cycle_theme();
        } else if event::is_escape(&key) {
            self.status_message = None;
        }
    }

    /// Move the cursor, clamping to the grid. The column is clamped to the
    /// length of the row the cursor lands on.
    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let grid = self.scanner.grid();
        if grid.is_empty() {
            return;
        }

        let last_row = grid.row_count() - 1;
        let row = self.cursor.0.saturating_add_signed(d_row).min(last_row);
        let row_len = grid.row_len(row);
        let col = self
            .cursor
            .1
            .saturating_add_signed(d_col)
            .min(row_len.saturating_sub(1));

        self.cursor = (row, col);
    }

    fn cycle_theme(&mut self) {
        let next = self.config.theme.next();
        self.config.theme = next;
        theme::set_theme(next);

        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(e) = self.config.save_to(path) {
            tracing::warn!("failed to save theme: {}", e);
            self.status_message = Some(format!("Could not save config: {}", e));
        }
    }

    /// Inspector text for the cell under the cursor
    pub fn tooltip(&self) -> Option<String> {
        let (row, col) = self.cursor;
        let ch = self.grid().get(row, col)?;
        let cell = self.snapshot.cells.get(row, col)?;
        Some(format!(
            "{} at [{}, {}] - Visited {} times",
            ch, row, col, cell.visit_count
        ))
    }

    /// Cell the grid viewport is centred on
    pub fn focus(&self) -> (usize, usize) {
        match (self.follow, self.snapshot.session.current) {
            (true, Some(candidate)) => (candidate.row, candidate.col),
            _ => self.cursor,
        }
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        screens::render(frame, self);
    }
}
