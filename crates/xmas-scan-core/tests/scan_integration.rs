//! Integration tests for the scan workflow.
//!
//! These tests exercise the path the application takes: load a grid file,
//! build a scanner with a live pacing control, drive it through a frame
//! channel the way a UI does, and read snapshots between frames.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use xmas_scan_core::{
    count_matches, load_grid_or_empty, pacing, CellState, Direction, FrameChannel, Grid,
    PatternScanner, ScanOutcome, SkipReason, YieldNow,
};

const SAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

/// Temporary directory holding grid files.
struct Fixture {
    _temp_dir: TempDir,
    dir: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        // Show scanner logs in failing test output
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            dir,
        }
    }

    fn write_grid(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, content).expect("Failed to write grid");
        path
    }
}

#[tokio::test(start_paused = true)]
async fn test_scan_loaded_sample_grid() {
    let fixture = Fixture::new();
    let path = fixture.write_grid("input.txt", SAMPLE);

    let grid = load_grid_or_empty(&path);
    assert_eq!(grid.row_count(), 10);
    assert!(grid.is_rectangular());

    let (_control, pacing) = pacing::channel(0);
    let scanner = PatternScanner::new(grid, pacing, YieldNow).with_celebration(Duration::ZERO);

    let outcome = scanner.scan_all().await;
    assert_eq!(outcome, ScanOutcome::Completed { matches: 18 });
    assert_eq!(outcome.count(), count_matches(scanner.grid()));
}

#[tokio::test(start_paused = true)]
async fn test_failed_load_makes_scan_a_noop() {
    let fixture = Fixture::new();
    let grid = load_grid_or_empty(&fixture.dir.join("missing.txt"));
    assert!(grid.is_empty());

    let (_control, pacing) = pacing::channel(50);
    let scanner = PatternScanner::new(grid, pacing, YieldNow);

    let outcome = scanner.scan_all().await;
    assert_eq!(outcome, ScanOutcome::Skipped(SkipReason::EmptyGrid));
    assert_eq!(outcome.count(), 0);

    let snapshot = scanner.snapshot();
    assert_eq!(snapshot.cells.row_count(), 0);
    assert_eq!(snapshot.session.match_count, 0);
}

#[tokio::test(start_paused = true)]
async fn test_ragged_grid_never_reads_past_short_rows() {
    let fixture = Fixture::new();
    let path = fixture.write_grid("ragged.txt", "XMASXMAS\nMM\nAAA\nSSSS\n");

    let grid = load_grid_or_empty(&path);
    assert!(!grid.is_rectangular());

    let (_control, pacing) = pacing::channel(0);
    let scanner = PatternScanner::new(grid, pacing, YieldNow).with_celebration(Duration::ZERO);

    let outcome = scanner.scan_all().await;
    // Two horizontal matches in row 0, column 0 downward, and the diagonal
    // from (0, 0) through the short rows.
    assert_eq!(outcome.count(), 4);
    assert_eq!(outcome.count(), count_matches(scanner.grid()));
    assert!(scanner.snapshot().cells.matches_shape(scanner.grid()));
}

#[tokio::test(start_paused = true)]
async fn test_frames_show_checking_then_match_then_clear() {
    let grid = Grid::from_rows(&["XMAS"]);
    let (sync, mut frames) = FrameChannel::new();
    let (_control, pacing) = pacing::channel(10);
    let scanner = Arc::new(
        PatternScanner::new(grid, pacing, sync).with_celebration(Duration::from_millis(600)),
    );

    let mut task = {
        let scanner = Arc::clone(&scanner);
        tokio::spawn(async move { scanner.scan_all().await })
    };

    let mut seen = Vec::new();
    let outcome = loop {
        tokio::select! {
            Some(request) = frames.recv() => {
                let snapshot = scanner.snapshot();
                let cell = *snapshot.cells.get(0, 1).expect("cell (0, 1)");
                seen.push((cell, snapshot.session.current.map(|c| c.direction)));
                request.ack();
            }
            result = &mut task => break result.expect("scan task panicked"),
        }
    };

    assert_eq!(outcome.count(), 1);

    let checking = CellState {
        is_checking: true,
        ..Default::default()
    };
    let celebrating = CellState {
        visit_count: 1,
        is_matched: true,
        is_animating_match: true,
        ..Default::default()
    };
    let settled = CellState {
        visit_count: 1,
        is_matched: true,
        ..Default::default()
    };

    // (0,0) right: checking, celebrating, settled. (0,3) left: checking,
    // then cleared back to settled.
    let cells: Vec<CellState> = seen.iter().map(|(cell, _)| *cell).collect();
    assert_eq!(
        cells,
        vec![
            checking,
            celebrating,
            settled,
            CellState {
                is_checking: true,
                ..settled
            },
            settled,
        ]
    );
    assert_eq!(seen[0].1, Some(Direction::Right));
    assert_eq!(seen[3].1, Some(Direction::Left));

    let session = scanner.session();
    assert!(!session.running);
    assert_eq!(session.current, None);
}
