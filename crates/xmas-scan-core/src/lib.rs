//! # xmas-scan-core
//!
//! Core library for the animated `XMAS` word-search scanner.
//!
//! This crate provides:
//! - Loading a character grid from text
//! - The eight reading directions and per-cell highlight state
//! - A live-adjustable pacing channel and a render-sync primitive
//! - [`PatternScanner`], which walks every candidate and animates each check
//! - A synchronous reference search for reports and verification
//!
//! ## Modules
//!
//! - [`cell`] - Per-cell visualization state
//! - [`config`] - Configuration loading and persistence
//! - [`direction`] - Compass directions
//! - [`error`] - Error types and Result alias
//! - [`grid`] - Grid parsing, loading and bounds checks
//! - [`pacing`] - Pacing delay channel
//! - [`render`] - Render synchronization
//! - [`scanner`] - The animated scanner
//!
//! ## Example
//!
//! ```no_run
//! use xmas_scan_core::{pacing, Grid, PatternScanner, YieldNow};
//!
//! # async fn run() {
//! let grid = Grid::parse("XMAS\nSAMX");
//! let (_control, pacing) = pacing::channel(0);
//! let scanner = PatternScanner::new(grid, pacing, YieldNow);
//! let outcome = scanner.scan_all().await;
//! println!("Found {} matches", outcome.count());
//! # }
//! ```

pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod pacing;
pub mod render;
pub mod scanner;

// Error types
pub use error::{Error, Result};

// Grid and state
pub use cell::{CellGrid, CellState};
pub use direction::Direction;
pub use grid::{load_grid, load_grid_or_empty, Grid};

// Configuration
pub use config::{Config, ThemeName};

// Pacing and rendering
pub use pacing::{Pacing, PacingControl};
pub use render::{FrameChannel, FrameRequest, RenderSync, YieldNow};

// Scanner
pub use scanner::{
    count_matches, find_matches, Candidate, PatternScanner, ScanOutcome, ScanSession,
    ScanSnapshot, SkipReason, TARGET, TARGET_LEN,
};
