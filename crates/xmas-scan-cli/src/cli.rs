//! CLI/headless mode for scripting and testing
//!
//! Usage:
//!   xmas-scan --cli scan  [--input PATH] [--json]   Run the scanner without a UI
//!   xmas-scan --cli count [--input PATH] [--json]   Count matches directly
//!
//! Options:
//!   --input <path>     Grid file (defaults to the configured input)
//!   --json             Output in JSON format

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use xmas_scan_core::config::Config;
use xmas_scan_core::{
    find_matches, load_grid, Candidate, Direction, Grid, Pacing, PatternScanner, YieldNow,
};

/// CLI command to execute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Full scanner run with zero pacing
    Scan,
    /// Direct search, no scanner state
    Count,
}

/// CLI options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub json: bool,
    pub input: Option<PathBuf>,
}

/// Parse CLI arguments and return command + options
pub fn parse_args(args: &[String]) -> Result<(CliCommand, CliOptions), String> {
    let mut options = CliOptions::default();
    let mut command: Option<CliCommand> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--json" => options.json = true,
            "--input" | "-i" => {
                i += 1;
                if i >= args.len() {
                    return Err("--input requires a path".to_string());
                }
                options.input = Some(PathBuf::from(&args[i]));
            }
            "scan" => command = Some(CliCommand::Scan),
            "count" => command = Some(CliCommand::Count),
            _ => {
                if !arg.starts_with('-') && command.is_none() {
                    return Err(format!("Unknown command: {}", arg));
                }
                if arg.starts_with('-') {
                    return Err(format!("Unknown option: {}", arg));
                }
            }
        }
        i += 1;
    }

    match command {
        Some(command) => Ok((command, options)),
        None => Err("No command specified. Use: scan or count".to_string()),
    }
}

/// One match in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub cells: Vec<(usize, usize)>,
}

impl MatchReport {
    fn from_candidate(candidate: &Candidate, grid: &Grid) -> Self {
        Self {
            row: candidate.row,
            col: candidate.col,
            direction: candidate.direction,
            cells: candidate
                .cells_in(grid)
                .map(|cells| cells.to_vec())
                .unwrap_or_default(),
        }
    }
}

/// Result of a headless run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub input: PathBuf,
    pub rows: usize,
    pub cols: usize,
    pub count: usize,
    pub matches: Vec<MatchReport>,
}

impl ScanReport {
    fn new(input: PathBuf, grid: &Grid, matches: &[Candidate]) -> Self {
        Self {
            input,
            rows: grid.row_count(),
            cols: grid.max_row_len(),
            count: matches.len(),
            matches: matches
                .iter()
                .map(|m| MatchReport::from_candidate(m, grid))
                .collect(),
        }
    }
}

/// Run CLI command
pub fn run(command: CliCommand, options: CliOptions) -> anyhow::Result<()> {
    let input = options
        .input
        .clone()
        .unwrap_or_else(|| Config::load().input_path);
    let grid = load_grid(&input)?;

    let report = match command {
        CliCommand::Scan => run_scan(input, grid)?,
        CliCommand::Count => ScanReport::new(input, &grid, &find_matches(&grid)),
    };

    print_report(&report, options.json)
}

/// Drive the animated scanner to completion with no pacing
fn run_scan(input: PathBuf, grid: Grid) -> anyhow::Result<ScanReport> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let scanner =
        PatternScanner::new(grid, Pacing::fixed(0), YieldNow).with_celebration(Duration::ZERO);
    let outcome = runtime.block_on(scanner.scan_all());
    tracing::debug!(?outcome, "headless scan finished");

    let session = scanner.session();
    Ok(ScanReport::new(input, scanner.grid(), &session.matches))
}

fn print_report(report: &ScanReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("xmas-scan results for {}:", report.input.display());
    println!();
    println!("Grid:    {} rows x {} columns", report.rows, report.cols);
    println!("Matches: {}", report.count);
    for m in &report.matches {
        println!(
            "  [{}, {}] {} {}",
            m.row,
            m.col,
            m.direction.arrow(),
            m.direction
        );
    }
    Ok(())
}

/// Print CLI help
pub fn print_help() {
    println!("xmas-scan CLI Mode");
    println!();
    println!("USAGE:");
    println!("    xmas-scan --cli <command> [options]");
    println!();
    println!("COMMANDS:");
    println!("    scan                        Run the scanner without animation");
    println!("    count                       Count matches directly");
    println!();
    println!("OPTIONS:");
    println!("    --input, -i <path>          Grid file (default: configured input)");
    println!("    --json                      Output in JSON format");
    println!();
    println!("EXAMPLES:");
    println!("    xmas-scan --cli scan");
    println!("    xmas-scan --cli count --input puzzle.txt --json");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_scan() {
        let (command, options) = parse_args(&args(&["scan"])).unwrap();
        assert_eq!(command, CliCommand::Scan);
        assert!(!options.json);
        assert_eq!(options.input, None);
    }

    #[test]
    fn test_parse_count_with_options() {
        let (command, options) =
            parse_args(&args(&["count", "--input", "grid.txt", "--json"])).unwrap();
        assert_eq!(command, CliCommand::Count);
        assert!(options.json);
        assert_eq!(options.input, Some(PathBuf::from("grid.txt")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["sync"])).is_err());
        assert!(parse_args(&args(&["scan", "--input"])).is_err());
        assert!(parse_args(&args(&["scan", "--fast"])).is_err());
    }

    #[test]
    fn test_headless_scan_matches_direct_count() {
        let grid = Grid::from_rows(&["XMAS", "SAMX"]);
        let report = run_scan(PathBuf::from("mem"), grid.clone()).unwrap();
        let direct = ScanReport::new(PathBuf::from("mem"), &grid, &find_matches(&grid));

        assert_eq!(report, direct);
        assert_eq!(report.count, 2);
        assert_eq!(report.matches[0].cells, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(report.matches[1].direction, Direction::Left);
    }

    #[test]
    fn test_report_json_shape() {
        let grid = Grid::from_rows(&["XMAS"]);
        let report = ScanReport::new(PathBuf::from("g.txt"), &grid, &find_matches(&grid));
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["matches"][0]["direction"], "right");
        assert_eq!(value["matches"][0]["cells"][3][1], 3);
    }
}
