//! xmas-scan - Animated XMAS word-search scanner
//!
//! Usage:
//!   xmas-scan                    Run TUI mode (default)
//!   xmas-scan --input <path>     Scan a specific grid file
//!   xmas-scan --delay <ms>       Start with a given pacing delay
//!   xmas-scan --cli <cmd>        Run CLI mode (headless)
//!   xmas-scan --help             Show help

use std::fs::File;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use xmas_scan_core::config::Config;
use xmas_scan_core::load_grid_or_empty;

mod app;
mod cli;
mod event;
mod screens;
pub mod theme;
mod tui;
mod widgets;
mod worker;

use app::App;
use worker::Worker;

/// How long the UI waits for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(16);
/// Shorter wait while a scan is waiting on frames
const SCAN_POLL_INTERVAL: Duration = Duration::from_millis(1);

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Check for --help
    if args.iter().any(|a| a == "--help" || a == "-h") && !args.iter().any(|a| a == "--cli") {
        print_help();
        return Ok(());
    }

    // Check for --cli flag
    if let Some(cli_pos) = args.iter().position(|a| a == "--cli") {
        let cli_args: Vec<String> = args.iter().skip(cli_pos + 1).cloned().collect();

        if cli_args.is_empty() || cli_args.iter().any(|a| a == "--help" || a == "-h") {
            cli::print_help();
            return Ok(());
        }

        match cli::parse_args(&cli_args) {
            Ok((command, options)) => {
                init_stderr_logging();
                return cli::run(command, options);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!();
                cli::print_help();
                std::process::exit(1);
            }
        }
    }

    let mut config = Config::load();
    if let Err(e) = apply_overrides(&mut config, &args[1..]) {
        eprintln!("Error: {}", e);
        eprintln!();
        print_help();
        std::process::exit(1);
    }

    // Default: TUI mode
    tui::install_panic_hook();
    init_logging();
    run(config)
}

fn print_help() {
    println!("xmas-scan v{}", env!("CARGO_PKG_VERSION"));
    println!("Watch a search for XMAS in every direction of a letter grid");
    println!();
    println!("USAGE:");
    println!("    xmas-scan [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --input, -i <path>  Grid file (default: input.txt)");
    println!("    --delay <ms>        Initial step delay, 0-200");
    println!("    --cli <cmd>         Run in CLI mode (headless, for scripting)");
    println!("    --help              Show this help message");
    println!();
    println!("By default, xmas-scan runs in TUI (terminal) mode.");
    println!();
    println!("For CLI mode help: xmas-scan --cli --help");
}

/// Apply `--input` and `--delay` to the loaded config for this run only
fn apply_overrides(config: &mut Config, args: &[String]) -> Result<(), String> {
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" | "-i" => {
                i += 1;
                let path = args.get(i).ok_or("--input requires a path")?;
                config.input_path = PathBuf::from(path);
            }
            "--delay" => {
                i += 1;
                let value = args.get(i).ok_or("--delay requires a value")?;
                let ms: u64 = value
                    .parse()
                    .map_err(|_| format!("Invalid delay: {}", value))?;
                config.delay_ms = xmas_scan_core::pacing::clamp_delay(ms);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }
    Ok(())
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_logging() {
    // For TUI apps, log to a file to avoid corrupting the terminal display
    if let Ok(log_file) = File::create("xmas-scan.log") {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(log_filter())
            .with_target(false)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();

        let _ = tracing::subscriber::set_global_default(subscriber);
    }
    // If file creation fails, logging is simply disabled (no subscriber set)
}

fn init_stderr_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run(config: Config) -> anyhow::Result<()> {
    // A missing or unreadable grid is logged and shown as an empty board
    let grid = load_grid_or_empty(&config.input_path);

    // Initialize terminal; restored when `session` drops
    let mut session = tui::TerminalSession::start()?;

    // Set up worker communication
    let (app_tx, app_rx) = mpsc::channel();
    let mut app = App::new(grid, config).with_config_path(Config::default_path());
    let worker = Worker::spawn(app_tx, app.scanner());
    app = app.with_channels(worker.sender(), app_rx);

    // Main event loop
    loop {
        // Render, then release the scanner waiting on this frame
        session.draw(&app)?;
        app.frame_drawn();

        // Handle input events
        let timeout = if app.is_running() {
            SCAN_POLL_INTERVAL
        } else {
            POLL_INTERVAL
        };
        if let Some(key) = event::poll(timeout)? {
            app.handle_key(key);
        }

        // Process worker messages
        app.process_worker_messages();

        // Check for quit
        if app.should_quit {
            break;
        }
    }

    // Drop pending frames before joining so a waiting scan is not stuck
    drop(app);
    worker.shutdown();

    Ok(())
}
