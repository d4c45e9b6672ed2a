//! lapwatch - Terminal Stopwatch
//!
//! A single-view stopwatch TUI: elapsed time, start/pause/reset,
//! lap splits, and a light/dark theme toggle.
//!
//! Usage: lapwatch

mod app;
mod config;
mod stopwatch;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

/// Refresh cadence while the stopwatch is running
const TICK_INTERVAL: Duration = Duration::from_millis(10);
/// Refresh cadence while stopped (flash expiry, redraws)
const IDLE_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("lapwatch {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Run the application
    let result = run_app();

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"lapwatch - Terminal Stopwatch

USAGE:
    lapwatch [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -v, --version    Print version information

KEYBINDINGS:
    s                Start (resumes from the paused value)
    p / Space        Pause
    r                Reset (clears elapsed time and laps)
    l                Record a lap (while running)
    t                Toggle light/dark theme
    j/k, g/G         Scroll the lap list
    q / Esc          Quit

CONFIG:
    ~/.config/lapwatch/config.toml
"#
    );
}

fn run_app() -> Result<()> {
    // Load configuration (theme preference, display options)
    let config = config::Config::load().context("Failed to load configuration")?;

    // Create application state
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Render UI; elapsed time is recomputed from the time origin on
        // every draw, so each iteration is one tick
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Expire flash messages even when no key is pressed
        app.update_flash_timer();

        // The tick cadence follows the running flag: fast while counting,
        // relaxed while stopped. Pausing stops the fast ticking with the
        // same state change that stops the clock.
        let timeout = if app.stopwatch.is_running() {
            TICK_INTERVAL
        } else {
            IDLE_INTERVAL
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }

    #[test]
    fn test_tick_is_faster_than_idle() {
        assert!(TICK_INTERVAL < IDLE_INTERVAL);
        assert_eq!(TICK_INTERVAL, Duration::from_millis(10));
    }
}
