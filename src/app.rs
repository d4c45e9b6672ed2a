//! Application state and event handling
//!
//! This is the core of lapwatch, managing:
//! - The stopwatch clock engine and lap recorder
//! - Event handling (keyboard input)
//! - Control enablement and the theme toggle

use crate::config::Config;
use crate::stopwatch::Stopwatch;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// How long a flash message stays on screen
const FLASH_DURATION: Duration = Duration::from_secs(3);

/// The four stopwatch controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    Pause,
    Reset,
    Lap,
}

impl Control {
    pub fn all() -> &'static [Control] {
        &[Control::Start, Control::Pause, Control::Reset, Control::Lap]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Control::Start => "Start",
            Control::Pause => "Pause",
            Control::Reset => "Reset",
            Control::Lap => "Lap",
        }
    }

    /// Key that triggers this control
    pub fn key(&self) -> char {
        match self {
            Control::Start => 's',
            Control::Pause => 'p',
            Control::Reset => 'r',
            Control::Lap => 'l',
        }
    }

    /// Whether this control is enabled for the given running state.
    ///
    /// Start is enabled while stopped, Pause and Lap while running,
    /// Reset always. Lap stays disabled while paused.
    pub fn is_enabled(&self, running: bool) -> bool {
        match self {
            Control::Start => !running,
            Control::Pause => running,
            Control::Reset => true,
            Control::Lap => running,
        }
    }
}

/// Main application state
pub struct App {
    // Core state
    pub should_quit: bool,
    pub config: Config,
    pub theme: Theme,
    pub stopwatch: Stopwatch,

    // Lap list view state
    pub lap_cursor: usize,

    // Flash message (temporary feedback)
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_dark_mode(config.dark_mode);

        Self {
            should_quit: false,
            config,
            theme,
            stopwatch: Stopwatch::new(),
            lap_cursor: 0,
            flash_message: None,
        }
    }

    /// Clear the flash message once it has expired.
    ///
    /// Driven by the main loop on every tick, so a flash disappears on
    /// time even when no key is pressed.
    pub fn update_flash_timer(&mut self) {
        if let Some((_, _, instant)) = &self.flash_message {
            if instant.elapsed() >= FLASH_DURATION {
                self.flash_message = None;
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('s') => self.trigger(Control::Start),
            KeyCode::Char('p') | KeyCode::Char(' ') => self.trigger(Control::Pause),
            KeyCode::Char('r') => self.trigger(Control::Reset),
            KeyCode::Char('l') => self.trigger(Control::Lap),
            KeyCode::Char('t') => self.toggle_theme_and_save(),
            KeyCode::Char('j') | KeyCode::Down => {
                let last = self.stopwatch.laps().len().saturating_sub(1);
                if self.lap_cursor < last {
                    self.lap_cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.lap_cursor = self.lap_cursor.saturating_sub(1);
            }
            KeyCode::Char('g') => {
                self.lap_cursor = 0;
            }
            KeyCode::Char('G') => {
                self.lap_cursor = self.stopwatch.laps().len().saturating_sub(1);
            }
            _ => {}
        }

        Ok(())
    }

    /// Trigger a control; disabled controls are no-ops
    pub fn trigger(&mut self, control: Control) {
        if !control.is_enabled(self.stopwatch.is_running()) {
            return;
        }

        match control {
            Control::Start => self.stopwatch.start(),
            Control::Pause => self.stopwatch.pause(),
            Control::Reset => {
                self.stopwatch.reset();
                self.lap_cursor = 0;
                self.flash_message = None;
            }
            Control::Lap => {
                if let Some(n) = self.stopwatch.add_lap() {
                    // Keep the newest lap visible
                    self.lap_cursor = n - 1;
                    self.show_flash(&format!("Lap {} recorded", n), false);
                }
            }
        }
    }

    /// Invert the theme. Involutive: two toggles restore the original.
    pub fn toggle_dark_mode(&mut self) {
        self.config.dark_mode = !self.config.dark_mode;
        self.theme = Theme::from_dark_mode(self.config.dark_mode);
    }

    /// Toggle the theme and persist the preference
    fn toggle_theme_and_save(&mut self) {
        self.toggle_dark_mode();
        if let Err(e) = self.config.save() {
            self.show_flash(&format!("Could not save theme preference: {}", e), true);
        }
    }

    /// Show a flash message
    fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.into(), is_error, Instant::now()));
    }
}
