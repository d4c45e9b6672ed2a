//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Header with app title
//! - Elapsed-time readout
//! - Control bar and theme toggle
//! - Lap list
//! - Status bar and flash messages
//!
//! Everything is drawn from the current `App` state; the renderer holds
//! no state of its own.

use crate::app::App;
use crate::stopwatch::format_elapsed;
use crate::ui::widgets;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = &app.theme;

    // Fill the whole frame with the theme background so the toggle
    // affects the entire view, not just the widgets
    frame.render_widget(Block::default().style(theme.block_style()), area);

    let layout = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Length(3), // Time readout
        Constraint::Length(2), // Controls
        Constraint::Min(3),    // Lap list
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_header(frame, app, layout[0]);
    render_readout(frame, app, layout[1]);
    render_controls(frame, app, layout[2]);
    render_laps(frame, app, layout[3]);
    render_status_bar(frame, app, layout[4]);

    // Flash message (feedback for laps and save errors)
    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, theme, area);
    }
}

/// Render header with app title
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let header_block = Block::default()
        .style(theme.block_style())
        .title(" lapwatch ")
        .title_style(theme.title())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());

    frame.render_widget(header_block, area);
}

/// Render the elapsed-time readout, MM:SS:CC
fn render_readout(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let running = app.stopwatch.is_running();

    let style = if running {
        theme.readout_running()
    } else {
        theme.readout_stopped()
    };

    let readout = Paragraph::new(Line::styled(
        format_elapsed(app.stopwatch.elapsed_ms()),
        style,
    ))
    .alignment(Alignment::Center);

    // Vertically center within the readout band
    let readout_area = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    frame.render_widget(readout, readout_area);
}

/// Render the control bar: Start, Pause, Reset, Lap, theme toggle
fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let running = app.stopwatch.is_running();

    let bar = Paragraph::new(widgets::control_bar_line(running, theme))
        .alignment(Alignment::Center);
    frame.render_widget(bar, area);
}

/// Render the lap list, newest kept visible via the cursor
fn render_laps(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let laps = app.stopwatch.laps();

    let block = Block::default()
        .style(theme.block_style())
        .title(format!(" Laps ({}) ", laps.len()))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());

    if laps.is_empty() {
        let hint = Paragraph::new(Line::styled(
            "No laps recorded. Press [L] while running.",
            theme.text_dim(),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = laps
        .iter()
        .enumerate()
        .map(|(i, &ms)| {
            // Display numbering is the 1-based position
            let line = Line::styled(
                format!("Lap {}: {}", i + 1, format_elapsed(ms)),
                theme.text(),
            );
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected());

    let mut state = ListState::default();
    state.select(Some(app.lap_cursor.min(laps.len() - 1)));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render status bar with keybinding hints and the run state
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let hints = if app.config.display.show_hints {
        "[S] Start  [P/Space] Pause  [R] Reset  [L] Lap  [T] Theme  [j/k] Laps  [q] Quit"
    } else {
        ""
    };

    let state = run_state_label(app);

    widgets::render_status_bar(frame, hints, state, theme, area);
}

/// Short run-state label for the status bar
fn run_state_label(app: &App) -> &'static str {
    if app.stopwatch.is_running() {
        "running"
    } else if app.stopwatch.elapsed_ms() > 0 {
        "paused"
    } else {
        "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Control;
    use crate::config::Config;
    use ratatui::{backend::TestBackend, Terminal};
    use std::thread::sleep;
    use std::time::Duration;

    fn draw(app: &App) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_initial_frame_shows_zero_readout() {
        let app = App::new(Config::default());
        let text = buffer_text(&draw(&app));

        assert!(text.contains("lapwatch"));
        assert!(text.contains("00:00:00"));
        assert!(text.contains("No laps recorded"));
        assert!(text.contains("ready"));
    }

    #[test]
    fn test_frame_lists_laps_with_one_based_numbers() {
        let mut app = App::new(Config::default());
        app.trigger(Control::Start);
        sleep(Duration::from_millis(20));
        app.trigger(Control::Lap);
        app.trigger(Control::Lap);

        let text = buffer_text(&draw(&app));
        assert!(text.contains("Laps (2)"));
        assert!(text.contains("Lap 1: "));
        assert!(text.contains("Lap 2: "));
        assert!(text.contains("running"));
    }

    #[test]
    fn test_frame_shows_toggle_target_label() {
        let mut app = App::new(Config::default());
        let text = buffer_text(&draw(&app));
        assert!(text.contains("Dark Mode"));

        app.toggle_dark_mode();
        let text = buffer_text(&draw(&app));
        assert!(text.contains("Light Mode"));
    }

    #[test]
    fn test_expired_flash_leaves_the_frame() {
        let mut app = App::new(Config::default());
        app.trigger(Control::Start);
        sleep(Duration::from_millis(20));
        app.trigger(Control::Lap);

        let text = buffer_text(&draw(&app));
        assert!(text.contains("Lap 1 recorded"));

        // Backdate the flash past its lifetime and run one loop tick;
        // the redraw must no longer show it even with no key pressed
        let (msg, is_error, _) = app.flash_message.take().unwrap();
        let expired = std::time::Instant::now()
            .checked_sub(Duration::from_secs(4))
            .unwrap();
        app.flash_message = Some((msg, is_error, expired));
        app.update_flash_timer();

        let text = buffer_text(&draw(&app));
        assert!(!text.contains("Lap 1 recorded"));
        assert!(app.flash_message.is_none());
    }

    #[test]
    fn test_run_state_label() {
        let mut app = App::new(Config::default());
        assert_eq!(run_state_label(&app), "ready");

        app.trigger(Control::Start);
        assert_eq!(run_state_label(&app), "running");

        sleep(Duration::from_millis(20));
        app.trigger(Control::Pause);
        assert_eq!(run_state_label(&app), "paused");
    }
}
