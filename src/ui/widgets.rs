//! Reusable UI widgets
//!
//! Contains common UI components used by the renderer:
//! - Control buttons with enabled/disabled styling
//! - Flash messages and the status bar

use crate::app::Control;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Build the spans for one control button, e.g. "[S] Start"
pub fn control_spans<'a>(control: Control, running: bool, theme: &Theme) -> Vec<Span<'a>> {
    let enabled = control.is_enabled(running);
    let label_style = if enabled {
        theme.control_enabled()
    } else {
        theme.control_disabled()
    };
    let key_style = if enabled {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        theme.control_disabled()
    };

    vec![
        Span::styled("[", theme.text_dim()),
        Span::styled(control.key().to_ascii_uppercase().to_string(), key_style),
        Span::styled("] ", theme.text_dim()),
        Span::styled(control.label(), label_style),
    ]
}

/// Build the full control bar line: the four controls plus the theme toggle
pub fn control_bar_line<'a>(running: bool, theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, control) in Control::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("    "));
        }
        spans.extend(control_spans(*control, running, theme));
    }

    // Theme toggle, labeled by its target state
    spans.push(Span::raw("    "));
    spans.push(Span::styled("[", theme.text_dim()));
    spans.push(Span::styled(
        "T",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("] ", theme.text_dim()));
    spans.push(Span::styled(
        theme.toggle_label().to_string(),
        theme.control_enabled(),
    ));

    Line::from(spans)
}

/// Render a flash message (bottom of screen)
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    theme: &Theme,
    area: Rect,
) {
    let style = if is_error { theme.error() } else { theme.success() };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message, style),
    ]));

    frame.render_widget(flash, flash_area);
}

/// Render status bar at bottom
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Clear the line first
    frame.render_widget(Clear, status_area);

    // Left side
    let left_widget = Paragraph::new(left_content).style(theme.text_dim());

    // Right side; width in characters, not bytes
    let right_len = right_content.chars().count() as u16;
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: right_len + 1,
        height: 1,
    };
    let right_widget = Paragraph::new(right_content).style(theme.text_dim());

    frame.render_widget(left_widget, status_area);
    frame.render_widget(right_widget, right_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_control_spans_content() {
        let theme = Theme::light();
        let spans = control_spans(Control::Start, false, &theme);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[S] Start");
    }

    #[test]
    fn test_control_bar_shows_toggle_target() {
        let light = Theme::light();
        let line = control_bar_line(false, &light);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("🌙 Dark Mode"));

        let dark = Theme::dark();
        let line = control_bar_line(false, &dark);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("☀ Light Mode"));
    }

    #[test]
    fn test_control_bar_lists_all_controls() {
        let theme = Theme::light();
        let line = control_bar_line(true, &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        for control in Control::all() {
            assert!(text.contains(control.label()));
        }
    }

    #[test]
    fn test_status_bar_right_content_fits_non_ascii() {
        let theme = Theme::light();
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                render_status_bar(frame, "", "pausé", &theme, frame.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut last_row = String::new();
        for x in 0..buffer.area.width {
            last_row.push_str(buffer.cell((x, buffer.area.height - 1)).unwrap().symbol());
        }
        assert!(last_row.contains("pausé"));
    }
}
