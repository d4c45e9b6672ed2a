//! Theme definitions for lapwatch
//!
//! Provides the two built-in themes, light and dark. Each theme defines
//! colors for all UI elements; the active theme is a plain value held by
//! the application and read by the renderer.

use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// True for the dark palette
    pub is_dark: bool,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent color
    pub accent: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Theme {
    /// Create a theme from the dark-mode flag
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Light theme (default)
    pub fn light() -> Self {
        Self {
            is_dark: false,

            // Base
            bg: Color::Rgb(245, 245, 244),        // #f5f5f4
            fg: Color::Rgb(41, 37, 36),           // #292524
            fg_dim: Color::Rgb(168, 162, 158),    // #a8a29e

            // Accent (indigo)
            accent: Color::Rgb(79, 70, 229),      // #4f46e5

            // Status
            success: Color::Rgb(22, 163, 74),     // #16a34a
            error: Color::Rgb(220, 38, 38),       // #dc2626

            // UI elements
            border: Color::Rgb(214, 211, 209),    // #d6d3d1
            selection_bg: Color::Rgb(224, 231, 255), // #e0e7ff
            selection_fg: Color::Rgb(41, 37, 36), // #292524
        }
    }

    /// Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,

            // Base
            bg: Color::Rgb(28, 25, 23),           // #1c1917
            fg: Color::Rgb(231, 229, 228),        // #e7e5e4
            fg_dim: Color::Rgb(120, 113, 108),    // #78716c

            // Accent (indigo, lightened for dark bg)
            accent: Color::Rgb(129, 140, 248),    // #818cf8

            // Status
            success: Color::Rgb(74, 222, 128),    // #4ade80
            error: Color::Rgb(248, 113, 113),     // #f87171

            // UI elements
            border: Color::Rgb(68, 64, 60),       // #44403c
            selection_bg: Color::Rgb(68, 64, 60), // #44403c
            selection_fg: Color::Rgb(231, 229, 228), // #e7e5e4
        }
    }

    /// Label for the theme-toggle control, named after its target state
    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark {
            "☀ Light Mode"
        } else {
            "🌙 Dark Mode"
        }
    }

    // Style helpers for common UI patterns

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Background fill for blocks
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Elapsed-time readout while running
    pub fn readout_running(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Elapsed-time readout while stopped
    pub fn readout_stopped(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Enabled control style
    pub fn control_enabled(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Disabled control style
    pub fn control_disabled(&self) -> Style {
        Style::default()
            .fg(self.fg_dim)
            .bg(self.bg)
            .add_modifier(Modifier::DIM)
    }

    /// Selected lap entry style
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_dark_mode() {
        let light = Theme::from_dark_mode(false);
        assert!(!light.is_dark);
        assert_eq!(light.bg, Color::Rgb(245, 245, 244));

        let dark = Theme::from_dark_mode(true);
        assert!(dark.is_dark);
        assert_eq!(dark.bg, Color::Rgb(28, 25, 23));
    }

    #[test]
    fn test_toggle_label_names_target_state() {
        assert_eq!(Theme::light().toggle_label(), "🌙 Dark Mode");
        assert_eq!(Theme::dark().toggle_label(), "☀ Light Mode");
    }
}
