//! Theme and style system for Rolecall
//!
//! The current theme is the root presentation classification: every widget
//! reads it through [`theme()`], so switching it restyles the whole UI on the
//! next frame.

use ratatui::style::{Color, Modifier, Style};
use std::sync::{PoisonError, RwLock};

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Light,
    primary: Color::Blue,
    secondary: Color::Magenta,
    success: Color::Green,
    warning: Color::Rgb(180, 120, 0),
    error: Color::Red,
    text: Color::Black,
    text_muted: Color::DarkGray,
    text_emphasis: Color::Blue,
    border: Color::DarkGray,
    border_focused: Color::Blue,
    highlight_bg: Color::Gray,
    background: Color::Reset,
});

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    Dark,
    #[default]
    Light,
}

impl ThemeType {
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            ThemeType::Dark
        } else {
            ThemeType::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemeType::Dark
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeType::Dark => "dark",
            ThemeType::Light => "light",
        }
    }
}

/// Where the dark/light classification is applied.
///
/// The theme store talks to this instead of the global directly so it can
/// run against a recording root in tests.
pub trait PresentationRoot {
    fn set_dark(&self, is_dark: bool);
}

/// Presentation root backed by the process-wide [`THEME`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalThemeRoot;

impl PresentationRoot for GlobalThemeRoot {
    fn set_dark(&self, is_dark: bool) {
        init_theme(ThemeType::from_dark_flag(is_dark));
    }
}

impl<R: PresentationRoot + ?Sized> PresentationRoot for std::rc::Rc<R> {
    fn set_dark(&self, is_dark: bool) {
        (**self).set_dark(is_dark);
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,

    // === Primary Colors ===
    /// Main accent color (borders, titles, key UI elements)
    pub primary: Color,
    /// Secondary accent (role badges)
    pub secondary: Color,

    // === Semantic Colors ===
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // === Text Colors ===
    pub text: Color,
    pub text_muted: Color,
    pub text_emphasis: Color,

    // === UI Colors ===
    pub border: Color,
    pub border_focused: Color,
    /// Selected menu card background
    pub highlight_bg: Color,
    /// Background color (use Reset for terminal default)
    pub background: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,

            primary: Color::Cyan,
            secondary: Color::Magenta,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,

            border: Color::DarkGray,
            border_focused: Color::Cyan,
            highlight_bg: Color::DarkGray,
            background: Color::Black,
        }
    }

    /// Light theme - for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,

            // Darker variants for light backgrounds
            primary: Color::Blue,
            secondary: Color::Magenta,

            success: Color::Green,
            warning: Color::Rgb(180, 120, 0), // Darker yellow/orange
            error: Color::Red,

            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,

            border: Color::DarkGray,
            border_focused: Color::Blue,
            highlight_bg: Color::Gray,
            background: Color::Reset,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme_type.is_dark()
    }

    /// Accent color for a role badge
    pub fn role_color(&self, role: crate::session::Role) -> Color {
        use crate::session::Role;
        match role {
            Role::Sponsor => self.warning,
            Role::Volunteer => self.success,
            Role::Organizer => self.secondary,
        }
    }

    // === Style Helpers ===

    /// Style for primary/title text
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for emphasized text (key hints, values)
    pub fn emphasis_style(&self) -> Style {
        Style::default().fg(self.text_emphasis)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn background_style(&self) -> Style {
        Style::default().bg(self.background)
    }
}
