//! Screen trait and associated types.
//!
//! Screens own their local UI state (selection, form contents) and nothing
//! else. They read the session and theme through [`RenderContext`] and report
//! what the user asked for as a [`ScreenAction`]; the app turns those into
//! navigation events for the controller.

use crate::keymap::Keymap;
use crate::session::{Role, User};
use crate::styles::ThemeType;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Inputs a screen is rendered with (the view props).
pub struct RenderContext<'a> {
    /// The signed-in user, if any.
    pub user: Option<&'a User>,
    /// Whether the dark theme is active.
    pub is_dark: bool,
    /// Active keybindings (for footer hints).
    pub keymap: &'a Keymap,
}

impl<'a> RenderContext<'a> {
    pub fn new(user: Option<&'a User>, is_dark: bool, keymap: &'a Keymap) -> Self {
        Self {
            user,
            is_dark,
            keymap,
        }
    }

    /// Right-hand header status: who is signed in and which theme is on
    pub fn status(&self) -> String {
        let theme = ThemeType::from_dark_flag(self.is_dark).name();
        match self.user {
            Some(user) => format!("{} ({}) · {}", user.name(), user.role(), theme),
            None => format!("not signed in · {}", theme),
        }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    pub keymap: &'a Keymap,
    /// Role chosen on the landing page, if any.
    pub selected_role: Option<Role>,
}

impl<'a> ScreenContext<'a> {
    pub fn new(keymap: &'a Keymap, selected_role: Option<Role>) -> Self {
        Self {
            keymap,
            selected_role,
        }
    }
}

/// What a screen asks for after handling an event.
///
/// The navigation variants map one-to-one onto `NavEvent`s; the rest are
/// handled by the app itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenAction {
    /// Nothing to do.
    #[default]
    None,
    /// A role card was chosen on the landing page.
    SelectRole(Role),
    /// A signup form was submitted with a well-formed user.
    CompleteSignup(User),
    /// Leave a signup form without submitting.
    Back,
    /// End the session from a dashboard.
    Logout,
    ToggleTheme,
    /// Show an error toast (e.g., the form did not validate).
    ShowError(String),
    ShowHelp,
    Quit,
}

/// Trait for screen controllers.
pub trait Screen {
    /// Render the screen into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and report what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// When true, unmodified character keys go to the screen instead of
    /// global bindings so users can type freely.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the screen is navigated to.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
