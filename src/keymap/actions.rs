//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move selection up in a list
    MoveUp,
    /// Move selection down in a list
    MoveDown,
    /// Move cursor left
    MoveLeft,
    /// Move cursor right
    MoveRight,
    /// Jump to start of line/input
    Home,
    /// Jump to end of line/input
    End,

    // ============ Selection & Confirmation ============
    /// Confirm selection / advance form (Enter)
    Confirm,
    /// Cancel / go back (Esc)
    Cancel,
    /// Submit the current form
    Save,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Show help overlay
    Help,
    /// Switch between dark and light mode
    ToggleTheme,

    // ============ Session ============
    /// Sign out from a dashboard
    Logout,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,

    // ============ Field navigation ============
    /// Move to next field
    NextField,
    /// Move to previous field
    PrevField,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::Home => "Home",
            Action::End => "End",
            Action::Confirm => "Confirm",
            Action::Cancel => "Cancel / Go back",
            Action::Save => "Submit form",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::ToggleTheme => "Toggle dark mode",
            Action::Logout => "Log out",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::NextField => "Next field",
            Action::PrevField => "Previous field",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End => "Navigation",

            Action::Confirm | Action::Cancel | Action::Save => "Selection",

            Action::Quit | Action::Help | Action::ToggleTheme => "Global",

            Action::Logout => "Session",

            Action::Backspace | Action::DeleteChar => "Text Editing",

            Action::NextField | Action::PrevField => "Field Navigation",
        }
    }

    /// Categories in help display order
    pub fn categories() -> [&'static str; 6] {
        [
            "Global",
            "Navigation",
            "Selection",
            "Session",
            "Field Navigation",
            "Text Editing",
        ]
    }
}
