//! Rolecall - a terminal signup desk for event sponsors, volunteers and
//! organizers.
//!
//! The core is the [`controller::Controller`]: it owns the navigation state
//! and the session, runs every [`state::NavEvent`] through the pure
//! [`state::transition`] function and persists the dark mode preference
//! through [`theme_store::ThemeStore`]. Screens are collaborators that
//! render what the [`dispatch`] layer picks and report user intent back.

// Core modules
pub mod controller;
pub mod dispatch;
pub mod platform;
pub mod session;
pub mod state;
pub mod storage;
pub mod theme_store;

// Terminal application
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use controller::Controller;
pub use session::{Role, Session, User};
pub use state::{transition, AppState, NavEvent, PageToken};
pub use theme_store::ThemeStore;

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
