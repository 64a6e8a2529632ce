//! Navigation state management.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  AppState                     │
//! ├──────────────────────────────────────────────┤
//! │  page: PageToken        landing              │
//! │                         {role}-signup        │
//! │                         {role}-dashboard     │
//! │  selected_role: Option<Role>                 │
//! │  session: Session       (at most one User)   │
//! └──────────────────────────────────────────────┘
//!            │
//!            │ transition(&state, NavEvent) -> AppState
//!            ▼
//! ```
//!
//! `transition` is a pure function, so the whole page graph can be tested
//! without a terminal.

pub mod page;
pub mod transition;

pub use page::PageToken;
pub use transition::{transition, NavEvent};

use crate::session::{Role, Session, User};

/// Everything the navigation state machine owns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Currently shown page.
    pub page: PageToken,
    /// Role whose signup flow was entered last. Cleared on logout.
    pub selected_role: Option<Role>,
    /// The signed-up user, if any.
    pub session: Session,
}

impl AppState {
    /// Fresh state on the landing page
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }
}
