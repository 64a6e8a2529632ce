//! Navigation events and the transition function.

use super::{AppState, PageToken};
use crate::session::{Role, User};

/// Everything that can move the application between pages.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// A role card was chosen on the landing page.
    RoleSelected(Role),
    /// A signup form produced a user.
    SignupCompleted(User),
    /// Leave a signup form without submitting.
    Back,
    /// End the session from a dashboard.
    Logout,
    /// Flip dark mode. Does not move between pages.
    ThemeToggled,
}

impl NavEvent {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            NavEvent::RoleSelected(_) => "role_selected",
            NavEvent::SignupCompleted(_) => "signup_completed",
            NavEvent::Back => "back",
            NavEvent::Logout => "logout",
            NavEvent::ThemeToggled => "theme_toggled",
        }
    }
}

/// Apply an event to a state.
///
/// Events that have no edge from the current page leave the state untouched.
/// The dashboard reached after signup follows the role carried by the user,
/// not the form that produced it.
pub fn transition(state: &AppState, event: NavEvent) -> AppState {
    let mut next = state.clone();
    match (state.page, event) {
        (PageToken::Landing, NavEvent::RoleSelected(role)) => {
            next.selected_role = Some(role);
            next.page = PageToken::Signup(role);
        }
        (PageToken::Signup(_), NavEvent::Back) => {
            next.page = PageToken::Landing;
        }
        (PageToken::Signup(_), NavEvent::SignupCompleted(user)) => {
            next.page = PageToken::Dashboard(user.role());
            next.session.sign_in(user);
        }
        (PageToken::Dashboard(_), NavEvent::Logout) => {
            next.session.sign_out();
            next.selected_role = None;
            next.page = PageToken::Landing;
        }
        _ => {}
    }
    next
}
