//! View dispatch: page token + session -> the view to render.

use crate::session::{Role, User};
use crate::state::{AppState, PageToken};
use tracing::warn;

/// The concrete view for the current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    /// Role picker
    Landing,
    /// Signup form for a role
    Signup(Role),
    /// Dashboard for a signed-up user
    Dashboard { role: Role, user: &'a User },
}

impl View<'_> {
    /// The page token this view renders
    pub fn page(&self) -> PageToken {
        match self {
            View::Landing => PageToken::Landing,
            View::Signup(role) => PageToken::Signup(*role),
            View::Dashboard { role, .. } => PageToken::Dashboard(*role),
        }
    }
}

/// Pick the view for a state.
///
/// A dashboard is only shown when a user with the dashboard's role is held;
/// otherwise the landing view is used instead.
pub fn resolve(state: &AppState) -> View<'_> {
    match state.page {
        PageToken::Landing => View::Landing,
        PageToken::Signup(role) => View::Signup(role),
        PageToken::Dashboard(role) => match state.user() {
            Some(user) if user.role() == role => View::Dashboard { role, user },
            Some(user) => {
                warn!(
                    "Dashboard {} requested for a {} session, showing landing",
                    state.page,
                    user.role()
                );
                View::Landing
            }
            None => {
                warn!("Dashboard {} requested without a session, showing landing", state.page);
                View::Landing
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(page: PageToken, user: Option<User>) -> AppState {
        let mut state = AppState {
            page,
            ..AppState::default()
        };
        if let Some(user) = user {
            state.session.sign_in(user);
        }
        state
    }

    #[test]
    fn test_landing_and_signup() {
        assert_eq!(resolve(&AppState::default()), View::Landing);
        for role in Role::all() {
            let state = state_at(PageToken::Signup(role), None);
            assert_eq!(resolve(&state), View::Signup(role));
        }
    }

    #[test]
    fn test_dashboard_with_matching_user() {
        for role in Role::all() {
            let user = User::new("1", role, "A", "a@x.com");
            let state = state_at(PageToken::Dashboard(role), Some(user.clone()));
            assert_eq!(resolve(&state), View::Dashboard { role, user: &user });
            assert_eq!(resolve(&state).page(), PageToken::Dashboard(role));
        }
    }

    #[test]
    fn test_dashboard_without_user_reroutes_to_landing() {
        for role in Role::all() {
            let state = state_at(PageToken::Dashboard(role), None);
            assert_eq!(resolve(&state), View::Landing);
        }
    }

    #[test]
    fn test_dashboard_for_other_role_reroutes_to_landing() {
        let user = User::new("1", Role::Volunteer, "A", "a@x.com");
        let state = state_at(PageToken::Dashboard(Role::Sponsor), Some(user));
        assert_eq!(resolve(&state), View::Landing);
    }

    #[test]
    fn test_unknown_token_renders_landing() {
        let state = state_at(PageToken::parse("settings"), None);
        assert_eq!(resolve(&state), View::Landing);
    }
}
