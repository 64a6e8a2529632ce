//! Page tokens: the single source of truth for what is on screen.

use crate::session::Role;
use std::fmt;

/// Which page is currently shown.
///
/// The textual form (`landing`, `sponsor-signup`, `organizer-dashboard`, ...)
/// is what gets logged and what [`PageToken::parse`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageToken {
    #[default]
    Landing,
    Signup(Role),
    Dashboard(Role),
}

impl PageToken {
    /// Parse a textual token. Anything unrecognized resolves to `Landing`.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if let Some(role) = token.strip_suffix("-signup") {
            if let Ok(role) = role.parse::<Role>() {
                return PageToken::Signup(role);
            }
        } else if let Some(role) = token.strip_suffix("-dashboard") {
            if let Ok(role) = role.parse::<Role>() {
                return PageToken::Dashboard(role);
            }
        }
        PageToken::Landing
    }

    /// Every token in the closed set
    pub fn all() -> Vec<PageToken> {
        let mut tokens = vec![PageToken::Landing];
        tokens.extend(Role::all().into_iter().map(PageToken::Signup));
        tokens.extend(Role::all().into_iter().map(PageToken::Dashboard));
        tokens
    }

    /// Role this page belongs to, if any
    pub fn role(&self) -> Option<Role> {
        match self {
            PageToken::Landing => None,
            PageToken::Signup(role) | PageToken::Dashboard(role) => Some(*role),
        }
    }

    pub fn is_signup(&self) -> bool {
        matches!(self, PageToken::Signup(_))
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(self, PageToken::Dashboard(_))
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Landing => f.write_str("landing"),
            PageToken::Signup(role) => write!(f, "{}-signup", role),
            PageToken::Dashboard(role) => write!(f, "{}-dashboard", role),
        }
    }
}
