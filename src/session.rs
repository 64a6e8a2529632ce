//! Session data: the signed-up user and the role they belong to.
//!
//! A `User` exists only for the lifetime of the running process. It is
//! created by a signup screen, held by the controller and dropped on logout.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The closed set of roles a visitor can sign up as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Sponsor,
    Volunteer,
    Organizer,
}

impl Role {
    /// All roles in display order
    pub fn all() -> [Role; 3] {
        [Role::Sponsor, Role::Volunteer, Role::Organizer]
    }

    /// Position in [`Role::all`]
    pub fn index(&self) -> usize {
        match self {
            Role::Sponsor => 0,
            Role::Volunteer => 1,
            Role::Organizer => 2,
        }
    }

    /// Lowercase identifier used in page tokens and serialized payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Sponsor => "sponsor",
            Role::Volunteer => "volunteer",
            Role::Organizer => "organizer",
        }
    }

    /// Human-readable name
    pub fn title(&self) -> &'static str {
        match self {
            Role::Sponsor => "Sponsor",
            Role::Volunteer => "Volunteer",
            Role::Organizer => "Organizer",
        }
    }

    /// One-line pitch shown on the landing page
    pub fn tagline(&self) -> &'static str {
        match self {
            Role::Sponsor => "Fund events and get your brand in front of the community",
            Role::Volunteer => "Lend your skills and time to events near you",
            Role::Organizer => "Plan events, recruit volunteers and find sponsors",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sponsor" => Ok(Role::Sponsor),
            "volunteer" => Ok(Role::Volunteer),
            "organizer" => Ok(Role::Organizer),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// A signed-up user.
///
/// The required fields are fixed; anything role-specific lives in `extra`.
/// The role is set at construction and has no setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: String,
    role: Role,
    name: String,
    email: String,
    /// Role-specific fields (organization, skills, budget, ...)
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl User {
    /// Create a user with the required fields and no extras
    pub fn new(
        id: impl Into<String>,
        role: Role,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            name: name.into(),
            email: email.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Attach a role-specific field
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    /// Look up a role-specific field as display text
    pub fn extra_text(&self, key: &str) -> Option<String> {
        self.extra.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Holds at most one user for the duration of the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held user
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Discard the held user, returning it
    pub fn sign_out(&mut self) -> Option<User> {
        self.user.take()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
