//! Signup screen, one instance per role.
//!
//! Every role asks for a name and an email; the remaining fields depend on
//! the role and are stored in the user's `extra` map when filled in.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::session::{Role, User};
use crate::styles::theme;
use crate::utils::{center_column, create_standard_layout, validators, Form, FormField};
use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use serde_json::Value;
use tracing::debug;

const FIELD_HEIGHT: u16 = 3;
const FORM_WIDTH: u16 = 64;

/// Build the form for a role
fn build_form(role: Role) -> Form {
    let form = Form::new()
        .add_field(
            FormField::new("name", "Name")
                .with_placeholder("Ada Lovelace")
                .with_validator(validators::required),
        )
        .add_field(
            FormField::new("email", "Email")
                .with_placeholder("ada@example.com")
                .with_validator(validators::email),
        );

    let mut form = match role {
        Role::Sponsor => form
            .add_field(
                FormField::new("organization", "Organization").with_placeholder("Acme Corp"),
            )
            .add_field(FormField::new("budget", "Sponsorship budget").with_placeholder("5000")),
        Role::Volunteer => form
            .add_field(
                FormField::new("skills", "Skills").with_placeholder("first aid, photography"),
            )
            .add_field(
                FormField::new("availability", "Availability").with_placeholder("weekends"),
            ),
        Role::Organizer => form
            .add_field(
                FormField::new("organization", "Organization").with_placeholder("Tech Meetup"),
            )
            .add_field(FormField::new("event_name", "Event name").with_placeholder("Hack Night")),
    };
    form.init_focus();
    form
}

/// Turn a role field's text into the value stored on the user.
///
/// Budgets that are plain numbers are stored as numbers and skills as a
/// list; everything else stays a string.
fn extra_value(key: &str, text: &str) -> Value {
    match key {
        "budget" => text
            .parse::<u64>()
            .map_or_else(|_| Value::from(text), Value::from),
        "skills" => Value::from(
            text.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>(),
        ),
        _ => Value::from(text),
    }
}

/// Build the user a validated form describes.
///
/// The id is the signup time in milliseconds; the RFC 3339 time is kept as
/// `joined_at`.
pub fn build_user(role: Role, form: &Form, now: DateTime<Utc>) -> User {
    let mut user = User::new(
        now.timestamp_millis().to_string(),
        role,
        form.value("name"),
        form.value("email"),
    )
    .with_extra("joined_at", now.to_rfc3339());

    for field in form.fields.iter().skip(2) {
        let text = field.value_trimmed();
        if !text.is_empty() {
            user = user.with_extra(field.key, extra_value(field.key, text));
        }
    }
    user
}

pub struct SignupScreen {
    role: Role,
    form: Form,
}

impl SignupScreen {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            form: build_form(role),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Validate and, if the form is complete, produce the signup action
    pub fn submit(&mut self) -> ScreenAction {
        let errors = self.form.validate();
        if let Some(first) = errors.first() {
            debug!("{} signup rejected: {}", self.role, errors.join(", "));
            return ScreenAction::ShowError(first.clone());
        }
        ScreenAction::CompleteSignup(build_user(self.role, &self.form, Utc::now()))
    }

    fn handle_key(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        ctx: &ScreenContext,
    ) -> ScreenAction {
        // Plain characters always go to the focused field
        if let KeyCode::Char(_) = code {
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                self.form.handle_key(code);
                return ScreenAction::None;
            }
        }

        match ctx.keymap.get_action(code, modifiers) {
            Some(Action::Confirm) => {
                if self.form.is_last_field_focused() {
                    return self.submit();
                }
                self.form.next_field();
            }
            Some(Action::Save) => return self.submit(),
            Some(Action::Cancel) => return ScreenAction::Back,
            Some(Action::NextField | Action::MoveDown) => self.form.next_field(),
            Some(Action::PrevField | Action::MoveUp) => self.form.prev_field(),
            Some(Action::MoveLeft) => {
                self.form.handle_key(KeyCode::Left);
            }
            Some(Action::MoveRight) => {
                self.form.handle_key(KeyCode::Right);
            }
            Some(Action::Home) => {
                self.form.handle_key(KeyCode::Home);
            }
            Some(Action::End) => {
                self.form.handle_key(KeyCode::End);
            }
            Some(Action::Backspace) => {
                self.form.handle_key(KeyCode::Backspace);
            }
            Some(Action::DeleteChar) => {
                self.form.handle_key(KeyCode::Delete);
            }
            _ => {
                self.form.handle_key(code);
            }
        }
        ScreenAction::None
    }
}

impl Screen for SignupScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        frame.render_widget(Block::default().style(t.background_style()), area);

        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 4, 2);
        Header::render(
            frame,
            header_chunk,
            &format!("{} Signup", self.role.title()),
            self.role.tagline(),
            &ctx.status(),
        );

        let form_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(t.role_color(self.role)))
            .title(format!(" {} details ", self.role.title()))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let form_area = center_column(content_chunk, FORM_WIDTH);
        let inner = form_block.inner(form_area);
        frame.render_widget(form_block, form_area);

        let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); self.form.fields.len()];
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(constraints).split(inner);

        for (field, row) in self.form.fields.iter().zip(rows.iter()) {
            field.render(frame, *row);
        }
        if let Some(note_row) = rows.get(self.form.fields.len()) {
            frame.render_widget(
                Paragraph::new("* required").style(t.muted_style()),
                *note_row,
            );
        }

        let km = ctx.keymap;
        let footer = [
            km.hint(&[Action::NextField, Action::PrevField], "Field"),
            km.hint(&[Action::Confirm], "Next"),
            km.hint(&[Action::Save], "Sign up"),
            km.hint(&[Action::Cancel], "Back"),
            km.hint(&[Action::ToggleTheme], "Theme"),
        ]
        .join(" | ");
        Footer::render(frame, footer_chunk, &footer);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                return Ok(self.handle_key(key.code, key.modifiers, ctx));
            }
        }
        Ok(ScreenAction::None)
    }

    fn is_input_focused(&self) -> bool {
        true
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        // Each visit starts with an empty form
        self.form = build_form(self.role);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Keymap;
    use chrono::TimeZone;

    fn type_text(screen: &mut SignupScreen, ctx: &ScreenContext, text: &str) {
        for c in text.chars() {
            screen.handle_key(KeyCode::Char(c), KeyModifiers::NONE, ctx);
        }
    }

    fn fill(screen: &mut SignupScreen, key: &str, value: &str) {
        screen.form_mut().field_mut(key).unwrap().set_value(value);
    }

    #[test]
    fn test_fields_per_role() {
        let keys = |role| -> Vec<&'static str> {
            SignupScreen::new(role)
                .form()
                .fields
                .iter()
                .map(|f| f.key)
                .collect()
        };
        assert_eq!(keys(Role::Sponsor), ["name", "email", "organization", "budget"]);
        assert_eq!(keys(Role::Volunteer), ["name", "email", "skills", "availability"]);
        assert_eq!(keys(Role::Organizer), ["name", "email", "organization", "event_name"]);
    }

    #[test]
    fn test_typing_q_does_not_quit() {
        let keymap = Keymap::default();
        let ctx = ScreenContext::new(&keymap, Some(Role::Volunteer));
        let mut screen = SignupScreen::new(Role::Volunteer);
        type_text(&mut screen, &ctx, "qt?");
        assert_eq!(screen.form().value("name"), "qt?");
    }

    #[test]
    fn test_enter_advances_then_submits() {
        let keymap = Keymap::default();
        let ctx = ScreenContext::new(&keymap, Some(Role::Organizer));
        let mut screen = SignupScreen::new(Role::Organizer);

        type_text(&mut screen, &ctx, "Grace");
        screen.handle_key(KeyCode::Enter, KeyModifiers::NONE, &ctx);
        type_text(&mut screen, &ctx, "grace@example.com");
        screen.handle_key(KeyCode::Enter, KeyModifiers::NONE, &ctx);
        screen.handle_key(KeyCode::Enter, KeyModifiers::NONE, &ctx);
        assert!(screen.form().is_last_field_focused());

        match screen.handle_key(KeyCode::Enter, KeyModifiers::NONE, &ctx) {
            ScreenAction::CompleteSignup(user) => {
                assert_eq!(user.role(), Role::Organizer);
                assert_eq!(user.name(), "Grace");
                assert_eq!(user.email(), "grace@example.com");
                assert!(user.extra_text("joined_at").is_some());
                assert!(user.extra_text("organization").is_none());
            }
            other => panic!("expected signup, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_with_missing_fields_reports_error() {
        let keymap = Keymap::default();
        let ctx = ScreenContext::new(&keymap, Some(Role::Sponsor));
        let mut screen = SignupScreen::new(Role::Sponsor);
        fill(&mut screen, "email", "not-an-email");

        let action = screen.handle_key(KeyCode::Char('s'), KeyModifiers::CONTROL, &ctx);
        assert!(matches!(action, ScreenAction::ShowError(_)));
        assert_eq!(screen.form().focused_index, 0);
    }

    #[test]
    fn test_escape_goes_back() {
        let keymap = Keymap::default();
        let ctx = ScreenContext::new(&keymap, Some(Role::Sponsor));
        let mut screen = SignupScreen::new(Role::Sponsor);
        assert_eq!(
            screen.handle_key(KeyCode::Esc, KeyModifiers::NONE, &ctx),
            ScreenAction::Back
        );
    }

    #[test]
    fn test_on_enter_clears_form() {
        let keymap = Keymap::default();
        let ctx = ScreenContext::new(&keymap, Some(Role::Sponsor));
        let mut screen = SignupScreen::new(Role::Sponsor);
        fill(&mut screen, "name", "Ada");
        screen.on_enter(&ctx).unwrap();
        assert_eq!(screen.form().value("name"), "");
    }

    #[test]
    fn test_build_user_stores_role_fields() {
        let mut screen = SignupScreen::new(Role::Sponsor);
        fill(&mut screen, "name", " Ada ");
        fill(&mut screen, "email", "ada@example.com");
        fill(&mut screen, "organization", "Acme");
        fill(&mut screen, "budget", "5000");

        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let user = build_user(Role::Sponsor, screen.form(), now);
        assert_eq!(user.id(), now.timestamp_millis().to_string());
        assert_eq!(user.name(), "Ada");
        assert_eq!(user.extra().get("budget"), Some(&Value::from(5000u64)));
        assert_eq!(user.extra_text("organization").as_deref(), Some("Acme"));
        assert_eq!(
            user.extra_text("joined_at").as_deref(),
            Some("2024-05-01T12:00:00+00:00")
        );
    }

    #[test]
    fn test_skills_become_a_list() {
        assert_eq!(
            extra_value("skills", "first aid, , photography"),
            Value::from(vec!["first aid", "photography"])
        );
        assert_eq!(extra_value("budget", "lots"), Value::from("lots"));
    }
}
