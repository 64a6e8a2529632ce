//! Dashboard screen for a signed-up user.
//!
//! One instance per role. It only ever renders the user handed to it in the
//! render context; the dispatcher makes sure that user has this role.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::session::{Role, User};
use crate::styles::theme;
use crate::utils::create_standard_layout;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Display label for a stored field
fn field_label(key: &str) -> &str {
    match key {
        "organization" => "Organization",
        "budget" => "Budget",
        "skills" => "Skills",
        "availability" => "Availability",
        "event_name" => "Event",
        "joined_at" => "Joined",
        other => other,
    }
}

/// Role-specific next steps
fn next_steps(role: Role) -> &'static [&'static str] {
    match role {
        Role::Sponsor => &[
            "Browse upcoming events looking for sponsors",
            "Set the budget you want to commit this season",
            "Add your logo for event pages",
        ],
        Role::Volunteer => &[
            "See events that match your skills",
            "Keep your availability up to date",
            "Check in with organizers before the day",
        ],
        Role::Organizer => &[
            "Publish your event details",
            "Invite volunteers for each shift",
            "Reach out to sponsors that fit your audience",
        ],
    }
}

fn profile_lines(user: &User) -> Vec<Line<'static>> {
    let t = theme();
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<14}", label), t.muted_style()),
            Span::styled(value, t.text_style()),
        ])
    };

    let mut lines = vec![
        row("Name", user.name().to_string()),
        row("Email", user.email().to_string()),
        row("Role", user.role().title().to_string()),
        row("Member id", user.id().to_string()),
    ];
    for (key, value) in user.extra() {
        let value = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_string))
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        };
        lines.push(row(field_label(key), value));
    }
    lines
}

pub struct DashboardScreen {
    role: Role,
}

impl DashboardScreen {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl Screen for DashboardScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        frame.render_widget(Block::default().style(t.background_style()), area);

        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 4, 2);
        let greeting = match ctx.user {
            Some(user) => format!(
                "Welcome, {}. You're signed up as a {}.",
                user.name(),
                self.role
            ),
            None => "No active session.".to_string(),
        };
        Header::render(
            frame,
            header_chunk,
            &format!("{} Dashboard", self.role.title()),
            &greeting,
            &ctx.status(),
        );

        let [profile_area, steps_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(content_chunk);

        let accent = t.role_color(self.role);
        let profile_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .title(" Profile ")
            .title_style(t.title_style())
            .padding(Padding::uniform(1));
        let profile = ctx.user.map(profile_lines).unwrap_or_default();
        frame.render_widget(
            Paragraph::new(profile)
                .wrap(Wrap { trim: false })
                .block(profile_block),
            profile_area,
        );

        let steps_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .title(" Next steps ")
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .padding(Padding::uniform(1));
        let steps: Vec<Line> = next_steps(self.role)
            .iter()
            .map(|step| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(accent)),
                    Span::styled(*step, t.text_style()),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(steps)
                .wrap(Wrap { trim: true })
                .block(steps_block),
            steps_area,
        );

        let km = ctx.keymap;
        let footer = [
            km.hint(&[Action::Logout], "Log out"),
            km.hint(&[Action::ToggleTheme], "Theme"),
            km.hint(&[Action::Help], "Help"),
            km.hint(&[Action::Quit], "Quit"),
        ]
        .join(" | ");
        Footer::render(frame, footer_chunk, &footer);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }
        Ok(match ctx.keymap.get_action(key.code, key.modifiers) {
            Some(Action::Logout) => ScreenAction::Logout,
            Some(Action::Quit) => ScreenAction::Quit,
            _ => ScreenAction::None,
        })
    }
}
