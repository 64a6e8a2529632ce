//! Landing screen: the role picker.
//!
//! Shows one card per role. Choosing a card reports
//! [`ScreenAction::SelectRole`]; the controller moves to that role's signup.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::session::Role;
use crate::styles::theme;
use crate::utils::create_standard_layout;
use crate::widgets::{Menu, MenuItem, MenuState};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Badge drawn on a role's card
fn badge(role: Role) -> &'static str {
    match role {
        Role::Sponsor => "$",
        Role::Volunteer => "+",
        Role::Organizer => "#",
    }
}

/// What signing up as `role` asks for
fn explanation(role: Role) -> Text<'static> {
    let t = theme();
    let asks = match role {
        Role::Sponsor => "your organization and a sponsorship budget",
        Role::Volunteer => "your skills and when you are available",
        Role::Organizer => "your organization and the event you are running",
    };
    Text::from(vec![
        Line::styled(
            format!("Join as a {}", role.title()),
            Style::default()
                .fg(t.role_color(role))
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(role.tagline(), t.text_style()),
        Line::from(""),
        Line::from(vec![
            Span::styled("The signup form asks for your name, email, ", t.text_style()),
            Span::styled(asks, t.emphasis_style()),
            Span::styled(".", t.text_style()),
        ]),
    ])
}

pub struct LandingScreen {
    menu_state: MenuState,
    /// Card areas from the last render, for mouse clicks
    clickable_areas: Vec<(Rect, Role)>,
}

impl Default for LandingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LandingScreen {
    pub fn new() -> Self {
        let mut menu_state = MenuState::new();
        menu_state.select(Some(0));
        Self {
            menu_state,
            clickable_areas: Vec::new(),
        }
    }

    /// The role under the cursor
    pub fn selected_role(&self) -> Role {
        let roles = Role::all();
        roles[self.menu_state.selected().unwrap_or(0) % roles.len()]
    }

    pub fn select_role(&mut self, role: Role) {
        self.menu_state.select(Some(role.index()));
    }

    fn handle_mouse(&mut self, event: &Event) -> Option<Role> {
        let Event::Mouse(mouse) = event else {
            return None;
        };
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let clicked = self
                    .clickable_areas
                    .iter()
                    .find(|(rect, _)| rect.contains(Position::new(mouse.column, mouse.row)))
                    .map(|(_, role)| *role)?;
                self.select_role(clicked);
                Some(clicked)
            }
            MouseEventKind::ScrollUp => {
                self.menu_state.select_previous(Role::all().len());
                None
            }
            MouseEventKind::ScrollDown => {
                self.menu_state.select_next(Role::all().len());
                None
            }
            _ => None,
        }
    }
}

impl Screen for LandingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        frame.render_widget(Block::default().style(t.background_style()), area);

        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 4, 2);
        Header::render(
            frame,
            header_chunk,
            "Rolecall",
            "Pick how you want to take part. You can come back and choose again before you sign up.",
            &ctx.status(),
        );

        let [menu_area, explanation_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(content_chunk);

        let menu_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(" Choose a role ")
            .title_style(t.title_style())
            .title_alignment(Alignment::Center);
        let menu_inner = menu_block.inner(menu_area);
        frame.render_widget(menu_block, menu_area);

        let items = Role::all()
            .into_iter()
            .map(|role| {
                MenuItem::new(badge(role), role.title(), t.role_color(role)).detail(format!(
                    "  {}",
                    role.tagline()
                ))
            })
            .collect();
        let menu = Menu::new(items);
        self.clickable_areas = menu
            .clickable_areas(menu_inner)
            .into_iter()
            .map(|(rect, i)| (rect, Role::all()[i]))
            .collect();
        frame.render_stateful_widget(menu, menu_inner, &mut self.menu_state);

        let role = self.selected_role();
        let explanation_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(t.role_color(role)))
            .title(" What you'll need ")
            .title_alignment(Alignment::Center)
            .padding(Padding::uniform(1));
        frame.render_widget(
            Paragraph::new(explanation(role))
                .wrap(Wrap { trim: true })
                .block(explanation_block),
            explanation_area,
        );

        let km = ctx.keymap;
        let footer = [
            km.hint(&[Action::MoveUp, Action::MoveDown], "Navigate"),
            km.hint(&[Action::Confirm], "Select"),
            km.hint(&[Action::ToggleTheme], "Theme"),
            km.hint(&[Action::Help], "Help"),
            km.hint(&[Action::Quit], "Quit"),
        ]
        .join(" | ");
        Footer::render(frame, footer_chunk, &footer);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Key(key) = &event {
            if key.kind != KeyEventKind::Press {
                return Ok(ScreenAction::None);
            }
            // Number keys pick a card directly
            if let KeyCode::Char(c @ '1'..='3') = key.code {
                let role = Role::all()[c as usize - '1' as usize];
                self.select_role(role);
                return Ok(ScreenAction::SelectRole(role));
            }
            let count = Role::all().len();
            return Ok(match ctx.keymap.get_action(key.code, key.modifiers) {
                Some(Action::MoveUp | Action::MoveLeft) => {
                    self.menu_state.select_previous(count);
                    ScreenAction::None
                }
                Some(Action::MoveDown | Action::MoveRight) => {
                    self.menu_state.select_next(count);
                    ScreenAction::None
                }
                Some(Action::Home) => {
                    self.menu_state.select(Some(0));
                    ScreenAction::None
                }
                Some(Action::End) => {
                    self.menu_state.select(Some(count - 1));
                    ScreenAction::None
                }
                Some(Action::Confirm) => ScreenAction::SelectRole(self.selected_role()),
                Some(Action::Quit | Action::Cancel) => ScreenAction::Quit,
                _ => ScreenAction::None,
            });
        }

        Ok(self
            .handle_mouse(&event)
            .map_or(ScreenAction::None, ScreenAction::SelectRole))
    }

    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        // Coming back from a signup form keeps that role under the cursor
        if let Some(role) = ctx.selected_role {
            self.select_role(role);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Keymap;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_default_selection_is_first_role() {
        assert_eq!(LandingScreen::new().selected_role(), Role::Sponsor);
    }

    #[test]
    fn test_navigate_and_confirm() {
        let keymap = Keymap::default();
        let ctx = ScreenContext::new(&keymap, None);
        let mut screen = LandingScreen::new();

        screen.handle_event(key(KeyCode::Down), &ctx).unwrap();
        screen.handle_event(key(KeyCode::Down), &ctx).unwrap();
        let action = screen.handle_event(key(KeyCode::Enter), &ctx).unwrap();
        assert_eq!(action, ScreenAction::SelectRole(Role::Organizer));

        // Wraps back to the top
        screen.handle_event(key(KeyCode::Down), &ctx).unwrap();
        assert_eq!(screen.selected_role(), Role::Sponsor);
    }

    #[test]
    fn test_number_keys_select_directly() {
        let keymap = Keymap::default();
        let ctx = ScreenContext::new(&keymap, None);
        let mut screen = LandingScreen::new();
        let action = screen.handle_event(key(KeyCode::Char('2')), &ctx).unwrap();
        assert_eq!(action, ScreenAction::SelectRole(Role::Volunteer));
    }

    #[test]
    fn test_quit_and_enter_restores_selection() {
        let keymap = Keymap::default();
        let mut screen = LandingScreen::new();
        let ctx = ScreenContext::new(&keymap, Some(Role::Organizer));
        screen.on_enter(&ctx).unwrap();
        assert_eq!(screen.selected_role(), Role::Organizer);

        let action = screen.handle_event(key(KeyCode::Char('q')), &ctx).unwrap();
        assert_eq!(action, ScreenAction::Quit);
    }
}
