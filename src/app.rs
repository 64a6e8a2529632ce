//! The interactive application: event loop, screen routing and overlays.
//!
//! `App` owns the [`Controller`] and one screen per view. Input goes to the
//! screen for the current view; the [`ScreenAction`] it returns becomes a
//! [`NavEvent`] for the controller. Global keys (theme toggle, help, quit)
//! are handled here before the screen sees them.

use crate::components::HelpOverlay;
use crate::config::Config;
use crate::controller::{Controller, Outcome};
use crate::keymap::Action;
use crate::screens::{
    DashboardScreen, LandingScreen, RenderContext, Screen, ScreenAction, ScreenContext,
    SignupScreen,
};
use crate::session::Role;
use crate::state::{NavEvent, PageToken};
use crate::styles::{GlobalThemeRoot, ThemeType};
use crate::theme_store::ThemeStore;
use crate::tui::Tui;
use crate::widgets::ToastManager;
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// One screen instance per view
struct Screens {
    landing: LandingScreen,
    signups: [SignupScreen; 3],
    dashboards: [DashboardScreen; 3],
}

impl Screens {
    fn new() -> Self {
        Self {
            landing: LandingScreen::new(),
            signups: Role::all().map(SignupScreen::new),
            dashboards: Role::all().map(DashboardScreen::new),
        }
    }

    fn get_mut(&mut self, page: PageToken) -> &mut dyn Screen {
        match page {
            PageToken::Landing => &mut self.landing,
            PageToken::Signup(role) => &mut self.signups[role.index()],
            PageToken::Dashboard(role) => &mut self.dashboards[role.index()],
        }
    }
}

pub struct App {
    config: Config,
    config_path: PathBuf,
    controller: Controller,
    screens: Screens,
    toasts: ToastManager,
    show_help: bool,
    should_quit: bool,
}

impl App {
    /// Load the configuration, open the theme store and start on landing
    pub fn load() -> Result<Self> {
        let config_path = crate::utils::get_config_path();
        let config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        let storage_path = config.storage_path();
        info!("Using preferences at {:?}", storage_path);

        let theme = ThemeStore::open(&storage_path, Box::new(GlobalThemeRoot));
        Ok(Self::new(config, config_path, Controller::new(theme)))
    }

    pub fn new(config: Config, config_path: PathBuf, controller: Controller) -> Self {
        let toasts = ToastManager::new(config.toast_duration());
        Self {
            config,
            config_path,
            controller,
            screens: Screens::new(),
            toasts,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the event loop until the user quits
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        info!("Starting on {}", self.controller.page());
        self.enter_current_screen()?;

        while !self.should_quit {
            self.toasts.tick();

            let mut rendered = Ok(());
            tui.terminal_mut()
                .draw(|frame| rendered = self.render(frame))
                .context("Failed to draw frame")?;
            rendered?;

            if let Some(event) = tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event)?;
            }
        }

        info!("Quitting from {}", self.controller.page());
        tui.exit()
    }

    /// Page of the view actually shown (dashboards without a session fall
    /// back to landing)
    fn current_page(&self) -> PageToken {
        self.controller.view().page()
    }

    /// Draw the current screen plus overlays
    pub fn render(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let page = self.current_page();
        let ctx = RenderContext::new(
            self.controller.user(),
            self.controller.is_dark(),
            &self.config.keymap,
        );
        self.screens.get_mut(page).render(frame, area, &ctx)?;

        if self.show_help {
            HelpOverlay::render(
                frame,
                area,
                &self.config.keymap,
                &self.config_path.display().to_string(),
            );
        }
        self.toasts.render(frame, area);
        Ok(())
    }

    /// Process one input event to completion
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        let page = self.current_page();

        if let Event::Key(key) = &event {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            if self.show_help {
                self.show_help = false;
                return Ok(());
            }

            // Plain characters belong to a focused text field
            let typing = self.screens.get_mut(page).is_input_focused()
                && matches!(key.code, crossterm::event::KeyCode::Char(_))
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
            if !typing {
                match self.config.keymap.get_action(key.code, key.modifiers) {
                    Some(Action::ToggleTheme) => return self.apply(ScreenAction::ToggleTheme),
                    Some(Action::Help) => return self.apply(ScreenAction::ShowHelp),
                    Some(Action::Quit) => return self.apply(ScreenAction::Quit),
                    _ => {}
                }
            }
        } else if self.show_help {
            return Ok(());
        }

        let ctx = ScreenContext::new(&self.config.keymap, self.controller.selected_role());
        let action = self.screens.get_mut(page).handle_event(event, &ctx)?;
        self.apply(action)
    }

    /// Carry out what a screen asked for
    pub fn apply(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::SelectRole(role) => {
                self.navigate(NavEvent::RoleSelected(role))?;
            }
            ScreenAction::CompleteSignup(user) => {
                let name = user.name().to_string();
                if self.navigate(NavEvent::SignupCompleted(user))?.page_changed() {
                    self.toasts.success(format!("Welcome aboard, {}!", name));
                }
            }
            ScreenAction::Back => {
                self.navigate(NavEvent::Back)?;
            }
            ScreenAction::Logout => {
                if self.navigate(NavEvent::Logout)?.page_changed() {
                    self.toasts.info("You have been logged out");
                }
            }
            ScreenAction::ToggleTheme => {
                self.controller.handle(NavEvent::ThemeToggled);
                let theme = ThemeType::from_dark_flag(self.controller.is_dark());
                self.toasts.info(format!("Switched to {} theme", theme.name()));
            }
            ScreenAction::ShowError(message) => self.toasts.error(message),
            ScreenAction::ShowHelp => self.show_help = true,
            ScreenAction::Quit => self.should_quit = true,
        }
        Ok(())
    }

    fn navigate(&mut self, event: NavEvent) -> Result<Outcome> {
        let outcome = self.controller.handle(event);
        if outcome.page_changed() {
            self.enter_current_screen()?;
        }
        Ok(outcome)
    }

    fn enter_current_screen(&mut self) -> Result<()> {
        let page = self.current_page();
        debug!("Entering {} screen", page);
        let ctx = ScreenContext::new(&self.config.keymap, self.controller.selected_role());
        self.screens.get_mut(page).on_enter(&ctx)
    }
}
