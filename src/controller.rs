//! The page/session controller.
//!
//! `Controller` is the single owner of the navigation state and the theme
//! store. Screens never touch either directly; they return actions that the
//! app turns into [`NavEvent`]s and feeds to [`Controller::handle`].

use crate::dispatch::{self, View};
use crate::session::{Role, User};
use crate::state::{transition, AppState, NavEvent, PageToken};
use crate::theme_store::ThemeStore;
use tracing::{debug, info};

/// What changed as a result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub from: PageToken,
    pub to: PageToken,
    pub theme_changed: bool,
}

impl Outcome {
    pub fn page_changed(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug)]
pub struct Controller {
    state: AppState,
    theme: ThemeStore,
}

impl Controller {
    /// Start on the landing page with an initialized theme store
    pub fn new(theme: ThemeStore) -> Self {
        Self {
            state: AppState::new(),
            theme,
        }
    }

    /// Process one event to completion.
    pub fn handle(&mut self, event: NavEvent) -> Outcome {
        let from = self.state.page;
        let name = event.name();

        let theme_changed = if matches!(event, NavEvent::ThemeToggled) {
            let is_dark = self.theme.toggle();
            info!("Theme toggled to {}", if is_dark { "dark" } else { "light" });
            true
        } else {
            self.state = transition(&self.state, event);
            self.settle_page();
            false
        };

        let to = self.state.page;
        if from == to {
            debug!("Event {} on {} left the page unchanged", name, from);
        } else {
            info!("Navigated {} -> {} on {}", from, to, name);
        }

        Outcome {
            from,
            to,
            theme_changed,
        }
    }

    /// The view to render for the current state
    pub fn view(&self) -> View<'_> {
        dispatch::resolve(&self.state)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn page(&self) -> PageToken {
        self.state.page
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    pub fn selected_role(&self) -> Option<Role> {
        self.state.selected_role
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Force the page token, bypassing the transition table.
    ///
    /// Used to resume at a textual token. A dashboard without a matching
    /// session settles on landing, so the stored page is always the one shown.
    pub fn restore_page(&mut self, token: &str) {
        self.state.page = PageToken::parse(token);
        self.settle_page();
        debug!("Restored page {}", self.state.page);
    }

    /// Make the stored page agree with the view the dispatcher resolves
    fn settle_page(&mut self) {
        let shown = dispatch::resolve(&self.state).page();
        if shown != self.state.page {
            info!("Rerouting {} to {}", self.state.page, shown);
            self.state.page = shown;
        }
    }
}
