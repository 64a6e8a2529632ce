//! Shared test utilities for integration tests.
//!
//! Provides `TestEnv`, an isolated config directory with its own preference
//! file, cleaned up automatically via `TempDir`.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rolecall::app::App;
use rolecall::config::Config;
use rolecall::platform::FixedColorScheme;
use rolecall::session::{Role, User};
use rolecall::storage::{FileStorage, PreferenceStorage};
use rolecall::styles::PresentationRoot;
use rolecall::theme_store::{ThemeStore, DARK_MODE_KEY};
use rolecall::Controller;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

/// Presentation root that records every dark/light switch
#[derive(Default)]
pub struct RecordingRoot {
    calls: RefCell<Vec<bool>>,
}

impl RecordingRoot {
    pub fn calls(&self) -> Vec<bool> {
        self.calls.borrow().clone()
    }

    /// Whether the root currently carries the dark marker
    pub fn is_dark(&self) -> bool {
        self.calls.borrow().last().copied().unwrap_or(false)
    }
}

impl PresentationRoot for RecordingRoot {
    fn set_dark(&self, is_dark: bool) {
        self.calls.borrow_mut().push(is_dark);
    }
}

/// An isolated Rolecall environment.
pub struct TestEnv {
    _temp: TempDir,
    pub config_path: PathBuf,
    pub storage_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let config_path = temp.path().join("config.toml");
        let storage_path = temp.path().join("preferences.json");
        Self {
            _temp: temp,
            config_path,
            storage_path,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            storage_file: Some(self.storage_path.clone()),
            ..Config::default()
        }
    }

    /// Storage handle onto this environment's preference file
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.storage_path)
    }

    pub fn stored_dark_mode(&self) -> Option<String> {
        self.storage().get_item(DARK_MODE_KEY).expect("read preferences")
    }

    /// Start a theme store as a fresh process would
    pub fn theme_store(&self, prefers_dark: bool) -> (ThemeStore, Rc<RecordingRoot>) {
        let root = Rc::new(RecordingRoot::default());
        let store = ThemeStore::initialize(
            Box::new(self.storage()),
            Box::new(FixedColorScheme(prefers_dark)),
            Box::new(root.clone()),
        );
        (store, root)
    }

    pub fn controller(&self, prefers_dark: bool) -> Controller {
        Controller::new(self.theme_store(prefers_dark).0)
    }

    pub fn app(&self, prefers_dark: bool) -> App {
        App::new(
            self.config(),
            self.config_path.clone(),
            self.controller(prefers_dark),
        )
    }
}

pub fn user(id: &str, role: Role, name: &str, email: &str) -> User {
    User::new(id, role, name, email)
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Feed each character of `text` to the app as a key press
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c))).expect("handle key");
    }
}
