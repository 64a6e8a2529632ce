//! Dark mode preference: load, apply and persist.
//!
//! The preference lives under a fixed key as the JSON literal `true` or
//! `false`. When nothing is stored the platform's ambient color scheme
//! decides. Storage problems never surface to the caller; the in-memory
//! flag stays authoritative for the running session.

use crate::platform::{ColorSchemeProbe, TerminalColorScheme};
use crate::storage::{FileStorage, PreferenceStorage};
use crate::styles::PresentationRoot;
use std::path::Path;
use tracing::{debug, warn};

/// Storage key holding the dark mode preference
pub const DARK_MODE_KEY: &str = "darkMode";

pub struct ThemeStore {
    storage: Box<dyn PreferenceStorage>,
    probe: Box<dyn ColorSchemeProbe>,
    root: Box<dyn PresentationRoot>,
    is_dark: bool,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("is_dark", &self.is_dark)
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Read the stored preference (or the ambient signal) and apply it.
    pub fn initialize(
        storage: Box<dyn PreferenceStorage>,
        probe: Box<dyn ColorSchemeProbe>,
        root: Box<dyn PresentationRoot>,
    ) -> Self {
        let mut store = Self {
            storage,
            probe,
            root,
            is_dark: false,
        };
        let initial = read_preference(store.storage.as_ref(), store.probe.as_ref());
        store.apply(initial);
        store
    }

    /// The flag a fresh start would use, without applying or persisting it.
    pub fn peek(storage: &dyn PreferenceStorage, probe: &dyn ColorSchemeProbe) -> bool {
        read_preference(storage, probe)
    }

    /// Open the store backed by a preference file and the terminal's hint
    pub fn open(storage_path: &Path, root: Box<dyn PresentationRoot>) -> Self {
        Self::initialize(
            Box::new(FileStorage::new(storage_path)),
            Box::new(TerminalColorScheme::new()),
            root,
        )
    }

    /// Current dark mode flag
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Set the flag, restyle the presentation root and persist.
    pub fn apply(&mut self, is_dark: bool) {
        self.is_dark = is_dark;
        self.root.set_dark(is_dark);

        let value = if is_dark { "true" } else { "false" };
        if let Err(e) = self.storage.set_item(DARK_MODE_KEY, value) {
            warn!("Failed to persist theme preference: {:#}", e);
        }
        debug!("Applied {} theme", if is_dark { "dark" } else { "light" });
    }

    /// Flip the flag. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.apply(!self.is_dark);
        self.is_dark
    }

    /// Forget the stored preference and fall back to the ambient signal.
    ///
    /// The presentation root is updated but nothing is written back, so the
    /// next start consults the platform again.
    pub fn reset(&mut self) {
        if let Err(e) = self.storage.remove_item(DARK_MODE_KEY) {
            warn!("Failed to clear theme preference: {:#}", e);
        }
        self.is_dark = self.probe.prefers_dark();
        self.root.set_dark(self.is_dark);
    }
}

fn read_preference(storage: &dyn PreferenceStorage, probe: &dyn ColorSchemeProbe) -> bool {
    match storage.get_item(DARK_MODE_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
            Ok(value) => return value,
            Err(_) => warn!("Ignoring malformed theme preference {:?}", raw),
        },
        Ok(None) => {}
        Err(e) => warn!("Failed to read theme preference: {:#}", e),
    }
    probe.prefers_dark()
}
