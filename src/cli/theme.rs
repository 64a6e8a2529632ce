//! `rolecall theme`: manage the stored dark mode preference.

use super::{print_info, print_success, CliContext, ThemeAction};
use crate::platform::TerminalColorScheme;
use crate::storage::FileStorage;
use crate::styles::{GlobalThemeRoot, ThemeType};
use crate::theme_store::ThemeStore;
use anyhow::Result;
use tracing::info;

fn theme_name(is_dark: bool) -> &'static str {
    ThemeType::from_dark_flag(is_dark).name()
}

fn show_message(is_dark: bool) -> String {
    format!("Current theme: {}", theme_name(is_dark))
}

/// Apply `action` to `store` and describe the result
pub fn run(action: ThemeAction, store: &mut ThemeStore) -> String {
    match action {
        ThemeAction::Show => show_message(store.is_dark()),
        ThemeAction::Dark | ThemeAction::Light => {
            store.apply(action == ThemeAction::Dark);
            format!("Theme set to {}", theme_name(store.is_dark()))
        }
        ThemeAction::Toggle => format!("Theme switched to {}", theme_name(store.toggle())),
        ThemeAction::Reset => {
            store.reset();
            format!(
                "Theme preference cleared; following the terminal ({})",
                theme_name(store.is_dark())
            )
        }
    }
}

pub fn execute(action: ThemeAction) -> Result<()> {
    let ctx = CliContext::load()?;
    let storage_path = ctx.config.storage_path();

    // Showing must not pin the ambient value into storage
    if action == ThemeAction::Show {
        let storage = FileStorage::new(&storage_path);
        let is_dark = ThemeStore::peek(&storage, &TerminalColorScheme::new());
        print_info(&show_message(is_dark));
        println!("  preferences: {}", storage_path.display());
        println!("  config:      {}", ctx.config_path.display());
        return Ok(());
    }

    let mut store = ThemeStore::open(&storage_path, Box::new(GlobalThemeRoot));
    let message = run(action, &mut store);
    info!("theme {:?}: {}", action, message);
    print_success(&message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FixedColorScheme;
    use crate::storage::{MemoryStorage, PreferenceStorage};
    use crate::styles::PresentationRoot;
    use crate::theme_store::DARK_MODE_KEY;
    use std::rc::Rc;

    struct NullRoot;

    impl PresentationRoot for NullRoot {
        fn set_dark(&self, _is_dark: bool) {}
    }

    fn store(storage: Rc<MemoryStorage>) -> ThemeStore {
        ThemeStore::initialize(
            Box::new(storage),
            Box::new(FixedColorScheme(false)),
            Box::new(NullRoot),
        )
    }

    #[test]
    fn test_dark_and_light_persist() {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = store(storage.clone());

        assert_eq!(run(ThemeAction::Dark, &mut store), "Theme set to dark");
        assert_eq!(storage.get_item(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));

        assert_eq!(run(ThemeAction::Light, &mut store), "Theme set to light");
        assert_eq!(storage.get_item(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_toggle_and_show() {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = store(storage);
        assert_eq!(run(ThemeAction::Show, &mut store), "Current theme: light");
        assert_eq!(run(ThemeAction::Toggle, &mut store), "Theme switched to dark");
        assert_eq!(run(ThemeAction::Show, &mut store), "Current theme: dark");
    }

    #[test]
    fn test_show_after_reset_leaves_storage_empty() {
        let storage = Rc::new(MemoryStorage::with_item(DARK_MODE_KEY, "true"));
        let mut store = store(storage.clone());
        run(ThemeAction::Reset, &mut store);

        let is_dark = ThemeStore::peek(&*storage, &FixedColorScheme(true));
        assert_eq!(show_message(is_dark), "Current theme: dark");
        assert_eq!(storage.get_item(DARK_MODE_KEY).unwrap(), None);
    }

    #[test]
    fn test_reset_follows_ambient() {
        let storage = Rc::new(MemoryStorage::with_item(DARK_MODE_KEY, "true"));
        let mut store = store(storage.clone());
        assert!(store.is_dark());

        run(ThemeAction::Reset, &mut store);
        assert!(!store.is_dark());
        assert_eq!(storage.get_item(DARK_MODE_KEY).unwrap(), None);
    }
}
