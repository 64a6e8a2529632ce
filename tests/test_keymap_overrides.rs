use crossterm::event::{KeyCode, KeyModifiers};
use rolecall::config::Config;
use rolecall::keymap::{Action, KeyBinding, KeymapPreset};
use tempfile::TempDir;

fn save_and_reload(config: &Config) -> (TempDir, Config) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    config.save(&config_path).unwrap();
    let loaded = Config::load_or_create(&config_path).unwrap();
    (temp_dir, loaded)
}

#[test]
fn test_override_replaces_preset_binding_for_action() {
    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::Logout));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("w", Action::MoveUp));

    let (_temp, loaded) = save_and_reload(&config);
    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    let km = &loaded.keymap;
    assert_eq!(
        km.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
        Some(Action::Logout)
    );
    assert_eq!(
        km.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );

    // Overriding an action drops every preset key for it
    assert_eq!(km.get_action(KeyCode::Char('o'), KeyModifiers::NONE), None);
    assert_eq!(km.get_action(KeyCode::Char('k'), KeyModifiers::NONE), None);
    assert_eq!(km.get_action(KeyCode::Up, KeyModifiers::NONE), None);

    // Untouched actions keep their preset keys
    assert_eq!(
        km.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
    assert_eq!(
        km.get_action(KeyCode::Char('t'), KeyModifiers::NONE),
        Some(Action::ToggleTheme)
    );
}

#[test]
fn test_override_with_modifiers() {
    let mut config = Config::default();
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+d", Action::ToggleTheme));

    let (_temp, loaded) = save_and_reload(&config);
    let km = &loaded.keymap;
    assert_eq!(
        km.get_action(KeyCode::Char('d'), KeyModifiers::CONTROL),
        Some(Action::ToggleTheme)
    );
    assert_ne!(
        km.get_action(KeyCode::Char('d'), KeyModifiers::NONE),
        Some(Action::ToggleTheme)
    );
    // The preset ctrl+t is shadowed
    assert_eq!(km.get_action(KeyCode::Char('t'), KeyModifiers::CONTROL), None);
}

#[test]
fn test_config_file_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Emacs;
    config.storage_file = Some(temp_dir.path().join("prefs.json"));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("f1", Action::Help));
    config.save(&config_path).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[keymap]"));
    assert!(content.contains("preset = \"emacs\""));
    assert!(content.contains("storage_file"));
    assert!(content.contains("toast_duration_secs = 3"));

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.keymap.preset, KeymapPreset::Emacs);
    assert_eq!(loaded.storage_path(), temp_dir.path().join("prefs.json"));
    assert_eq!(
        loaded.keymap.get_action(KeyCode::F(1), KeyModifiers::NONE),
        Some(Action::Help)
    );
    // Emacs binds ctrl+h to help, shadowed by the f1 override
    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('h'), KeyModifiers::CONTROL),
        None
    );
}

#[test]
fn test_missing_config_is_created_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let config = Config::load_or_create(&config_path).unwrap();
    assert!(config_path.exists());
    assert_eq!(config.keymap.preset, KeymapPreset::Standard);
    assert!(config.keymap.overrides.is_empty());
    assert!(config.storage_file.is_none());
}
