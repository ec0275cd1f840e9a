use duesboard_config::{Config, ConfigManager, Theme};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert_eq!(cfg.theme, Theme::Iconic);
    assert_eq!(cfg.roster_fallback, 25);
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.currency = "EUR".to_string();
    cfg.theme = Theme::Plain;
    cfg.data_dir = Some(dir.path().join("documents"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.theme, Theme::Plain);
    assert_eq!(loaded.resolve_data_dir(), dir.path().join("documents"));
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let loaded = manager.load().expect("load config");
    assert_eq!(loaded.currency, Config::default().currency);
}

#[test]
fn unknown_theme_values_fall_back_to_iconic() {
    let cfg: Config =
        serde_json::from_str(r#"{"locale": "en-US", "currency": "PLN", "theme": "dark"}"#)
            .expect("parse config");
    assert_eq!(cfg.theme, Theme::Iconic);

    let cfg: Config = serde_json::from_str(r#"{"locale": "en-US", "currency": "PLN"}"#)
        .expect("parse config without theme");
    assert_eq!(cfg.theme, Theme::Iconic);
}
