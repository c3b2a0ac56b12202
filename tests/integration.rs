// SPDX-License-Identifier: MPL-2.0
use std::fs;
use tempfile::tempdir;
use yohaku::config::{self, Config, DEFAULT_SEEK_STEP_MS, MAX_TIMER_MINUTES};
use yohaku::i18n::fluent::I18n;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("mixer-title"), "Sound Mixer");

    let mut japanese_config = Config::default();
    japanese_config.general.language = Some("ja".to_string());
    config::save_to_path(&japanese_config, &temp_config_file_path)
        .expect("Failed to write japanese config file");

    let loaded_japanese_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load japanese config from path");
    let i18n_ja = I18n::new(None, &loaded_japanese_config);
    assert_eq!(i18n_ja.current_locale().to_string(), "ja");
    assert_eq!(i18n_ja.tr("mixer-title"), "サウンドミキサー");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("ja".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_partial_settings_file_keeps_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "[playback]\nvideo_path = \"loop.mp4\"\n\n[timer]\ndefault_minutes = 5000\n",
    )
    .expect("Failed to write settings");

    let config = config::load_from_path(&path).expect("Failed to load settings");
    assert_eq!(
        config.playback.video_path.as_deref(),
        Some(std::path::Path::new("loop.mp4"))
    );
    assert_eq!(config.playback.seek_step_ms(), DEFAULT_SEEK_STEP_MS);
    assert_eq!(config.timer.minutes(), MAX_TIMER_MINUTES);
    assert_eq!(config.general.language, None);
}

#[test]
fn test_unreadable_settings_fall_back_with_localized_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[playback\nautoplay = ")
        .expect("Failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());

    let key = warning.expect("a warning key should be returned");
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_ne!(i18n.tr(&key), key, "warning key should be translated");
}
