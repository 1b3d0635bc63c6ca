use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn no_env(_: &str) -> Option<String> {
    None
}

fn temp_settings_file(tag: &str, contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("carousel_settings_{tag}_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join(SETTINGS_FILE);
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn defaults_apply_when_nothing_is_configured() {
    let settings = load_settings_from(Path::new("/nonexistent/carousel.toml"), no_env);
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.api_base_url, "http://127.0.0.1:8080");
    assert_eq!(settings.advance_interval, Duration::from_millis(5000));
    assert_eq!(settings.advance_interval, crate::DEFAULT_ADVANCE_INTERVAL);
    assert_eq!(settings.request_timeout, Duration::from_secs(10));
}

#[test]
fn file_values_accept_strings_and_integers() {
    let path = temp_settings_file(
        "file_values",
        r#"
api_base_url = "https://api.avenir.example/"
advance_interval_ms = 2500
request_timeout_secs = "4"
"#,
    );

    let settings = load_settings_from(&path, no_env);
    assert_eq!(settings.api_base_url, "https://api.avenir.example");
    assert_eq!(settings.advance_interval, Duration::from_millis(2500));
    assert_eq!(settings.request_timeout, Duration::from_secs(4));

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn environment_overrides_file() {
    let path = temp_settings_file("env_overrides", "api_base_url = \"http://file.example\"\n");
    let vars = HashMap::from([
        ("APP__API_BASE_URL", "http://env.example"),
        ("APP__FEST_STARTS_AT", "2027-03-01T09:30:00+05:30"),
    ]);

    let settings = load_settings_from(&path, |key| vars.get(key).map(|v| v.to_string()));
    assert_eq!(settings.api_base_url, "http://env.example");
    assert_eq!(
        settings.fest_starts_at.to_rfc3339(),
        "2027-03-01T09:30:00+05:30"
    );

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn invalid_values_keep_previous_setting() {
    let vars = HashMap::from([
        ("EVENTS_API_BASE_URL", "ftp://events.example"),
        ("APP__ADVANCE_INTERVAL_MS", "0"),
        ("APP__REQUEST_TIMEOUT_SECS", "soon"),
        ("APP__FEST_STARTS_AT", "next february"),
    ]);

    let settings = load_settings_from(Path::new("/nonexistent/carousel.toml"), |key| {
        vars.get(key).map(|v| v.to_string())
    });
    assert_eq!(settings, Settings::default());
}

#[test]
fn setters_report_why_a_value_was_rejected() {
    let mut settings = Settings::default();
    assert!(matches!(
        settings.set_api_base_url("not a url"),
        Err(SettingsError::InvalidBaseUrl { .. })
    ));
    assert!(matches!(
        settings.set_api_base_url("ftp://events.example"),
        Err(SettingsError::UnsupportedScheme(_))
    ));
    assert!(matches!(
        settings.set_advance_interval_ms("0"),
        Err(SettingsError::Zero("advance_interval_ms"))
    ));
    assert!(matches!(
        settings.set_request_timeout_secs("-1"),
        Err(SettingsError::InvalidNumber { .. })
    ));
}
