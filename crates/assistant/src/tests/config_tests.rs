use super::{load_settings_from, AssistantSettings};

use std::{
    collections::HashMap,
    env, fs,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn temp_config(tag: &str, contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("circuit_sim_config_{tag}_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("assistant.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn missing_file_and_env_yield_defaults() {
    let settings = load_settings_from(Path::new("/nonexistent/assistant.toml"), env_from(&[]));
    assert_eq!(settings, AssistantSettings::default());
    assert!(settings.api_key.is_none());
}

#[test]
fn file_values_override_defaults() {
    let path = temp_config(
        "file_values",
        "model = \"gemini-test\"\nendpoint = \"http://127.0.0.1:9\"\nrequest_timeout_secs = 5\n",
    );
    let settings = load_settings_from(&path, env_from(&[]));
    assert_eq!(settings.model, "gemini-test");
    assert_eq!(settings.endpoint, "http://127.0.0.1:9");
    assert_eq!(settings.request_timeout_secs, 5);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn env_overrides_file() {
    let path = temp_config("env_overrides", "api_key = \"from-file\"\nmodel = \"file-model\"\n");
    let settings = load_settings_from(
        &path,
        env_from(&[
            ("API_KEY", "from-env"),
            ("APP__ASSISTANT_MODEL", "env-model"),
            ("APP__ASSISTANT_TIMEOUT_SECS", "12"),
        ]),
    );
    assert_eq!(settings.api_key.as_deref(), Some("from-env"));
    assert_eq!(settings.model, "env-model");
    assert_eq!(settings.request_timeout_secs, 12);

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn blank_api_key_counts_as_missing() {
    let settings = load_settings_from(
        Path::new("/nonexistent/assistant.toml"),
        env_from(&[("GEMINI_API_KEY", "   ")]),
    );
    assert!(settings.api_key.is_none());
}

#[test]
fn malformed_file_is_ignored() {
    let path = temp_config("malformed", "model = [not valid");
    let settings = load_settings_from(&path, env_from(&[("APP__ASSISTANT_TIMEOUT_SECS", "abc")]));
    assert_eq!(settings, AssistantSettings::default());

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}
