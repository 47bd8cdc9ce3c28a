//! Configuration layering tests.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use super::{ClientConfig, ConfigError, DEFAULT_BASE_URL, GlobalArgs, file};
use crate::session::domain::BearerToken;
use camino::{Utf8Path, Utf8PathBuf};
use rstest::rstest;
use std::time::Duration;

const FULL_FILE: &str = r#"
[api]
base_url = "https://stations.example.test"
request_timeout_secs = 30
token = "file-token"

[focus]
query_timeout_secs = 5

[schedule]
leaderboard_refresh_secs = 120
token_check_secs = 30

[log]
filter = "fanquest=debug"
"#;

fn resolve(args: &GlobalArgs, contents: &str) -> Result<ClientConfig, ConfigError> {
    let parsed = file::parse(Utf8Path::new("config.toml"), contents)?;
    ClientConfig::resolve(args, &parsed)
}

#[rstest]
fn empty_file_yields_defaults() {
    let config = resolve(&GlobalArgs::default(), "").expect("valid config");

    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.request_timeout, Duration::from_secs(15));
    assert_eq!(config.leaderboard_refresh, Duration::from_secs(60));
    assert_eq!(config.token_check, Duration::from_secs(60));
}

#[rstest]
fn file_values_override_defaults() {
    let config = resolve(&GlobalArgs::default(), FULL_FILE).expect("valid config");

    assert_eq!(config.base_url, "https://stations.example.test");
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert_eq!(config.token, Some(BearerToken::new("file-token")));
    assert_eq!(config.focus_query_timeout, Duration::from_secs(5));
    assert_eq!(config.leaderboard_refresh, Duration::from_secs(120));
    assert_eq!(config.token_check, Duration::from_secs(30));
    assert_eq!(config.log_filter, "fanquest=debug");
}

#[rstest]
fn flags_override_file_values() {
    let args = GlobalArgs {
        base_url: Some("http://127.0.0.1:8080".to_owned()),
        token: Some("flag-token".to_owned()),
        request_timeout_secs: Some(3),
        log_level: Some("warn".to_owned()),
        ..GlobalArgs::default()
    };

    let config = resolve(&args, FULL_FILE).expect("valid config");

    assert_eq!(config.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.token, Some(BearerToken::new("flag-token")));
    assert_eq!(config.request_timeout, Duration::from_secs(3));
    assert_eq!(config.log_filter, "warn");
    assert_eq!(config.focus_query_timeout, Duration::from_secs(5));
}

#[rstest]
fn blank_token_is_ignored() {
    let args = GlobalArgs {
        token: Some("  ".to_owned()),
        ..GlobalArgs::default()
    };
    let config = resolve(&args, "").expect("valid config");
    assert_eq!(config.token, None);
}

#[rstest]
#[case("[focus]\nquery_timeout_secs = 0\n", "focus.query_timeout_secs")]
#[case("[schedule]\ntoken_check_secs = 0\n", "schedule.token_check_secs")]
fn zero_durations_are_rejected(#[case] contents: &str, #[case] expected: &str) {
    let result = resolve(&GlobalArgs::default(), contents);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { setting, .. }) if setting == expected
    ));
}

#[rstest]
#[case("[api]\nbase_url = 5\n")]
#[case("[api]\nbase_ur = \"typo\"\n")]
#[case("[unknown]\n")]
fn malformed_files_are_rejected(#[case] contents: &str) {
    let result = resolve(&GlobalArgs::default(), contents);
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[rstest]
fn explicit_missing_file_is_an_error() {
    let args = GlobalArgs {
        config: Some(Utf8PathBuf::from("/nonexistent/fanquest/config.toml")),
        ..GlobalArgs::default()
    };
    assert!(matches!(
        ClientConfig::load(&args),
        Err(ConfigError::ReadFile { .. })
    ));
}

#[rstest]
fn default_path_ends_with_client_directory() {
    if let Some(path) = super::default_config_path() {
        assert!(path.ends_with("fanquest/config.toml"));
    }
}
