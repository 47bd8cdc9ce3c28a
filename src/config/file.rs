//! TOML config file structure and capability-scoped loading.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::Deserialize;
use std::io;
use std::sync::Arc;

use super::ConfigError;

/// Top-level TOML file. Every field is optional so files may override a
/// subset of settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct ConfigFile {
    pub(super) api: ApiSection,
    pub(super) focus: FocusSection,
    pub(super) schedule: ScheduleSection,
    pub(super) log: LogSection,
}

/// `[api]`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct ApiSection {
    pub(super) base_url: Option<String>,
    pub(super) request_timeout_secs: Option<u64>,
    pub(super) token: Option<String>,
}

/// `[focus]`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FocusSection {
    pub(super) query_timeout_secs: Option<u64>,
}

/// `[schedule]`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct ScheduleSection {
    pub(super) leaderboard_refresh_secs: Option<u64>,
    pub(super) token_check_secs: Option<u64>,
}

/// `[log]`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct LogSection {
    pub(super) filter: Option<String>,
}

/// Returns `<config dir>/fanquest/config.toml`, when the platform has a
/// UTF-8 config directory.
#[must_use]
pub fn default_config_path() -> Option<Utf8PathBuf> {
    let config_dir = dirs::config_dir()?;
    let config_dir = Utf8PathBuf::from_path_buf(config_dir).ok()?;
    Some(config_dir.join("fanquest").join("config.toml"))
}

pub(super) fn read_config_file(path: &Utf8Path) -> Result<ConfigFile, ConfigError> {
    let contents = read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_owned(),
        source: Arc::new(source),
    })?;
    parse(path, &contents)
}

pub(super) fn read_default_config_file() -> Result<ConfigFile, ConfigError> {
    let Some(path) = default_config_path() else {
        return Ok(ConfigFile::default());
    };
    match read_to_string(&path) {
        Ok(contents) => {
            tracing::debug!(%path, "loaded config file");
            parse(&path, &contents)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(source) => Err(ConfigError::ReadFile {
            path,
            source: Arc::new(source),
        }),
    }
}

pub(super) fn parse(path: &Utf8Path, contents: &str) -> Result<ConfigFile, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })
}

fn read_to_string(path: &Utf8Path) -> io::Result<String> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "config path has no file name")
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}
