//! User configuration with env-var overrides.
//!
//! Reads `<dot folder>/config.toml` if it exists, then applies the
//! `KUBESHARK_LOG_LEVEL` override. A missing file (or an unresolvable dot
//! folder) is not an error; defaults apply.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::{build_info::BuildInfo, error::AppError, logger};

/// Env var that overrides `[cli].log_level`.
pub const LOG_LEVEL_ENV: &str = "KUBESHARK_LOG_LEVEL";

/// Fully-resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
    /// `~/.<program>`; `None` when the home directory cannot be resolved.
    pub dot_folder: Option<PathBuf>,
    /// The file the config was read from, or would have been.
    pub config_file: Option<PathBuf>,
    /// Whether `config_file` existed and was parsed.
    pub from_file: bool,
}

/// Raw TOML shape, deserialized before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    cli: RawCli,
}

#[derive(Deserialize)]
struct RawCli {
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for RawCli {
    fn default() -> Self {
        Self { log_level: default_log_level() }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load config for `build`, then apply env-var overrides.
pub fn load(build: &BuildInfo) -> Result<Config, AppError> {
    let log_level_override = env::var(LOG_LEVEL_ENV).ok();
    let mut config = match build.config_file_path() {
        Some(path) => load_from(&path, log_level_override.as_deref())?,
        None => resolve(RawConfig::default(), None, false, log_level_override.as_deref())?,
    };
    config.dot_folder = build.dot_folder();
    Ok(config)
}

/// Load from an explicit path with an optional level override.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(path: &Path, log_level_override: Option<&str>) -> Result<Config, AppError> {
    let (raw, from_file) = match fs::read_to_string(path) {
        Ok(text) => {
            let raw = toml::from_str::<RawConfig>(&text)
                .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;
            (raw, true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => (RawConfig::default(), false),
        Err(e) => return Err(e.into()),
    };

    resolve(raw, Some(path), from_file, log_level_override)
}

fn resolve(
    raw: RawConfig,
    path: Option<&Path>,
    from_file: bool,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let level = log_level_override.unwrap_or(&raw.cli.log_level);
    let log_level = logger::parse_level(level).map_err(|_| {
        let source = match log_level_override {
            Some(_) => LOG_LEVEL_ENV.to_string(),
            None => path.map_or_else(|| "defaults".to_string(), |p| p.display().to_string()),
        };
        AppError::Config(format!("invalid log_level '{level}' in {source}"))
    })?;

    Ok(Config {
        log_level,
        dot_folder: path.and_then(Path::parent).map(Path::to_path_buf),
        config_file: path.map(Path::to_path_buf),
        from_file,
    })
}
