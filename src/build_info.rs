//! Build metadata: the identifying strings compiled into the binary.
//!
//! Most fields are literal defaults. `git_commit_hash` and `build_timestamp`
//! are injected by the release tooling through `KUBESHARK_GIT_COMMIT_HASH` and
//! `KUBESHARK_BUILD_TIMESTAMP` at build time (see `build.rs`) and are empty
//! for local builds.
//!
//! A [`BuildInfo`] is built once at startup and handed to whatever needs it.

use std::{fmt, path::PathBuf};

use crate::paths;

/// Name of the user config file inside the dot folder.
pub const CONFIG_FILE_NAME: &str = "config.toml";

const fn injected(value: Option<&'static str>) -> &'static str {
    match value {
        Some(v) => v,
        None => "",
    }
}

/// Build metadata as compiled into this binary.
pub const BUILD_INFO: BuildInfo = BuildInfo {
    software_name: "Kubeshark",
    program_name: "kubeshark",
    website: "https://kubeshark.co",
    version: "0.0",
    branch: "develop",
    git_commit_hash: injected(option_env!("KUBESHARK_GIT_COMMIT_HASH")),
    build_timestamp: injected(option_env!("KUBESHARK_BUILD_TIMESTAMP")),
    rbac_version: "v1",
    platform: "",
};

/// Identifying strings for this build. Immutable once constructed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BuildInfo {
    /// Human-facing product name.
    pub software_name: &'static str,
    /// Executable name; also names the dot folder.
    pub program_name: &'static str,
    pub website: &'static str,
    pub version: &'static str,
    pub branch: &'static str,
    /// Empty unless injected at build time.
    pub git_commit_hash: &'static str,
    /// Empty unless injected at build time.
    pub build_timestamp: &'static str,
    /// Version tag of the RBAC schema the CLI deploys.
    pub rbac_version: &'static str,
    /// Reserved. Nothing assigns it.
    pub platform: &'static str,
}

impl BuildInfo {
    /// The metadata compiled into this binary.
    pub const fn compiled() -> Self {
        BUILD_INFO
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    /// `true` when the release tooling injected a commit hash.
    pub fn is_release(&self) -> bool {
        !self.git_commit_hash.is_empty()
    }

    /// `~/.<program_name>`, or `None` if the home directory cannot be resolved.
    pub fn dot_folder(&self) -> Option<PathBuf> {
        paths::dot_folder(self.program_name)
    }

    /// `~/.<program_name>` as a string; empty when the home directory cannot
    /// be resolved.
    pub fn dot_folder_path(&self) -> String {
        paths::dot_folder_path(self.program_name)
    }

    /// `<dot folder>/config.toml`, or `None` without a dot folder.
    pub fn config_file_path(&self) -> Option<PathBuf> {
        self.dot_folder().map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::compiled()
    }
}

impl fmt::Display for BuildInfo {
    /// `Kubeshark 0.0 (branch develop, commit abc1234, built 2024-01-01T00:00:00Z)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (branch {}", self.software_name, self.version, self.branch)?;
        if !self.git_commit_hash.is_empty() {
            write!(f, ", commit {}", self.git_commit_hash)?;
        }
        if !self.build_timestamp.is_empty() {
            write!(f, ", built {}", self.build_timestamp)?;
        }
        f.write_str(")")
    }
}
