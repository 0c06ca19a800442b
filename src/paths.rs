//! Per-user dot folder resolution.
//!
//! The dot folder is `<home>/.<program>`, e.g. `~/.kubeshark`. Nothing here
//! touches the filesystem; callers create the directory if they need it.
//!
//! On Unix the home directory is `$HOME` and nothing else. An unset or empty
//! `HOME` means the dot folder is unavailable, even if the passwd database
//! knows the user.

use std::{
    ffi::OsString,
    path::{Component, Path, PathBuf},
};

/// `<home>/.<program>`, or `None` if the home directory cannot be resolved.
pub fn dot_folder(program: &str) -> Option<PathBuf> {
    dot_folder_in(home_dir().as_deref(), program)
}

/// `<home>/.<program>` as a string. Returns an empty string when the home
/// directory cannot be resolved; callers must treat `""` as unavailable.
pub fn dot_folder_path(program: &str) -> String {
    dot_folder_path_in(home_dir().as_deref(), program)
}

/// Resolve the dot folder against an explicit home directory.
/// An empty home path counts as unresolved. The result is lexically cleaned.
pub fn dot_folder_in(home: Option<&Path>, program: &str) -> Option<PathBuf> {
    let home = home.filter(|h| !h.as_os_str().is_empty())?;
    Some(clean(&home.join(format!(".{program}"))))
}

/// String form of [`dot_folder_in`]; `""` when unresolved.
pub fn dot_folder_path_in(home: Option<&Path>, program: &str) -> String {
    dot_folder_in(home, program)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The invoking user's home directory.
#[cfg(unix)]
pub fn home_dir() -> Option<PathBuf> {
    home_from_env(std::env::var_os("HOME"))
}

/// The invoking user's home directory.
#[cfg(not(unix))]
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

#[cfg_attr(not(unix), allow(dead_code))]
fn home_from_env(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|h| !h.is_empty()).map(PathBuf::from)
}

/// Collapse `.`, `..` and repeated separators without touching the filesystem.
/// `..` at the root stays at the root; leading `..` of a relative path is kept.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}
