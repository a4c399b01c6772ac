//! Command lookup along the search path.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{self, Path, PathBuf};
use tracing::trace;

/// The filesystem queries the resolver needs.
pub trait FileSystem {
    /// Reports whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Returns the names of the entries inside `dir`, or nothing if it
    /// cannot be read.
    fn entries(&self, dir: &Path) -> Vec<String>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl FileSystem for HostFs {
    fn exists(&self, path: &Path) -> bool {
        // Looks at the entry itself; symlinks are not followed.
        fs::symlink_metadata(path).is_ok()
    }

    fn entries(&self, dir: &Path) -> Vec<String> {
        let Ok(read_dir) = fs::read_dir(dir) else {
            return Vec::new();
        };
        read_dir
            .flatten()
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect()
    }
}

/// Searches the directories of a `PATH`-style variable for a command.
///
/// Lookup is existence-only: permission bits are never consulted.
#[derive(Debug, Clone)]
pub struct PathResolver<F = HostFs> {
    path_var: Option<OsString>,
    fs: F,
}

impl PathResolver<HostFs> {
    /// Builds a resolver over the process `PATH` and the real filesystem.
    pub fn from_env() -> Self {
        Self::new(env::var_os("PATH"), HostFs)
    }
}

impl<F: FileSystem> PathResolver<F> {
    pub fn new(path_var: Option<OsString>, fs: F) -> Self {
        Self { path_var, fs }
    }

    /// The search directories in `PATH` order, empty entries skipped.
    pub fn directories(&self) -> Vec<PathBuf> {
        match &self.path_var {
            Some(value) => env::split_paths(value)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns the first `<dir>/<command>` that exists, in `PATH` order.
    pub fn resolve(&self, command: &str) -> Option<PathBuf> {
        if command.is_empty() {
            return None;
        }
        for dir in self.directories() {
            let full_path = candidate(dir, command);
            trace!(candidate = %full_path.display(), "checking path candidate");
            if self.fs.exists(&full_path) {
                return Some(full_path);
            }
        }
        None
    }

    /// Collects the entry names of every search directory.
    ///
    /// Unreadable directories are skipped. Names may repeat across directories.
    pub fn executables(&self) -> Vec<String> {
        self.directories()
            .iter()
            .flat_map(|dir| self.fs.entries(dir))
            .collect()
    }
}

/// Builds `<dir><separator><command>`.
///
/// Plain concatenation: an absolute `command` stays under `dir` instead of
/// replacing it the way `Path::join` would.
fn candidate(dir: PathBuf, command: &str) -> PathBuf {
    let mut full = dir.into_os_string();
    full.push(path::MAIN_SEPARATOR_STR);
    full.push(command);
    PathBuf::from(full)
}
