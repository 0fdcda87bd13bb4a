//! Globber - recursive, origin-relative source file enumeration
//!
//! The Globber walks a search directory tree and matches a shell-glob
//! pattern against the entries of each visited directory, returning every
//! match as a path relative to a fixed origin directory. The origin is the
//! build-file location the results get consumed from, which may differ from
//! the search root when build outputs live in a variant directory.
//!
//! The recursion comes from the tree walk, never from the pattern: the
//! pattern is applied to single file names only, and `**` has no special
//! meaning here.
//!
//! # Examples
//!
//! ```no_run
//! use sitetool::globber::Globber;
//!
//! let globber = Globber::current_dir().unwrap();
//! let sources = globber.find("src", "*.c");
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};
use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur while constructing a Globber
#[derive(Debug, Error)]
pub enum GlobError {
    /// IO error resolving the origin directory
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Match options applied to every pattern: patterns match one path segment,
/// and hidden entries require a literal leading dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Recursive glob with origin-relative results
#[derive(Debug, Clone)]
pub struct Globber {
    /// Absolute origin directory all results are made relative to.
    /// Resolved once at construction, not per match.
    origin: PathBuf,
}

impl Globber {
    /// Create a globber whose results are relative to `origin`.
    ///
    /// The origin is resolved to an absolute path lexically; it does not
    /// have to exist.
    pub fn new(origin: impl AsRef<Path>) -> Result<Self, GlobError> {
        Ok(Self {
            origin: absolutize(origin.as_ref())?,
        })
    }

    /// Create a globber relative to the current working directory
    pub fn current_dir() -> Result<Self, GlobError> {
        Self::new(".")
    }

    /// Get the resolved origin directory
    #[must_use]
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// Recursively find entries under `search` whose file name matches
    /// `pattern`, as paths relative to the origin directory.
    ///
    /// The walk is top-down: every match in a directory is emitted before
    /// any match from its subdirectories, and entries are visited in name
    /// order so repeated calls over an unchanged tree return identical
    /// sequences. Matches may climb out of the search root via `..`
    /// segments when the origin lies elsewhere.
    ///
    /// A missing search root or an unreadable subdirectory contributes no
    /// matches and raises no error; an invalid pattern matches nothing.
    #[must_use]
    pub fn find(&self, search: impl AsRef<Path>, pattern: &str) -> Vec<PathBuf> {
        let mut matches = Vec::new();

        let Ok(search) = absolutize(search.as_ref()) else {
            return matches;
        };

        let pattern = match Pattern::new(pattern) {
            Ok(p) => p,
            Err(err) => {
                log::warn!("ignoring invalid glob pattern {pattern:?}: {err}");
                return matches;
            },
        };

        // Unreadable entries drop out of the walk silently, like a missing
        // search root: both simply have nothing to visit.
        for dir in WalkDir::new(&search)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_dir())
        {
            for name in dir_entry_names(dir.path()) {
                let matched = name
                    .to_str()
                    .is_some_and(|s| pattern.matches_with(s, MATCH_OPTIONS));
                if matched {
                    matches.push(relative_to(&dir.path().join(&name), &self.origin));
                }
            }
        }

        matches
    }
}

/// List entry names of a directory in name order; unreadable directories
/// yield nothing.
fn dir_entry_names(dir: &Path) -> Vec<OsString> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<OsString> = entries.filter_map(Result::ok).map(|e| e.file_name()).collect();
    names.sort();
    names
}

/// Resolve a path to absolute form against the current working directory,
/// lexically (no symlink resolution, no existence requirement).
fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(normalize(&absolute))
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                ) {
                    out.pop();
                }
            },
            other => out.push(other),
        }
    }
    out
}

/// Express `path` relative to `base`, ascending with `..` segments where
/// the two diverge. Both paths must be absolute and normalized.
fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let mut path_components = path.components();
    let mut base_components = base.components();
    let mut out = PathBuf::new();

    loop {
        match (path_components.clone().next(), base_components.clone().next()) {
            (Some(p), Some(b)) if p == b => {
                path_components.next();
                base_components.next();
            },
            (_, Some(_)) => {
                for _ in base_components.by_ref() {
                    out.push(Component::ParentDir);
                }
            },
            _ => break,
        }
    }

    for component in path_components {
        out.push(component);
    }

    if out.as_os_str().is_empty() {
        out.push(Component::CurDir);
    }

    out
}
