//! Paths module - Resolves where every configuration file lives
//!
//! All locations hang off a single project root. Explicit overrides win over
//! the defaults in [`config::files`]; relative overrides are taken relative to
//! the project root, never to the caller's working directory.

use std::path::{Path, PathBuf};

use crate::core::config::{self, files};

/// Optional path overrides supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub schema: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub build_vars: Option<PathBuf>,
    pub header: Option<PathBuf>,
}

/// Concrete locations used by one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub root: PathBuf,
    pub schema: PathBuf,
    pub config: PathBuf,
    pub build_vars: PathBuf,
    pub header: PathBuf,
}

impl ArtifactPaths {
    /// Resolve every location against `root`
    pub fn resolve(root: &Path, overrides: &PathOverrides) -> Self {
        let pick = |over: &Option<PathBuf>, default: PathBuf| {
            root.join(over.as_deref().unwrap_or(default.as_path()))
        };

        Self {
            root: root.to_path_buf(),
            schema: pick(&overrides.schema, PathBuf::from(files::SCHEMA)),
            config: pick(&overrides.config, files::config()),
            build_vars: pick(&overrides.build_vars, files::build_vars()),
            header: pick(&overrides.header, files::header()),
        }
    }

    /// Where `savedefconfig` writes by default
    pub fn defconfig(&self) -> PathBuf {
        self.root.join(files::defconfig())
    }

    /// Minimal override candidates, in lookup order
    pub fn defconfig_candidates(&self) -> Vec<PathBuf> {
        files::defconfig_candidates()
            .iter()
            .map(|p| self.root.join(p))
            .collect()
    }

    /// First defconfig candidate that exists
    pub fn find_defconfig(&self) -> Option<PathBuf> {
        self.defconfig_candidates().into_iter().find(|p| p.is_file())
    }

    /// Resolve a one-off path (e.g. a command argument) against the root
    pub fn join(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

/// Get the project root directory
///
/// An explicit root wins. Otherwise walk up from the current directory looking
/// for the schema file, falling back to the current directory itself so a
/// missing schema is reported by the session rather than here.
pub fn project_root(explicit: Option<&Path>) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if let Some(root) = explicit {
        return cwd.join(root);
    }

    find_root_from(&cwd).unwrap_or(cwd)
}

fn find_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(config::files::SCHEMA).is_file())
        .map(Path::to_path_buf)
}
