//! Artifact renderers
//!
//! Both renderers walk the resolved configuration in declaration order, so the
//! same input always yields byte-identical output. A bool or tristate symbol
//! is `ON` in the CMake file exactly when the header defines its base macro.

pub mod cmake;
pub mod header;

use std::path::Path;

use crate::core::error::{ConfigError, Result};
use crate::core::output;
use crate::core::symbol::ResolvedConfiguration;

pub use cmake::render_build_vars;
pub use header::render_header;

/// The two build-consumable artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    BuildVars,
    Header,
}

impl Artifact {
    pub const ALL: [Artifact; 2] = [Artifact::BuildVars, Artifact::Header];

    /// Human-readable name used in banners and messages
    pub fn label(self) -> &'static str {
        match self {
            Artifact::BuildVars => "CMake configuration",
            Artifact::Header => "configuration header",
        }
    }

    pub fn render(self, config: &ResolvedConfiguration) -> String {
        match self {
            Artifact::BuildVars => render_build_vars(config),
            Artifact::Header => render_header(config),
        }
    }
}

/// Render `artifact` and replace the file at `path` with it
pub fn write_artifact(
    artifact: Artifact,
    config: &ResolvedConfiguration,
    path: &Path,
) -> Result<()> {
    let text = artifact.render(config);
    output::write_file(path, &text).map_err(|e| ConfigError::render_io(path, e))
}
