//! Error types for configuration resolution and emission

use std::path::PathBuf;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading, resolving or emitting a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The schema file does not exist. Nothing can be resolved without it.
    #[error("Kconfig schema not found at {}", path.display())]
    SchemaNotFound { path: PathBuf },

    /// The schema exists but is not valid TOML or does not match the expected layout
    #[error("Failed to parse schema {}: {message}", path.display())]
    SchemaParse { path: PathBuf, message: String },

    /// The schema parsed but declares something inconsistent
    #[error("Invalid schema {}: {message}", path.display())]
    SchemaInvalid { path: PathBuf, message: String },

    /// A command needs an override file that is not there
    #[error("Configuration not found at {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// A minimal override was requested before any override was loaded
    #[error("No override file has been loaded; nothing to minimize")]
    OverrideNotFound,

    /// Writing a generated artifact failed
    #[error("Failed to write {}: {source}", path.display())]
    RenderIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other filesystem failure
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn render_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RenderIo {
            path: path.into(),
            source,
        }
    }
}
