//! Schema session - One schema load plus the overrides layered on top of it
//!
//! A session lives for a single command. It checks that the schema exists,
//! feeds override files into the engine, and persists the result as a full or
//! minimal override file.

use std::path::{Path, PathBuf};

use crate::core::config::{PICO_RTOS_VERSION, TOOL_NAME};
use crate::core::dotconfig;
use crate::core::engine::SchemaEngine;
use crate::core::error::{ConfigError, Result};
use crate::core::output;
use crate::core::symbol::ResolvedConfiguration;

/// What happened when an override file was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideStatus {
    /// The file was read; `skipped` lists assignments the engine refused
    Applied {
        path: PathBuf,
        applied: usize,
        skipped: Vec<String>,
    },
    /// No file at `path`; values are the schema defaults
    Missing { path: PathBuf },
}

pub struct SchemaSession<E> {
    engine: E,
    loaded_override: Option<PathBuf>,
}

impl<E: SchemaEngine> SchemaSession<E> {
    /// Load the schema at `schema` into `engine`
    pub fn load(mut engine: E, schema: &Path) -> Result<Self> {
        if !schema.is_file() {
            return Err(ConfigError::SchemaNotFound {
                path: schema.to_path_buf(),
            });
        }

        engine.load_schema(schema)?;

        Ok(Self {
            engine,
            loaded_override: None,
        })
    }

    /// Overlay the assignments in `path`. A missing file is not an error.
    pub fn apply_override(&mut self, path: &Path) -> Result<OverrideStatus> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(OverrideStatus::Missing {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(ConfigError::io(path, e)),
        };

        let parsed = dotconfig::parse(&text);
        let mut skipped: Vec<(usize, String)> = parsed
            .malformed
            .iter()
            .map(|m| (m.line, format!("malformed line '{}'", m.text)))
            .collect();

        let mut applied = 0;
        for assignment in &parsed.assignments {
            match self.engine.set_value(&assignment.name, &assignment.value) {
                Ok(()) => applied += 1,
                Err(reason) => {
                    skipped.push((assignment.line, format!("{}: {}", assignment.name, reason)))
                }
            }
        }
        skipped.sort_by_key(|(line, _)| *line);

        self.loaded_override = Some(path.to_path_buf());

        Ok(OverrideStatus::Applied {
            path: path.to_path_buf(),
            applied,
            skipped: skipped
                .into_iter()
                .map(|(line, msg)| format!("{}:{}: ignoring {}", path.display(), line, msg))
                .collect(),
        })
    }

    /// Current resolution, in schema declaration order
    pub fn symbols(&self) -> ResolvedConfiguration {
        self.engine.symbols()
    }

    /// Persist every resolved symbol to `path`
    pub fn write_full(&self, path: &Path) -> Result<()> {
        let banner = [
            format!("Pico-RTOS v{} Configuration", PICO_RTOS_VERSION),
            format!("Automatically generated by {}. Do not edit manually.", TOOL_NAME),
        ];
        let text = dotconfig::format(&banner, &self.engine.symbols());
        output::write_file(path, &text).map_err(|e| ConfigError::io(path, e))
    }

    /// Persist only the symbols that differ from their defaults
    pub fn write_minimal(&self, path: &Path) -> Result<()> {
        if self.loaded_override.is_none() {
            return Err(ConfigError::OverrideNotFound);
        }

        let banner = [
            format!("Pico-RTOS v{} minimal configuration (defconfig)", PICO_RTOS_VERSION),
            format!(
                "Generated by {}. Only values that differ from the defaults are listed.",
                TOOL_NAME
            ),
        ];
        let text = dotconfig::format(&banner, &self.engine.min_config());
        output::write_file(path, &text).map_err(|e| ConfigError::io(path, e))
    }
}
