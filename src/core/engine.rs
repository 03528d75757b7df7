//! Schema engine interface
//!
//! The engine owns symbol declarations, defaults and value validation. The
//! session and renderers only see it through this trait, so tests can swap in
//! an engine that returns a fixed symbol set.

use std::path::Path;

use crate::core::error::Result;
use crate::core::symbol::{ResolvedConfiguration, Symbol};

/// Capabilities the resolution pipeline needs from a schema engine
pub trait SchemaEngine {
    /// Parse the schema at `path`, discarding any previous state.
    ///
    /// The caller has already checked that `path` exists.
    fn load_schema(&mut self, path: &Path) -> Result<()>;

    /// Assign `value` to `name`. On rejection returns a human-readable reason
    /// and leaves the current value untouched.
    fn set_value(&mut self, name: &str, value: &str) -> std::result::Result<(), String>;

    /// Current value of every symbol, in schema declaration order
    fn symbols(&self) -> ResolvedConfiguration;

    /// Value `name` would have with no assignments applied
    fn default_value(&self, name: &str) -> Option<String>;

    /// Symbols whose current value differs from the computed default
    fn min_config(&self) -> Vec<Symbol> {
        self.symbols()
            .iter()
            .filter(|s| self.default_value(&s.name).as_deref() != Some(s.value.as_str()))
            .cloned()
            .collect()
    }
}
