//! Bundled schema engine backed by a TOML schema file
//!
//! ```toml
//! [[config]]
//! name = "MAX_TASKS"
//! type = "int"
//! default = 8
//! range = [1, 64]
//! ```
//!
//! Declarations are resolved in file order. Editor-only keys such as `prompt`
//! and `help` are accepted and ignored. Dependencies and choice groups are not
//! modeled: every symbol is always visible and defaults are static.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::dotconfig::is_valid_name;
use crate::core::engine::SchemaEngine;
use crate::core::error::{ConfigError, Result};
use crate::core::symbol::{ResolvedConfiguration, Symbol, SymbolKind};

#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(default, rename = "config")]
    configs: Vec<SymbolDecl>,
}

#[derive(Debug, Deserialize)]
struct SymbolDecl {
    name: String,
    #[serde(rename = "type")]
    kind: SymbolKind,
    #[serde(default)]
    default: Option<DefaultValue>,
    #[serde(default)]
    range: Option<[i64; 2]>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DefaultValue {
    Bool(bool),
    Integer(i64),
    Text(String),
}

#[derive(Debug, Clone)]
struct Declaration {
    name: String,
    kind: SymbolKind,
    default: String,
    range: Option<(i64, i64)>,
    value: String,
}

/// [`SchemaEngine`] reading `Kconfig.toml`-style schemas
#[derive(Debug, Default)]
pub struct TomlSchemaEngine {
    decls: Vec<Declaration>,
}

impl TomlSchemaEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load schema text directly; `origin` is only used in error messages
    pub fn load_str(&mut self, text: &str, origin: &Path) -> Result<()> {
        let file: SchemaFile = toml::from_str(text).map_err(|e| ConfigError::SchemaParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

        let invalid = |message: String| ConfigError::SchemaInvalid {
            path: origin.to_path_buf(),
            message,
        };

        let mut decls: Vec<Declaration> = Vec::with_capacity(file.configs.len());
        for decl in file.configs {
            if !is_valid_name(&decl.name) {
                return Err(invalid(format!("invalid symbol name '{}'", decl.name)));
            }
            if decls.iter().any(|d| d.name == decl.name) {
                return Err(invalid(format!("symbol '{}' declared twice", decl.name)));
            }

            let range = match decl.range {
                None => None,
                Some(_) if !decl.kind.is_numeric() => {
                    return Err(invalid(format!(
                        "symbol '{}': range is only allowed on int and hex symbols",
                        decl.name
                    )));
                }
                Some([low, high]) if low > high => {
                    return Err(invalid(format!(
                        "symbol '{}': empty range [{}, {}]",
                        decl.name, low, high
                    )));
                }
                Some([low, high]) => Some((low, high)),
            };

            let default = default_text(decl.kind, decl.default.as_ref(), range)
                .and_then(|text| check_value(decl.kind, range, &text))
                .map_err(|reason| invalid(format!("symbol '{}': default {}", decl.name, reason)))?;

            decls.push(Declaration {
                name: decl.name,
                kind: decl.kind,
                value: default.clone(),
                default,
                range,
            });
        }

        self.decls = decls;
        Ok(())
    }

    fn find(&self, name: &str) -> Option<&Declaration> {
        self.decls.iter().find(|d| d.name == name)
    }
}

impl SchemaEngine for TomlSchemaEngine {
    fn load_schema(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::SchemaNotFound {
                path: PathBuf::from(path),
            },
            _ => ConfigError::io(path, e),
        })?;
        self.load_str(&text, path)
    }

    fn set_value(&mut self, name: &str, value: &str) -> std::result::Result<(), String> {
        let decl = self
            .decls
            .iter_mut()
            .find(|d| d.name == name)
            .ok_or_else(|| format!("unknown symbol '{}'", name))?;
        decl.value = check_value(decl.kind, decl.range, value)?;
        Ok(())
    }

    fn symbols(&self) -> ResolvedConfiguration {
        ResolvedConfiguration::new(
            self.decls
                .iter()
                .map(|d| Symbol::new(d.name.clone(), d.kind, d.value.clone())),
        )
    }

    fn default_value(&self, name: &str) -> Option<String> {
        self.find(name).map(|d| d.default.clone())
    }
}

/// Text form of a declared default, before validation
fn default_text(
    kind: SymbolKind,
    default: Option<&DefaultValue>,
    range: Option<(i64, i64)>,
) -> std::result::Result<String, String> {
    let text = match (kind, default) {
        (SymbolKind::Bool | SymbolKind::Tristate, None) => "n".to_string(),
        (SymbolKind::Bool | SymbolKind::Tristate, Some(DefaultValue::Bool(b))) => {
            (if *b { "y" } else { "n" }).to_string()
        }
        (SymbolKind::Int, None) => zero_in(range).to_string(),
        (SymbolKind::Int, Some(DefaultValue::Integer(n))) => n.to_string(),
        (SymbolKind::Hex, None) => format!("0x{:x}", zero_in(range)),
        (SymbolKind::Hex, Some(DefaultValue::Integer(n))) => {
            if *n < 0 {
                return Err(format!("{} is negative", n));
            }
            format!("0x{:x}", n)
        }
        (SymbolKind::String, None) => String::new(),
        (_, Some(DefaultValue::Text(text))) => text.clone(),
        (kind, Some(_)) => return Err(format!("has the wrong type for a {} symbol", kind)),
    };
    Ok(text)
}

/// Zero, pulled into `range` when it lies outside
fn zero_in(range: Option<(i64, i64)>) -> i64 {
    range.map_or(0, |(low, high)| 0i64.clamp(low, high))
}

/// Validate `value` for a symbol of `kind`, returning its canonical text
fn check_value(
    kind: SymbolKind,
    range: Option<(i64, i64)>,
    value: &str,
) -> std::result::Result<String, String> {
    let trimmed = value.trim();
    match kind {
        SymbolKind::Bool => match trimmed {
            "y" | "n" => Ok(trimmed.to_string()),
            _ => Err(format!("'{}' is not a bool value (expected y or n)", trimmed)),
        },
        SymbolKind::Tristate => match trimmed {
            "y" | "m" | "n" => Ok(trimmed.to_string()),
            _ => Err(format!("'{}' is not a tristate value (expected y, m or n)", trimmed)),
        },
        SymbolKind::Int => {
            let n: i64 = trimmed
                .parse()
                .map_err(|_| format!("'{}' is not a decimal integer", trimmed))?;
            check_range(n, range, trimmed)?;
            Ok(n.to_string())
        }
        SymbolKind::Hex => {
            let digits = trimmed
                .strip_prefix("0x")
                .or_else(|| trimmed.strip_prefix("0X"))
                .unwrap_or(trimmed);
            let n = i64::from_str_radix(digits, 16)
                .ok()
                .filter(|_| !digits.starts_with(['+', '-']))
                .ok_or_else(|| format!("'{}' is not a hex value", trimmed))?;
            check_range(n, range, trimmed)?;
            Ok(format!("0x{:x}", n))
        }
        // Quoted values must stay on one line in every output format
        SymbolKind::String => match value.chars().find(|c| c.is_control()) {
            Some(c) => Err(format!("{:?} contains the control character {:?}", value, c)),
            None => Ok(value.to_string()),
        },
    }
}

fn check_range(n: i64, range: Option<(i64, i64)>, text: &str) -> std::result::Result<(), String> {
    match range {
        Some((low, high)) if n < low || n > high => Err(format!(
            "{} is outside the allowed range [{}, {}]",
            text, low, high
        )),
        _ => Ok(()),
    }
}
