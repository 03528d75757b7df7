//! Symbol module - Resolved configuration symbols

use serde::Deserialize;
use std::fmt;

/// Value type of a configuration symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Bool,
    Tristate,
    Int,
    Hex,
    String,
}

impl SymbolKind {
    /// True for kinds whose value is one of `y`/`m`/`n`
    pub fn is_boolean(self) -> bool {
        matches!(self, SymbolKind::Bool | SymbolKind::Tristate)
    }

    /// True for kinds whose value is emitted verbatim as a number
    pub fn is_numeric(self) -> bool {
        matches!(self, SymbolKind::Int | SymbolKind::Hex)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymbolKind::Bool => "bool",
            SymbolKind::Tristate => "tristate",
            SymbolKind::Int => "int",
            SymbolKind::Hex => "hex",
            SymbolKind::String => "string",
        };
        f.write_str(name)
    }
}

/// A named option together with its resolved textual value.
///
/// `value` is the canonical text: `y`/`m`/`n` for bool and tristate, the digit
/// string for int and hex, and the raw (unquoted, unescaped) text for strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub value: String,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
        }
    }

    /// Bool or tristate symbol set to `y`
    pub fn is_enabled(&self) -> bool {
        self.kind.is_boolean() && self.value == "y"
    }

    /// Tristate symbol set to `m`
    pub fn is_module(&self) -> bool {
        self.kind == SymbolKind::Tristate && self.value == "m"
    }
}

/// Every symbol of a schema, in declaration order, each name at most once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfiguration {
    symbols: Vec<Symbol>,
}

impl ResolvedConfiguration {
    /// Builds a configuration, keeping the first occurrence of a repeated name
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut out: Vec<Symbol> = Vec::new();
        for symbol in symbols {
            if !out.iter().any(|s| s.name == symbol.name) {
                out.push(symbol);
            }
        }
        Self { symbols: out }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResolvedConfiguration {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_declaration_order() {
        let cfg = ResolvedConfiguration::new(vec![
            Symbol::new("ZETA", SymbolKind::Bool, "y"),
            Symbol::new("ALPHA", SymbolKind::Int, "3"),
        ]);
        let names: Vec<_> = cfg.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["ZETA", "ALPHA"]);
    }

    #[test]
    fn drops_repeated_names() {
        let cfg = ResolvedConfiguration::new(vec![
            Symbol::new("A", SymbolKind::Bool, "y"),
            Symbol::new("A", SymbolKind::Bool, "n"),
        ]);
        assert_eq!(cfg.len(), 1);
        assert_eq!(cfg.get("A").unwrap().value, "y");
    }

    #[test]
    fn module_is_not_enabled() {
        let sym = Symbol::new("DRIVER_X", SymbolKind::Tristate, "m");
        assert!(sym.is_module());
        assert!(!sym.is_enabled());
    }
}
