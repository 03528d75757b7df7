//! Override file format (`.config` / `defconfig`)
//!
//! One `CONFIG_<NAME>=<value>` assignment per line. Disabled bool and tristate
//! symbols use the `# CONFIG_<NAME> is not set` form; every other `#` line is a
//! comment. String values are double-quoted with `\` and `"` escaped.

use crate::core::config::symbols::PREFIX;
use crate::core::symbol::{Symbol, SymbolKind};

/// A single `name=value` assignment read from an override file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Symbol name without the `CONFIG_` prefix
    pub name: String,
    /// Unquoted, unescaped value
    pub value: String,
    /// 1-based line number
    pub line: usize,
}

/// A line that is neither a comment nor a valid assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Malformed {
    pub line: usize,
    pub text: String,
}

/// Result of reading an override file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideFile {
    pub assignments: Vec<Assignment>,
    pub malformed: Vec<Malformed>,
}

/// Parse override file text
pub fn parse(text: &str) -> OverrideFile {
    let mut out = OverrideFile::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            continue;
        }

        if let Some(comment) = trimmed.strip_prefix('#') {
            if let Some(name) = parse_not_set(comment.trim()) {
                out.assignments.push(Assignment {
                    name,
                    value: "n".to_string(),
                    line,
                });
            }
            continue;
        }

        match parse_assignment(trimmed) {
            Some((name, value)) => out.assignments.push(Assignment { name, value, line }),
            None => out.malformed.push(Malformed {
                line,
                text: trimmed.to_string(),
            }),
        }
    }

    out
}

fn parse_not_set(comment: &str) -> Option<String> {
    let name = comment.strip_suffix(" is not set")?;
    let name = name.strip_prefix(PREFIX)?;
    is_valid_name(name).then(|| name.to_string())
}

fn parse_assignment(line: &str) -> Option<(String, String)> {
    let (name, value) = line.split_once('=')?;
    let name = name.trim();
    let name = name.strip_prefix(PREFIX).unwrap_or(name);
    if !is_valid_name(name) {
        return None;
    }

    let value = value.trim();
    let value = if value.starts_with('"') {
        unquote(value)?
    } else {
        value.to_string()
    };

    Some((name.to_string(), value))
}

/// Symbol names are non-empty runs of ASCII letters, digits and `_`
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Escape `\` and `"` for use inside a double-quoted value
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Strip surrounding quotes and undo [`escape`]. `None` if the quote is unterminated
/// or followed by trailing text.
fn unquote(value: &str) -> Option<String> {
    let mut chars = value.strip_prefix('"')?.chars();
    let mut out = String::new();

    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push(chars.next()?),
            '"' => {
                return chars.as_str().trim().is_empty().then_some(out);
            }
            _ => out.push(c),
        }
    }

    None
}

/// Render one symbol as an override line
pub fn format_symbol(symbol: &Symbol) -> String {
    match symbol.kind {
        SymbolKind::Bool | SymbolKind::Tristate if symbol.value == "n" => {
            format!("# {}{} is not set", PREFIX, symbol.name)
        }
        SymbolKind::String => format!("{}{}=\"{}\"", PREFIX, symbol.name, escape(&symbol.value)),
        _ => format!("{}{}={}", PREFIX, symbol.name, symbol.value),
    }
}

/// Render a whole override file: banner comment lines, then one line per symbol
pub fn format<'a>(banner: &[String], symbols: impl IntoIterator<Item = &'a Symbol>) -> String {
    let mut out = String::new();
    for line in banner {
        out.push_str("# ");
        out.push_str(line);
        out.push('\n');
    }
    for symbol in symbols {
        out.push_str(&format_symbol(symbol));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_prefixed_and_bare_names() {
        let parsed = parse("CONFIG_MAX_TASKS=16\nBUILD_EXAMPLES=y\n");
        let names: Vec<_> = parsed.assignments.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["MAX_TASKS", "BUILD_EXAMPLES"]);
        assert_eq!(parsed.assignments[0].value, "16");
        assert!(parsed.malformed.is_empty());
    }

    #[test]
    fn not_set_comment_reads_as_n() {
        let parsed = parse("# Pico-RTOS\n# CONFIG_ENABLE_DEBUG is not set\n# just a comment\n");
        assert_eq!(
            parsed.assignments,
            vec![Assignment {
                name: "ENABLE_DEBUG".to_string(),
                value: "n".to_string(),
                line: 2,
            }]
        );
    }

    #[test]
    fn unescapes_quoted_strings() {
        let parsed = parse(r#"CONFIG_DEVICE_NAME="pi\"co\\board""#);
        assert_eq!(parsed.assignments[0].value, r#"pi"co\board"#);
    }

    #[test]
    fn reports_malformed_lines() {
        let parsed = parse("CONFIG_OK=1\nnot an assignment\nCONFIG_BAD=\"open\n");
        assert_eq!(parsed.assignments.len(), 1);
        let lines: Vec<_> = parsed.malformed.iter().map(|m| m.line).collect();
        assert_eq!(lines, vec![2, 3]);
    }

    #[test]
    fn formats_each_kind() {
        let symbols = vec![
            Symbol::new("A", SymbolKind::Bool, "y"),
            Symbol::new("B", SymbolKind::Tristate, "n"),
            Symbol::new("C", SymbolKind::Hex, "0x20"),
            Symbol::new("D", SymbolKind::String, "say \"hi\""),
        ];
        let text = format(&["banner".to_string()], &symbols);
        assert_eq!(
            text,
            "# banner\nCONFIG_A=y\n# CONFIG_B is not set\nCONFIG_C=0x20\n\
             CONFIG_D=\"say \\\"hi\\\"\"\n"
        );
    }

    #[test]
    fn formatted_file_reads_back() {
        let symbols = vec![
            Symbol::new("FLAG", SymbolKind::Bool, "n"),
            Symbol::new("NAME", SymbolKind::String, r"a\b"),
        ];
        let parsed = parse(&format(&[], &symbols));
        let values: Vec<_> = parsed.assignments.iter().map(|a| a.value.as_str()).collect();
        assert_eq!(values, vec!["n", r"a\b"]);
    }
}
