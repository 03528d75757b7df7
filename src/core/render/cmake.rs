//! Build-variable renderer (`cmake_config.cmake`)

use crate::core::config::symbols::PREFIX;
use crate::core::config::{PICO_RTOS_VERSION, TOOL_NAME};
use crate::core::dotconfig::escape;
use crate::core::symbol::{ResolvedConfiguration, Symbol, SymbolKind};

/// Render one `set()` line per symbol
pub fn render_build_vars(config: &ResolvedConfiguration) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# Generated CMake configuration for Pico-RTOS v{}\n",
        PICO_RTOS_VERSION
    ));
    out.push_str(&format!(
        "# This file is auto-generated by {}. Do not edit manually.\n\n",
        TOOL_NAME
    ));

    for symbol in config {
        out.push_str(&set_line(symbol));
        out.push('\n');
    }

    out
}

fn set_line(symbol: &Symbol) -> String {
    let value = match symbol.kind {
        SymbolKind::Bool | SymbolKind::Tristate => {
            (if symbol.is_enabled() { "ON" } else { "OFF" }).to_string()
        }
        SymbolKind::Int | SymbolKind::Hex => symbol.value.clone(),
        SymbolKind::String => format!("\"{}\"", escape(&symbol.value)),
    };
    format!("set({}{} {})", PREFIX, symbol.name, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_each_kind() {
        let config = ResolvedConfiguration::new(vec![
            Symbol::new("BUILD_EXAMPLES", SymbolKind::Bool, "y"),
            Symbol::new("BUILD_TESTS", SymbolKind::Bool, "n"),
            Symbol::new("DRIVER_X", SymbolKind::Tristate, "m"),
            Symbol::new("MAX_TASKS", SymbolKind::Int, "8"),
            Symbol::new("HEAP_BASE", SymbolKind::Hex, "0x20000000"),
            Symbol::new("DEVICE_NAME", SymbolKind::String, "pico"),
        ]);

        let text = render_build_vars(&config);
        let body: Vec<_> = text.lines().skip(3).collect();
        assert_eq!(
            body,
            vec![
                "set(CONFIG_BUILD_EXAMPLES ON)",
                "set(CONFIG_BUILD_TESTS OFF)",
                "set(CONFIG_DRIVER_X OFF)",
                "set(CONFIG_MAX_TASKS 8)",
                "set(CONFIG_HEAP_BASE 0x20000000)",
                "set(CONFIG_DEVICE_NAME \"pico\")",
            ]
        );
    }

    #[test]
    fn opens_with_banner() {
        let text = render_build_vars(&ResolvedConfiguration::default());
        assert!(text.starts_with("# Generated CMake configuration for Pico-RTOS v0.3.0\n"));
        assert!(text.contains("Do not edit manually."));
    }

    #[test]
    fn quotes_in_strings_are_escaped() {
        let config = ResolvedConfiguration::new(vec![Symbol::new(
            "BANNER",
            SymbolKind::String,
            "say \"hi\"",
        )]);
        assert!(render_build_vars(&config).contains(r#"set(CONFIG_BANNER "say \"hi\"")"#));
    }
}
