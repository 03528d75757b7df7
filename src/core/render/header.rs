//! Header renderer (`include/pico_rtos_config.h`)
//!
//! Disabled options become commented `#undef` lines rather than real
//! directives. A tristate set to `m` defines `<NAME>_MODULE` and leaves the
//! base macro undefined.

use crate::core::config::header::GUARD;
use crate::core::config::symbols::{MODULE_SUFFIX, PREFIX};
use crate::core::config::{PICO_RTOS_VERSION, TOOL_NAME};
use crate::core::dotconfig::escape;
use crate::core::symbol::{ResolvedConfiguration, Symbol, SymbolKind};

/// Render the include-guarded header
pub fn render_header(config: &ResolvedConfiguration) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "/* Generated configuration header for Pico-RTOS v{} */\n",
        PICO_RTOS_VERSION
    ));
    out.push_str(&format!(
        "/* This file is auto-generated by {}. Do not edit manually. */\n\n",
        TOOL_NAME
    ));
    out.push_str(&format!("#ifndef {}\n#define {}\n\n", GUARD, GUARD));

    for symbol in config {
        out.push_str(&macro_line(symbol));
        out.push('\n');
    }

    out.push_str(&format!("\n#endif /* {} */\n", GUARD));
    out
}

fn macro_line(symbol: &Symbol) -> String {
    let name = format!("{}{}", PREFIX, symbol.name);
    match symbol.kind {
        SymbolKind::Bool | SymbolKind::Tristate if symbol.is_enabled() => {
            format!("#define {} 1", name)
        }
        SymbolKind::Tristate if symbol.is_module() => {
            format!("#define {}{} 1", name, MODULE_SUFFIX)
        }
        SymbolKind::Bool | SymbolKind::Tristate => format!("/* #undef {} */", name),
        SymbolKind::Int | SymbolKind::Hex => format!("#define {} {}", name, symbol.value),
        SymbolKind::String => format!("#define {} \"{}\"", name, escape(&symbol.value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_full_header() {
        let config = ResolvedConfiguration::new(vec![
            Symbol::new("BUILD_EXAMPLES", SymbolKind::Bool, "y"),
            Symbol::new("ENABLE_DEBUG", SymbolKind::Bool, "n"),
            Symbol::new("MAX_TASKS", SymbolKind::Int, "8"),
            Symbol::new("DEVICE_NAME", SymbolKind::String, "pico"),
        ]);

        assert_eq!(
            render_header(&config),
            "/* Generated configuration header for Pico-RTOS v0.3.0 */\n\
             /* This file is auto-generated by picoconf. Do not edit manually. */\n\
             \n\
             #ifndef PICO_RTOS_GENERATED_CONFIG_H\n\
             #define PICO_RTOS_GENERATED_CONFIG_H\n\
             \n\
             #define CONFIG_BUILD_EXAMPLES 1\n\
             /* #undef CONFIG_ENABLE_DEBUG */\n\
             #define CONFIG_MAX_TASKS 8\n\
             #define CONFIG_DEVICE_NAME \"pico\"\n\
             \n\
             #endif /* PICO_RTOS_GENERATED_CONFIG_H */\n"
        );
    }

    #[test]
    fn tristate_module_gets_its_own_macro() {
        let config = ResolvedConfiguration::new(vec![
            Symbol::new("DRIVER_X", SymbolKind::Tristate, "m"),
            Symbol::new("DRIVER_Y", SymbolKind::Tristate, "y"),
            Symbol::new("DRIVER_Z", SymbolKind::Tristate, "n"),
        ]);
        let text = render_header(&config);
        assert!(text.contains("#define CONFIG_DRIVER_X_MODULE 1\n"));
        assert!(!text.contains("#define CONFIG_DRIVER_X 1"));
        assert!(text.contains("#define CONFIG_DRIVER_Y 1\n"));
        assert!(text.contains("/* #undef CONFIG_DRIVER_Z */\n"));
    }

    #[test]
    fn hex_values_are_verbatim() {
        let config = ResolvedConfiguration::new(vec![Symbol::new(
            "HEAP_BASE",
            SymbolKind::Hex,
            "0x20000000",
        )]);
        assert!(render_header(&config).contains("#define CONFIG_HEAP_BASE 0x20000000\n"));
    }
}
