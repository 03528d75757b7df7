//! Picoconf - Sistema de configuração do Pico-RTOS
//!
//! Resolve os símbolos de configuração (`Kconfig.toml` + `.config`) e gera os
//! artefatos consumidos pelo build nativo:
//! - `cmake_config.cmake` - variáveis `set(CONFIG_* ...)`
//! - `include/pico_rtos_config.h` - macros `#define CONFIG_* ...`

pub mod commands;
pub mod core;
