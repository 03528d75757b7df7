//! Configuration module - Fixed names, prefixes and default locations

/// Pico-RTOS release the generated artifacts are stamped with
pub const PICO_RTOS_VERSION: &str = "0.3.0";

/// Tool name written into generated banners
pub const TOOL_NAME: &str = "picoconf";

/// Symbol naming
pub mod symbols {
    /// Prefix for every generated CMake variable and C macro
    pub const PREFIX: &str = "CONFIG_";

    /// Suffix of the macro emitted for tristate symbols set to `m`
    pub const MODULE_SUFFIX: &str = "_MODULE";
}

/// Generated header
pub mod header {
    /// Include guard. `pico_rtos/config.h` already owns `PICO_RTOS_CONFIG_H`.
    pub const GUARD: &str = "PICO_RTOS_GENERATED_CONFIG_H";
}

/// Default file locations, relative to the project root
pub mod files {
    use std::path::PathBuf;

    /// Marker used to discover the project root
    pub const SCHEMA: &str = "Kconfig.toml";

    /// Full override file
    pub fn config() -> PathBuf {
        PathBuf::from(".config")
    }

    /// Build-variable file consumed by CMake
    pub fn build_vars() -> PathBuf {
        PathBuf::from("cmake_config.cmake")
    }

    /// C header consumed by the native build
    pub fn header() -> PathBuf {
        PathBuf::from("include/pico_rtos_config.h")
    }

    /// Where `savedefconfig` writes the minimal override
    pub fn defconfig() -> PathBuf {
        PathBuf::from("defconfig")
    }

    /// Where `defconfig` looks for a minimal override, in order.
    ///
    /// Two locations exist for historical reasons; `config/defconfig` wins.
    // TODO: collapse onto a single canonical defconfig location once the
    // project tree stops shipping both.
    pub fn defconfig_candidates() -> [PathBuf; 2] {
        [PathBuf::from("config/defconfig"), PathBuf::from("defconfig")]
    }
}
