//! Comando show - Mostra a configuração atual

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::core::config::PICO_RTOS_VERSION;
use crate::core::error::ConfigError;
use crate::core::paths::ArtifactPaths;
use crate::core::utils;

pub fn run(paths: &ArtifactPaths, verbose: bool) -> Result<()> {
    let lines = match config_lines(&paths.config) {
        Ok(lines) => lines,
        Err(e @ ConfigError::ConfigNotFound { .. }) => {
            utils::print_error("Nenhuma configuração encontrada.");
            utils::print_info("Execute 'picoconf defconfig' ou 'make menuconfig' primeiro.");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "{}",
        format!("Pico-RTOS v{} Configuration:", PICO_RTOS_VERSION).bright_cyan()
    );
    println!("{}", "=".repeat(50));
    for line in &lines {
        println!("{}", line);
    }

    if verbose {
        println!();
        utils::print_info(&format!(
            "{} atribuições em {}",
            lines.len(),
            paths.config.display()
        ));
    }

    Ok(())
}

/// Non-comment, non-blank lines of the override file, trimmed
pub fn config_lines(path: &Path) -> Result<Vec<String>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn skips_comments_and_blanks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".config");
        std::fs::write(
            &path,
            "# header\n\nCONFIG_MAX_TASKS=8\n# CONFIG_ENABLE_DEBUG is not set\n\
             \x20 CONFIG_DEVICE_NAME=\"pico\"\n",
        )
        .unwrap();

        assert_eq!(
            config_lines(&path).unwrap(),
            vec!["CONFIG_MAX_TASKS=8", "CONFIG_DEVICE_NAME=\"pico\""]
        );
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let dir = TempDir::new().unwrap();
        let err = config_lines(&dir.path().join(".config")).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigNotFound { .. }));
    }
}
