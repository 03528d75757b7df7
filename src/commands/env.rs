//! Comando env - Mostra onde cada arquivo de configuração é procurado/gerado
use anyhow::Result;
use colored::*;

use crate::core::config::PICO_RTOS_VERSION;
use crate::core::paths::ArtifactPaths;
use crate::core::utils;

pub fn run(paths: &ArtifactPaths, verbose: bool) -> Result<()> {
    println!("{}", "🔧 Ambiente de configuração:".bright_cyan());
    println!();

    utils::print_path("Raiz", &paths.root);
    utils::print_path("Schema", &paths.schema);
    utils::print_path(".config", &paths.config);
    utils::print_path("CMake", &paths.build_vars);
    utils::print_path("Header", &paths.header);

    println!();
    match paths.find_defconfig() {
        Some(path) => utils::print_info(&format!("defconfig em uso: {}", path.display())),
        None => utils::print_warning("Nenhum defconfig encontrado"),
    }

    if verbose {
        for candidate in paths.defconfig_candidates() {
            utils::print_path("candidato", &candidate);
        }
        utils::print_path("savedefconfig", &paths.defconfig());
        println!();
        utils::print_info(&format!("Pico-RTOS v{}", PICO_RTOS_VERSION));
    }

    Ok(())
}
