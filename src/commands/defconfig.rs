//! Comando defconfig - Carrega uma configuração mínima e regenera os artefatos

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::core::engine::SchemaEngine;
use crate::core::error::ConfigError;
use crate::core::paths::ArtifactPaths;
use crate::core::session::SchemaSession;
use crate::core::utils;

use super::{generate, report_override};

/// Load `file` (or the first defconfig candidate), write the full `.config`,
/// then run `generate` against it. `new_engine` is called once per session.
pub fn run<E, F>(
    paths: &ArtifactPaths,
    new_engine: F,
    file: Option<PathBuf>,
    verbose: bool,
) -> Result<()>
where
    E: SchemaEngine,
    F: Fn() -> E,
{
    println!("{}", "📥 Carregando configuração mínima...".bright_yellow());

    let source = match file {
        Some(file) => {
            let path = paths.join(&file);
            if !path.is_file() {
                return Err(ConfigError::ConfigNotFound { path }.into());
            }
            Some(path)
        }
        None => paths.find_defconfig(),
    };

    let mut session = SchemaSession::load(new_engine(), &paths.schema)
        .context("Failed to load configuration schema")?;

    match &source {
        Some(path) => {
            let status = session
                .apply_override(path)
                .context("Failed to read defconfig")?;
            report_override(&status, verbose);
            utils::print_success(&format!("Configuração carregada de {}", path.display()));
        }
        None => {
            let looked: Vec<String> = paths
                .defconfig_candidates()
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            utils::print_warning(&format!(
                "Nenhum defconfig encontrado ({}), usando os valores padrão do schema",
                looked.join(", ")
            ));
        }
    }

    session
        .write_full(&paths.config)
        .context("Failed to write configuration")?;
    utils::print_success(&format!("Configuração salva em {}", paths.config.display()));

    generate::run(paths, new_engine(), verbose)
}
