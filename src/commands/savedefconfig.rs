//! Comando savedefconfig - Salva a configuração mínima (defconfig)

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::core::engine::SchemaEngine;
use crate::core::error::ConfigError;
use crate::core::paths::ArtifactPaths;
use crate::core::session::{OverrideStatus, SchemaSession};
use crate::core::utils;

use super::report_override;

pub fn run<E: SchemaEngine>(
    paths: &ArtifactPaths,
    engine: E,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    println!("{}", "💾 Salvando configuração mínima...".bright_yellow());

    let target = output
        .map(|p| paths.join(&p))
        .unwrap_or_else(|| paths.defconfig());

    let mut session = SchemaSession::load(engine, &paths.schema)
        .context("Failed to load configuration schema")?;

    let status = session
        .apply_override(&paths.config)
        .context("Failed to read configuration")?;
    if let OverrideStatus::Missing { path } = &status {
        utils::print_info("Execute 'picoconf defconfig' ou 'make menuconfig' primeiro.");
        return Err(ConfigError::ConfigNotFound { path: path.clone() }.into());
    }
    report_override(&status, verbose);

    session
        .write_minimal(&target)
        .context("Failed to save minimal configuration")?;

    utils::print_success(&format!(
        "Configuração mínima salva em {}",
        target.display()
    ));
    Ok(())
}
