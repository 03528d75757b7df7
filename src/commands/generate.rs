//! Comando generate - Gera cmake_config.cmake e pico_rtos_config.h a partir do .config

use anyhow::{Context, Result};
use colored::*;

use crate::core::engine::SchemaEngine;
use crate::core::paths::ArtifactPaths;
use crate::core::render::{self, Artifact};
use crate::core::session::SchemaSession;
use crate::core::utils;

use super::report_override;

pub fn run<E: SchemaEngine>(paths: &ArtifactPaths, engine: E, verbose: bool) -> Result<()> {
    println!("{}", "⚙️  Gerando arquivos de configuração...".bright_yellow());

    utils::print_step(&format!("Carregando schema {}", paths.schema.display()));
    let mut session = SchemaSession::load(engine, &paths.schema)
        .context("Failed to load configuration schema")?;

    let status = session
        .apply_override(&paths.config)
        .context("Failed to read configuration")?;
    report_override(&status, verbose);

    emit(&session, paths, verbose)?;

    utils::print_success("Arquivos de configuração gerados:");
    utils::print_file(&paths.build_vars);
    utils::print_file(&paths.header);
    Ok(())
}

/// Write both artifacts from the session's current resolution
fn emit<E: SchemaEngine>(
    session: &SchemaSession<E>,
    paths: &ArtifactPaths,
    verbose: bool,
) -> Result<()> {
    let config = session.symbols();

    for artifact in Artifact::ALL {
        let path = match artifact {
            Artifact::BuildVars => &paths.build_vars,
            Artifact::Header => &paths.header,
        };
        render::write_artifact(artifact, &config, path)
            .with_context(|| format!("Failed to generate {}", artifact.label()))?;

        if verbose {
            utils::print_info(&format!(
                "{} ({} símbolos) → {}",
                artifact.label(),
                config.len(),
                path.display()
            ));
        }
    }

    Ok(())
}
