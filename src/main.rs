//! Picoconf - Sistema de configuração do Pico-RTOS
//!
//! Materializa a configuração do build: lê o schema (`Kconfig.toml`), aplica o
//! `.config` e gera `cmake_config.cmake` + `include/pico_rtos_config.h`.
//!
//! # Uso
//! ```bash
//! picoconf generate
//! picoconf show
//! picoconf savedefconfig
//! picoconf defconfig
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use picoconf::commands;
use picoconf::core::config::PICO_RTOS_VERSION;
use picoconf::core::paths::{self, ArtifactPaths, PathOverrides};
use picoconf::core::schema::TomlSchemaEngine;

#[derive(Parser)]
#[command(name = "picoconf")]
#[command(about = "🔧 Picoconf - Sistema de configuração do Pico-RTOS", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raiz do projeto (padrão: diretório mais próximo com Kconfig.toml)
    #[arg(long, global = true, env = "PICO_RTOS_ROOT")]
    root: Option<PathBuf>,

    /// Schema de configuração
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    /// Arquivo .config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Arquivo de variáveis CMake gerado
    #[arg(long, global = true)]
    cmake: Option<PathBuf>,

    /// Header C gerado
    #[arg(long, global = true)]
    header: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Mostra a configuração atual (.config)
    Show,

    /// Gera cmake_config.cmake e pico_rtos_config.h
    Generate,

    /// Salva a configuração mínima (defconfig)
    Savedefconfig {
        /// Destino (padrão: <raiz>/defconfig)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Carrega um defconfig e regenera os artefatos
    Defconfig {
        /// Arquivo defconfig (padrão: config/defconfig, depois defconfig)
        file: Option<PathBuf>,
    },

    /// Mostra os caminhos resolvidos
    Env,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Banner
    if !cli.quiet {
        println!(
            "{}",
            format!("🔧 Picoconf - Configuração do Pico-RTOS v{}", PICO_RTOS_VERSION)
                .bright_cyan()
                .bold()
        );
        println!();
    }

    let overrides = PathOverrides {
        schema: cli.schema,
        config: cli.config,
        build_vars: cli.cmake,
        header: cli.header,
    };
    let root = paths::project_root(cli.root.as_deref());
    let paths = ArtifactPaths::resolve(&root, &overrides);

    match cli.command {
        Commands::Show => commands::show::run(&paths, cli.verbose)?,
        Commands::Generate => {
            commands::generate::run(&paths, TomlSchemaEngine::new(), cli.verbose)?
        }
        Commands::Savedefconfig { output } => {
            commands::savedefconfig::run(&paths, TomlSchemaEngine::new(), output, cli.verbose)?
        }
        Commands::Defconfig { file } => {
            commands::defconfig::run(&paths, TomlSchemaEngine::new, file, cli.verbose)?
        }
        Commands::Env => commands::env::run(&paths, cli.verbose)?,
    }

    Ok(())
}
