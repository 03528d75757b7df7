//! Módulo core - Resolução e emissão da configuração

pub mod config;
pub mod dotconfig;
pub mod engine;
pub mod error;
pub mod output;
pub mod paths;
pub mod render;
pub mod schema;
pub mod session;
pub mod symbol;
pub mod utils;

pub use engine::SchemaEngine;
pub use error::ConfigError;
pub use paths::{ArtifactPaths, PathOverrides};
pub use schema::TomlSchemaEngine;
pub use session::{OverrideStatus, SchemaSession};
pub use symbol::{ResolvedConfiguration, Symbol, SymbolKind};
