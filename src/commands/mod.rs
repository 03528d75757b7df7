//! Módulo de comandos do Picoconf

pub mod defconfig;
pub mod env;
pub mod generate;
pub mod savedefconfig;
pub mod show;

use crate::core::session::OverrideStatus;
use crate::core::utils;

/// Report how an override file was applied
fn report_override(status: &OverrideStatus, verbose: bool) {
    match status {
        OverrideStatus::Missing { path } => {
            utils::print_warning(&format!(
                "{} não encontrado, usando os valores padrão do schema",
                path.display()
            ));
        }
        OverrideStatus::Applied {
            path,
            applied,
            skipped,
        } => {
            for reason in skipped {
                utils::print_warning(reason);
            }
            if verbose {
                utils::print_info(&format!("{} valores aplicados de {}", applied, path.display()));
            }
        }
    }
}
