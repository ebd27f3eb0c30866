pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::{cli::LocalStorage, project::LocalProject, toml_config::TomlConfig};
pub use core::registrar::ServiceRegistrar;
pub use utils::error::{RegistrarError, Result};
