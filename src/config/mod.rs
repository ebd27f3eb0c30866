pub mod cli;
pub mod project;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::args::{CliConfig, Command, ResolvedProject};

#[cfg(feature = "cli")]
mod args {
    use super::project::{find_project_root, LocalProject};
    use super::toml_config::{TomlConfig, DESCRIPTOR_FILE};
    use crate::utils::error::{RegistrarError, Result};
    use crate::utils::logger::LogFormat;
    use crate::utils::validation::{validate_path, Validate};
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "serviceloader")]
    #[command(about = "Register service implementations in META-INF/services")]
    pub struct CliConfig {
        /// Directory inside the project (defaults to the current directory)
        #[arg(long, global = true)]
        pub project_dir: Option<PathBuf>,

        /// Explicit descriptor file instead of <project>/serviceloader.toml
        #[arg(long, global = true)]
        pub config: Option<PathBuf>,

        /// Source root, relative to the project root
        #[arg(long, global = true)]
        pub source_dir: Option<String>,

        /// Resource root, relative to the project root
        #[arg(long, global = true)]
        pub resource_dir: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        /// compact or json
        #[arg(long, global = true)]
        pub log_format: Option<LogFormat>,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Declare an existing class as an implementation of an interface
        #[command(name = "new-class")]
        NewClass {
            /// Fully-qualified interface name
            #[arg(short = 'i', long = "interface")]
            interface: String,

            /// Fully-qualified implementation class name
            #[arg(short = 'm', long = "implementation")]
            implementation: String,

            /// Show what would be written without touching any file
            #[arg(long)]
            dry_run: bool,
        },
    }

    /// 已找到的專案根目錄與其描述檔配置
    #[derive(Debug, Clone)]
    pub struct ResolvedProject {
        pub root: PathBuf,
        pub config: TomlConfig,
    }

    impl CliConfig {
        /// 尋找專案根目錄並載入 serviceloader.toml (若存在)
        pub fn resolve(&self) -> Result<ResolvedProject> {
            self.validate()?;

            let start = match &self.project_dir {
                Some(dir) => dir.clone(),
                None => std::env::current_dir().map_err(|e| RegistrarError::config_io(".", e))?,
            };
            let start = start
                .canonicalize()
                .map_err(|e| RegistrarError::config_io(&start, e))?;

            let root = find_project_root(&start)?;

            let descriptor = match &self.config {
                Some(path) => Some(path.clone()),
                None => Some(root.join(DESCRIPTOR_FILE)).filter(|p| p.is_file()),
            };

            let config = match descriptor {
                Some(path) => {
                    tracing::debug!("Loading descriptor {}", path.display());
                    TomlConfig::from_file(&path)?
                }
                None => TomlConfig::default(),
            };
            config.validate()?;

            Ok(ResolvedProject { root, config })
        }

        /// 命令列參數優先於描述檔
        pub fn build_project(&self, resolved: &ResolvedProject) -> LocalProject {
            let mut project = LocalProject::from_config(&resolved.root, &resolved.config);
            if let Some(dir) = &self.source_dir {
                project = project.with_source_dir(dir);
            }
            if let Some(dir) = &self.resource_dir {
                project = project.with_resource_dir(dir);
            }
            project
        }

        pub fn effective_log_format(&self, resolved: Option<&ResolvedProject>) -> LogFormat {
            self.log_format
                .or_else(|| resolved.and_then(|r| r.config.log_format().ok()))
                .unwrap_or_default()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(dir) = &self.source_dir {
                validate_path("source_dir", dir)?;
            }
            if let Some(dir) = &self.resource_dir {
                validate_path("resource_dir", dir)?;
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_new_class_with_short_options() {
            let cli = CliConfig::try_parse_from([
                "serviceloader",
                "new-class",
                "-i",
                "com.foo.Bar",
                "-m",
                "com.foo.BarImpl",
            ])
            .unwrap();

            match cli.command {
                Command::NewClass {
                    interface,
                    implementation,
                    dry_run,
                } => {
                    assert_eq!(interface, "com.foo.Bar");
                    assert_eq!(implementation, "com.foo.BarImpl");
                    assert!(!dry_run);
                }
            }
            assert!(!cli.verbose);
            assert!(cli.project_dir.is_none());
        }

        #[test]
        fn test_global_options_after_subcommand() {
            let cli = CliConfig::try_parse_from([
                "serviceloader",
                "new-class",
                "--interface",
                "com.foo.Bar",
                "--implementation",
                "com.foo.BarImpl",
                "--dry-run",
                "--verbose",
                "--log-format",
                "json",
                "--resource-dir",
                "res",
            ])
            .unwrap();

            assert!(cli.verbose);
            assert_eq!(cli.log_format, Some(LogFormat::Json));
            assert_eq!(cli.resource_dir.as_deref(), Some("res"));
            assert!(matches!(cli.command, Command::NewClass { dry_run: true, .. }));
        }

        #[test]
        fn test_both_names_are_required() {
            assert!(CliConfig::try_parse_from(["serviceloader", "new-class", "-i", "com.foo.Bar"]).is_err());
            assert!(CliConfig::try_parse_from(["serviceloader", "new-class", "-m", "com.foo.BarImpl"]).is_err());
        }

        #[test]
        fn test_empty_override_is_rejected() {
            let cli = CliConfig::try_parse_from([
                "serviceloader",
                "--source-dir",
                "",
                "new-class",
                "-i",
                "com.foo.Bar",
                "-m",
                "com.foo.BarImpl",
            ])
            .unwrap();
            assert!(cli.validate().is_err());
        }
    }
}
