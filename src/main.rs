use anyhow::Context;
use clap::Parser;
use service_registrar::config::ResolvedProject;
use service_registrar::core::ProjectModel;
use service_registrar::utils::logger;
use service_registrar::{CliConfig, Command, LocalStorage, RegistrarError, ServiceRegistrar};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 先找到專案，描述檔中的日誌設定才能生效
    let resolved = config.resolve();

    let level = resolved.as_ref().ok().and_then(|r| r.config.log_level());
    logger::init_cli_logger(
        config.verbose,
        level,
        config.effective_log_format(resolved.as_ref().ok()),
    );
    tracing::debug!("CLI config: {:?}", config);

    let resolved = match resolved {
        Ok(resolved) => resolved,
        Err(e) => fail(e),
    };

    if let Err(e) = run(&config, &resolved) {
        match e.downcast::<RegistrarError>() {
            Ok(e) => fail(e),
            Err(other) => return Err(other),
        }
    }

    Ok(())
}

fn run(config: &CliConfig, resolved: &ResolvedProject) -> anyhow::Result<()> {
    let project = config.build_project(resolved);
    tracing::debug!("Project root: {}", project.root().display());

    let storage = LocalStorage::new(project.resource_root());
    let registrar = ServiceRegistrar::new(project, storage);

    match &config.command {
        Command::NewClass {
            interface,
            implementation,
            dry_run: false,
        } => registrar.register(interface, implementation)?,
        Command::NewClass {
            interface,
            implementation,
            dry_run: true,
        } => {
            let preview = registrar.preview(interface, implementation)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(
                stdout,
                "Would {} {}:",
                if preview.file_exists { "update" } else { "create" },
                registrar.project().resource_root().join(&preview.path).display()
            )
            .and_then(|_| writeln!(stdout, "{}", preview.contents))
            .context("failed to print dry-run preview")?;
        }
    }

    Ok(())
}

// 輸出單行錯誤訊息並依嚴重程度決定退出碼
fn fail(e: RegistrarError) -> ! {
    tracing::debug!(
        "Registration failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("Suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
