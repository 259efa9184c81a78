use anyhow::Context;
use clap::Parser;
use secret_santa::core::DrawSettings;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{render, CliConfig, DrawEngine, SantaError, Session, Settings, TomlConfig};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 載入 TOML 配置 (選用)
    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let loaded = match TomlConfig::from_file(path) {
                Ok(loaded) => loaded,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}'", path.display());
                    exit_with(&e);
                }
            };
            if let Err(e) = loaded.validate() {
                exit_with(&e);
            }
            Some(loaded)
        }
        None => None,
    };

    let settings = match Settings::resolve(
        file_config.as_ref().map(|c| c as &dyn DrawSettings),
        config.overrides(),
    ) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = settings.validate() {
        exit_with(&e);
    }

    if settings.is_interactive() {
        tracing::info!("⌨️ No participant list supplied, starting interactive mode");
        let stdin = io::stdin();
        let mut session = Session::new(stdin.lock(), io::stdout(), settings.session_options());
        session.run().context("interactive session failed")?;
        return Ok(());
    }

    let engine = DrawEngine::new(settings);
    match engine.run() {
        Ok(assignment) => {
            let output = render(&assignment, engine.settings().output_format())
                .context("failed to render assignments")?;
            println!("{}", output);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &SantaError) -> ! {
    tracing::error!(
        "❌ Draw failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
