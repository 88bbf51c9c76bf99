use anyhow::Context;
use clap::Parser;
use spec_manager::utils::{logger, validation::Validate};
use spec_manager::{CliConfig, DefaultSpecManager, SpecDocument};

fn summarize(spec: &SpecDocument) -> (String, usize) {
    let version = spec
        .get("openapi")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
        .to_string();
    let path_count = spec
        .get("paths")
        .and_then(|v| v.as_object())
        .map(|paths| paths.len())
        .unwrap_or(0);
    (version, path_count)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting spec-manager");

    let config = cli.resolve().context("failed to resolve configuration")?;
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let manager = DefaultSpecManager::from_config(&config);

    if let Err(e) = manager.on_startup().await {
        tracing::error!("❌ Spec startup failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(if e.is_fatal() { 3 } else { 1 });
    }

    let spec = manager.get_spec()?;

    if cli.print {
        let rendered =
            serde_json::to_string_pretty(spec).context("failed to render loaded spec")?;
        println!("{}", rendered);
    } else {
        let (version, path_count) = summarize(spec);
        let origin = manager
            .origin()
            .map(|o| o.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        println!("✅ OpenAPI spec loaded from {} source", origin);
        println!("📄 openapi {} with {} paths", version, path_count);
    }

    Ok(())
}
