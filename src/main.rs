use clap::Parser;
use list_builder::config::toml_config::TomlConfig;
use list_builder::utils::{logger, validation::Validate};
use list_builder::{BuildEngine, CliConfig, ListPipeline, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting list-builder CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Optional TOML config file overlays the flags
    if let Some(path) = config.config.clone() {
        match TomlConfig::from_file(&path) {
            Ok(file_config) => {
                if let Err(e) = file_config.validate() {
                    tracing::error!("❌ Config file validation failed: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
                file_config.apply_to(&mut config);
            }
            Err(e) => {
                tracing::error!("❌ Failed to load config file {}: {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // Paths resolve against the working directory, like the build step it
    // replaces
    let storage = LocalStorage::new(".".to_string());
    let pipeline = ListPipeline::new(storage, config);

    let engine = BuildEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ List build completed successfully!");
            println!("✅ List build completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ List build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                list_builder::utils::error::ErrorSeverity::Low => 0,
                list_builder::utils::error::ErrorSeverity::Medium => 2,
                list_builder::utils::error::ErrorSeverity::High => 1,
                list_builder::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
