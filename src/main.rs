use clap::Parser;
use saju_core::utils::{logger, validation::Validate};
use saju_core::{CliConfig, FixtureOracle, ProfileEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting saju-cli");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let oracle = match FixtureOracle::from_path(&config.oracle) {
        Ok(oracle) => oracle,
        Err(e) => {
            eprintln!("❌ Failed to load oracle fixture '{}': {}", config.oracle, e);
            eprintln!("💡 Make sure the file exists and records the queried moments");
            std::process::exit(e.exit_code());
        }
    };
    tracing::debug!("Loaded {} fixture charts from {}", oracle.len(), config.oracle);

    let input = config.birth_input()?;
    let engine = ProfileEngine::new(oracle);

    match engine.calculate(&input) {
        Ok(profile) => {
            tracing::info!("✅ Profile resolved: {}", profile.korean_ganji);
            let json = if config.pretty {
                serde_json::to_string_pretty(&profile)?
            } else {
                serde_json::to_string(&profile)?
            };
            println!("{}", json);
        }
        Err(e) => {
            tracing::error!("❌ Profile calculation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
