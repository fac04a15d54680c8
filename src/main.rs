mod cli;

use crate::cli::{Cli, Commands};
use clap::Parser;
use tracing::{error, info};

use brush_of_grace::application::use_cases::RunApplicationUseCase;
use brush_of_grace::config::GalleryConfig;
use brush_of_grace::debug::{DebugConfig, init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let debug_config = DebugConfig::default();
    if let Err(e) = init_logging(&debug_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { port, host } => {
            info!("Starting application...");

            // 設定は起動時に一度だけ検証する
            let config = match GalleryConfig::from_env() {
                Ok(config) => config,
                Err(e) => {
                    error!("Configuration error: {}", e);
                    eprintln!("❌ {e}");
                    std::process::exit(1);
                }
            };

            let use_case = RunApplicationUseCase::new(config);
            match use_case.execute(host, port).await {
                Ok(_) => {
                    info!("Application terminated normally");
                }
                Err(e) => {
                    error!("Application failed: {}", e);
                    eprintln!("❌ Application failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::CheckConfig => match GalleryConfig::from_env() {
            Ok(config) => {
                println!("✅ Configuration is valid.");
                if config.contact_form_endpoint.is_none() {
                    println!("⚠️  CONTACT_FORM_ENDPOINT is not set; the contact form is disabled.");
                }
                if config.admin_password.is_none() {
                    println!("⚠️  UPLOAD_PASSWORD is not set; admin login is disabled.");
                }
            }
            Err(e) => {
                eprintln!("❌ {e}");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
