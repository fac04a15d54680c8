use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "brush-of-grace",
    author = "Brush Of Grace Team",
    version,
    about = "Self-hosted art gallery with AI-generated descriptions",
    long_about = "A gallery web application that hosts uploaded images on Imgur, \
                  describes them with the Gemini vision API and persists records in Xano"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the gallery web server
    Run {
        /// Port to bind the web server to
        #[arg(short, long, default_value = "8080")]
        port: u16,
        /// Host to bind the web server to
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Validate the environment configuration and exit
    #[command(name = "check-config")]
    CheckConfig,
}
