mod serve;

use clap::{Parser, Subcommand};
use smartsdlc_core::{Config, FeedbackStore, FileFeedbackStore};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "smartsdlc")]
#[command(about = "AI-assisted SDLC backend", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the default configuration file
    Config,
    /// List stored feedback
    Feedback,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose when set
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve { host, port } => {
            let mut config = Config::load()?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve::start_server(config).await?;
        }
        Commands::Config => {
            print!("{}", Config::default_config_string());
        }
        Commands::Feedback => {
            let config = Config::load()?;
            let store = FileFeedbackStore::with_config(&config.storage);
            let records = store.load_all()?;

            if records.is_empty() {
                println!("No feedback found in {}", store.path().display());
                return Ok(());
            }

            for record in &records {
                println!(
                    "{}  [{}/5] {}: {}",
                    record.timestamp.format("%Y-%m-%d %H:%M"),
                    record.rating,
                    record.name,
                    record.feedback
                );
            }
            println!("\n{} entries", records.len());
        }
    }

    Ok(())
}
