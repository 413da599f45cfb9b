use clap::Parser;
use std::path::PathBuf;
use vitals::commands::{self, Commands};
use vitals::config::VitalsConfig;

#[derive(Parser)]
#[command(name = "vitals")]
#[command(about = "Serve an application/health+json health endpoint", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    vitals::logging::init()?;

    let cli = Cli::parse();
    let config = VitalsConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { bind, path } => commands::serve(config, bind, path).await?,
        Commands::Report { token, pretty } => {
            commands::report(&config, token.as_deref(), pretty).await?
        }
    }

    Ok(())
}
