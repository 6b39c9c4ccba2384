use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use fake_uber_service::config::resolve_config;
use fake_uber_service::lifecycle;

#[derive(Parser)]
#[command(name = "fake-uber-service", version)]
#[command(about = "Echo service answering every request with a fresh request ID", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            eprintln!("fatal: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> fake_uber_service::Result<()> {
    let config = resolve_config(cli.config.as_deref(), cli.bind)?;
    lifecycle::start(config).await
}
