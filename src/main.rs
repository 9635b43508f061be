// Vault probe - Main Entry Point
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use vault_probe::{EndpointSpec, ProbeConfig, ProbeError, operations, verbosity};

#[derive(Parser)]
#[command(name = "vault-probe")]
#[command(about = "Report selected fields from Vault health and autopilot endpoints", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append every API call to this file
    #[arg(long)]
    api_log: Option<PathBuf>,

    /// Print the endpoint table and exit
    #[arg(long)]
    list_endpoints: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    verbosity::init_logging(cli.verbose);

    match probe(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn probe(cli: Cli) -> Result<(), ProbeError> {
    let spec = EndpointSpec::vault_default();

    if cli.list_endpoints {
        return operations::write_endpoint_list(&spec, &mut std::io::stdout().lock());
    }

    let mut config = ProbeConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.api_log {
        config.logging.api_log_path = Some(path);
        config.validate()?;
    }
    config.log_summary();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let lines = vault_probe::run(|name| std::env::var(name).ok(), &config, &spec, &mut out).await?;
    debug!("🏁 Wrote {} report lines", lines);
    Ok(())
}
