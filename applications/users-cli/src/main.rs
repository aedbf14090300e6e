/// Users - print the JSONPlaceholder user directory
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users_cli::{run, CliConfig, Command};
use users_client::UsersClient;

#[derive(Parser)]
#[command(name = "users")]
#[command(about = "Fetch and print users from a JSONPlaceholder-compatible API", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the API (overrides config and USERS_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides config and USERS_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "users_cli=info,users_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    config.merge_overrides(cli.base_url, cli.timeout_secs);
    config.validate()?;

    tracing::debug!(base_url = %config.base_url, timeout_secs = ?config.timeout_secs, "Loaded configuration");

    let client = UsersClient::new(config.client_config())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli.command, &client, &mut out).await?;

    Ok(())
}
