use clap::Parser;
use pin_relay::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pin_relay=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            pin_relay::cli::serve::run(config_path, host, port).await?;
        }
        Some(Commands::Upload(args)) => {
            pin_relay::cli::upload::run(config_path, args).await?;
        }
        Some(Commands::Check) => {
            pin_relay::cli::check::run(config_path).await?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
