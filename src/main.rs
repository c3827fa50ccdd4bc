use anyhow::Result;
use guided_tour::{Console, ExampleRunner, TourConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guided_tour=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = TourConfig::from_env()?;
    tracing::info!(pages = config.pages.len(), server = %config.server, "Starting tour");

    let await_background = config.await_background;
    let report = ExampleRunner::standard(config).run(&Console::stdout())?;

    if await_background {
        report.finish().await?;
    } else {
        tracing::debug!(pending = report.pending(), "Leaving background tasks behind");
    }

    Ok(())
}
