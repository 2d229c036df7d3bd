use anyhow::{anyhow, Result};
use shareit::settings::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logger(log_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

#[rocket::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let settings = Settings::new()?;
    init_logger(&settings.log_level)?;
    tracing::info!(pool_size = settings.pool_size, "starting shareit");

    shareit::build(&settings)
        .launch()
        .await
        .map_err(|err| anyhow!("server failed: {}", err))?;

    Ok(())
}
