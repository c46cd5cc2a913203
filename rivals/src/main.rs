mod commands;
mod config;

use anyhow::Context;
use simple_logger::SimpleLogger;

use config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().context("Invalid configuration")?;

    SimpleLogger::new()
        .with_level(config.log_level)
        .init()
        .context("Couldn't install the logger")?;

    let command = std::env::args().nth(1);
    match command.as_deref() {
        None | Some("refresh") => commands::refresh(&config).await,
        Some("show") => commands::show(&config),
        Some(other) => anyhow::bail!("unknown command {other:?}, expected `show` or `refresh`"),
    }
}
