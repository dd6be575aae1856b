use anyhow::Context;
use vinewood_domain::config::AppConfig;
use vinewood_kernel::config::load_config;
use vinewood_logger::{Logger, parse_level};
use vinewood_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: AppConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg)?;

    Server::builder().config(cfg).build()?.run().await
}

fn init_logger(cfg: &AppConfig) -> anyhow::Result<Logger> {
    let logging = &cfg.logging;

    let mut builder = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .level(parse_level(&logging.level).context("Invalid [logging] level")?);
    if let Some(filter) = &logging.filter {
        builder = builder.env_filter(filter);
    }

    let logger = match &logging.path {
        Some(dir) => builder.path(dir).json(logging.json).init(),
        None => builder.init(),
    };
    logger.context("Failed to initialize logging")
}
