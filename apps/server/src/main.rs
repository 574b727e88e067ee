use anyhow::Context;
use regscope::kernel::prelude::{ApiConfig, load_config};
use regscope_logger::{Logger, parse_level};
use regscope_server::Server;
use std::path::PathBuf;

#[regscope_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    // An explicit path must exist; otherwise `server.*` is optional.
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let cfg: ApiConfig = load_config(path).context("Critical: Configuration is malformed")?;

    let level = parse_level(&cfg.log.level).context("Invalid log level")?;
    let mut logger =
        Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).json(cfg.log.json);
    if let Some(filter) = &cfg.log.env_filter {
        logger = logger.env_filter(filter);
    }
    let _log = match &cfg.log.path {
        Some(dir) => logger.path(dir).init()?,
        None => logger.init()?,
    };

    Server::builder().config(cfg).build()?.run().await
}
