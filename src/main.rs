use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atmos_log::{config::Config, index::AtmosIndex, loader, menu};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atmos_log=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::parse();
    config.validate()?;

    let log = loader::load_from_source_list(&config.data_dir, &config.source_list)
        .context("loading atmosphere logs")?;
    let index = AtmosIndex::build(&log);

    menu::run(&index, &config, io::stdin().lock(), io::stdout().lock())
        .context("running menu")?;
    Ok(())
}
