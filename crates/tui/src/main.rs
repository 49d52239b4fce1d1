use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let config = stocktally_tui::Config::from_env().context("invalid configuration")?;
    stocktally_observability::init(&config.log).context("failed to initialize logging")?;

    tracing::info!(currency = %config.currency, "starting");
    stocktally_tui::run(&config)
}
