use stockroom_cli::Config;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = Config::from_env();
    tracing::debug!(path = %config.inventory_path.display(), "starting demonstration run");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    stockroom_cli::demo::run(&config.inventory_path, &mut out)?;

    Ok(())
}
