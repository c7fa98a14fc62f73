use anyhow::Context;
use clap::Parser;
use showreel::cli::Cli;
use showreel::config::Config;
use showreel::logging::init_tracing;
use showreel::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let path = cli.config_path();
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;

    if cli.check_config {
        println!("{}: ok", path.display());
        return Ok(());
    }
    cli.apply(&mut config);

    let log_path = config.log_path();
    init_tracing(&config.logging, &log_path)?;
    tracing::info!(
        config = %path.display(),
        log = %log_path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "starting showreel"
    );

    runtime::run(config, cli.page)
}
