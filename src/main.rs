use anyhow::Result;
use clap::Parser;
use sortviz::config::EXAMPLE_CONFIG;
use sortviz::ui::install_panic_hook;
use sortviz::{util, App, Cli, Config};
use std::fs::{self, OpenOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", EXAMPLE_CONFIG);
        return Ok(());
    }

    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (~/.sortviz/logs/sortviz.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let config = cli.apply(config);

    install_panic_hook();

    // Create and run app
    let mut app = App::new(config);
    app.run().await
}
