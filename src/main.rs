use clap::Parser;
use tasking::cli::commands::Cli;
use tasking::cli::logging;
use tasking::io::config_io::{default_config_toml, load_config};
use tasking::tui::AppError;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if cli.print_default_config {
        print!("{}", default_config_toml()?);
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;
    logging::init(&config.log, cli.log_file.as_deref())?;
    tracing::info!(targeting = ?config.edit.targeting, "starting");

    tasking::tui::run(&config)
}
