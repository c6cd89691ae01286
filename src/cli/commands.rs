use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tasking", about = "A single-screen task list for the terminal", version)]
pub struct Cli {
    /// Config file (default: $TASKING_CONFIG, then ./tasking.toml)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides [log].file)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long = "print-default-config")]
    pub print_default_config: bool,
}
