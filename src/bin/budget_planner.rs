use std::path::PathBuf;

use budget_planner::{
    cli::{banner::Banner, run_cli, RunOptions},
    init,
};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "budget_planner",
    version,
    about = "Monthly budget planner with home and vehicle loan repayments"
)]
struct Cli {
    /// Path to a JSON config file
    #[arg(short, long, env = "BUDGET_PLANNER_CONFIG")]
    config: Option<PathBuf>,

    /// Read answers line by line from stdin instead of prompting
    #[arg(long)]
    script: bool,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,

    /// Show build metadata and exit
    #[arg(long)]
    build_info: bool,
}

fn main() {
    init();
    let cli = Cli::parse();

    if cli.build_info {
        Banner::render_details();
        return;
    }

    let options = RunOptions {
        config_path: cli.config,
        script: cli.script,
        json: cli.json,
    };

    if let Err(err) = run_cli(&options) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
