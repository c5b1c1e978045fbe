pub mod banner;
pub mod io;
pub mod output;
pub mod prompts;
pub mod report_view;
pub mod session;

use std::io::{self as stdio, IsTerminal};
use std::path::PathBuf;

use tracing::info;

use crate::config::ConfigManager;
use crate::core::services::{BudgetReport, ReportService};
use crate::errors::Result;

use self::banner::Banner;
use self::io::{ScriptPrompter, TerminalPrompter};
use self::output::OutputPreferences;

pub const SCRIPT_ENV: &str = "BUDGET_PLANNER_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    /// Script mode is forced by flag or env var, and chosen automatically
    /// when stdin is not a terminal.
    pub fn detect(force_script: bool) -> Self {
        if force_script
            || std::env::var_os(SCRIPT_ENV).is_some()
            || !stdio::stdin().is_terminal()
        {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub script: bool,
    pub json: bool,
}

pub fn run_cli(options: &RunOptions) -> Result<BudgetReport> {
    let config = ConfigManager::resolve(options.config_path.as_deref()).load()?;
    output::set_preferences(OutputPreferences {
        plain_mode: config.plain_output,
        quiet_mode: options.json,
    });

    let mode = CliMode::detect(options.script);
    info!(?mode, "starting budget session");
    Banner::render();

    let summary = match mode {
        CliMode::Interactive => session::collect(&mut TerminalPrompter::new(), &config)?,
        CliMode::Script => {
            let stdin = stdio::stdin();
            let mut prompter = ScriptPrompter::new(stdin.lock());
            session::collect(&mut prompter, &config)?
        }
    };

    let report = ReportService::build(&summary, &config.thresholds());
    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report_view::render(&report);
    }
    Ok(report)
}
