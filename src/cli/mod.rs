//! Command dispatch for the `upkeep_core_cli` binary.

pub mod output;

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    clock::{Clock, SystemClock},
    config::{Config, ConfigManager},
    core::services::{DashboardService, ScoringService},
    currency::CurrencyCode,
    dashboard::ScoreSource,
    errors::UpkeepError,
    seed::demo_portfolio,
    utils::{build_info, persistence},
};

pub const USAGE: &str = "Usage: upkeep_core_cli <command>\n\
     Commands:\n  \
     demo <file.json>\n  \
     dashboard <file.json> [--json] [--today YYYY-MM-DD] [--derived]\n  \
     rescore <file.json> [--today YYYY-MM-DD]\n  \
     version";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Upkeep(#[from] UpkeepError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
struct Flags {
    json: bool,
    derived: bool,
    today: Option<NaiveDate>,
}

fn parse_flags(mut args: impl Iterator<Item = String>) -> Result<Flags, CliError> {
    let mut flags = Flags::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => flags.json = true,
            "--derived" => flags.derived = true,
            "--today" => {
                let raw = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--today needs a date".into()))?;
                let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| CliError::Usage(format!("invalid date '{raw}'")))?;
                flags.today = Some(date);
            }
            other => return Err(CliError::Usage(format!("unknown option '{other}'"))),
        }
    }
    Ok(flags)
}

fn require_path(arg: Option<String>) -> Result<PathBuf, CliError> {
    arg.map(PathBuf::from)
        .ok_or_else(|| CliError::Usage(USAGE.to_string()))
}

fn load_config() -> Config {
    match ConfigManager::new().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(err) => {
            output::warning(format!("Using default settings: {err}"));
            Config::default()
        }
    }
}

/// Runs one command; `args` excludes the program name.
pub fn run_cli<I>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = args
        .next()
        .ok_or_else(|| CliError::Usage(USAGE.to_string()))?;
    debug!(%command, "dispatching");

    match command.as_str() {
        "demo" => {
            let path = require_path(args.next())?;
            persistence::save_portfolio_to_file(&demo_portfolio(), &path)?;
            output::success(format!("Wrote demo portfolio to {}", path.display()));
        }
        "dashboard" => {
            let path = require_path(args.next())?;
            let flags = parse_flags(args)?;
            let config = load_config();
            let mut settings = config.dashboard.clone();
            if flags.derived {
                settings.score_source = ScoreSource::Derived;
            }
            let today = flags.today.unwrap_or_else(|| SystemClock.today());
            let portfolio = persistence::load_portfolio_from_file(&path)?;
            let view = DashboardService::build_on(&portfolio, &settings, today);
            if flags.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!(
                    "{}",
                    output::render_dashboard(
                        &view,
                        &settings,
                        &CurrencyCode::new(config.currency)
                    )
                );
            }
        }
        "rescore" => {
            let path = require_path(args.next())?;
            let flags = parse_flags(args)?;
            let today = flags.today.unwrap_or_else(|| SystemClock.today());
            let mut portfolio = persistence::load_portfolio_from_file(&path)?;
            let report = ScoringService::refresh(&mut portfolio, today);
            persistence::save_portfolio_to_file(&portfolio, &path)?;
            output::success(format!(
                "Rescored {} systems and {} properties",
                report.systems_changed, report.properties_changed
            ));
        }
        "version" => println!("{}", build_info::current().summary()),
        other => return Err(CliError::Usage(format!("unknown command '{other}'\n{USAGE}"))),
    }
    Ok(())
}
