use std::path::PathBuf;

use anyhow::{anyhow, Result};
use bdnotify_core::{
    dispatch, first_of_month, parse_month, parse_reference_date, parse_year, parse_year_month,
    today, Config, FileEventRepository, LoadError, PushNotifier, ReminderService,
};
use chrono::{Datelike, NaiveDate};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

#[derive(Parser)]
#[command(name = "bdnotify")]
#[command(about = "Notify about birthdays and anniversaries", long_about = None)]
struct Cli {
    /// Event file, one "<date> <description>" per line [default: ~/.birthday]
    #[arg(short, long, global = true, env = "BDNOTIFY_FILE")]
    file: Option<PathBuf>,

    /// Print at most this many events
    #[arg(short = 'n', long, global = true)]
    limit: Option<usize>,

    /// Also push each reminder to this device
    #[arg(long, global = true, env = "BDNOTIFY_NOTIFY_TARGET")]
    notify: Option<String>,

    /// Access token for the push service
    #[arg(long, global = true, env = "BDNOTIFY_NOTIFY_TOKEN", hide_env_values = true)]
    notify_token: Option<String>,

    /// Compute reminders as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_reference_date)]
    today: Option<NaiveDate>,

    /// Configuration file [default: <config dir>/bdnotify/config.json]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List upcoming events (usage: list 0 1 7). Lists everything if no days are given.
    List {
        /// Only show events exactly this many days away
        #[arg(value_parser = clap::value_parser!(i64).range(0..))]
        days: Vec<i64>,
    },
    /// Show the events of one month (usage: summary 2024 5, or summary 2024-05)
    Summary {
        /// YEAR MONTH or YEAR-MONTH [default: current month]
        #[arg(num_args = 0..=2)]
        period: Vec<String>,
    },
}

/// Settings after merging flags, environment and the config file.
struct Settings {
    file: Option<PathBuf>,
    limit: Option<usize>,
    notify_target: Option<String>,
    notify_endpoint: Option<String>,
    notify_token: Option<String>,
}

impl Settings {
    fn merge(cli: &Cli, config: Config) -> Self {
        Self {
            file: cli.file.clone().or(config.file),
            limit: cli.limit.or(config.limit),
            notify_target: cli.notify.clone().or(config.notify_target),
            notify_endpoint: config.notify_endpoint,
            notify_token: cli.notify_token.clone().or(config.notify_token),
        }
    }
}

fn parse_period(period: &[String], reference: NaiveDate) -> Result<(i32, u32)> {
    match period {
        [] => {
            let first = first_of_month(reference);
            Ok((first.year(), first.month()))
        }
        [year_month] => parse_year_month(year_month),
        [year, month] => Ok((parse_year(year)?, parse_month(month)?)),
        _ => Err(anyhow!("Expected at most YEAR and MONTH")),
    }
}

/// Like `parse_period`, but a bad period is a usage error.
fn resolve_period(period: &[String], reference: NaiveDate) -> Result<(i32, u32), clap::Error> {
    parse_period(period, reference).map_err(|e| {
        Cli::command().error(ErrorKind::ValueValidation, format!("invalid summary period: {:#}", e))
    })
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::merge(cli, config);
    let reference = cli.today.unwrap_or_else(today);

    let repo = FileEventRepository::new(settings.file.clone())?;
    log::debug!("Reading events from {}", repo.file_path().display());
    let service = ReminderService::new(repo);

    match &cli.command {
        Some(Commands::Summary { period }) => {
            let (year, month) = resolve_period(period, reference).unwrap_or_else(|e| e.exit());
            let summary = service.month_summary(year, month, settings.limit)?;
            for line in summary.lines() {
                println!("{}", line);
            }
        }
        Some(Commands::List { days }) => list(&service, &settings, reference, days)?,
        None => list(&service, &settings, reference, &[])?,
    }
    Ok(())
}

fn list(
    service: &ReminderService<FileEventRepository>,
    settings: &Settings,
    reference: NaiveDate,
    days: &[i64],
) -> Result<()> {
    let reminders = service.upcoming(reference, days, settings.limit)?;
    for reminder in &reminders {
        println!("{}", reminder);
    }

    if let Some(target) = &settings.notify_target {
        let notifier = PushNotifier::new(settings.notify_endpoint.clone(), settings.notify_token.clone());
        let delivered = dispatch(&notifier, target, &reminders);
        log::debug!("Pushed {} of {} reminders", delivered, reminders.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        if let Some(load_err) = e.downcast_ref::<LoadError>() {
            for line in load_err.diagnostics() {
                eprintln!("{}", line);
            }
        }
        return Err(e);
    }
    Ok(())
}
