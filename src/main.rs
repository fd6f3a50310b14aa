//! CLI entry point for the AirSight service core.
//!
//! Provides subcommands that print each dashboard surface as JSON, plus
//! a CSV export of the monthly AQI calendar.

use airsight::dates::parse_date;
use airsight::output::{append_records, print_json};
use airsight::predictor::AqiPredictor;
use airsight::service::dashboard::dashboard_data;
use airsight::service::health::health_status;
use airsight::service::pollutants::{ChartFilter, calendar_days, pollutants_data};
use airsight::service::prediction::prediction_data;
use airsight::service::recommendations::recommendations_data;
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "airsight")]
#[command(about = "Deterministic synthetic AQI figures for a dashboard client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard payload for a date
    Dashboard {
        /// Date in YYYY-MM-DD form (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Print the prediction payload for a date
    Prediction {
        /// Date in YYYY-MM-DD form (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Model name echoed in the payload
        #[arg(short, long, default_value = "gradient_boosting")]
        model: String,
    },
    /// Print the pollutants payload for a month
    Pollutants {
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,

        /// Chart granularity: hourly, weekly, or daily
        #[arg(short, long, default_value = "daily")]
        filter: String,

        /// Pollutant code echoed in the payload
        #[arg(short, long, default_value = "PM2.5")]
        pollutant: String,
    },
    /// Print health recommendations for a date
    Recommendations {
        /// Date in YYYY-MM-DD form (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Print service health and the model registry
    Health,
    /// Append a month's AQI calendar rows to a CSV file
    Export {
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,

        /// CSV file to append rows to
        #[arg(short, long, default_value = "calendar.csv")]
        output: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/airsight.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("airsight.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let predictor = AqiPredictor::new();
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Dashboard { date } => {
            let date = resolve_date(date, today)?;
            print_json(&dashboard_data(&predictor, date))?;
        }
        Commands::Prediction { date, model } => {
            let date = resolve_date(date, today)?;
            print_json(&prediction_data(&predictor, date, &model))?;
        }
        Commands::Pollutants {
            year,
            month,
            filter,
            pollutant,
        } => {
            let year = year.unwrap_or(today.year());
            let month = month.unwrap_or(today.month());
            let filter = filter.parse::<ChartFilter>()?;
            print_json(&pollutants_data(
                &predictor, year, month, filter, &pollutant, today,
            )?)?;
        }
        Commands::Recommendations { date } => {
            let date = resolve_date(date, today)?;
            print_json(&recommendations_data(&predictor, date))?;
        }
        Commands::Health => {
            print_json(&health_status())?;
        }
        Commands::Export {
            year,
            month,
            output,
        } => {
            let year = year.unwrap_or(today.year());
            let month = month.unwrap_or(today.month());
            let rows = calendar_days(&predictor, year, month)?;
            append_records(&output, &rows)?;
            info!(path = %output, year, month, "Calendar export complete");
        }
    }

    Ok(())
}

/// Parses an explicit date argument or falls back to today.
fn resolve_date(arg: Option<String>, today: NaiveDate) -> Result<NaiveDate> {
    Ok(match arg {
        Some(value) => parse_date(&value)?,
        None => today,
    })
}
