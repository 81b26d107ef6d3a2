use anyhow::{bail, Result};
use chrono::{Days, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tripplan_core::config::Settings;
use tripplan_core::{Currency, TripRequest, TripType};

use tripplan_cli::app;

#[derive(Parser)]
#[command(name = "tripplan")]
#[command(about = "TripPlan - AI travel itinerary planner")]
#[command(version)]
struct Cli {
    /// LLM model to use
    #[arg(short, long)]
    model: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long)]
    base_url: Option<String>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one itinerary and exit
    Plan {
        /// Starting point (city or landmark)
        #[arg(long)]
        from: String,
        /// Destinations, comma-separated
        #[arg(long)]
        to: String,
        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start: Option<NaiveDate>,
        /// End date (YYYY-MM-DD), defaults to the day after start
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(long, default_value_t = 1)]
        travelers: u32,
        #[arg(long)]
        budget: Option<u64>,
        #[arg(long)]
        currency: Option<Currency>,
        #[arg(long)]
        trip_type: Option<TripType>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = match cli.config {
        Some(ref path) => Settings::load_from(path)?,
        None => Settings::load(),
    };
    if let Some(model) = cli.model {
        settings.llm.model = model;
    }
    if let Some(base_url) = cli.base_url {
        settings.llm.base_url = base_url;
    }

    match cli.command {
        Some(Command::Plan {
            from,
            to,
            start,
            end,
            travelers,
            budget,
            currency,
            trip_type,
        }) => {
            let start_date = start.unwrap_or_else(|| chrono::Local::now().date_naive());
            let end_date = match end {
                Some(end) => end,
                None => match start_date.checked_add_days(Days::new(1)) {
                    Some(next) => next,
                    None => bail!("start date {start_date} is out of range"),
                },
            };
            let trip = TripRequest {
                starting_point: from,
                destinations: to,
                start_date,
                end_date,
                travelers,
                budget: budget.unwrap_or(settings.planner.min_budget),
                currency: currency.unwrap_or(settings.planner.default_currency),
                trip_type: trip_type.unwrap_or(settings.planner.default_trip_type),
            };
            app::run_single_plan(&settings, trip).await?;
        }
        None => {
            // Missing credentials stop us before the prompt is shown.
            let llm = settings.build_model_client()?;
            app::run_repl(settings, llm).await?;
        }
    }

    Ok(())
}
