// hdchart - Human Design Chart Generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{DateTime, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use hdchart::{
    tables, validate, BirthData, ChartResult, HdService, Location, Settings, TimeAccuracy,
};

/// Human Design chart generator
#[derive(Parser, Debug)]
#[command(name = "hdchart", author, version, about)]
struct Cli {
    /// Path to settings JSON (defaults to ./hdchart_settings.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate a chart from birth data
    Chart {
        /// Birth data JSON file; overrides the individual flags
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, required_unless_present = "input")]
        date: Option<String>,
        #[arg(long, required_unless_present = "input")]
        time: Option<String>,
        /// exact, approximate or unknown
        #[arg(long, default_value = "exact")]
        accuracy: String,
        #[arg(long, allow_hyphen_values = true, required_unless_present = "input")]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true, required_unless_present = "input")]
        lon: Option<f64>,
        #[arg(long, required_unless_present = "input")]
        name: Option<String>,
        #[arg(long, required_unless_present = "input")]
        timezone: Option<String>,
        /// Print a short text summary instead of JSON
        #[arg(long, default_value_t = false)]
        summary: bool,
    },
    /// Simulated transit for a chart
    Transit {
        chart_id: String,
        /// YYYY-MM-DD or RFC 3339; defaults to now
        #[arg(long)]
        date: Option<String>,
    },
    /// Simulated relationship analysis between two charts
    Relationship { chart_a: String, chart_b: String },
    /// Look up the hexagram name and center of a gate
    Gate { number: u8 },
    /// Write the current settings to the config path
    InitConfig,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load_or_default(&config_path);

    use env_logger::Env;
    let filter = match cli.verbose {
        0 => settings.log_filter.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(filter)).init();

    if let Err(err) = run(cli, settings, config_path).await {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, settings: Settings, config_path: PathBuf) -> anyhow::Result<()> {
    let service = HdService::new(&settings);

    match cli.command {
        Commands::Chart {
            input,
            date,
            time,
            accuracy,
            lat,
            lon,
            name,
            timezone,
            summary,
        } => {
            let birth = match input {
                Some(path) => read_birth_data(&path)?,
                None => {
                    let time_accuracy = TimeAccuracy::parse(&accuracy).with_context(|| {
                        format!("unknown time accuracy {accuracy:?} (exact, approximate, unknown)")
                    })?;
                    BirthData {
                        date: date.unwrap_or_default(),
                        time: time.unwrap_or_default(),
                        time_accuracy,
                        location: Location {
                            lat: lat.unwrap_or_default(),
                            lon: lon.unwrap_or_default(),
                            name: name.unwrap_or_default(),
                            timezone: timezone.unwrap_or_default(),
                        },
                    }
                }
            };
            let result = service.calculate_chart(&birth).await?;
            if summary {
                print!("{}", render_summary(&result));
            } else {
                print_json(&result, settings.pretty_output)?;
            }
        }
        Commands::Transit { chart_id, date } => {
            let when = match date {
                Some(s) => parse_instant(&s)?,
                None => Utc::now(),
            };
            print_json(&service.calculate_transit(&chart_id, when), settings.pretty_output)?;
        }
        Commands::Relationship { chart_a, chart_b } => {
            print_json(&service.analyze_relationship(&chart_a, &chart_b), settings.pretty_output)?;
        }
        Commands::Gate { number } => {
            if !(1..=tables::GATE_COUNT).contains(&number) {
                anyhow::bail!("Gate must be between 1 and {}, got {}", tables::GATE_COUNT, number);
            }
            let center = tables::center_of_gate(number)
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("{:>2}  {}  ({})", number, tables::gate_hexagram(number), center);
        }
        Commands::InitConfig => {
            settings.save_to_disk(&config_path)?;
            println!("Wrote settings to {}", config_path.display());
        }
    }
    Ok(())
}

fn read_birth_data(path: &Path) -> anyhow::Result<BirthData> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading birth data from {}", path.display()))?;
    let birth = serde_json::from_str(&data)
        .with_context(|| format!("parsing birth data in {}", path.display()))?;
    Ok(birth)
}

fn parse_instant(s: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = validate::parse_date(s)?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

fn render_summary(result: &ChartResult) -> String {
    let chart = &result.chart;
    let birth = &chart.birth_data;
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} ({}) in {}\n",
        birth.date,
        birth.time,
        tables::time_accuracy_label(birth.time_accuracy),
        birth.location.name
    ));
    out.push_str(&format!("Type:       {}\n", chart.hd_type));
    out.push_str(&format!("Strategy:   {}\n", chart.strategy));
    out.push_str(&format!("Not-self:   {}\n", chart.not_self));
    out.push_str(&format!(
        "Authority:  {} - {}\n",
        chart.authority,
        tables::authority_description(chart.authority)
    ));
    out.push_str(&format!("Profile:    {}\n", chart.profile));
    out.push_str(&format!("Cross:      {}\n", chart.incarnation_cross));

    let defined: Vec<String> = chart.defined_centers().iter().map(|c| c.to_string()).collect();
    out.push_str(&format!("Centers:    {}\n", join_or_dash(&defined)));
    let channels: Vec<String> = chart.channels.iter().map(|c| c.name.clone()).collect();
    out.push_str(&format!("Channels:   {}\n", join_or_dash(&channels)));
    out.push_str(&format!("Gates:      {}\n", chart.gates.len()));

    out.push_str(&format!(
        "Confidence: {:.0}%\n",
        result.cross_check.confidence * 100.0
    ));
    for diff in &result.cross_check.differences {
        out.push_str(&format!("  - {}\n", diff));
    }
    out
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
