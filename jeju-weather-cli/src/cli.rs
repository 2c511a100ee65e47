use anyhow::{Context, bail};
use chrono::{Duration, Local, NaiveDate};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use jeju_weather_core::{
    AnalysisClient, AnalysisRequest, Config, GeminiAnalysisClient, MAX_REGIONS, Metric, Region,
    RegionSeries, SeriesGenerator, merge_series,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "jeju-weather", version, about = "Jeju weather comparison CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure credentials for the analysis service.
    Configure {
        /// Analysis model identifier, e.g. "gemini-2.5-flash".
        #[arg(long)]
        model: Option<String>,
    },

    /// Compare a weather metric across up to three regions.
    Compare {
        /// Regions to compare: Korean name or ASCII alias, e.g. "제주시" or "hallasan".
        #[arg(required = true)]
        regions: Vec<String>,

        /// Metric to compare: temperature, humidity, windSpeed or precipitation.
        #[arg(long, short, default_value = "temperature")]
        metric: String,

        /// First day of the range (YYYY-MM-DD); defaults to seven days ago.
        #[arg(long)]
        start: Option<String>,

        /// Last day of the range (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        end: Option<String>,

        /// Seed for reproducible series generation.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the merged table as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Skip the AI comparison report.
        #[arg(long)]
        no_analysis: bool,
    },

    /// List the supported regions.
    Regions,

    /// List the supported metrics.
    Metrics,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { model } => configure(model),
            Command::Compare {
                regions,
                metric,
                start,
                end,
                seed,
                json,
                no_analysis,
            } => compare(&regions, &metric, start, end, seed, json, no_analysis).await,
            Command::Regions => {
                for region in Region::all() {
                    println!("{} ({})", region, region.alias());
                }
                Ok(())
            }
            Command::Metrics => {
                for metric in Metric::all() {
                    println!("{:<14} {} [{}]", metric.as_str(), metric.label(), metric.unit());
                }
                Ok(())
            }
        }
    }
}

fn configure(model: Option<String>) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("Gemini API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        bail!("API key must not be empty.");
    }

    config.set_analysis(api_key.trim().to_string(), model);
    config.save()?;

    println!(
        "Analysis credentials saved to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

async fn compare(
    regions: &[String],
    metric: &str,
    start: Option<String>,
    end: Option<String>,
    seed: Option<u64>,
    json: bool,
    no_analysis: bool,
) -> anyhow::Result<()> {
    let selection = validate_selection(regions)?;
    let metric = Metric::try_from(metric)?;

    let today = Local::now().date_naive();
    let start = match start {
        Some(s) => parse_date(&s)?,
        None => today - Duration::days(7),
    };
    let end = match end {
        Some(s) => parse_date(&s)?,
        None => today,
    };
    if end < start {
        warn!("end date {end} precedes start date {start}; the table will be empty");
    }

    let config = Config::load()?;
    let generator = SeriesGenerator::with_dry_day_probability(config.dry_day_probability());

    let series = generate_all(&generator, &selection, metric, start, end, seed);
    let table = merge_series(&series);

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{}", render::render_table(&table, metric));
    }

    if no_analysis {
        return Ok(());
    }

    let Some(api_key) = config.analysis_api_key() else {
        println!();
        println!("No analysis API key configured; skipping the AI report.");
        println!("Hint: run `jeju-weather configure` and enter your Gemini API key.");
        return Ok(());
    };

    let client =
        GeminiAnalysisClient::with_model(api_key.to_string(), config.analysis_model().to_string());
    let request = AnalysisRequest {
        series,
        metric,
        start,
        end,
    };

    match client.analyze(&request).await {
        Ok(report) => {
            println!();
            println!("AI 비교 분석 리포트");
            println!();
            println!("{report}");
        }
        Err(err) => {
            // The table above is already rendered; the report is the only casualty.
            warn!("analysis request failed: {err}");
            println!();
            println!("{}", err.user_message());
        }
    }

    Ok(())
}

/// Parse and bound the region selection (1 to `MAX_REGIONS` regions).
fn validate_selection(regions: &[String]) -> anyhow::Result<Vec<Region>> {
    if regions.is_empty() {
        bail!("Select at least one region to compare.");
    }
    if regions.len() > MAX_REGIONS {
        bail!("At most {MAX_REGIONS} regions can be compared at once.");
    }

    let mut selection = Vec::with_capacity(regions.len());
    for name in regions {
        let region = Region::try_from(name.as_str())?;
        if selection.contains(&region) {
            bail!("Region '{region}' was selected more than once.");
        }
        selection.push(region);
    }

    Ok(selection)
}

fn generate_all(
    generator: &SeriesGenerator,
    selection: &[Region],
    metric: Metric,
    start: NaiveDate,
    end: NaiveDate,
    seed: Option<u64>,
) -> Vec<RegionSeries> {
    match seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            selection
                .iter()
                .map(|region| RegionSeries {
                    region: region.as_str().to_string(),
                    points: generator.generate_with(
                        &mut rng,
                        region.as_str(),
                        metric.as_str(),
                        start,
                        end,
                    ),
                })
                .collect()
        }
        None => selection
            .iter()
            .map(|region| RegionSeries {
                region: region.as_str().to_string(),
                points: generator.generate(region.as_str(), metric.as_str(), start, end),
            })
            .collect(),
    }
}

fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{s}', expected YYYY-MM-DD"))
}
