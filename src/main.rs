use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use angkor_guide::clock::{TimeSnapshot, format_clock, format_minutes};
use angkor_guide::config::GuideConfig;
use angkor_guide::geo::format_distance_km;
use angkor_guide::models::{Place, PlaceCategory};
use angkor_guide::{places, planner, weather, web};

#[derive(Parser)]
#[command(
    name = "angkor-guide",
    version,
    about = "Siem Reap travel guide and smart day-trip planner"
)]
struct Cli {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show configuration details and debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the guide web server
    Serve {
        /// Listen port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print a smart day-trip itinerary
    Plan {
        /// Starting latitude (defaults to the town center)
        #[arg(long)]
        lat: Option<f64>,
        /// Starting longitude (defaults to the town center)
        #[arg(long)]
        lng: Option<f64>,
        /// Departure time, e.g. "6:00 AM" (defaults to now in Siem Reap)
        #[arg(long)]
        time: Option<String>,
        /// Maximum number of stops
        #[arg(long)]
        max_stops: Option<usize>,
        /// Only plan places of this category
        #[arg(long)]
        category: Option<String>,
    },
    /// List the place catalog
    Places {
        /// Only list places of this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Show current weather in Siem Reap
    Weather,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GuideConfig::load_from_path(cli.config.clone())?;

    let default_level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if cli.verbose {
        let config_path = cli
            .config
            .clone()
            .or_else(GuideConfig::get_config_path)
            .unwrap_or_else(|| PathBuf::from("config.toml"));
        println!("Using config from: {}", config_path.display());
        println!("Log level: {}", default_level);
        println!("Weather API: {}", config.weather.base_url);
    }

    match cli.command {
        Some(Commands::Serve { port }) => {
            let mut config = config;
            if let Some(port) = port {
                config.server.port = port;
            }
            web::run(&config).await
        }
        Some(Commands::Plan {
            lat,
            lng,
            time,
            max_stops,
            category,
        }) => run_plan(&config, lat, lng, time.as_deref(), max_stops, category.as_deref()),
        Some(Commands::Places { category }) => run_places(category.as_deref()),
        Some(Commands::Weather) => run_weather(&config).await,
        None => {
            print_overview();
            Ok(())
        }
    }
}

fn print_overview() {
    println!("Angkor Guide - Siem Reap travel guide and smart day-trip planner");
    println!();
    println!("  angkor-guide serve             run the guide web server");
    println!("  angkor-guide plan              print a day-trip itinerary");
    println!("  angkor-guide places            list the place catalog");
    println!("  angkor-guide weather           current conditions (OpenMeteo, no setup required)");
    println!();
    println!("See 'angkor-guide --help' for options.");
}

fn resolve_category(name: Option<&str>) -> Result<Option<PlaceCategory>> {
    match name {
        None => Ok(None),
        Some(name) => match PlaceCategory::parse(name) {
            Some(category) => Ok(Some(category)),
            None => bail!(
                "Invalid category '{name}'. Must be one of: Temple, Nature, Dining, Shopping, Museum, Culture"
            ),
        },
    }
}

fn candidates_for(category: Option<PlaceCategory>) -> Vec<Place> {
    match category {
        Some(category) => places::by_category(category).into_iter().cloned().collect(),
        None => places::all().to_vec(),
    }
}

fn run_plan(
    config: &GuideConfig,
    lat: Option<f64>,
    lng: Option<f64>,
    time: Option<&str>,
    max_stops: Option<usize>,
    category: Option<&str>,
) -> Result<()> {
    let start_lat = lat.unwrap_or(config.planner.start_latitude);
    let start_lng = lng.unwrap_or(config.planner.start_longitude);
    if !(-90.0..=90.0).contains(&start_lat) || !(-180.0..=180.0).contains(&start_lng) {
        bail!("Invalid start coordinate: {start_lat}, {start_lng}");
    }

    let minutes = match time {
        Some(text) => match planner::try_best_time_to_minutes(text) {
            Some(minutes) => minutes,
            None => bail!("Invalid time '{text}'. Use a clock time like \"6:00 AM\""),
        },
        None => TimeSnapshot::now().total_minutes,
    };

    let candidates = candidates_for(resolve_category(category)?);
    if config.planner.strict_parsing {
        planner::validate_schedule_text(&candidates)?;
    }

    let plan = planner::build_day_plan(
        &candidates,
        minutes,
        start_lat,
        start_lng,
        max_stops.unwrap_or(config.planner.max_stops),
    );

    if plan.is_empty() {
        println!("Add more places to generate a day route.");
        return Ok(());
    }

    println!(
        "Day plan from ({start_lat:.4}, {start_lng:.4}) starting at {}:",
        format_clock(minutes)
    );
    println!();
    for (index, stop) in plan.stops.iter().enumerate() {
        println!("{}. {}", index + 1, stop.place.name);
        println!(
            "   Travel: {} • {}   Visit: {}   Best time: {}",
            format_distance_km(stop.travel_km),
            format_minutes(stop.travel_minutes),
            format_minutes(stop.visit_minutes),
            stop.place.best_time
        );
    }
    println!();
    println!(
        "Total: {} • {}",
        format_distance_km(plan.total_travel_km),
        format_minutes(plan.total_minutes())
    );

    Ok(())
}

fn run_places(category: Option<&str>) -> Result<()> {
    let category = resolve_category(category)?;
    let selection = candidates_for(category);

    for place in &selection {
        println!(
            "{:>2}. {} ({}) - best at {}, plan {}",
            place.id,
            place.name,
            place.category.as_str(),
            place.best_time,
            place.duration
        );
    }
    println!();
    println!("{} places", selection.len());

    Ok(())
}

async fn run_weather(config: &GuideConfig) -> Result<()> {
    let snapshot = weather::fetch_current(&config.weather.base_url).await?;
    println!(
        "{} {} - {:.1}°C, wind {:.1} km/h",
        snapshot.icon, snapshot.condition, snapshot.temperature, snapshot.wind_speed
    );
    Ok(())
}
