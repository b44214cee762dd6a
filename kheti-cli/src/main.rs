//! Kheti - rooftop farm telemetry dashboard
//! Command-line interface for calibrating, classifying and summarising sensor feeds

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use kheti_core::prelude::*;
use kheti_feed::{
    parse_channel, parse_current_weather, CurrentWeather, Dashboard, DashboardConfig, FarmData,
    MetricTile,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kheti")]
#[command(author = "Kheti Contributors")]
#[command(version = "2026.1.16")]
#[command(about = "Kheti - rooftop farm telemetry dashboard", long_about = None)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a raw soil-moisture reading to a percentage
    Calibrate {
        /// Raw sensor reading (ADC counts)
        #[arg(value_name = "RAW", allow_negative_numbers = true)]
        raw: f64,

        /// Reading observed in dry soil (0 %)
        #[arg(long, allow_negative_numbers = true)]
        dry: f64,

        /// Reading observed in saturated soil (100 %)
        #[arg(long, allow_negative_numbers = true)]
        wet: f64,
    },

    /// Classify a reading into its qualitative band
    Classify {
        /// Quantity to classify
        #[arg(value_enum)]
        kind: BandKind,

        /// Reading value
        #[arg(value_name = "VALUE", allow_negative_numbers = true)]
        value: f64,
    },

    /// Describe a WMO weather code
    Weather {
        /// WMO code as returned by Open-Meteo
        #[arg(value_name = "CODE", allow_negative_numbers = true)]
        code: i64,
    },

    /// Show the live metric tiles
    Dashboard {
        /// Saved ThingSpeak feeds.json (fetched live when omitted)
        #[arg(long, value_name = "FILE")]
        feed: Option<PathBuf>,

        /// Saved Open-Meteo forecast response (fetched live when omitted)
        #[arg(long, value_name = "FILE")]
        weather: Option<PathBuf>,

        #[command(flatten)]
        calibration: CalibrationArgs,
    },

    /// Print a sensor time series with descriptive statistics
    Series {
        /// Sensor: temperature, humidity, soil_moisture or ph
        #[arg(value_name = "SENSOR", value_parser = parse_sensor)]
        sensor: SensorKind,

        /// Saved ThingSpeak feeds.json (fetched live when omitted)
        #[arg(long, value_name = "FILE")]
        feed: Option<PathBuf>,

        #[command(flatten)]
        calibration: CalibrationArgs,
    },

    /// Show band tables and configuration sources
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum BandKind {
    Temperature,
    Humidity,
    Ph,
}

/// Overrides KHETI_SOIL_DRY / KHETI_SOIL_WET
#[derive(Args)]
struct CalibrationArgs {
    /// Raw reading at 0 % moisture
    #[arg(long, requires = "wet", allow_negative_numbers = true)]
    dry: Option<f64>,

    /// Raw reading at 100 % moisture
    #[arg(long, requires = "dry", allow_negative_numbers = true)]
    wet: Option<f64>,
}

impl CalibrationArgs {
    fn resolve(&self) -> Result<Option<MoistureCalibration>> {
        match (self.dry, self.wet) {
            (Some(dry), Some(wet)) => Ok(Some(MoistureCalibration::checked(dry, wet)?)),
            _ => Ok(None),
        }
    }
}

fn parse_sensor(s: &str) -> std::result::Result<SensorKind, String> {
    s.parse::<SensorKind>().map_err(|e| e.to_string())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Calibrate { raw, dry, wet } => calibrate_command(raw, dry, wet, cli.json),
        Commands::Classify { kind, value } => {
            classify_command(kind, value, cli.json);
            Ok(())
        }
        Commands::Weather { code } => {
            weather_command(code, cli.json);
            Ok(())
        }
        Commands::Dashboard {
            feed,
            weather,
            calibration,
        } => dashboard_command(feed.as_deref(), weather.as_deref(), &calibration, cli.json),
        Commands::Series {
            sensor,
            feed,
            calibration,
        } => series_command(sensor, feed.as_deref(), &calibration, cli.json),
        Commands::Info => {
            print_info();
            Ok(())
        }
    }
}

// ============================================================================
// Engine commands
// ============================================================================

fn calibrate_command(raw: f64, dry: f64, wet: f64, json: bool) -> Result<()> {
    if dry == wet {
        tracing::warn!("dry and wet bounds are equal ({dry}); reporting 0 %");
    }
    let percentage = calibrate(raw, dry, wet);

    if json {
        let value = serde_json::json!({
            "raw": raw,
            "dry_value": dry,
            "wet_value": wet,
            "percentage": percentage,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{} {:.2} %", "Soil moisture:".bold(), percentage);
    }
    Ok(())
}

fn band_label(kind: BandKind, value: f64) -> &'static str {
    match kind {
        BandKind::Temperature => classify_temperature(value),
        BandKind::Humidity => classify_humidity(value),
        BandKind::Ph => classify_ph(value),
    }
}

fn classify_command(kind: BandKind, value: f64, json: bool) {
    let label = band_label(kind, value);
    if json {
        println!("{}", serde_json::json!({ "value": value, "band": label }));
    } else {
        println!("{}", colorize_band(label));
    }
}

fn weather_command(code: i64, json: bool) {
    let (description, symbol) = describe_weather(code);
    if json {
        println!(
            "{}",
            serde_json::json!({ "code": code, "description": description, "symbol": symbol })
        );
    } else {
        println!("{}", condition_text(description, symbol));
    }
}

fn condition_text(description: &str, symbol: &str) -> String {
    format!("{description} {symbol}").trim_end().to_string()
}

fn colorize_band(label: &str) -> ColoredString {
    match label {
        "Optimal" | "Neutral" => label.green(),
        "Invalid" => label.red().bold(),
        _ => label.yellow(),
    }
}

// ============================================================================
// Feed commands
// ============================================================================

fn load_config(calibration: &CalibrationArgs) -> Result<DashboardConfig> {
    let config = DashboardConfig::from_env().context("loading KHETI_* configuration")?;
    Ok(match calibration.resolve()? {
        Some(cal) => config.with_calibration(Some(cal)),
        None => config,
    })
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading '{}'", path.display()))
}

fn load_farm(feed: Option<&Path>, config: &DashboardConfig) -> Result<FarmData> {
    match feed {
        Some(path) => {
            let body = read_file(path)?;
            Ok(parse_channel(&body, &config.field_mapping)
                .with_context(|| format!("parsing '{}'", path.display()))?)
        }
        None => live_farm(config),
    }
}

#[cfg(feature = "http")]
fn live_farm(config: &DashboardConfig) -> Result<FarmData> {
    Ok(kheti_feed::client::fetch_farm_data_or_empty(config))
}

#[cfg(not(feature = "http"))]
fn live_farm(_config: &DashboardConfig) -> Result<FarmData> {
    anyhow::bail!("no --feed file given and this build has no HTTP support (enable feature `http`)")
}

fn load_weather(weather: Option<&Path>, config: &DashboardConfig) -> Result<Option<CurrentWeather>> {
    match weather {
        Some(path) => {
            let body = read_file(path)?;
            Ok(parse_current_weather(&body)
                .with_context(|| format!("parsing '{}'", path.display()))?)
        }
        None => Ok(live_weather(config)),
    }
}

#[cfg(feature = "http")]
fn live_weather(config: &DashboardConfig) -> Option<CurrentWeather> {
    kheti_feed::client::fetch_current_weather_or_empty(config)
}

#[cfg(not(feature = "http"))]
fn live_weather(_config: &DashboardConfig) -> Option<CurrentWeather> {
    tracing::info!("no --weather file given; weather tiles will show N/A");
    None
}

fn dashboard_command(
    feed: Option<&Path>,
    weather: Option<&Path>,
    calibration: &CalibrationArgs,
    json: bool,
) -> Result<()> {
    let config = load_config(calibration)?;
    let farm = load_farm(feed, &config)?;
    let current = load_weather(weather, &config)?;
    let dashboard = Dashboard::build(&farm, current.as_ref(), &config);

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    println!("{}", "Live Metrics".bold().underline());
    for tile in &dashboard.tiles {
        println!("  {}", render_tile(tile));
    }
    println!();
    if farm.is_empty() {
        println!("{}", "Waiting for farm data to display visualizations.".dimmed());
    } else {
        println!("{} {}", "Readings:".dimmed(), dashboard.readings);
    }
    Ok(())
}

fn render_tile(tile: &MetricTile) -> String {
    let value = if tile.is_available() {
        tile.display_value().cyan()
    } else {
        tile.display_value().dimmed()
    };
    match &tile.band {
        Some(band) => format!("{:<20} {} {}", tile.label.bold(), value, colorize_band(band)),
        None => format!("{:<20} {}", tile.label.bold(), value),
    }
}

/// Linha da série: valor e, conforme o sensor, faixa ou porcentagem calibrada
fn series_annotation(
    sensor: SensorKind,
    value: f64,
    calibration: Option<&MoistureCalibration>,
) -> Option<String> {
    match sensor {
        SensorKind::Temperature => Some(classify_temperature(value).to_string()),
        SensorKind::Humidity => Some(classify_humidity(value).to_string()),
        SensorKind::Ph => Some(classify_ph(value).to_string()),
        SensorKind::SoilMoisture => calibration.map(|cal| format!("{:.2} %", cal.percentage(value))),
    }
}

fn series_command(
    sensor: SensorKind,
    feed: Option<&Path>,
    calibration: &CalibrationArgs,
    json: bool,
) -> Result<()> {
    let config = load_config(calibration)?;
    let farm = load_farm(feed, &config)?;
    let points = farm.series(sensor);
    let stats = farm.stats(sensor);

    if json {
        let value = serde_json::json!({
            "sensor": sensor,
            "points": points,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if points.is_empty() {
        println!("{}", "The selected sensor has no data to display.".yellow());
        return Ok(());
    }

    println!("{}", format!("{sensor} over Time").bold().underline());
    for point in &points {
        let annotation = series_annotation(sensor, point.value, config.calibration.as_ref())
            .unwrap_or_default();
        println!("  {:<22} {:>10.2}  {}", point.created_at, point.value, annotation);
    }

    if let Some(stats) = stats {
        println!();
        println!("{}", "Statistics".bold());
        println!("  count  {}", stats.count);
        println!("  mean   {:.2}", stats.mean);
        match stats.std {
            Some(std) => println!("  std    {std:.2}"),
            None => println!("  std    {}", kheti_feed::NOT_AVAILABLE),
        }
        println!("  min    {:.2}", stats.min);
        println!("  25%    {:.2}", stats.q25);
        println!("  50%    {:.2}", stats.median);
        println!("  75%    {:.2}", stats.q75);
        println!("  max    {:.2}", stats.max);
    }
    Ok(())
}

// ============================================================================
// Info
// ============================================================================

fn print_info() {
    println!("{}", "Kheti - rooftop farm telemetry dashboard".bold());
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("{}", "Bands:".bold());
    println!("  Temperature (°C)  <15 Cold | 15 Cool | 20 Optimal | 28 Warm | ≥35 Hot");
    println!("  Humidity (%)      <40 Dry | 40 Optimal | 60 Humid | ≥80 Very Humid");
    println!("  pH                outside [0,14] Invalid | <5.5 Very Acidic | 5.5 Acidic | 6.5 Neutral | ≥7.5 Alkaline");
    println!();
    println!("{}", "Configuration (.env or environment):".bold());
    println!("  KHETI_CHANNEL_ID, KHETI_READ_API_KEY, KHETI_RESULTS");
    println!("  KHETI_LATITUDE, KHETI_LONGITUDE, KHETI_CITY");
    println!("  KHETI_SOIL_DRY, KHETI_SOIL_WET");
    println!("  KHETI_FIELD_TEMPERATURE, KHETI_FIELD_HUMIDITY, KHETI_FIELD_SOIL_MOISTURE, KHETI_FIELD_PH");
    println!();
    println!("Live fetching: {}", if cfg!(feature = "http") { "enabled" } else { "disabled" });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_values() {
        let cli = Cli::try_parse_from(["kheti", "classify", "ph", "-0.1"]).unwrap();
        match cli.command {
            Commands::Classify { kind, value } => assert_eq!(band_label(kind, value), "Invalid"),
            _ => panic!("expected classify"),
        }

        let cli = Cli::try_parse_from(["kheti", "weather", "-5"]).unwrap();
        assert!(matches!(cli.command, Commands::Weather { code: -5 }));
    }

    #[test]
    fn test_parse_sensor_argument() {
        let cli = Cli::try_parse_from(["kheti", "series", "soil-moisture", "--feed", "f.json"]).unwrap();
        match cli.command {
            Commands::Series { sensor, feed, .. } => {
                assert_eq!(sensor, SensorKind::SoilMoisture);
                assert_eq!(feed, Some(PathBuf::from("f.json")));
            }
            _ => panic!("expected series"),
        }
        assert!(Cli::try_parse_from(["kheti", "series", "co2"]).is_err());
    }

    #[test]
    fn test_calibration_requires_both_bounds() {
        assert!(Cli::try_parse_from(["kheti", "dashboard", "--dry", "3500"]).is_err());
        let cli = Cli::try_parse_from(["kheti", "dashboard", "--dry", "3500", "--wet", "1500"]).unwrap();
        match cli.command {
            Commands::Dashboard { calibration, .. } => {
                assert_eq!(calibration.resolve().unwrap(), Some(MoistureCalibration::new(3500.0, 1500.0)));
            }
            _ => panic!("expected dashboard"),
        }
    }

    #[test]
    fn test_equal_bounds_rejected_for_feeds() {
        let args = CalibrationArgs {
            dry: Some(2000.0),
            wet: Some(2000.0),
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(band_label(BandKind::Temperature, 35.0), "Hot");
        assert_eq!(band_label(BandKind::Humidity, 80.0), "Very Humid");
        assert_eq!(band_label(BandKind::Ph, 7.0), "Neutral");
    }

    #[test]
    fn test_condition_text() {
        assert_eq!(condition_text("Unknown", ""), "Unknown");
        assert_eq!(condition_text("Fog", "🌫️"), "Fog 🌫️");
    }

    #[test]
    fn test_series_annotation() {
        let cal = MoistureCalibration::new(3500.0, 1500.0);
        assert_eq!(
            series_annotation(SensorKind::SoilMoisture, 2500.0, Some(&cal)).as_deref(),
            Some("50.00 %")
        );
        assert_eq!(series_annotation(SensorKind::SoilMoisture, 2500.0, None), None);
        assert_eq!(series_annotation(SensorKind::Ph, 4.0, None).as_deref(), Some("Very Acidic"));
    }
}
