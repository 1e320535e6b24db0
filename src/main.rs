use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clockslider::config::{ConfigError, SliderConfig};
use clockslider::error::SliderError;
use clockslider::slider::Slider;
use clockslider::ticks::tick_marks;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("slider: {0}")]
    Slider(#[from] SliderError),
    #[error("could not encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "clockslider", about = "Inspect and replay circular slider configurations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the derived geometry, path stroke and initial knot values.
    Inspect(ConfigArgs),
    /// Feed raw angles for one knot through the request pipeline.
    Replay(ReplayArgs),
    /// Print the tick marks.
    Ticks(ConfigArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    #[arg(long, env = "CLOCKSLIDER_CONFIG", help = "Slider configuration (JSON)")]
    config: PathBuf,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[command(flatten)]
    config: ConfigArgs,

    #[arg(long, default_value_t = 0)]
    knot: usize,

    #[arg(required = true, allow_negative_numbers = true, help = "Raw angles in degrees")]
    angles: Vec<f64>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect(args) => run_inspect(&args),
        Command::Replay(args) => run_replay(&args),
        Command::Ticks(args) => run_ticks(&args),
    }
}

fn load(args: &ConfigArgs) -> Result<Slider, CliError> {
    let config = SliderConfig::from_path(&args.config)?;
    Ok(Slider::new(config)?)
}

fn run_inspect(args: &ConfigArgs) -> Result<(), CliError> {
    let slider = load(args)?;
    let report = json!({
        "geometry": slider.geometry(),
        "pathStroke": slider.path_stroke(),
        "innerFill": slider.inner_fill(),
        "snapshot": slider.snapshot()?,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_replay(args: &ReplayArgs) -> Result<(), CliError> {
    let mut slider = load(&args.config)?;
    if !slider.begin_knot_drag(args.knot)? {
        tracing::warn!(knot = args.knot, "knot is disabled; requests will not move it");
    }

    for &raw in &args.angles {
        let update = slider.request_knot_angle(args.knot, raw)?;
        let line = json!({
            "request": raw,
            "outcome": update.kind(),
            "angles": slider.knots().iter().map(|k| k.angle_deg).collect::<Vec<_>>(),
            "values": update.snapshot().map(|s| &s.values),
            "lapCount": slider.lap_count(),
        });
        println!("{}", serde_json::to_string(&line)?);
    }

    slider.end_gesture();
    Ok(())
}

fn run_ticks(args: &ConfigArgs) -> Result<(), CliError> {
    let slider = load(args)?;
    // Laid out even when the configuration leaves them hidden.
    let marks = tick_marks(slider.geometry(), &slider.config().ticks);
    println!("{}", serde_json::to_string_pretty(&marks)?);
    Ok(())
}
