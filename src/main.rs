use anyhow::Result;
use chrono::{Local, NaiveTime};
use clap::{Parser, ValueEnum};
use hoodie::assets::load_assets;
use hoodie::clock::{parse_time, HandRotations};
use hoodie::config::AppConfig;
use hoodie::frame::{render_frame, write_frame};
use hoodie::{WatchFaceRenderer, WatchMode, WatchShape};
use log::{error, info, warn};
use std::path::PathBuf;

/// Hoodie - render a frame of the golden watch face to a PNG file
#[derive(Parser, Debug, Clone)]
#[command(name = "hoodie")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Screen width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Screen height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Chin size in pixels (flat strip at the bottom of some round screens)
    #[arg(long)]
    chin: Option<i32>,

    /// Screen shape
    #[arg(long, value_enum)]
    shape: Option<ShapeArg>,

    /// Display mode
    #[arg(short = 'm', long, value_enum, default_value = "interactive")]
    mode: ModeArg,

    /// Time to show, HH:MM or HH:MM:SS (defaults to the current local time)
    #[arg(short = 't', long, value_parser = parse_time)]
    time: Option<NaiveTime>,

    /// Output PNG file
    #[arg(short = 'o', long, default_value = "hoodie.png")]
    output: PathBuf,

    /// Config file to use instead of the default one
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Save the effective configuration (after command line overrides)
    #[arg(long)]
    write_config: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ShapeArg {
    Round,
    Square,
}

impl From<ShapeArg> for WatchShape {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::Round => WatchShape::Round,
            ShapeArg::Square => WatchShape::Square,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ModeArg {
    Interactive,
    Ambient,
    LowBit,
}

impl From<ModeArg> for WatchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Interactive => WatchMode::Interactive,
            ModeArg::Ambient => WatchMode::Ambient,
            ModeArg::LowBit => WatchMode::LowBit,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => match AppConfig::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config, using defaults: {:#}", e);
                AppConfig::default()
            }
        },
    };

    // Command line values override the config file
    if let Some(width) = cli.width {
        config.screen.width = width;
    }
    if let Some(height) = cli.height {
        config.screen.height = height;
    }
    if let Some(chin) = cli.chin {
        config.screen.chin_size = chin;
    }
    if let Some(shape) = cli.shape {
        config.screen.shape = shape.into();
    }

    if cli.write_config {
        match &cli.config {
            Some(path) => config.save_to_path(path)?,
            None => config.save()?,
        }
        info!("Configuration saved");
    }

    let screen = config.screen.clone();
    let assets = load_assets(&config.assets, &config.face)?;
    let mut renderer = WatchFaceRenderer::new(config.face.sanitized(), assets);
    renderer.set_mode(cli.mode.into());
    renderer.resize(screen.width, screen.height, screen.chin_size, screen.shape)?;

    let time = cli.time.unwrap_or_else(|| Local::now().time());
    let rotations = HandRotations::from_time(&time);

    let frame = render_frame(&renderer, screen.width, screen.height, rotations)?;
    write_frame(&frame, &cli.output)?;

    info!(
        "Rendered {} in {:?} mode ({}x{}, chin {}) to {}",
        time.format("%H:%M:%S"),
        renderer.mode(),
        screen.width,
        screen.height,
        screen.chin_size,
        cli.output.display()
    );

    Ok(())
}
