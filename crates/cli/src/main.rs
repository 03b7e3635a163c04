use anyhow::{anyhow, Context};
use config::{Config, File};
use hexgrid::{Hex, HexF, Layout, LayoutConfig, OrientationKind, Point2};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
};
use structopt::{clap::AppSettings, StructOpt};

/// CLI for converting between hex grid coordinates and screen coordinates.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "hexgrid",
    global_settings = &[AppSettings::AllowNegativeNumbers]
)]
struct Opt {
    /// Path to a config file that defines the grid layout. Supported formats:
    /// JSON, TOML. If not given, the default layout is used (pointy tiles of
    /// size 1, centered on the screen origin)
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Override the tile orientation from the config. Options: pointy, flat
    #[structopt(short, long)]
    orientation: Option<OrientationKind>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

/// Every command prints its result as JSON, except `config`.
#[derive(Debug, StructOpt)]
enum Command {
    /// Convert a grid point to screen space. The s component is optional,
    /// but if given the three must sum to zero
    ToScreen { q: f64, r: f64, s: Option<f64> },

    /// Convert a screen point to the hex grid
    ToHex {
        x: f64,
        y: f64,
        /// Round to the tile that contains the point
        #[structopt(long)]
        round: bool,
    },

    /// List the 6 neighbors of a tile, in direction order
    Neighbors { q: i32, r: i32 },

    /// List the screen-space corners of a tile, e.g. to draw it
    Corners {
        q: i32,
        r: i32,
        /// Repeat the first corner at the end, to close the polygon
        #[structopt(long)]
        wrap: bool,
    },

    /// Get the number of steps between two tiles
    Distance { q1: i32, r1: i32, q2: i32, r2: i32 },

    /// Print the effective layout config, in TOML format
    Config,
}

fn load_config(config_path: &Path) -> anyhow::Result<LayoutConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let mut config = match &opt.config {
        Some(config_path) => {
            let config = load_config(config_path)?;
            info!("Loaded layout config from {:?}", config_path);
            config
        }
        None => LayoutConfig::default(),
    };
    if let Some(orientation) = opt.orientation {
        config.orientation = orientation;
    }
    let layout =
        Layout::from_config(&config).context("invalid layout config")?;

    match opt.command {
        Command::ToScreen { q, r, s } => {
            let hex = match s {
                Some(s) => HexF::new(q, r, s)?,
                None => HexF::new_qr(q, r),
            };
            print_json(&layout.hex_to_screen(hex))
        }
        Command::ToHex { x, y, round } => {
            let point = layout.screen_to_hex(Point2::new(x, y));
            if round {
                print_json(&point.round())
            } else {
                print_json(&point)
            }
        }
        Command::Neighbors { q, r } => {
            print_json(&Hex::new_qr(q, r).neighbors().collect::<Vec<_>>())
        }
        Command::Corners { q, r, wrap } => {
            let mut corners = layout.polygon_corners(Hex::new_qr(q, r)).to_vec();
            if wrap {
                corners.push(corners[0]);
            }
            print_json(&corners)
        }
        Command::Distance { q1, r1, q2, r2 } => {
            print_json(&Hex::new_qr(q1, r1).distance(Hex::new_qr(q2, r2)))
        }
        Command::Config => {
            print!(
                "{}",
                toml::to_string_pretty(&config)
                    .context("error serializing config")?
            );
            Ok(())
        }
    }
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
