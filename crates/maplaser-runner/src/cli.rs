//! Command-line arguments.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Select a map area, submit it for rendering and download the SVG.
#[derive(Debug, Parser)]
#[command(name = "maplaser", version, about)]
pub struct Cli {
    /// YAML file with client settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the rendering service endpoint.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Override the delay between poll attempts (seconds).
    #[arg(long, global = true)]
    pub poll_interval: Option<u64>,

    /// Override the poll attempt bound (0 polls forever).
    #[arg(long, global = true)]
    pub max_attempts: Option<u32>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a map request and wait for the image.
    Submit(SubmitArgs),

    /// Wait for a previously submitted job and download its image.
    Poll {
        /// Job identifier returned on submission.
        job_id: String,

        /// Directory the SVG is written to.
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Check whether an email address is accepted.
    CheckEmail { address: String },

    /// List the available map layers.
    Layers,
}

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Name of the person the map is for.
    #[arg(long)]
    pub name: String,

    /// Email address of the person the map is for.
    #[arg(long)]
    pub email: String,

    /// Southern edge (degrees). Requires all four bounds.
    #[arg(long, allow_hyphen_values = true, requires_all = ["minlon", "maxlat", "maxlon"])]
    pub minlat: Option<f64>,

    /// Western edge (degrees).
    #[arg(long, allow_hyphen_values = true, requires_all = ["minlat", "maxlat", "maxlon"])]
    pub minlon: Option<f64>,

    /// Northern edge (degrees).
    #[arg(long, allow_hyphen_values = true, requires_all = ["minlat", "minlon", "maxlon"])]
    pub maxlat: Option<f64>,

    /// Eastern edge (degrees).
    #[arg(long, allow_hyphen_values = true, requires_all = ["minlat", "minlon", "maxlat"])]
    pub maxlon: Option<f64>,

    /// Print width in millimetres.
    #[arg(long)]
    pub x_mm: Option<f64>,

    /// Print height in millimetres.
    #[arg(long)]
    pub y_mm: Option<f64>,

    /// Contour interval in metres.
    #[arg(long, default_value_t = maplaser_request::DEFAULT_CONTOUR_INTERVAL)]
    pub contour_interval: f64,

    /// Layer to include (repeatable). See `maplaser layers`.
    #[arg(long = "layer")]
    pub layers: Vec<String>,

    /// Print the JSON request instead of sending it.
    #[arg(long)]
    pub dry_run: bool,

    /// Submit only; print the job id without waiting for the image.
    #[arg(long)]
    pub no_wait: bool,

    /// Directory the SVG is written to.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl SubmitArgs {
    /// The four bounds, if they were given.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        Some((self.minlat?, self.minlon?, self.maxlat?, self.maxlon?))
    }
}
