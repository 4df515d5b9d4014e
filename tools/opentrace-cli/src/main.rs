//! OpenTrace CLI: synthesize and hand off golf shot tracers.
//!
//! Usage:
//!   opentrace generate [OPTIONS]   Build a tracer from take-off and landing taps
//!   opentrace seed <TRACK>         Build a tracer from a detected ball track
//!   opentrace plan <TRACE>         Write per-frame overlay drawing instructions
//!   opentrace request <TRACE>      Write the render service request body

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use opentrace_trace_model::Point2D;

mod commands;

#[derive(Parser)]
#[command(
    name = "opentrace",
    about = "Golf shot tracer trajectory synthesis",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a tracer from take-off and landing points
    Generate {
        /// Take-off point in pixels, "X,Y"
        #[arg(long, value_parser = commands::parse_point)]
        start: Point2D,

        /// Landing point in pixels, "X,Y"
        #[arg(long, value_parser = commands::parse_point)]
        end: Point2D,

        /// Video width
        #[arg(long)]
        width: u32,

        /// Video height
        #[arg(long)]
        height: u32,

        /// Number of frames in the video
        #[arg(long)]
        total_frames: u64,

        /// Frame at which the ball is struck
        #[arg(long, default_value = "0")]
        start_frame: u64,

        /// Video frame rate (defaults to config)
        #[arg(long)]
        fps: Option<u32>,

        /// Apex elevation [0.0, 1.0]
        #[arg(long)]
        peak_height: Option<f64>,

        /// Lateral bend [-1.0, 1.0]
        #[arg(long, allow_hyphen_values = true)]
        curve: Option<f64>,

        /// Rise speed multiplier [0.5, 10.0]
        #[arg(long)]
        ball_speed: Option<f64>,

        /// Apex hold and launch reach [0.0, 1.0]
        #[arg(long)]
        hangtime: Option<f64>,

        /// Trajectory tuning file (JSON)
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// Output trace file
        #[arg(short, long, default_value = "trace.json")]
        output: PathBuf,
    },

    /// Seed a tracer from a detected ball track (JSON array or JSONL)
    Seed {
        /// Path to the track file
        track: PathBuf,

        /// Video width
        #[arg(long)]
        width: u32,

        /// Video height
        #[arg(long)]
        height: u32,

        /// Number of frames in the video
        #[arg(long)]
        total_frames: u64,

        /// Video frame rate (defaults to config)
        #[arg(long)]
        fps: Option<u32>,

        /// Landing point override, "X,Y"
        #[arg(long, value_parser = commands::parse_point)]
        landing: Option<Point2D>,

        /// Trajectory tuning file (JSON)
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// Output trace file
        #[arg(short, long, default_value = "trace.json")]
        output: PathBuf,
    },

    /// Write per-frame overlay drawing instructions for a trace
    Plan {
        /// Path to the trace file
        trace: PathBuf,

        /// Tracer style file (JSON); defaults to the trace's style
        #[arg(long)]
        style: Option<PathBuf>,

        /// Clip duration in seconds (defaults to the trace's video)
        #[arg(long)]
        duration: Option<f64>,

        /// Output plan file
        #[arg(short, long, default_value = "overlay-plan.json")]
        output: PathBuf,
    },

    /// Write the render service request body for a trace
    Request {
        /// Path to the trace file
        trace: PathBuf,

        /// Clip duration in seconds (defaults to the trace's video)
        #[arg(long)]
        duration: Option<f64>,

        /// Output request file
        #[arg(short, long, default_value = "render-request.json")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = opentrace_common::AppConfig::load();

    let logging = if cli.verbose {
        config.logging.verbose()
    } else {
        config.logging.clone()
    };
    opentrace_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Generate {
            start,
            end,
            width,
            height,
            total_frames,
            start_frame,
            fps,
            peak_height,
            curve,
            ball_speed,
            hangtime,
            tuning,
            output,
        } => commands::generate::run(
            &config,
            commands::generate::GenerateArgs {
                start,
                end,
                width,
                height,
                total_frames,
                start_frame,
                fps,
                peak_height,
                curve,
                ball_speed,
                hangtime,
                tuning,
            },
            output,
        ),
        Commands::Seed {
            track,
            width,
            height,
            total_frames,
            fps,
            landing,
            tuning,
            output,
        } => commands::seed::run(
            &config,
            track,
            width,
            height,
            total_frames,
            fps,
            landing,
            tuning,
            output,
        ),
        Commands::Plan {
            trace,
            style,
            duration,
            output,
        } => commands::plan::run(trace, style, duration, output),
        Commands::Request {
            trace,
            duration,
            output,
        } => commands::request::run(trace, duration, output),
    }
}
