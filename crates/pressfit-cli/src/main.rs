//! Pressfit CLI — asset validation, field probing, and headless runs.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pressfit")]
#[command(version, about = "Pressfit — SDF collision core for press-fit assembly puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an SDF asset (and optionally a point cloud) without running.
    Validate {
        /// Path to the SDF text asset.
        sdf: String,

        /// Path to the NOFF surface point cloud.
        #[arg(short, long)]
        points: Option<String>,
    },

    /// Look up the distance field at a point.
    Probe {
        /// Path to the SDF text asset.
        sdf: String,

        /// Query point as `x,y,z` in the grid's local frame.
        #[arg(short, long)]
        point: String,

        /// Emit the result as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Drive the full loop + worker pipeline with a scripted descent.
    Run {
        /// Path to the SDF text asset.
        sdf: String,

        /// Path to the NOFF surface point cloud.
        points: String,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 600)]
        frames: u32,

        /// Simulated frame rate.
        #[arg(long, default_value_t = 60.0)]
        fps: f32,

        /// Disable correction application (detection only).
        #[arg(long)]
        no_correction: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { sdf, points } => commands::validate(&sdf, points.as_deref()),
        Commands::Probe { sdf, point, json } => commands::probe(&sdf, &point, json),
        Commands::Run {
            sdf,
            points,
            frames,
            fps,
            no_correction,
        } => commands::run(&sdf, &points, frames, fps, !no_correction),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
