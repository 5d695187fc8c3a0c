//! Gesture camera replay tool: drives the gesture pipeline from a landmark recording.

use anyhow::{Context, Result};
use clap::Parser;
use gesture_camera::{
    camera::OrbitCamera,
    config::{Config, EXAMPLE_CONFIG},
    controller::{GestureController, RunStats, TickOutcome},
    replay::Recording,
    ticker::{HostTicker, IntervalTicker},
};
use log::{info, warn};
use std::{path::PathBuf, time::Duration};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark recording to replay
    #[arg(short, long, required_unless_present = "print_config")]
    input: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Override the pipeline frame rate cap
    #[arg(long)]
    fps: Option<u32>,

    /// Host tick period in milliseconds (display refresh)
    #[arg(long, default_value = "16")]
    tick_ms: u64,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    info!("Gesture Camera - landmark replay");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(fps) = args.fps {
        config.timing.target_fps = fps;
    }

    let input = args.input.context("--input is required")?;
    let recording = Recording::from_file(&input).with_context(|| format!("reading {}", input.display()))?;
    let (mut capture, source) = recording.into_playback();

    let camera = OrbitCamera::new(config.camera.clone(), config.tour.duration());
    let mut controller = GestureController::new(&config, camera)?;

    if let Err(e) = controller.enable(&mut capture, Box::new(source)) {
        if let Some(message) = e.user_message() {
            eprintln!("{message}");
        }
        return Err(e.into());
    }

    let mut ticker = IntervalTicker::new(Duration::from_millis(args.tick_ms.max(1)));
    let mut stats = RunStats::default();

    while let Some(now) = ticker.next_tick() {
        let outcome = controller.tick(now);
        stats.record(&outcome);
        match &outcome {
            TickOutcome::Processed { payload, command } => {
                let position = controller.sink().position();
                info!(
                    "{:>6} rot=({:+.3}, {:+.3}) zoom={:+.3} pan=({:+.3}, {:+.3}) camera=({:.2}, {:.2}, {:.2}){}",
                    payload.gesture.as_str(),
                    payload.rotation.x,
                    payload.rotation.y,
                    payload.zoom,
                    payload.pan.x,
                    payload.pan.y,
                    position.x,
                    position.y,
                    position.z,
                    command.map(|c| format!(" [{c:?}]")).unwrap_or_default()
                );
            }
            TickOutcome::StreamEnded | TickOutcome::Disabled => break,
            _ => {}
        }
    }

    controller.disable();

    info!(
        "Replay finished: {} ticks, {} frames processed, {} without hand, {} failed, {} skipped, {} not ready, {} view resets, {} tour toggles",
        stats.ticks,
        stats.processed,
        stats.no_hand,
        stats.failed,
        stats.skipped,
        stats.not_ready,
        stats.resets,
        stats.tour_toggles
    );

    Ok(())
}
