//! Arm hold test demo binary: replays a recorded landmark stream through
//! the engine and reports progress.

use anyhow::Result;
use arm_hold_test::{app::ArmTestApp, config::Config, source::RecordedSource};
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recorded landmark stream to replay (JSON lines, one frame per line)
    input: String,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Process the stream as fast as possible instead of pacing at FPS
    #[arg(long)]
    unpaced: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Arm Hold Test");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    if args.unpaced {
        config.playback.unpaced = true;
    }

    let mut app = ArmTestApp::new(config)?;
    let mut source = RecordedSource::open(&args.input)?;
    let report = app.run(&mut source)?;

    if report.completed {
        println!(
            "Test completed: position held for the full duration ({} frames processed)",
            report.frames_processed
        );
    } else {
        println!(
            "Test not completed: stream ended after {} frames in phase {:?}",
            report.frames_processed,
            app.session().phase()
        );
    }

    Ok(())
}
