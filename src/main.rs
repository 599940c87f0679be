//! handmouse - hand-gesture mouse control
//!
//! Entry point for the replay/injection binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use handmouse::config::{Config, LoggingConfig};
use handmouse::hand::HandObservation;
use handmouse::inject::{dispatch, PointerSink, TraceSink};
use handmouse::pipeline::FramePipeline;
use handmouse::pointer::ScreenSize;
use handmouse::source::{HandSource, ReplaySource};

/// Command-line arguments for handmouse
#[derive(Parser, Debug)]
#[command(name = "handmouse")]
#[command(version, about = "Hand-gesture mouse control", long_about = None)]
pub struct Args {
    /// Configuration file path (defaults to the user config directory)
    #[arg(short, long, env = "HANDMOUSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Landmark session file to replay (JSON Lines, one frame per line)
    #[arg(short, long)]
    pub replay: PathBuf,

    /// Log pointer verbs without driving the OS cursor
    #[arg(long)]
    pub dry_run: bool,

    /// Replay as fast as possible instead of pacing by frame timestamps
    #[arg(long)]
    pub fast: bool,

    /// Mouse speed override
    #[arg(long)]
    pub speed: Option<f64>,

    /// Active-region margin override
    #[arg(long)]
    pub margin: Option<f64>,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log format (json|pretty|compact), overriding the config file
    #[arg(long)]
    pub log_format: Option<String>,

    /// Write logs to file in addition to stdout, overriding the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Configuration comes first so its [logging] section can steer the
    // subscriber; load errors print through the anyhow return path.
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Config::default_path().context("No user config directory available")?,
    };
    let config = Config::load_or_init(&config_path)?;
    let config = config.with_overrides(args.speed, args.margin);
    config.validate()?;

    let _log_guard = init_logging(&args, &config.logging)?;

    info!("════════════════════════════════════════════════════════");
    info!("  handmouse v{}", env!("CARGO_PKG_VERSION"));
    info!("  Built: {}", env!("BUILD_DATE"));
    info!("  Commit: {}", env!("GIT_HASH"));
    info!(
        "  Profile: {}",
        if cfg!(debug_assertions) { "debug" } else { "release" }
    );
    info!("════════════════════════════════════════════════════════");

    info!("Configuration loaded from {}", config_path.display());
    debug!("Config: {:?}", config);

    let mut source = ReplaySource::open(&args.replay)
        .context(format!("Failed to open session {}", args.replay.display()))?;

    let (mut sink, detected) = build_sink(&args)?;
    let screen = resolve_screen(&config, detected);
    info!(
        "Mapping {}x{} frames onto a {}x{} display",
        config.camera.width, config.camera.height, screen.width, screen.height
    );

    run(&config, &mut source, sink.as_mut(), screen, !args.fast)
}

/// Pick the pointer sink and, where available, the detected display size.
#[cfg(feature = "inject")]
fn build_sink(args: &Args) -> Result<(Box<dyn PointerSink>, Option<ScreenSize>)> {
    if args.dry_run {
        info!("Dry run: pointer verbs will be logged, not injected");
        return Ok((Box::new(TraceSink), None));
    }

    let sink = handmouse::inject::EnigoSink::new()?;
    let detected = sink.display_size();
    Ok((Box::new(sink), detected))
}

/// Pick the pointer sink and, where available, the detected display size.
#[cfg(not(feature = "inject"))]
fn build_sink(args: &Args) -> Result<(Box<dyn PointerSink>, Option<ScreenSize>)> {
    if !args.dry_run {
        warn!("Injection support not compiled in; logging pointer verbs only");
    }
    Ok((Box::new(TraceSink), None))
}

/// Detected display size when auto-detection is on, config fallback
/// otherwise.
fn resolve_screen(config: &Config, detected: Option<ScreenSize>) -> ScreenSize {
    if config.display.auto_detect {
        if let Some(size) = detected {
            info!("Detected display {}x{}", size.width, size.height);
            return size;
        }
    }
    ScreenSize::new(config.display.width, config.display.height)
}

/// Drive the pipeline over every frame the source yields.
fn run(
    config: &Config,
    source: &mut dyn HandSource,
    sink: &mut dyn PointerSink,
    screen: ScreenSize,
    pace: bool,
) -> Result<()> {
    let mut pipeline = FramePipeline::new(config, screen);
    let every = u64::from(config.camera.process_every_n_frames.max(1));
    let started = Instant::now();
    let mut frame_index: u64 = 0;
    let mut first_t: Option<u64> = None;
    let mut last_hand: Option<HandObservation> = None;

    while let Some(frame) = source.next_frame()? {
        let t_ms = frame.t_ms;

        if pace {
            let base = *first_t.get_or_insert(t_ms);
            let target = Duration::from_millis(t_ms.saturating_sub(base));
            let elapsed = started.elapsed();
            if target > elapsed {
                std::thread::sleep(target - elapsed);
            }
        }

        // Detection cadence: every Nth frame takes the fresh observation,
        // the frames in between re-feed the previous one
        if frame_index % every == 0 {
            last_hand = frame.hand;
        }
        frame_index += 1;

        let output = pipeline.process(last_hand.as_ref(), t_ms);
        if let Err(e) = dispatch(sink, output.cursor, output.events) {
            warn!("Dropping pointer output for this frame: {}", e);
        }
    }

    let stats = pipeline.stats();
    info!(
        "Session complete: {} frames ({} without hand), {} cursor moves",
        stats.frames, stats.frames_without_hand, stats.cursor_moves
    );
    info!(
        "Events: {} left clicks, {} right clicks, {} drags, {} scroll steps",
        stats.left_clicks, stats.right_clicks, stats.drags, stats.scroll_steps
    );
    Ok(())
}

fn init_logging(
    args: &Args,
    logging: &LoggingConfig,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let level = match args.verbose {
        0 => logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("handmouse={level},warn")));

    let format = args.log_format.as_deref().unwrap_or(&logging.format);
    let file_path = args.log_file.as_ref().or(logging.file.as_ref());

    // If a log file is specified, write to both stdout and file
    let guard = if let Some(path) = file_path {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let name = path
            .file_name()
            .context(format!("Invalid log file path: {}", path.display()))?;
        let appender = tracing_appender::rolling::never(dir, name);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        match format {
            "json" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(std::io::stdout),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(writer)
                            .with_ansi(false),
                    )
                    .init();
            }
            "compact" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(std::io::stdout),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(writer)
                            .with_ansi(false),
                    )
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .pretty()
                            .with_writer(std::io::stdout),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(writer)
                            .with_ansi(false),
                    )
                    .init();
            }
        }
        info!("Logging to file: {}", path.display());
        Some(guard)
    } else {
        match format {
            "json" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().json())
                    .init();
            }
            "compact" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().compact())
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().pretty())
                    .init();
            }
        }
        None
    };

    Ok(guard)
}
