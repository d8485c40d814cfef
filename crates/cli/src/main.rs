use std::path::PathBuf;
use std::process;

use clap::Parser;

use balltrack_core::pipeline::blob_trigger_handler::BlobTriggerHandler;
use balltrack_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use balltrack_core::pipeline::track_video_use_case::TrackVideoUseCase;
use balltrack_core::shared::constants::DEFAULT_OUTPUT_PATH;
use balltrack_core::shared::track_config::TrackConfig;
use balltrack_core::trigger::infrastructure::file_blob::{FileInputBlob, FileOutputBlob};
use balltrack_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use balltrack_core::video::infrastructure::gif_encoder::GifAnimationEncoder;

/// Track a colored ball through a video and write its trail as an animated GIF.
#[derive(Parser, Debug)]
#[command(name = "balltrack")]
struct Cli {
    /// Input video file (treated as the arriving blob).
    input: PathBuf,

    /// Destination for the animated GIF.
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// JSON file with tracking parameters; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lower HSV bound as H,S,V (H in 0-179).
    #[arg(long, value_delimiter = ',')]
    lower: Option<Vec<u8>>,

    /// Upper HSV bound as H,S,V (H in 0-179).
    #[arg(long, value_delimiter = ',')]
    upper: Option<Vec<u8>>,

    /// Working width frames are resized to before tracking.
    #[arg(long)]
    width: Option<u32>,

    /// Maximum number of trail points kept.
    #[arg(long)]
    buffer: Option<usize>,

    /// Minimum enclosing radius for the circle and center marker.
    #[arg(long)]
    min_radius: Option<f64>,

    /// Gaussian blur kernel size (must be odd).
    #[arg(long)]
    blur_kernel: Option<usize>,

    /// Erode/dilate iterations applied to the color mask.
    #[arg(long)]
    morph_iterations: Option<usize>,

    /// Delay between GIF frames in milliseconds.
    #[arg(long)]
    frame_delay: Option<u32>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }

    let config = build_config(&cli)?;
    log::debug!("Tracking with {config:?}");

    let use_case = TrackVideoUseCase::new(
        config,
        Box::new(FfmpegReader::new()),
        Box::new(GifAnimationEncoder::new()),
        Box::new(StdoutPipelineLogger::default()),
    );
    let mut handler = BlobTriggerHandler::new(use_case);

    let input = FileInputBlob::new(&cli.input)?;
    let mut output = FileOutputBlob::new(&cli.output);
    let marker = handler.handle(&input, &mut output)?;

    log::info!("Output written to {}", output.path().display());
    println!("{marker}");
    Ok(())
}

/// Defaults, then the optional JSON file, then individual flags.
fn build_config(cli: &Cli) -> Result<TrackConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => TrackConfig::from_json_file(path)?,
        None => TrackConfig::default(),
    };

    if let Some(lower) = &cli.lower {
        config.lower = to_hsv(lower, "--lower")?;
    }
    if let Some(upper) = &cli.upper {
        config.upper = to_hsv(upper, "--upper")?;
    }
    if let Some(width) = cli.width {
        config.working_width = width;
    }
    if let Some(buffer) = cli.buffer {
        config.trail_capacity = buffer;
    }
    if let Some(min_radius) = cli.min_radius {
        config.min_radius = min_radius;
    }
    if let Some(kernel) = cli.blur_kernel {
        config.blur_kernel_size = kernel;
    }
    if let Some(iterations) = cli.morph_iterations {
        config.morph_iterations = iterations;
    }
    if let Some(delay) = cli.frame_delay {
        config.frame_delay_ms = delay;
    }

    config.validate()?;
    Ok(config)
}

fn to_hsv(values: &[u8], flag: &str) -> Result<[u8; 3], Box<dyn std::error::Error>> {
    <[u8; 3]>::try_from(values).map_err(|_| {
        format!("{flag} expects exactly three values H,S,V, got {}", values.len()).into()
    })
}
