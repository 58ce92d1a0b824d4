use std::path::PathBuf;
use std::process;

use clap::Parser;

use facepeek_core::capture::domain::retry_policy::RetryPolicy;
use facepeek_core::capture::infrastructure::camera_source::CameraSource;
use facepeek_core::detection::domain::region_detector::DetectParams;
use facepeek_core::detection::infrastructure::cascade_resolver;
use facepeek_core::detection::infrastructure::haar_cascade_detector::HaarCascadeDetector;
use facepeek_core::display::infrastructure::highgui_window::HighguiWindow;
use facepeek_core::pipeline::overlay::OverlayStyle;
use facepeek_core::pipeline::preview_loop_use_case::PreviewLoopUseCase;
use facepeek_core::shared::constants::{
    DEFAULT_CAPTURE_RETRY_LIMIT, EYE_CASCADE_FILE, FACE_CASCADE_FILE, WINDOW_TITLE,
};

/// Live face and eye detection on the default webcam.
#[derive(Parser)]
#[command(name = "facepeek")]
struct Cli {
    /// Camera device index.
    #[arg(long, default_value = "0")]
    device: i32,

    /// Directory holding the Haar cascade XML files (overrides the
    /// OpenCV data search).
    #[arg(long)]
    cascade_dir: Option<PathBuf>,

    /// Detection scale step for both cascades (must be > 1.0).
    #[arg(long, default_value = "1.1")]
    scale_factor: f64,

    /// Overlapping candidates required to keep a face rectangle.
    #[arg(long, default_value = "5")]
    face_min_neighbors: i32,

    /// Smallest face edge in pixels.
    #[arg(long, default_value = "60")]
    face_min_size: i32,

    /// Overlapping candidates required to keep an eye rectangle.
    #[arg(long, default_value = "10")]
    eye_min_neighbors: i32,

    /// Smallest eye edge in pixels.
    #[arg(long, default_value = "20")]
    eye_min_size: i32,

    /// Consecutive dropped frames tolerated before giving up
    /// (0 = retry forever).
    #[arg(long, default_value_t = DEFAULT_CAPTURE_RETRY_LIMIT)]
    capture_retry_limit: u32,
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
    validate(&cli)?;

    let cascade_dir = cli.cascade_dir.as_deref();
    let face_path = cascade_resolver::resolve(FACE_CASCADE_FILE, cascade_dir)?;
    let eye_path = cascade_resolver::resolve(EYE_CASCADE_FILE, cascade_dir)?;

    let face_detector = HaarCascadeDetector::open(&face_path)?;
    let eye_detector = HaarCascadeDetector::open(&eye_path)?;
    let camera = CameraSource::open(cli.device)?;

    // The window comes last: startup failures above must never leave a
    // display surface behind.
    let window = HighguiWindow::open(WINDOW_TITLE)?;
    log::info!("webcam stream started, press 'q' to quit");

    let mut preview = PreviewLoopUseCase::new(
        Box::new(camera),
        Box::new(face_detector),
        Box::new(eye_detector),
        Box::new(window),
        face_params(&cli),
        eye_params(&cli),
        OverlayStyle::default(),
        retry_policy(&cli),
    );

    let stats = preview.run()?;
    log::info!(
        "session ended: {} frames presented, {} faces and {} eyes marked, {} dropped frames recovered",
        stats.frames_presented,
        stats.faces_marked,
        stats.eyes_marked,
        stats.drops_recovered
    );
    Ok(())
}

fn face_params(cli: &Cli) -> DetectParams {
    DetectParams {
        scale_factor: cli.scale_factor,
        min_neighbors: cli.face_min_neighbors,
        min_size: (cli.face_min_size, cli.face_min_size),
    }
}

fn eye_params(cli: &Cli) -> DetectParams {
    DetectParams {
        scale_factor: cli.scale_factor,
        min_neighbors: cli.eye_min_neighbors,
        min_size: (cli.eye_min_size, cli.eye_min_size),
    }
}

fn retry_policy(cli: &Cli) -> RetryPolicy {
    if cli.capture_retry_limit == 0 {
        RetryPolicy::Indefinite
    } else {
        RetryPolicy::Bounded(cli.capture_retry_limit)
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.scale_factor <= 1.0 {
        return Err(format!(
            "Scale factor must be greater than 1.0, got {}",
            cli.scale_factor
        )
        .into());
    }
    if cli.face_min_neighbors < 0 || cli.eye_min_neighbors < 0 {
        return Err("Minimum neighbors must not be negative".into());
    }
    if cli.face_min_size <= 0 || cli.eye_min_size <= 0 {
        return Err("Minimum sizes must be positive".into());
    }
    if cli.device < 0 {
        return Err(format!("Device index must not be negative, got {}", cli.device).into());
    }
    Ok(())
}
