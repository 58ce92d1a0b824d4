use opencv::core::Mat;
use opencv::imgproc;

use crate::capture::domain::frame_source::FrameSource;
use crate::capture::domain::retry_policy::RetryPolicy;
use crate::detection::domain::region_detector::{DetectParams, RegionDetector};
use crate::display::domain::frame_presenter::FramePresenter;
use crate::pipeline::overlay::{self, OverlayStyle};
use crate::shared::constants::QUIT_KEY;
use crate::shared::region::Region;

/// Counters accumulated over one preview session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub frames_presented: u64,
    pub faces_marked: u64,
    pub eyes_marked: u64,
    pub drops_recovered: u64,
}

/// Drives the capture → detect → annotate → present loop until the quit
/// key is observed.
///
/// Single-threaded and blocking: each stage runs to completion before
/// the next. The camera handle, classifiers and window are the only
/// state that outlives an iteration; everything per-frame is rebuilt
/// from scratch.
pub struct PreviewLoopUseCase {
    source: Box<dyn FrameSource>,
    face_detector: Box<dyn RegionDetector>,
    eye_detector: Box<dyn RegionDetector>,
    presenter: Box<dyn FramePresenter>,
    face_params: DetectParams,
    eye_params: DetectParams,
    style: OverlayStyle,
    retry_policy: RetryPolicy,
}

impl PreviewLoopUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source: Box<dyn FrameSource>,
        face_detector: Box<dyn RegionDetector>,
        eye_detector: Box<dyn RegionDetector>,
        presenter: Box<dyn FramePresenter>,
        face_params: DetectParams,
        eye_params: DetectParams,
        style: OverlayStyle,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            source,
            face_detector,
            eye_detector,
            presenter,
            face_params,
            eye_params,
            style,
            retry_policy,
        }
    }

    /// Runs the loop to completion.
    ///
    /// Returns `Ok` only after the quit key; errors out when a hard
    /// capture failure occurs or a bounded retry policy is exhausted.
    pub fn run(&mut self) -> Result<LoopStats, Box<dyn std::error::Error>> {
        let mut stats = LoopStats::default();
        let mut consecutive_drops: u32 = 0;

        loop {
            let mut frame = match self.source.next_frame()? {
                Some(frame) => {
                    stats.drops_recovered += u64::from(consecutive_drops);
                    consecutive_drops = 0;
                    frame
                }
                None => {
                    consecutive_drops += 1;
                    log::warn!("frame capture failed, retrying ({consecutive_drops} consecutive)");
                    if !self.retry_policy.allows(consecutive_drops) {
                        return Err(format!(
                            "giving up after {consecutive_drops} consecutive capture failures"
                        )
                        .into());
                    }
                    continue;
                }
            };

            // Haar cascades operate on intensity, not color.
            let gray = grayscale(&frame)?;

            let faces = self.face_detector.detect(&gray, &self.face_params)?;
            for face in &faces {
                overlay::draw_outline(&mut frame, face, self.style.face_color, self.style.thickness)?;

                let eyes =
                    eyes_in_face(&gray, face, self.eye_detector.as_mut(), &self.eye_params)?;
                for eye in &eyes {
                    overlay::draw_outline(&mut frame, eye, self.style.eye_color, self.style.thickness)?;
                }
                stats.eyes_marked += eyes.len() as u64;
            }
            stats.faces_marked += faces.len() as u64;

            self.presenter.show(&frame)?;
            stats.frames_presented += 1;

            if self.presenter.poll_key()? == Some(QUIT_KEY) {
                log::info!("quit key received, ending preview");
                break;
            }
        }

        Ok(stats)
    }
}

/// Single-channel intensity copy of a BGR frame.
pub fn grayscale(frame: &Mat) -> Result<Mat, opencv::Error> {
    let mut gray = Mat::default();
    imgproc::cvt_color(frame, &mut gray, imgproc::COLOR_BGR2GRAY, 0)?;
    Ok(gray)
}

/// Runs eye detection restricted to a face's sub-region and lifts the
/// results to frame-global coordinates.
///
/// Searching only inside the face keeps every eye rectangle within its
/// face's bounds by construction.
pub fn eyes_in_face(
    gray: &Mat,
    face: &Region,
    detector: &mut dyn RegionDetector,
    params: &DetectParams,
) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
    let roi = Mat::roi(gray, overlay::to_rect(face))?;
    let eyes = detector.detect(&roi, params)?;
    Ok(eyes
        .into_iter()
        .map(|eye| eye.translate(face.x, face.y))
        .collect())
}
