use opencv::core::Mat;
use opencv::highgui;

use crate::display::domain::frame_presenter::FramePresenter;

/// Poll window for key presses, in milliseconds.
const KEY_POLL_MS: i32 = 1;

/// A titled `highgui` preview window.
///
/// Created only after the camera and cascades are ready, so fatal
/// startup errors never leave a window behind. Destroyed in `Drop` on
/// every exit path.
pub struct HighguiWindow {
    title: String,
}

impl HighguiWindow {
    pub fn open(title: &str) -> Result<Self, opencv::Error> {
        highgui::named_window(title, highgui::WINDOW_AUTOSIZE)?;
        Ok(Self {
            title: title.to_string(),
        })
    }
}

impl FramePresenter for HighguiWindow {
    fn show(&mut self, frame: &Mat) -> Result<(), Box<dyn std::error::Error>> {
        highgui::imshow(&self.title, frame)?;
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<char>, Box<dyn std::error::Error>> {
        let key = highgui::wait_key(KEY_POLL_MS)?;
        if key < 0 {
            return Ok(None);
        }
        // highgui reports the key in the low byte.
        Ok(Some((key & 0xff) as u8 as char))
    }
}

impl Drop for HighguiWindow {
    fn drop(&mut self) {
        if let Err(e) = highgui::destroy_window(&self.title) {
            log::warn!("failed to destroy window {:?}: {e}", self.title);
        }
    }
}
