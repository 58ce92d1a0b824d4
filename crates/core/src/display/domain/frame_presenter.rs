use opencv::core::Mat;

/// Domain interface for presenting frames and observing key presses.
pub trait FramePresenter {
    fn show(&mut self, frame: &Mat) -> Result<(), Box<dyn std::error::Error>>;

    /// Polls briefly for a key press; `None` when no key was observed
    /// within the poll window.
    fn poll_key(&mut self) -> Result<Option<char>, Box<dyn std::error::Error>>;
}
