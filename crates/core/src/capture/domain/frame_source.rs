use opencv::core::Mat;

/// Domain interface for frame acquisition.
///
/// `Ok(None)` signals a transient drop (the device produced nothing this
/// time); the caller decides whether to retry via its
/// [`RetryPolicy`](super::retry_policy::RetryPolicy). `Err` is a hard
/// capture-layer failure.
pub trait FrameSource: Send {
    fn next_frame(&mut self) -> Result<Option<Mat>, Box<dyn std::error::Error>>;
}
