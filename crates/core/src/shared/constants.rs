pub const FACE_CASCADE_FILE: &str = "haarcascade_frontalface_default.xml";
pub const EYE_CASCADE_FILE: &str = "haarcascade_eye.xml";

/// Subdirectory of the OpenCV data directory holding the cascade files.
pub const HAARCASCADES_SUBDIR: &str = "haarcascades";

pub const WINDOW_TITLE: &str = "Face & Eye Detection - press 'q' to quit";

/// The only key the preview loop reacts to.
pub const QUIT_KEY: char = 'q';

/// Consecutive dropped frames tolerated before the default retry policy
/// gives up on the camera.
pub const DEFAULT_CAPTURE_RETRY_LIMIT: u32 = 100;
