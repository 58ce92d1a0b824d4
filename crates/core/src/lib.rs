//! Live face-and-eye preview: webcam capture, Haar-cascade detection and
//! rectangle overlays on a display window.
//!
//! All image work (decoding, color conversion, multi-scale detection,
//! drawing) is delegated to OpenCV; this crate owns the orchestration,
//! the seams that make it testable, and resource cleanup.

pub mod capture;
pub mod detection;
pub mod display;
pub mod pipeline;
pub mod shared;
