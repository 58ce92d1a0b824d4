pub mod cascade_resolver;
pub mod haar_cascade_detector;
