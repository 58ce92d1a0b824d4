pub mod frame_source;
pub mod retry_policy;
