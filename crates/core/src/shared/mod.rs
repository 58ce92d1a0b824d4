pub mod constants;
pub mod region;
