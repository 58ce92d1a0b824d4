pub mod overlay;
pub mod preview_loop_use_case;
