pub mod navbar;
pub mod particles;
pub mod smooth_scroll;
