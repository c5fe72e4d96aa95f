pub mod lightbox;
pub mod notification;
