pub mod dom;
pub mod lifecycle;
pub mod schedule;
