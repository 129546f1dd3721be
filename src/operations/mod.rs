pub mod bucket;
pub mod classify;
pub mod extract;
