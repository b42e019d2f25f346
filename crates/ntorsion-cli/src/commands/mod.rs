pub mod analyze;
pub mod rings;
