pub mod geometry;
pub mod hybrid36;
pub mod identifiers;
