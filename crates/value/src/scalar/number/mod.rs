//! Numeric wrappers

mod float;
mod integer;

pub use float::Float;
pub use integer::Integer;
