//! Collection types for rubyx-value
//!
//! Both collections use persistent data structures:
//! - Array: ordered sequence of one element kind (`im::Vector`)
//! - Hash: key-value map (`im::HashMap`)

pub mod array;
pub mod hash;

// Re-exports
pub use array::{Array, CountArg};
pub use hash::{Hash, Pair};
