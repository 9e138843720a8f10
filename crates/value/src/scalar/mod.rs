//! Scalar wrappers

pub mod boolean;
pub mod number;
pub mod symbol;
pub mod text;

pub use boolean::Boolean;
pub use number::{Float, Integer};
pub use symbol::Symbol;
pub use text::Text;
