//! Capabilities and configuration shared by every wrapper type

pub mod element;
pub mod limits;

pub use element::Element;
pub use limits::ValueLimits;
