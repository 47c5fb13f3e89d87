//! Session lifecycle and the input-driven run loop.

pub mod driver;
pub mod lifecycle;
