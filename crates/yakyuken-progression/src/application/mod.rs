//! Async sequencing on top of the progression state.

pub mod reveal;
pub mod sequence;
