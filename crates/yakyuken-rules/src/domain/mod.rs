//! Domain types for the Rules context.

pub mod choice;
pub mod outcome;
