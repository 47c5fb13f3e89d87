//! Domain types for the Progression context.

pub mod events;
pub mod state;
