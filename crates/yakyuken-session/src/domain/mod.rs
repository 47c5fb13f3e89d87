//! Domain types for the Session context.

pub mod commands;
