//! Yakyuken Core — shared seams and domain abstractions.
//!
//! This crate defines the traits and value types that the rules,
//! progression and session crates depend on: time, randomness, the
//! presentation contract, the name resource, commands, events, errors
//! and configuration. Production implementations that need a runtime
//! (the system clock, the tokio timer) live here too; everything that
//! touches the terminal or the filesystem lives in `yakyuken-terminal`.

pub mod assets;
pub mod clock;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod name_source;
pub mod presenter;
pub mod rng;
pub mod timer;
