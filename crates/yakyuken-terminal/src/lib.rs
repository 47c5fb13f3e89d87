//! Yakyuken terminal front-end.
//!
//! Implements the presentation contract on a text stream, reads choices
//! from a line-oriented input, and loads configuration from the
//! environment.

pub mod config;
pub mod error;
pub mod input;
pub mod name_file;
pub mod presenter;
