//! Yakyuken — Session context.
//!
//! Responsible for starting and resetting a play session, loading the
//! display name, and turning input events into commands for the
//! progression state machine.

pub mod application;
pub mod domain;
