//! Yakyuken — Progression context.
//!
//! Responsible for the game state (stage, rounds lost by the character,
//! phase), the single-flight guard that keeps sequences from overlapping,
//! and the choreography of one sequence: outcome feedback, the optional
//! stage reveal, and the clear check.

pub mod application;
pub mod domain;
