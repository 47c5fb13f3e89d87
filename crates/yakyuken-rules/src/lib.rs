//! Yakyuken — Rules context.
//!
//! Responsible for the three hands, picking the computer's hand and
//! resolving a round to an outcome. Everything here is pure.

pub mod domain;
