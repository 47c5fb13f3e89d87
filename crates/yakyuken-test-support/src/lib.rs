//! Shared test doubles and utilities for the Yakyuken game.

mod clock;
mod name_source;
mod presenter;
mod rng;
mod timer;

pub use clock::FixedClock;
pub use name_source::{FailingNameSource, StaticNameSource};
pub use presenter::{PresenterCall, RecordingPresenter};
pub use rng::{MockRng, SequenceRng};
pub use timer::InstantTimer;
