//! Shared helpers for session integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use yakyuken_core::config::GameConfig;
use yakyuken_core::name_source::NameSource;
use yakyuken_core::rng::DeterministicRng;
use yakyuken_session::application::lifecycle::{Session, SessionDeps};
use yakyuken_test_support::{FixedClock, InstantTimer, RecordingPresenter, StaticNameSource};

/// RNG value for the computer throwing scissors.
pub const SCISSORS: u32 = 2;

/// RNG value for the computer throwing rock.
pub const ROCK: u32 = 0;

/// A session wired to recording doubles.
pub struct TestSession {
    pub session: Session,
    pub presenter: Arc<RecordingPresenter>,
    pub timer: Arc<InstantTimer>,
}

/// Build a session with the default config, scripted computer hands and the
/// given name source. The session is not initialized.
pub fn build_session(
    rng: impl DeterministicRng + 'static,
    name_source: Arc<dyn NameSource>,
) -> TestSession {
    let presenter = Arc::new(RecordingPresenter::new());
    let timer = Arc::new(InstantTimer::new());
    let session = Session::new(
        &GameConfig::default(),
        SessionDeps {
            presenter: presenter.clone(),
            timer: timer.clone(),
            clock: Arc::new(FixedClock::standard()),
            rng: Box::new(rng),
            name_source,
        },
    );
    TestSession {
        session,
        presenter,
        timer,
    }
}

/// A name source returning "Hanako".
pub fn hanako() -> Arc<dyn NameSource> {
    Arc::new(StaticNameSource("Hanako".to_owned()))
}
