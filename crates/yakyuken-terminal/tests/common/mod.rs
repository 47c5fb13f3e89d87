//! Shared helpers for terminal integration tests.
#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use yakyuken_core::assets::AssetCatalog;
use yakyuken_core::config::{AssetConfig, GameConfig};
use yakyuken_session::application::lifecycle::{Session, SessionDeps};
use yakyuken_terminal::name_file::FileNameSource;
use yakyuken_terminal::presenter::TerminalPresenter;
use yakyuken_test_support::{FixedClock, InstantTimer, SequenceRng};

/// A writer whose contents the test can read back.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A fresh asset directory holding every configured file and a name file.
pub fn asset_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("yakyuken-it-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let assets = AssetConfig::default();
    let files = assets
        .stage_images
        .iter()
        .chain(assets.stage_cues.iter())
        .chain([&assets.win_cue, &assets.lose_cue, &assets.draw_cue]);
    for file in files {
        std::fs::write(dir.join(file), b"asset").unwrap();
    }
    std::fs::write(dir.join("name.txt"), "Hanako\n").unwrap();
    dir
}

/// A session rendering to a buffer, reading assets from `dir`.
pub struct TerminalSession {
    pub session: Session,
    pub screen: SharedBuffer,
    pub timer: Arc<InstantTimer>,
}

pub fn build_session(dir: &Path, computer_hands: Vec<u32>) -> TerminalSession {
    let config = GameConfig::default();
    let screen = SharedBuffer::default();
    let timer = Arc::new(InstantTimer::new());
    let clock = Arc::new(FixedClock::standard());
    let presenter = Arc::new(TerminalPresenter::new(
        AssetCatalog::new(dir, config.assets.clone()),
        clock.clone(),
        timer.clone(),
        Duration::from_millis(1500),
        Box::new(screen.clone()),
    ));
    let session = Session::new(
        &config,
        SessionDeps {
            presenter,
            timer: timer.clone(),
            clock,
            rng: Box::new(SequenceRng::new(computer_hands)),
            name_source: Arc::new(FileNameSource::new(dir.join("name.txt"))),
        },
    );
    TerminalSession {
        session,
        screen,
        timer,
    }
}
