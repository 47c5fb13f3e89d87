//! Line-oriented presenter that renders the game to a terminal.
//!
//! Images and cues are resolved through the asset catalog and checked on
//! disk, but nothing is decoded: the terminal shows what would be on
//! screen as text.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use yakyuken_core::assets::{AssetCatalog, AssetRef};
use yakyuken_core::clock::Clock;
use yakyuken_core::error::GameError;
use yakyuken_core::presenter::{Cue, Expression, Presenter, ProgressDot};
use yakyuken_core::timer::Timer;

/// Renders presenter calls as text lines.
pub struct TerminalPresenter {
    catalog: AssetCatalog,
    clock: Arc<dyn Clock>,
    timer: Arc<dyn Timer>,
    cue_length: Duration,
    out: Mutex<Box<dyn Write + Send>>,
    pending: Mutex<Option<AssetRef>>,
}

impl TerminalPresenter {
    /// Creates a presenter writing to `out`.
    ///
    /// Each cue blocks for `cue_length` on `timer` to stand in for playback.
    #[must_use]
    pub fn new(
        catalog: AssetCatalog,
        clock: Arc<dyn Clock>,
        timer: Arc<dyn Timer>,
        cue_length: Duration,
        out: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            catalog,
            clock,
            timer,
            cue_length,
            out: Mutex::new(out),
            pending: Mutex::new(None),
        }
    }

    /// Creates a presenter writing to standard output.
    #[must_use]
    pub fn stdout(
        catalog: AssetCatalog,
        clock: Arc<dyn Clock>,
        timer: Arc<dyn Timer>,
        cue_length: Duration,
    ) -> Self {
        Self::new(catalog, clock, timer, cue_length, Box::new(std::io::stdout()))
    }

    fn line(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{text}").and_then(|()| out.flush()) {
            warn!(error = %err, "terminal write failed");
        }
    }
}

fn render_progress(dots: &[ProgressDot]) -> String {
    dots.iter()
        .map(|dot| match dot {
            ProgressDot::Pending => 'o',
            ProgressDot::Active => '@',
            ProgressDot::Completed => '*',
        })
        .collect()
}

#[async_trait]
impl Presenter for TerminalPresenter {
    async fn play_cue(&self, cue: Cue) {
        let path = match self.catalog.cue_path(cue) {
            Ok(path) => path,
            Err(err) => {
                warn!(%cue, error = %err, "cue not playable");
                return;
            }
        };
        if let Err(err) = tokio::fs::metadata(&path).await {
            warn!(%cue, path = %path.display(), error = %err, "cue not playable");
            return;
        }
        debug!(%cue, path = %path.display(), "playing cue");
        self.line(&format!("~ {cue} ~"));
        self.timer.sleep(self.cue_length).await;
    }

    fn set_visibility(&self, visible: bool) {
        self.line(if visible { "[image fades in]" } else { "[image fades out]" });
    }

    fn show_stage_asset(&self, stage: u32) -> Result<(), GameError> {
        let asset = self.catalog.stage_image(stage, self.clock.as_ref())?;
        self.line(&format!("[stage {stage}: {asset}]"));
        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(asset);
        Ok(())
    }

    async fn await_asset_load(&self) -> Result<(), GameError> {
        let pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let Some(asset) = pending else {
            return Ok(());
        };
        tokio::fs::metadata(&asset.path)
            .await
            .map(|_| ())
            .map_err(|e| GameError::Resource(format!("{}: {e}", asset.path.display())))
    }

    fn set_emphasized(&self, emphasized: bool) {
        if emphasized {
            self.line("[full screen]");
        } else {
            self.line("[normal view]");
        }
    }

    fn set_expression(&self, expression: Expression) {
        let face = match expression {
            Expression::Normal => "(-_-)",
            Expression::Win => "(^o^)",
            Expression::Lose => "(T_T)",
        };
        self.line(face);
    }

    fn set_progress(&self, dots: &[ProgressDot]) {
        self.line(&format!("progress {}", render_progress(dots)));
    }

    fn set_message(&self, text: &str) {
        self.line(&format!("> {text}"));
    }

    fn set_clear_banner(&self, shown: bool) {
        if shown {
            self.line("*** GAME CLEAR ***");
        }
    }

    fn set_title(&self, text: &str) {
        self.line(&format!("== {text} =="));
    }

    fn set_input_enabled(&self, enabled: bool) {
        if enabled {
            self.line("[r]ock [p]aper [s]cissors");
        }
    }
}
