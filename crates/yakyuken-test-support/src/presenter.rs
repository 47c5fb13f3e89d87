//! Test presenter — records every presentation call for assertions.

use std::sync::Mutex;

use async_trait::async_trait;
use yakyuken_core::error::GameError;
use yakyuken_core::presenter::{Cue, Expression, Presenter, ProgressDot};

/// One recorded presentation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    PlayCue(Cue),
    SetVisibility(bool),
    ShowStageAsset(u32),
    AwaitAssetLoad,
    SetEmphasized(bool),
    SetExpression(Expression),
    SetProgress(Vec<ProgressDot>),
    SetMessage(String),
    SetClearBanner(bool),
    SetTitle(String),
    SetInputEnabled(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadBehavior {
    Succeed,
    Fail,
    Stall,
}

/// A presenter that records all calls and mirrors the resulting display
/// state. By default every operation succeeds immediately.
#[derive(Debug)]
pub struct RecordingPresenter {
    calls: Mutex<Vec<PresenterCall>>,
    fail_swap: bool,
    load: LoadBehavior,
}

impl Default for RecordingPresenter {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_swap: false,
            load: LoadBehavior::Succeed,
        }
    }
}

impl RecordingPresenter {
    /// Create a presenter where every operation succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a presenter whose `show_stage_asset` always fails.
    #[must_use]
    pub fn failing_swap() -> Self {
        Self {
            fail_swap: true,
            ..Self::default()
        }
    }

    /// Create a presenter whose asset loads always fail.
    #[must_use]
    pub fn failing_load() -> Self {
        Self {
            load: LoadBehavior::Fail,
            ..Self::default()
        }
    }

    /// Create a presenter whose asset loads never complete.
    #[must_use]
    pub fn stalled_load() -> Self {
        Self {
            load: LoadBehavior::Stall,
            ..Self::default()
        }
    }

    fn record(&self, call: PresenterCall) {
        self.calls.lock().unwrap().push(call);
    }

    /// Returns a snapshot of all recorded calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<PresenterCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Forgets all recorded calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn last_matching<T>(&self, pick: impl Fn(&PresenterCall) -> Option<T>) -> Option<T> {
        self.calls.lock().unwrap().iter().rev().find_map(pick)
    }

    /// Cues played, in order.
    pub fn cues(&self) -> Vec<Cue> {
        self.calls()
            .iter()
            .filter_map(|call| match call {
                PresenterCall::PlayCue(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    /// Whether the controls are currently enabled. `None` if never set.
    pub fn input_enabled(&self) -> Option<bool> {
        self.last_matching(|call| match call {
            PresenterCall::SetInputEnabled(enabled) => Some(*enabled),
            _ => None,
        })
    }

    /// The message currently displayed.
    pub fn message(&self) -> Option<String> {
        self.last_matching(|call| match call {
            PresenterCall::SetMessage(text) => Some(text.clone()),
            _ => None,
        })
    }

    /// The title currently displayed.
    pub fn title(&self) -> Option<String> {
        self.last_matching(|call| match call {
            PresenterCall::SetTitle(text) => Some(text.clone()),
            _ => None,
        })
    }

    /// The expression currently displayed.
    pub fn expression(&self) -> Option<Expression> {
        self.last_matching(|call| match call {
            PresenterCall::SetExpression(expression) => Some(*expression),
            _ => None,
        })
    }

    /// The progress indicator currently displayed.
    pub fn progress(&self) -> Option<Vec<ProgressDot>> {
        self.last_matching(|call| match call {
            PresenterCall::SetProgress(dots) => Some(dots.clone()),
            _ => None,
        })
    }

    /// The stage whose asset is currently displayed.
    pub fn stage_shown(&self) -> Option<u32> {
        self.last_matching(|call| match call {
            PresenterCall::ShowStageAsset(stage) => Some(*stage),
            _ => None,
        })
    }

    /// Whether the clear banner is currently shown.
    pub fn clear_banner(&self) -> Option<bool> {
        self.last_matching(|call| match call {
            PresenterCall::SetClearBanner(shown) => Some(*shown),
            _ => None,
        })
    }
}

#[async_trait]
impl Presenter for RecordingPresenter {
    async fn play_cue(&self, cue: Cue) {
        self.record(PresenterCall::PlayCue(cue));
    }

    fn set_visibility(&self, visible: bool) {
        self.record(PresenterCall::SetVisibility(visible));
    }

    fn show_stage_asset(&self, stage: u32) -> Result<(), GameError> {
        self.record(PresenterCall::ShowStageAsset(stage));
        if self.fail_swap {
            return Err(GameError::Presentation(format!(
                "cannot display stage {stage}"
            )));
        }
        Ok(())
    }

    async fn await_asset_load(&self) -> Result<(), GameError> {
        self.record(PresenterCall::AwaitAssetLoad);
        match self.load {
            LoadBehavior::Succeed => Ok(()),
            LoadBehavior::Fail => Err(GameError::Resource("image failed to load".into())),
            LoadBehavior::Stall => std::future::pending().await,
        }
    }

    fn set_emphasized(&self, emphasized: bool) {
        self.record(PresenterCall::SetEmphasized(emphasized));
    }

    fn set_expression(&self, expression: Expression) {
        self.record(PresenterCall::SetExpression(expression));
    }

    fn set_progress(&self, dots: &[ProgressDot]) {
        self.record(PresenterCall::SetProgress(dots.to_vec()));
    }

    fn set_message(&self, text: &str) {
        self.record(PresenterCall::SetMessage(text.to_owned()));
    }

    fn set_clear_banner(&self, shown: bool) {
        self.record(PresenterCall::SetClearBanner(shown));
    }

    fn set_title(&self, text: &str) {
        self.record(PresenterCall::SetTitle(text.to_owned()));
    }

    fn set_input_enabled(&self, enabled: bool) {
        self.record(PresenterCall::SetInputEnabled(enabled));
    }
}
