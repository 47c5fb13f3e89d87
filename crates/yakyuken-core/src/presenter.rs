//! Presentation contract consumed by the progression state machine.
//!
//! The game never touches a display or an audio device directly; it
//! drives an implementation of [`Presenter`]. Synchronous setters are
//! idempotent and infallible. The only fallible operations are the ones
//! that load a stage image.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A single audio clip, addressed by a stable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// The character wins a round.
    Win,
    /// The character loses a round.
    Lose,
    /// The round is a draw.
    Draw,
    /// Played while advancing away from the given stage.
    Stage(u32),
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => f.write_str("win"),
            Self::Lose => f.write_str("lose"),
            Self::Draw => f.write_str("draw"),
            Self::Stage(stage) => write!(f, "stage-{stage}"),
        }
    }
}

/// Character expression shown next to the stage image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Expression {
    /// Neutral face, shown at rest and on draws.
    #[default]
    Normal,
    /// The character just won a round.
    Win,
    /// The character just lost a round.
    Lose,
}

/// State of one dot in the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressDot {
    /// Not reached yet.
    Pending,
    /// The stage currently displayed.
    Active,
    /// A stage already passed.
    Completed,
}

/// Operations the game needs from its display and audio layer.
#[async_trait]
pub trait Presenter: Send + Sync {
    /// Plays one cue to completion.
    ///
    /// Resolves when playback ends naturally. Playback errors are logged by
    /// the implementation and never propagated.
    async fn play_cue(&self, cue: Cue);

    /// Fades the stage image in (`true`) or out (`false`).
    fn set_visibility(&self, visible: bool);

    /// Points the stage image at the asset for `stage`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Resource` if the stage has no asset.
    fn show_stage_asset(&self, stage: u32) -> Result<(), GameError>;

    /// Waits until the asset set by [`Presenter::show_stage_asset`] has loaded.
    ///
    /// Implementations may never resolve if the asset is broken; callers
    /// bound this wait themselves.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Resource` if loading failed.
    async fn await_asset_load(&self) -> Result<(), GameError>;

    /// Enters or leaves the emphasized (full-screen) display.
    fn set_emphasized(&self, emphasized: bool);

    /// Shows the given character expression.
    fn set_expression(&self, expression: Expression);

    /// Refreshes the progress indicator.
    fn set_progress(&self, dots: &[ProgressDot]);

    /// Replaces the message line.
    fn set_message(&self, text: &str);

    /// Toggles the game-clear styling of the message line.
    fn set_clear_banner(&self, shown: bool);

    /// Replaces the title.
    fn set_title(&self, text: &str);

    /// Enables or disables the choice controls.
    fn set_input_enabled(&self, enabled: bool);
}
