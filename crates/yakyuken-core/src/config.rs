//! Game configuration: stage count, timings, asset identifiers and texts.
//!
//! Every field has a default, so an empty YAML document (or no document at
//! all) yields the stock five-stage game.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Fixed display and hold durations, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Pause after the outcome feedback before anything else happens.
    pub after_result_ms: u64,
    /// Stage image fade-out.
    pub fade_out_ms: u64,
    /// Stage image fade-in.
    pub fade_in_ms: u64,
    /// How long the new stage stays emphasized.
    pub emphasis_hold_ms: u64,
    /// How long the final stage is shown before the clear message.
    pub final_scene_ms: u64,
    /// Upper bound on waiting for a stage image to load.
    pub load_timeout_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            after_result_ms: 3000,
            fade_out_ms: 1000,
            fade_in_ms: 1000,
            emphasis_hold_ms: 5000,
            final_scene_ms: 2000,
            load_timeout_ms: 5000,
        }
    }
}

impl Timing {
    /// Pause after the outcome feedback.
    #[must_use]
    pub fn after_result(&self) -> Duration {
        Duration::from_millis(self.after_result_ms)
    }

    /// Stage image fade-out.
    #[must_use]
    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    /// Stage image fade-in.
    #[must_use]
    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }

    /// Emphasized display hold.
    #[must_use]
    pub fn emphasis_hold(&self) -> Duration {
        Duration::from_millis(self.emphasis_hold_ms)
    }

    /// Final stage hold before the clear message.
    #[must_use]
    pub fn final_scene(&self) -> Duration {
        Duration::from_millis(self.final_scene_ms)
    }

    /// Stage image load bound.
    #[must_use]
    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }

    /// Returns a copy with every duration multiplied by `factor`.
    ///
    /// `factor` is expected to be finite and non-negative; the caller
    /// validates it.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |ms: u64| (ms as f64 * factor).round() as u64;
        Self {
            after_result_ms: scale(self.after_result_ms),
            fade_out_ms: scale(self.fade_out_ms),
            fade_in_ms: scale(self.fade_in_ms),
            emphasis_hold_ms: scale(self.emphasis_hold_ms),
            final_scene_ms: scale(self.final_scene_ms),
            load_timeout_ms: scale(self.load_timeout_ms),
        }
    }
}

/// Stable identifiers of the media the game refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// One image per stage, index 0 being the initial stage.
    pub stage_images: Vec<String>,
    /// One cue per stage transition, indexed by the stage being left.
    pub stage_cues: Vec<String>,
    /// Cue for a round the character wins.
    pub win_cue: String,
    /// Cue for a round the character loses.
    pub lose_cue: String,
    /// Cue for a drawn round.
    pub draw_cue: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            stage_images: (0..=5).map(|i| format!("stage-{i}.png")).collect(),
            stage_cues: (1..=6).map(|i| format!("scene{i}.wav")).collect(),
            win_cue: "win.wav".to_owned(),
            lose_cue: "lose.wav".to_owned(),
            draw_cue: "draw.wav".to_owned(),
        }
    }
}

/// Texts shown on the message line and in the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Shown while waiting for a choice.
    pub prompt: String,
    /// Shown when the player wins a round.
    pub player_win: String,
    /// Shown when the computer wins a round.
    pub computer_win: String,
    /// Shown on a draw.
    pub draw: String,
    /// Shown once every stage has been cleared.
    pub cleared: String,
    /// Title template; `{name}` is replaced with the display name.
    pub title_template: String,
    /// Title used when the display name cannot be loaded.
    pub default_title: String,
    /// Display name used when the name resource cannot be loaded.
    pub default_name: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            prompt: "Choose rock, paper, or scissors".to_owned(),
            player_win: "You Win!".to_owned(),
            computer_win: "You Lose!".to_owned(),
            draw: "Draw!".to_owned(),
            cleared: "Congratulations! You cleared every stage! Press Enter to play again."
                .to_owned(),
            title_template: "{name}-chan Yakyuken".to_owned(),
            default_title: "Yakyuken Game".to_owned(),
            default_name: "Yakyuken".to_owned(),
        }
    }
}

impl TextConfig {
    /// Renders the title for a loaded display name.
    #[must_use]
    pub fn title_for(&self, name: &str) -> String {
        self.title_template.replace("{name}", name)
    }
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rounds the player must win to clear the game.
    pub max_lose_count: u32,
    /// Display and hold durations.
    pub timing: Timing,
    /// Media identifiers.
    pub assets: AssetConfig,
    /// Message and title texts.
    pub text: TextConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_lose_count: 5,
            timing: Timing::default(),
            assets: AssetConfig::default(),
            text: TextConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parses and validates a YAML document.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if the document is malformed or fails
    /// [`GameConfig::validate`].
    pub fn from_yaml_str(source: &str) -> Result<Self, GameError> {
        let config: Self = if source.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(source)
                .map_err(|e| GameError::Config(format!("invalid game config: {e}")))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the asset lists cover every stage.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if `max_lose_count` is zero, if there is
    /// not exactly one stage image per stage, or if a stage transition has
    /// no cue.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_lose_count == 0 {
            return Err(GameError::Config(
                "max_lose_count must be at least 1".to_owned(),
            ));
        }
        let stages = self.max_lose_count as usize + 1;
        if self.assets.stage_images.len() != stages {
            return Err(GameError::Config(format!(
                "expected {stages} stage images, found {}",
                self.assets.stage_images.len()
            )));
        }
        if self.assets.stage_cues.len() < self.max_lose_count as usize {
            return Err(GameError::Config(format!(
                "expected at least {} stage cues, found {}",
                self.max_lose_count,
                self.assets.stage_cues.len()
            )));
        }
        Ok(())
    }
}
