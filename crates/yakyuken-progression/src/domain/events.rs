//! Domain events for the Progression context.

use serde::{Deserialize, Serialize};
use yakyuken_core::event::{DomainEvent, EventMetadata};
use yakyuken_rules::domain::choice::Choice;
use yakyuken_rules::domain::outcome::Outcome;

/// Emitted when a round is accepted and a sequence begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceStarted {
    /// The player's hand.
    pub player: Choice,
    /// The computer's hand.
    pub computer: Choice,
    /// The resolved outcome.
    pub outcome: Outcome,
}

/// Emitted when the game moves to the next stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageAdvanced {
    /// The stage now displayed.
    pub stage: u32,
    /// Rounds the character has lost.
    pub lose_count: u32,
}

/// Emitted once per playthrough when the final stage is reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameCleared {
    /// The final stage.
    pub stage: u32,
}

/// Emitted when input arrives while a sequence or the clear screen is active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputIgnored {
    /// Why the input was not accepted.
    pub reason: String,
}

/// Emitted when a sequence step fails and is recovered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceFailed {
    /// The recovered error.
    pub error: String,
}

/// Event type identifier for [`SequenceStarted`].
pub const SEQUENCE_STARTED_EVENT_TYPE: &str = "progression.sequence_started";

/// Event type identifier for [`StageAdvanced`].
pub const STAGE_ADVANCED_EVENT_TYPE: &str = "progression.stage_advanced";

/// Event type identifier for [`GameCleared`].
pub const GAME_CLEARED_EVENT_TYPE: &str = "progression.game_cleared";

/// Event type identifier for a reset.
pub const GAME_RESET_EVENT_TYPE: &str = "progression.game_reset";

/// Event type identifier for [`InputIgnored`].
pub const INPUT_IGNORED_EVENT_TYPE: &str = "progression.input_ignored";

/// Event type identifier for [`SequenceFailed`].
pub const SEQUENCE_FAILED_EVENT_TYPE: &str = "progression.sequence_failed";

/// Event payload variants for the Progression context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProgressionEventKind {
    /// A sequence has started.
    SequenceStarted(SequenceStarted),
    /// The stage has advanced.
    StageAdvanced(StageAdvanced),
    /// The game has been cleared.
    GameCleared(GameCleared),
    /// The game has been reset to its initial values.
    GameReset,
    /// An input was dropped.
    InputIgnored(InputIgnored),
    /// A sequence step failed and was recovered.
    SequenceFailed(SequenceFailed),
}

impl ProgressionEventKind {
    /// Returns the event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::SequenceStarted(_) => SEQUENCE_STARTED_EVENT_TYPE,
            Self::StageAdvanced(_) => STAGE_ADVANCED_EVENT_TYPE,
            Self::GameCleared(_) => GAME_CLEARED_EVENT_TYPE,
            Self::GameReset => GAME_RESET_EVENT_TYPE,
            Self::InputIgnored(_) => INPUT_IGNORED_EVENT_TYPE,
            Self::SequenceFailed(_) => SEQUENCE_FAILED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the Progression context.
#[derive(Debug, Clone)]
pub struct ProgressionEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: ProgressionEventKind,
}

impl DomainEvent for ProgressionEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("ProgressionEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
