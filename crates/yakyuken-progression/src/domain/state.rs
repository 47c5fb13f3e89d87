//! Game state and its phase machine.

use yakyuken_core::error::GameError;
use yakyuken_core::presenter::ProgressDot;
use yakyuken_rules::domain::outcome::Outcome;

/// Where the game is within a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting input.
    Idle,
    /// Outcome determined, feedback playing.
    Resolving,
    /// Stage transition playing.
    Advancing,
    /// Every stage cleared; waiting for a dismissal.
    Cleared,
}

/// The single game-state record of a session.
///
/// Only the transition methods below mutate it. `is_transitioning` is
/// derived from the phase, so the flag and the phase cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) current_stage: u32,
    pub(crate) lose_count: u32,
    pub(crate) max_lose_count: u32,
    pub(crate) phase: Phase,
}

impl GameState {
    /// Creates the initial state of a game with `max_lose_count` stages.
    #[must_use]
    pub fn new(max_lose_count: u32) -> Self {
        Self {
            current_stage: 0,
            lose_count: 0,
            max_lose_count,
            phase: Phase::Idle,
        }
    }

    /// The stage currently displayed.
    #[must_use]
    pub fn current_stage(&self) -> u32 {
        self.current_stage
    }

    /// Rounds the character has lost so far.
    #[must_use]
    pub fn lose_count(&self) -> u32 {
        self.lose_count
    }

    /// Rounds the character must lose for the game to be cleared.
    #[must_use]
    pub fn max_lose_count(&self) -> u32 {
        self.max_lose_count
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `true` whenever a new sequence may not start.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// `true` once the character has lost every round it can.
    #[must_use]
    pub fn threshold_reached(&self) -> bool {
        self.lose_count >= self.max_lose_count
    }

    /// Checks that a new sequence may start.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Validation` if not in `Idle` phase.
    pub fn ensure_idle(&self) -> Result<(), GameError> {
        if self.phase != Phase::Idle {
            return Err(GameError::Validation(
                "game must be in Idle phase".to_owned(),
            ));
        }
        Ok(())
    }

    /// Starts a sequence: `Idle` → `Resolving`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Validation` if not in `Idle` phase.
    pub fn begin_sequence(&mut self) -> Result<(), GameError> {
        self.ensure_idle()?;
        self.phase = Phase::Resolving;
        Ok(())
    }

    /// Ends the feedback part of a sequence.
    ///
    /// A player win counts a lost round for the character and moves on to
    /// `Advancing`; any other outcome returns to `Idle`. Returns the new
    /// phase.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Validation` if not in `Resolving` phase.
    pub fn finish_feedback(&mut self, outcome: Outcome) -> Result<Phase, GameError> {
        if self.phase != Phase::Resolving {
            return Err(GameError::Validation(
                "game must be in Resolving phase".to_owned(),
            ));
        }
        self.phase = match outcome {
            Outcome::PlayerWin => {
                self.lose_count += 1;
                Phase::Advancing
            }
            Outcome::ComputerWin | Outcome::Draw => Phase::Idle,
        };
        Ok(self.phase)
    }

    /// Moves to the next stage and returns it.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Validation` if not in `Advancing` phase, or if the
    /// stage would pass the number of rounds lost or `max_lose_count`.
    pub fn commit_stage(&mut self) -> Result<u32, GameError> {
        if self.phase != Phase::Advancing {
            return Err(GameError::Validation(
                "game must be in Advancing phase".to_owned(),
            ));
        }
        let next = self.current_stage + 1;
        if next > self.lose_count || next > self.max_lose_count {
            return Err(GameError::Validation(format!(
                "stage {next} is out of reach with {} of {} rounds lost",
                self.lose_count, self.max_lose_count
            )));
        }
        self.current_stage = next;
        Ok(next)
    }

    /// Ends a stage advance: `Advancing` → `Cleared` at the threshold,
    /// `Advancing` → `Idle` otherwise. Returns the new phase.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Validation` if not in `Advancing` phase.
    pub fn finish_advance(&mut self) -> Result<Phase, GameError> {
        if self.phase != Phase::Advancing {
            return Err(GameError::Validation(
                "game must be in Advancing phase".to_owned(),
            ));
        }
        self.phase = if self.threshold_reached() {
            Phase::Cleared
        } else {
            Phase::Idle
        };
        Ok(self.phase)
    }

    /// Leaves a cleared game, restoring the initial values.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Validation` if not in `Cleared` phase.
    pub fn dismiss(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Cleared {
            return Err(GameError::Validation(
                "game must be in Cleared phase".to_owned(),
            ));
        }
        self.reset();
        Ok(())
    }

    /// Abandons a failed sequence and accepts input again.
    ///
    /// Counters are left as they are. A cleared game stays cleared.
    pub fn abort(&mut self) {
        if self.phase != Phase::Cleared {
            self.phase = Phase::Idle;
        }
    }

    /// Restores the initial values unconditionally.
    pub fn reset(&mut self) {
        *self = Self::new(self.max_lose_count);
    }

    /// The progress indicator for the current stage.
    #[must_use]
    pub fn progress(&self) -> Vec<ProgressDot> {
        progress_dots(self.current_stage, self.max_lose_count + 1)
    }
}

/// Builds a progress indicator of `count` dots for `stage`: passed stages
/// are completed, the current one is active, the rest are pending.
#[must_use]
pub fn progress_dots(stage: u32, count: u32) -> Vec<ProgressDot> {
    (0..count)
        .map(|index| match index.cmp(&stage) {
            std::cmp::Ordering::Less => ProgressDot::Completed,
            std::cmp::Ordering::Equal => ProgressDot::Active,
            std::cmp::Ordering::Greater => ProgressDot::Pending,
        })
        .collect()
}
