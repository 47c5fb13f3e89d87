//! The progression orchestrator.
//!
//! [`Progression`] owns the [`GameState`] and runs one sequence per accepted
//! round: feedback, then the stage reveal on a player win, then the clear
//! check. Collaborators are borrowed per call through [`SequenceContext`].

use tracing::{debug, error, info, instrument};
use uuid::Uuid;
use yakyuken_core::clock::Clock;
use yakyuken_core::config::{GameConfig, TextConfig, Timing};
use yakyuken_core::error::GameError;
use yakyuken_core::event::EventMetadata;
use yakyuken_core::presenter::{Cue, Expression, Presenter};
use yakyuken_core::timer::Timer;
use yakyuken_rules::domain::choice::Choice;
use yakyuken_rules::domain::outcome::{Outcome, resolve};

use super::reveal::swap_stage_visual;
use crate::domain::events::{
    GameCleared, InputIgnored, ProgressionEvent, ProgressionEventKind, SequenceFailed,
    SequenceStarted, StageAdvanced,
};
use crate::domain::state::{GameState, Phase};

/// Collaborators a sequence needs while it runs.
#[derive(Clone, Copy)]
pub struct SequenceContext<'a> {
    /// Display and audio.
    pub presenter: &'a dyn Presenter,
    /// Fixed durations.
    pub timer: &'a dyn Timer,
    /// Event timestamps.
    pub clock: &'a dyn Clock,
}

/// What happened to a submitted round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundReport {
    /// A sequence was already running or the game is cleared.
    Ignored,
    /// The sequence ran to completion.
    Completed {
        /// The resolved outcome.
        outcome: Outcome,
        /// The phase the sequence ended in.
        phase: Phase,
    },
}

/// Owner of the game state for one session.
#[derive(Debug)]
pub struct Progression {
    session_id: Uuid,
    state: GameState,
    timing: Timing,
    text: TextConfig,
    next_sequence_number: i64,
    pending_events: Vec<ProgressionEvent>,
}

impl Progression {
    /// Creates a progression in its initial state.
    #[must_use]
    pub fn new(session_id: Uuid, config: &GameConfig) -> Self {
        Self {
            session_id,
            state: GameState::new(config.max_lose_count),
            timing: config.timing.clone(),
            text: config.text.clone(),
            next_sequence_number: 1,
            pending_events: Vec::new(),
        }
    }

    /// The current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The session this progression belongs to.
    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Removes and returns the events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<ProgressionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn record(&mut self, kind: ProgressionEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = ProgressionEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                session_id: self.session_id,
                sequence_number: self.next_sequence_number,
                correlation_id,
                occurred_at: clock.now(),
            },
            kind,
        };
        self.next_sequence_number += 1;
        self.pending_events.push(event);
    }

    /// Plays one round of `player` against `computer`.
    ///
    /// If a sequence is already running, or the game is cleared, the round
    /// is dropped and [`RoundReport::Ignored`] is returned. Otherwise the
    /// whole sequence runs before this resolves, and every exit path leaves
    /// the game either accepting input or cleared.
    #[instrument(skip(self, ctx), fields(session_id = %self.session_id))]
    pub async fn play_round(
        &mut self,
        player: Choice,
        computer: Choice,
        correlation_id: Uuid,
        ctx: SequenceContext<'_>,
    ) -> RoundReport {
        if let Err(err) = self.state.begin_sequence() {
            self.ignore_input(&err, correlation_id, ctx);
            return RoundReport::Ignored;
        }

        let outcome = resolve(player, computer);
        info!(%player, %computer, ?outcome, "round resolved");
        self.record(
            ProgressionEventKind::SequenceStarted(SequenceStarted {
                player,
                computer,
                outcome,
            }),
            correlation_id,
            ctx.clock,
        );
        ctx.presenter.set_input_enabled(false);

        match self.run_feedback(outcome, ctx).await {
            Ok(Phase::Advancing) => self.run_advance(correlation_id, ctx).await,
            Ok(_) => self.accept_input(ctx),
            Err(err) => self.recover(&err, correlation_id, ctx),
        }

        RoundReport::Completed {
            outcome,
            phase: self.state.phase(),
        }
    }

    /// Records that an input was dropped because `reason` rejected it.
    pub fn ignore_input(
        &mut self,
        reason: &GameError,
        correlation_id: Uuid,
        ctx: SequenceContext<'_>,
    ) {
        debug!(error = %reason, "input ignored");
        self.record(
            ProgressionEventKind::InputIgnored(InputIgnored {
                reason: reason.to_string(),
            }),
            correlation_id,
            ctx.clock,
        );
    }

    async fn run_feedback(
        &mut self,
        outcome: Outcome,
        ctx: SequenceContext<'_>,
    ) -> Result<Phase, GameError> {
        ctx.presenter.set_expression(outcome.expression());
        ctx.presenter.set_message(self.outcome_message(outcome));
        ctx.presenter.play_cue(outcome.cue()).await;
        ctx.timer.sleep(self.timing.after_result()).await;
        self.state.finish_feedback(outcome)
    }

    async fn run_advance(&mut self, correlation_id: Uuid, ctx: SequenceContext<'_>) {
        let from = self.state.current_stage();
        info!(from, lose_count = self.state.lose_count(), "stage advance started");

        ctx.presenter.play_cue(Cue::Stage(from)).await;
        if let Err(err) = swap_stage_visual(from + 1, &self.timing, ctx.presenter, ctx.timer).await
        {
            error!(error = %err, stage = from + 1, "stage swap failed");
            self.record(
                ProgressionEventKind::SequenceFailed(SequenceFailed {
                    error: err.to_string(),
                }),
                correlation_id,
                ctx.clock,
            );
        }

        let stage = match self.state.commit_stage() {
            Ok(stage) => stage,
            Err(err) => return self.recover(&err, correlation_id, ctx),
        };
        ctx.presenter.set_progress(&self.state.progress());
        self.record(
            ProgressionEventKind::StageAdvanced(StageAdvanced {
                stage,
                lose_count: self.state.lose_count(),
            }),
            correlation_id,
            ctx.clock,
        );

        if self.state.threshold_reached() {
            ctx.timer.sleep(self.timing.final_scene()).await;
        }
        match self.state.finish_advance() {
            Ok(Phase::Cleared) => {
                info!(stage, "game cleared");
                ctx.presenter.set_message(&self.text.cleared);
                ctx.presenter.set_clear_banner(true);
                self.record(
                    ProgressionEventKind::GameCleared(GameCleared { stage }),
                    correlation_id,
                    ctx.clock,
                );
            }
            Ok(_) => {
                info!(stage, "stage advance finished");
                self.accept_input(ctx);
            }
            Err(err) => self.recover(&err, correlation_id, ctx),
        }
    }

    fn outcome_message(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::PlayerWin => &self.text.player_win,
            Outcome::ComputerWin => &self.text.computer_win,
            Outcome::Draw => &self.text.draw,
        }
    }

    fn accept_input(&self, ctx: SequenceContext<'_>) {
        if !self.state.is_transitioning() {
            ctx.presenter.set_input_enabled(true);
        }
    }

    fn recover(&mut self, err: &GameError, correlation_id: Uuid, ctx: SequenceContext<'_>) {
        error!(error = %err, phase = ?self.state.phase(), "sequence failed, accepting input again");
        self.record(
            ProgressionEventKind::SequenceFailed(SequenceFailed {
                error: err.to_string(),
            }),
            correlation_id,
            ctx.clock,
        );
        self.state.abort();
        self.accept_input(ctx);
    }

    /// Leaves the clear screen and starts over.
    ///
    /// Returns `false`, without touching anything, if the game is not
    /// cleared.
    pub fn dismiss(&mut self, correlation_id: Uuid, ctx: SequenceContext<'_>) -> bool {
        if let Err(err) = self.state.dismiss() {
            debug!(error = %err, "dismissal ignored");
            self.record(
                ProgressionEventKind::InputIgnored(InputIgnored {
                    reason: err.to_string(),
                }),
                correlation_id,
                ctx.clock,
            );
            return false;
        }
        ctx.presenter.set_clear_banner(false);
        self.reset(correlation_id, ctx);
        true
    }

    /// Restores the initial values and refreshes every presentation output.
    pub fn reset(&mut self, correlation_id: Uuid, ctx: SequenceContext<'_>) {
        self.state.reset();
        if let Err(err) = ctx.presenter.show_stage_asset(0) {
            error!(error = %err, "initial stage image unavailable");
        }
        ctx.presenter.set_emphasized(false);
        ctx.presenter.set_visibility(true);
        ctx.presenter.set_expression(Expression::Normal);
        ctx.presenter.set_message(&self.text.prompt);
        ctx.presenter.set_clear_banner(false);
        ctx.presenter.set_progress(&self.state.progress());
        self.record(ProgressionEventKind::GameReset, correlation_id, ctx.clock);
        info!(session_id = %self.session_id, "game reset");
        self.accept_input(ctx);
    }
}
