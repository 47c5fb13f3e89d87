//! Session lifecycle: initialization, reset and command handling.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use yakyuken_core::clock::Clock;
use yakyuken_core::command::Command;
use yakyuken_core::config::{GameConfig, TextConfig};
use yakyuken_core::error::GameError;
use yakyuken_core::event::DomainEvent;
use yakyuken_core::name_source::NameSource;
use yakyuken_core::presenter::Presenter;
use yakyuken_core::rng::DeterministicRng;
use yakyuken_core::timer::Timer;
use yakyuken_progression::application::sequence::{Progression, RoundReport, SequenceContext};
use yakyuken_progression::domain::events::ProgressionEvent;
use yakyuken_progression::domain::state::GameState;
use yakyuken_rules::domain::choice::Choice;

use crate::domain::commands::{CommandKind, PlayerCommand};

/// External collaborators of a session.
pub struct SessionDeps {
    /// Display and audio.
    pub presenter: Arc<dyn Presenter>,
    /// Fixed durations.
    pub timer: Arc<dyn Timer>,
    /// Event timestamps.
    pub clock: Arc<dyn Clock>,
    /// Picks the computer's hands.
    pub rng: Box<dyn DeterministicRng>,
    /// Provides the display name.
    pub name_source: Arc<dyn NameSource>,
}

struct Seams {
    presenter: Arc<dyn Presenter>,
    timer: Arc<dyn Timer>,
    clock: Arc<dyn Clock>,
}

impl Seams {
    fn ctx(&self) -> SequenceContext<'_> {
        SequenceContext {
            presenter: self.presenter.as_ref(),
            timer: self.timer.as_ref(),
            clock: self.clock.as_ref(),
        }
    }
}

/// What a command led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The command was not accepted in the current phase.
    Ignored,
    /// A round was played.
    Round(RoundReport),
    /// The clear screen was left and the game reset.
    Dismissed,
}

/// One play session: the progression plus everything around it.
pub struct Session {
    progression: Progression,
    text: TextConfig,
    seams: Seams,
    rng: Box<dyn DeterministicRng>,
    name_source: Arc<dyn NameSource>,
    display_name: String,
    journal: Vec<ProgressionEvent>,
}

impl Session {
    /// Creates a session. Nothing is displayed until
    /// [`Session::initialize`] runs.
    #[must_use]
    pub fn new(config: &GameConfig, deps: SessionDeps) -> Self {
        Self {
            progression: Progression::new(Uuid::new_v4(), config),
            text: config.text.clone(),
            seams: Seams {
                presenter: deps.presenter,
                timer: deps.timer,
                clock: deps.clock,
            },
            rng: deps.rng,
            name_source: deps.name_source,
            display_name: config.text.default_name.clone(),
            journal: Vec::new(),
        }
    }

    /// The session identifier.
    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.progression.session_id()
    }

    /// The current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.progression.state()
    }

    /// The display name in use.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Every event recorded during this session, oldest first.
    #[must_use]
    pub fn journal(&self) -> &[ProgressionEvent] {
        &self.journal
    }

    /// Loads the display name and title, then resets the game.
    ///
    /// A name that cannot be loaded is not fatal: the default title and
    /// name are used instead.
    #[instrument(skip(self), fields(session_id = %self.session_id()))]
    pub async fn initialize(&mut self) {
        let (name, title) = match self.load_name().await {
            Ok(name) => {
                let title = self.text.title_for(&name);
                (name, title)
            }
            Err(err) => {
                warn!(error = %err, "display name unavailable, using defaults");
                (
                    self.text.default_name.clone(),
                    self.text.default_title.clone(),
                )
            }
        };
        info!(%name, %title, "session initialized");
        self.seams.presenter.set_title(&title);
        self.display_name = name;
        self.reset();
    }

    async fn load_name(&self) -> Result<String, GameError> {
        let raw = self.name_source.load_name().await?;
        let name = raw.trim();
        if name.is_empty() {
            return Err(GameError::Resource("display name is empty".to_owned()));
        }
        Ok(name.to_owned())
    }

    /// Puts the game back to its initial values and re-enables input.
    pub fn reset(&mut self) {
        self.progression.reset(Uuid::new_v4(), self.seams.ctx());
        self.flush_events();
    }

    /// Handles one command to completion.
    #[instrument(
        skip(self, command),
        fields(command_type = command.command_type(), correlation_id = %command.correlation_id)
    )]
    pub async fn handle(&mut self, command: PlayerCommand) -> Dispatch {
        let dispatch = match command.kind {
            CommandKind::Choose(player) => {
                if let Err(err) = self.progression.state().ensure_idle() {
                    debug!(%player, "choice ignored while transitioning");
                    self.progression
                        .ignore_input(&err, command.correlation_id, self.seams.ctx());
                    Dispatch::Ignored
                } else {
                    let computer = Choice::random(self.rng.as_mut());
                    let report = self
                        .progression
                        .play_round(player, computer, command.correlation_id, self.seams.ctx())
                        .await;
                    Dispatch::Round(report)
                }
            }
            CommandKind::Dismiss => {
                if self
                    .progression
                    .dismiss(command.correlation_id, self.seams.ctx())
                {
                    Dispatch::Dismissed
                } else {
                    Dispatch::Ignored
                }
            }
        };
        self.flush_events();
        dispatch
    }

    fn flush_events(&mut self) {
        for event in self.progression.drain_events() {
            info!(
                event_type = event.event_type(),
                sequence_number = event.metadata.sequence_number,
                payload = %event.to_payload(),
                "progression event"
            );
            self.journal.push(event);
        }
    }
}
