//! Input wiring and the session run loop.
//!
//! Input controls hold an [`InputHandle`]; every press becomes a
//! [`PlayerCommand`] on a channel. The [`SessionDriver`] runs one command at
//! a time. While a sequence is running it keeps draining the channel and
//! drops whatever arrives, so input is never queued behind a sequence.

use tokio::sync::mpsc;
use tracing::{debug, info};
use yakyuken_core::command::Command;
use yakyuken_rules::domain::choice::Choice;

use super::lifecycle::Session;
use crate::domain::commands::PlayerCommand;

/// Default number of commands the input channel buffers between sequences.
pub const DEFAULT_INPUT_CAPACITY: usize = 16;

/// The single input handler of a session, shared by every control.
#[derive(Debug, Clone)]
pub struct InputHandle {
    tx: mpsc::Sender<PlayerCommand>,
}

impl InputHandle {
    /// Forwards a choice. Returns `false` if the input was dropped.
    pub fn choose(&self, choice: Choice) -> bool {
        self.send(PlayerCommand::choose(choice))
    }

    /// Forwards a dismissal. Returns `false` if the input was dropped.
    pub fn dismiss(&self) -> bool {
        self.send(PlayerCommand::dismiss())
    }

    /// Forwards any command without waiting. Returns `false` if the input
    /// was dropped because the channel is full or the session has ended.
    pub fn send(&self, command: PlayerCommand) -> bool {
        match self.tx.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                debug!(command_type = command.command_type(), error = %err, "input dropped");
                false
            }
        }
    }
}

/// Creates the input handle and the command stream a driver consumes.
#[must_use]
pub fn input_channel(capacity: usize) -> (InputHandle, mpsc::Receiver<PlayerCommand>) {
    let (tx, rx) = mpsc::channel(capacity);
    (InputHandle { tx }, rx)
}

/// What a finished driver hands back.
pub struct DriverOutcome {
    /// The session, in whatever state the last command left it.
    pub session: Session,
    /// Commands dropped because a sequence was running.
    pub dropped_inputs: usize,
}

/// Runs a session against a command stream until every handle is gone.
pub struct SessionDriver {
    session: Session,
    commands: mpsc::Receiver<PlayerCommand>,
    dropped_inputs: usize,
}

impl SessionDriver {
    /// Creates a driver for an initialized session.
    #[must_use]
    pub fn new(session: Session, commands: mpsc::Receiver<PlayerCommand>) -> Self {
        Self {
            session,
            commands,
            dropped_inputs: 0,
        }
    }

    /// Consumes commands until the channel closes.
    pub async fn run(mut self) -> DriverOutcome {
        while let Some(command) = self.commands.recv().await {
            let sequence = self.session.handle(command);
            tokio::pin!(sequence);
            loop {
                tokio::select! {
                    biased;
                    Some(dropped) = self.commands.recv() => {
                        self.dropped_inputs += 1;
                        debug!(
                            command_type = dropped.command_type(),
                            correlation_id = %dropped.correlation_id,
                            "input ignored while a sequence is running"
                        );
                    }
                    dispatch = &mut sequence => {
                        debug!(?dispatch, "command handled");
                        break;
                    }
                }
            }
        }
        info!(dropped_inputs = self.dropped_inputs, "input closed, session ended");
        DriverOutcome {
            session: self.session,
            dropped_inputs: self.dropped_inputs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handle_reports_closed_channel() {
        let (handle, rx) = input_channel(1);
        drop(rx);
        assert!(!handle.choose(Choice::Rock));
    }

    #[tokio::test]
    async fn test_handle_drops_input_when_channel_is_full() {
        let (handle, _rx) = input_channel(1);
        assert!(handle.choose(Choice::Rock));
        assert!(!handle.dismiss());
    }
}
