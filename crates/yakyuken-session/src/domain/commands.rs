//! Commands for the Session context.

use uuid::Uuid;
use yakyuken_core::command::Command;
use yakyuken_rules::domain::choice::Choice;

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Throw a hand.
    Choose(Choice),
    /// Leave the clear screen.
    Dismiss,
}

/// An input event turned into a command value.
#[derive(Debug, Clone, Copy)]
pub struct PlayerCommand {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The requested action.
    pub kind: CommandKind,
}

impl PlayerCommand {
    /// A command with a fresh correlation ID.
    #[must_use]
    pub fn new(kind: CommandKind) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            kind,
        }
    }

    /// Command to throw `choice`.
    #[must_use]
    pub fn choose(choice: Choice) -> Self {
        Self::new(CommandKind::Choose(choice))
    }

    /// Command to leave the clear screen.
    #[must_use]
    pub fn dismiss() -> Self {
        Self::new(CommandKind::Dismiss)
    }
}

impl Command for PlayerCommand {
    fn command_type(&self) -> &'static str {
        match self.kind {
            CommandKind::Choose(_) => "session.choose",
            CommandKind::Dismiss => "session.dismiss",
        }
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_type_follows_kind() {
        assert_eq!(
            PlayerCommand::choose(Choice::Rock).command_type(),
            "session.choose"
        );
        assert_eq!(PlayerCommand::dismiss().command_type(), "session.dismiss");
    }

    #[test]
    fn test_each_command_gets_its_own_correlation_id() {
        let first = PlayerCommand::choose(Choice::Paper);
        let second = PlayerCommand::choose(Choice::Paper);
        assert_ne!(first.correlation_id(), second.correlation_id());
    }
}
